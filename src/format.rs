//! Supported file formats and extension sniffing.

use crate::codec::{self, Codec};
use std::fmt;
use std::path::Path;

/// Extensions accepted on either side of a conversion, for user-facing hints.
pub const SUPPORTED_EXTENSIONS: &str = ".json, .yml, .yaml, .xml";

/// A structured-text format, identified by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Xml];

    /// Detect the format from a path's extension, case-insensitively.
    ///
    /// Returns `None` for unknown extensions and for paths without one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// Map a bare extension (without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yml" | "yaml" => Some(Format::Yaml),
            "xml" => Some(Format::Xml),
            _ => None,
        }
    }

    /// Extensions that map to this format, preferred one first.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Yaml => &["yaml", "yml"],
            Format::Xml => &["xml"],
        }
    }

    /// Display name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Xml => "XML",
        }
    }

    /// Parser/writer pair for this format.
    pub fn codec(self) -> &'static Codec {
        codec::lookup(self)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_extensions() {
        assert_eq!(Format::from_path(Path::new("a.json")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.yml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.yaml")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("dir/a.xml")), Some(Format::Xml));
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(Format::from_path(Path::new("A.JSON")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("a.YaMl")), Some(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.Xml")), Some(Format::Xml));
    }

    #[test]
    fn unknown_or_missing_extension_is_unsupported() {
        assert_eq!(Format::from_path(Path::new("f.txt")), None);
        assert_eq!(Format::from_path(Path::new("Makefile")), None);
        assert_eq!(Format::from_path(Path::new(".json")), None);
        assert_eq!(Format::from_path(Path::new("a.json.bak")), None);
    }

    #[test]
    fn every_extension_maps_back_to_its_format() {
        for format in Format::ALL {
            for ext in format.extensions() {
                assert_eq!(Format::from_extension(ext), Some(format));
            }
        }
    }

    #[test]
    fn display_uses_upper_case_name() {
        assert_eq!(Format::Json.to_string(), "JSON");
        assert_eq!(Format::Yaml.to_string(), "YAML");
        assert_eq!(Format::Xml.to_string(), "XML");
    }
}
