//! Format codecs.
//!
//! Each supported [`Format`] has one parser and one writer, collected in a
//! static table so the verify and convert paths dispatch the same way.

pub mod json;
pub mod xml;
pub mod yaml;

use crate::document::Document;
use crate::format::Format;
use thiserror::Error;

/// Failure while parsing or rendering a document.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Low-level XML error raised while reading, with the byte offset reached.
    #[error("{source} (at byte {position})")]
    XmlSyntax {
        position: usize,
        source: quick_xml::Error,
    },

    /// XML writer error.
    #[error("{0}")]
    Xml(#[from] quick_xml::Error),

    /// Input is lexically fine but structurally not a well-formed document.
    #[error("{0}")]
    Malformed(String),

    /// The document cannot be expressed in the target format.
    #[error("{0}")]
    Unrepresentable(String),
}

pub type ParseFn = fn(&str) -> Result<Document, CodecError>;
pub type RenderFn = fn(&Document) -> Result<String, CodecError>;

/// Parser/writer pair for one format.
pub struct Codec {
    pub format: Format,
    pub parse: ParseFn,
    pub render: RenderFn,
}

impl Codec {
    pub fn parse(&self, text: &str) -> Result<Document, CodecError> {
        (self.parse)(text)
    }

    pub fn render(&self, document: &Document) -> Result<String, CodecError> {
        (self.render)(document)
    }
}

static CODECS: [Codec; 3] = [
    Codec {
        format: Format::Json,
        parse: json::parse,
        render: json::render,
    },
    Codec {
        format: Format::Yaml,
        parse: yaml::parse,
        render: yaml::render,
    },
    Codec {
        format: Format::Xml,
        parse: xml::parse,
        render: xml::render,
    },
];

/// Look up the codec registered for a format.
pub fn lookup(format: Format) -> &'static Codec {
    match format {
        Format::Json => &CODECS[0],
        Format::Yaml => &CODECS[1],
        Format::Xml => &CODECS[2],
    }
}
