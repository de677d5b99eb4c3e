//! Format-to-format conversion.
//!
//! Formats are inferred from file extensions on both sides. The input is
//! loaded into a [`Document`](crate::document::Document) and written back out
//! with the output format's writer. Output is rendered completely before the
//! target file is touched, and then written atomically.

use crate::format::{Format, SUPPORTED_EXTENSIONS};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub from: Format,
    pub to: Format,
}

impl Conversion {
    /// Confirmation line for a successful conversion.
    pub fn message(&self) -> String {
        format!(
            "Success: Converted '{}' ({}) to '{}' ({}).",
            self.input.display(),
            self.from,
            self.output.display(),
            self.to
        )
    }
}

/// Why a conversion did not happen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(
        "Unsupported input file type '{}'. Supported extensions: {}",
        .0.display(),
        SUPPORTED_EXTENSIONS
    )]
    UnsupportedInputType(PathBuf),

    #[error(
        "Unsupported output file type '{}'. Supported extensions: {}",
        .0.display(),
        SUPPORTED_EXTENSIONS
    )]
    UnsupportedOutputType(PathBuf),

    #[error("Failed to read '{}'. {reason}", .path.display())]
    ReadFailure { path: PathBuf, reason: String },

    #[error("Failed to write '{}'. {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },
}

impl ConvertError {
    /// One-line report, as printed by the command line.
    pub fn message(&self) -> String {
        format!("Error: {self}")
    }
}

/// Convert `input` into `output`, picking both formats from the extensions.
///
/// Unsupported extensions are rejected before any file is read or written.
pub fn convert(input: &Path, output: &Path) -> Result<Conversion, ConvertError> {
    let from = Format::from_path(input)
        .ok_or_else(|| ConvertError::UnsupportedInputType(input.to_path_buf()))?;
    let to = Format::from_path(output)
        .ok_or_else(|| ConvertError::UnsupportedOutputType(output.to_path_buf()))?;
    log::info!("converting {} ({from}) to {} ({to})", input.display(), output.display());

    let read_failure = |reason: String| ConvertError::ReadFailure {
        path: input.to_path_buf(),
        reason,
    };
    let write_failure = |reason: String| ConvertError::WriteFailure {
        path: output.to_path_buf(),
        reason,
    };

    let text = crate::fs::read_text(input).map_err(|e| read_failure(e.to_string()))?;
    let document = from
        .codec()
        .parse(&text)
        .map_err(|e| read_failure(e.to_string()))?;
    log::debug!("loaded a {} from {}", document.kind(), input.display());

    let rendered = to
        .codec()
        .render(&document)
        .map_err(|e| write_failure(e.to_string()))?;
    crate::fs::atomic_write_file(output, &rendered).map_err(|e| write_failure(e.to_string()))?;
    log::debug!("wrote {} bytes to {}", rendered.len(), output.display());

    Ok(Conversion {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        from,
        to,
    })
}
