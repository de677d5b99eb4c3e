//! Well-formedness verification.
//!
//! [`verify`] never fails: every outcome, including I/O trouble, is folded
//! into a [`VerificationResult`] whose [`message`](VerificationResult::message)
//! is the one-line report shown to the user.

use crate::format::Format;
use std::path::Path;

/// Outcome of verifying one file against one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    /// The file parses under the format's grammar.
    Valid,
    /// Syntax error, with the parser's explanation.
    Invalid(String),
    /// The path is not an existing regular file.
    Missing,
    /// Anything else: permissions, encoding, other I/O.
    UnexpectedError(String),
}

impl VerificationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }

    /// One-line human-readable report.
    pub fn message(&self, path: &Path, format: Format) -> String {
        let path = path.display();
        match self {
            VerificationResult::Valid => {
                format!("Success: File '{path}' is a valid {format} file.")
            }
            VerificationResult::Invalid(reason) => {
                format!("Error: File '{path}' is not a valid {format} file. {reason}")
            }
            VerificationResult::Missing => format!("Error: File '{path}' does not exist."),
            VerificationResult::UnexpectedError(reason) => format!(
                "Error: An unexpected error occurred while processing '{path}'. {reason}"
            ),
        }
    }
}

/// Check that the file at `path` is well-formed `format`.
pub fn verify(path: &Path, format: Format) -> VerificationResult {
    if !path.is_file() {
        log::debug!("{} is not a regular file", path.display());
        return VerificationResult::Missing;
    }

    let text = match crate::fs::read_text(path) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("reading {} failed: {:?}", path.display(), e.kind());
            return VerificationResult::UnexpectedError(e.to_string());
        }
    };
    log::debug!("parsing {} bytes of {} from {}", text.len(), format, path.display());

    match format.codec().parse(&text) {
        Ok(_) => VerificationResult::Valid,
        Err(e) => VerificationResult::Invalid(e.to_string()),
    }
}
