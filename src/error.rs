//! Error types for the fmtconv CLI.
//!
//! Verification and conversion outcomes are reported to the user by the
//! command that produced them; the variants carrying them only decide the
//! exit code. Everything else still needs printing by `main`.

use crate::convert::ConvertError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for command execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input did not verify. The report line has already been printed.
    #[error("{0}")]
    VerificationFailed(String),

    /// Conversion failed. The report line has already been printed.
    #[error(transparent)]
    Conversion(#[from] ConvertError),

    /// Filesystem operation failed.
    #[error("{0}")]
    FileSystem(String),

    /// Writing to the console failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::VerificationFailed(_)
            | AppError::Conversion(_)
            | AppError::FileSystem(_)
            | AppError::Output(_) => exit_codes::FAILURE,
        }
    }

    /// Whether the user has already seen this error.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            AppError::VerificationFailed(_) | AppError::Conversion(_)
        )
    }
}

/// Result type alias for fmtconv operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn every_error_exits_with_failure() {
        let errors = [
            AppError::VerificationFailed("bad".to_string()),
            AppError::Conversion(ConvertError::UnsupportedInputType(PathBuf::from("a.txt"))),
            AppError::FileSystem("disk full".to_string()),
            AppError::Output(std::io::Error::other("closed pipe")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), exit_codes::FAILURE);
        }
    }

    #[test]
    fn outcome_errors_are_already_reported() {
        assert!(AppError::VerificationFailed("bad".to_string()).is_reported());
        assert!(
            AppError::Conversion(ConvertError::UnsupportedOutputType(PathBuf::from("a.txt")))
                .is_reported()
        );
        assert!(!AppError::FileSystem("disk full".to_string()).is_reported());
    }

    #[test]
    fn conversion_error_message_is_transparent() {
        let err = AppError::from(ConvertError::WriteFailure {
            path: PathBuf::from("out.xml"),
            reason: "denied".to_string(),
        });
        assert_eq!(err.to_string(), "Failed to write 'out.xml'. denied");
    }
}
