//! `--verify-json`, `--verify-yml` and `--verify-xml`.

use crate::error::{AppError, Result};
use crate::format::Format;
use crate::verify::verify;
use std::io::Write;
use std::path::Path;

/// Verify one file and print the one-line report.
pub(super) fn cmd_verify<W: Write>(out: &mut W, path: &Path, format: Format) -> Result<()> {
    let result = verify(path, format);
    let message = result.message(path, format);
    writeln!(out, "{message}")?;

    if result.is_valid() {
        Ok(())
    } else {
        Err(AppError::VerificationFailed(message))
    }
}
