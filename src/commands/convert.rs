//! `--convert PATH_IN PATH_OUT`.

use crate::convert::convert;
use crate::error::Result;
use crate::format::Format;
use std::io::Write;
use std::path::Path;

use super::verify::cmd_verify;

/// Verify the input under its detected format, then convert it.
pub(super) fn cmd_convert<W: Write>(out: &mut W, input: &Path, output: &Path) -> Result<()> {
    writeln!(
        out,
        "Converting '{}' to '{}'...",
        input.display(),
        output.display()
    )?;

    // Unsupported inputs are left for the converter to report.
    if let Some(format) = Format::from_path(input) {
        writeln!(out, "Verifying '{}' as {}...", input.display(), format)?;
        cmd_verify(out, input, format)?;
    }

    match convert(input, output) {
        Ok(conversion) => {
            writeln!(out, "{}", conversion.message())?;
            Ok(())
        }
        Err(err) => {
            writeln!(out, "{}", err.message())?;
            Err(err.into())
        }
    }
}
