//! Command implementations for fmtconv.
//!
//! Each command writes its report lines to the given writer (stdout in
//! production) and returns an error when the operation did not succeed, so
//! `main` can pick the exit code.

mod convert;
mod interactive;
mod verify;

use crate::cli::Operation;
use crate::error::Result;
use std::io;

/// Dispatch an operation to its implementation.
pub fn dispatch(operation: Operation) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match operation {
        Operation::Verify { path, format } => verify::cmd_verify(&mut out, &path, format),
        Operation::Convert { input, output } => convert::cmd_convert(&mut out, &input, &output),
        Operation::Interactive => interactive::cmd_interactive(&mut out),
    }
}
