//! Exit code constants for the fmtconv CLI.
//!
//! - 0: Success
//! - 1: Failure (invalid or missing input, unsupported type, read/write failure)
//! - 2: Usage error

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any reported failure.
pub const FAILURE: i32 = 1;

/// Bad command-line usage. clap reports these itself and exits with this
/// status, so it is never returned through `AppError`.
pub const USAGE: i32 = 2;
