//! fmtconv: verify JSON, YAML and XML files and convert between them.
//!
//! This is the entry point for the `fmtconv` CLI. It parses arguments, sets up
//! diagnostics, dispatches the requested operation and maps failures to exit
//! codes.

use fmtconv::cli::Cli;
use fmtconv::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logger(cli.log_level()) {
        eprintln!("Warning: failed to initialise logging: {err}");
    }

    match commands::dispatch(cli.operation()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Verification and conversion failures were already reported.
            if !err.is_reported() {
                eprintln!("Error: {}", err);
            }
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
