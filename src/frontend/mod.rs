//! Interactive front ends.
//!
//! A front end only picks files and shows results. The session logic here
//! (verify the input, then convert) is shared by every implementation, so the
//! core stays free of any UI code.

#[cfg(feature = "gui")]
pub mod dialog;
pub mod terminal;

use crate::convert::{Conversion, ConvertError, convert};
use crate::format::Format;
use crate::verify::{VerificationResult, verify};
use std::path::{Path, PathBuf};

/// Presentation layer driving one conversion at a time.
pub trait FrontEnd {
    /// Ask for the file to convert. `None` ends the session.
    fn select_input(&mut self) -> Option<PathBuf>;

    /// Ask where to write the result. `None` ends the session.
    fn select_output(&mut self, input: &Path) -> Option<PathBuf>;

    /// Show the outcome of a conversion attempt.
    fn report(&mut self, outcome: &Outcome);

    /// Whether to offer another conversion after a report.
    fn again(&mut self) -> bool {
        false
    }
}

/// Result of one verify-then-convert attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input did not verify, so no conversion was attempted.
    Rejected {
        path: PathBuf,
        format: Format,
        result: VerificationResult,
    },
    Converted(Conversion),
    Failed(ConvertError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Converted(_))
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Rejected {
                path,
                format,
                result,
            } => result.message(path, *format),
            Outcome::Converted(conversion) => conversion.message(),
            Outcome::Failed(err) => err.message(),
        }
    }
}

/// Verify `input` under its detected format, then convert it to `output`.
///
/// Inputs with an unsupported extension skip verification; the conversion
/// itself reports them.
pub fn verify_then_convert(input: &Path, output: &Path) -> Outcome {
    if let Some(format) = Format::from_path(input) {
        let result = verify(input, format);
        if !result.is_valid() {
            return Outcome::Rejected {
                path: input.to_path_buf(),
                format,
                result,
            };
        }
    }
    match convert(input, output) {
        Ok(conversion) => Outcome::Converted(conversion),
        Err(err) => Outcome::Failed(err),
    }
}

/// Run a single select/convert/report round. Returns `None` if the user
/// cancelled a file selection.
pub fn run_once<F: FrontEnd + ?Sized>(front: &mut F) -> Option<Outcome> {
    let input = front.select_input()?;
    let output = front.select_output(&input)?;
    let outcome = verify_then_convert(&input, &output);
    if outcome.is_success() {
        log::info!("{}", outcome.message());
    } else {
        log::warn!("{}", outcome.message());
    }
    front.report(&outcome);
    Some(outcome)
}

/// Keep running rounds until the user cancels or declines another one.
/// Failed rounds do not end the session.
pub fn run<F: FrontEnd + ?Sized>(front: &mut F) -> Vec<Outcome> {
    let mut outcomes = Vec::new();
    while let Some(outcome) = run_once(front) {
        outcomes.push(outcome);
        if !front.again() {
            break;
        }
    }
    outcomes
}

#[cfg(test)]
mod tests;
