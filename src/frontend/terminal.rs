//! Line-based front end for terminals.

use super::{FrontEnd, Outcome};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Prompts for paths on `output` and reads answers from `input`.
///
/// An empty answer or end of input cancels the session.
pub struct TerminalFrontEnd<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFrontEnd<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the front end, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, question: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{question}").and_then(|()| self.output.flush()) {
            log::warn!("failed to write prompt: {e}");
            return None;
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim();
                (!answer.is_empty()).then(|| answer.to_string())
            }
            Err(e) => {
                log::warn!("failed to read answer: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> FrontEnd for TerminalFrontEnd<R, W> {
    fn select_input(&mut self) -> Option<PathBuf> {
        self.prompt("Input file (empty to quit): ").map(PathBuf::from)
    }

    fn select_output(&mut self, input: &Path) -> Option<PathBuf> {
        self.prompt(&format!("Output file for '{}': ", input.display()))
            .map(PathBuf::from)
    }

    fn report(&mut self, outcome: &Outcome) {
        if let Err(e) = writeln!(self.output, "{}", outcome.message()) {
            log::warn!("failed to write report: {e}");
        }
    }

    fn again(&mut self) -> bool {
        self.prompt("Convert another file? [y/N]: ")
            .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
