//! CLI argument parsing for fmtconv.
//!
//! Uses clap derive macros. The operation flags are mutually exclusive;
//! with none of them the interactive front end starts.

use crate::format::Format;
use crate::logging::LogLevel;
use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// Verify JSON, YAML and XML files for well-formedness and convert between them.
///
/// Run without an operation flag to pick files interactively.
#[derive(Parser, Debug)]
#[command(name = "fmtconv")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("operation")
        .args(["verify_json", "verify_yml", "verify_xml", "convert"])
        .multiple(false)
))]
pub struct Cli {
    /// Verify that PATH is a well-formed JSON file.
    #[arg(long, value_name = "PATH")]
    pub verify_json: Option<PathBuf>,

    /// Verify that PATH is a well-formed YAML file.
    #[arg(long, value_name = "PATH")]
    pub verify_yml: Option<PathBuf>,

    /// Verify that PATH is a well-formed XML file.
    #[arg(long, value_name = "PATH")]
    pub verify_xml: Option<PathBuf>,

    /// Verify PATH_IN, then convert it to PATH_OUT. Formats come from the
    /// file extensions (.json, .yml/.yaml, .xml).
    #[arg(long, num_args = 2, value_names = ["PATH_IN", "PATH_OUT"])]
    pub convert: Option<Vec<PathBuf>>,

    /// Print more diagnostics to stderr (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors to stderr.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Verify { path: PathBuf, format: Format },
    Convert { input: PathBuf, output: PathBuf },
    Interactive,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn operation(&self) -> Operation {
        let verify = [
            (&self.verify_json, Format::Json),
            (&self.verify_yml, Format::Yaml),
            (&self.verify_xml, Format::Xml),
        ];
        for (path, format) in verify {
            if let Some(path) = path {
                return Operation::Verify {
                    path: path.clone(),
                    format,
                };
            }
        }
        if let Some([input, output]) = self.convert.as_deref() {
            return Operation::Convert {
                input: input.clone(),
                output: output.clone(),
            };
        }
        Operation::Interactive
    }

    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.verbose, self.quiet)
    }
}
