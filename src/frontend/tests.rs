//! Tests for the front-end session driver.

use super::*;
use std::collections::VecDeque;
use std::fs;
use tempfile::TempDir;

/// Front end replaying canned answers.
#[derive(Default)]
struct Scripted {
    inputs: VecDeque<Option<PathBuf>>,
    outputs: VecDeque<Option<PathBuf>>,
    again: VecDeque<bool>,
    reports: Vec<String>,
}

impl FrontEnd for Scripted {
    fn select_input(&mut self) -> Option<PathBuf> {
        self.inputs.pop_front().flatten()
    }

    fn select_output(&mut self, _input: &Path) -> Option<PathBuf> {
        self.outputs.pop_front().flatten()
    }

    fn report(&mut self, outcome: &Outcome) {
        self.reports.push(outcome.message());
    }

    fn again(&mut self) -> bool {
        self.again.pop_front().unwrap_or(false)
    }
}

#[test]
fn verify_then_convert_converts_valid_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.yaml");
    fs::write(&input, r#"{"a": 1}"#).unwrap();

    let outcome = verify_then_convert(&input, &output);

    assert!(outcome.is_success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "a: 1\n");
}

#[test]
fn verify_then_convert_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.yaml");
    let output = dir.path().join("out.json");
    fs::write(&input, "a:\n\tb: 1\n").unwrap();

    let outcome = verify_then_convert(&input, &output);

    assert!(matches!(
        outcome,
        Outcome::Rejected {
            format: Format::Yaml,
            result: VerificationResult::Invalid(_),
            ..
        }
    ));
    assert!(outcome.message().starts_with("Error: File '"));
    assert!(!output.exists());
}

#[test]
fn verify_then_convert_reports_missing_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.json");
    let output = dir.path().join("out.yaml");

    let outcome = verify_then_convert(&input, &output);

    assert!(matches!(
        outcome,
        Outcome::Rejected {
            result: VerificationResult::Missing,
            ..
        }
    ));
}

#[test]
fn verify_then_convert_passes_unsupported_input_to_converter() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    let output = dir.path().join("out.json");

    let outcome = verify_then_convert(&input, &output);

    assert_eq!(
        outcome,
        Outcome::Failed(ConvertError::UnsupportedInputType(input))
    );
}

#[test]
fn run_once_stops_when_input_selection_cancelled() {
    let mut front = Scripted::default();
    front.inputs.push_back(None);

    assert_eq!(run_once(&mut front), None);
    assert!(front.reports.is_empty());
}

#[test]
fn run_once_stops_when_output_selection_cancelled() {
    let mut front = Scripted::default();
    front.inputs.push_back(Some(PathBuf::from("in.json")));
    front.outputs.push_back(None);

    assert_eq!(run_once(&mut front), None);
    assert!(front.reports.is_empty());
}

#[test]
fn run_keeps_going_after_a_failure() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    fs::write(&good, r#"{"a": 1, "b": "x"}"#).unwrap();

    let mut front = Scripted::default();
    front.inputs.push_back(Some(good.clone()));
    front.outputs.push_back(Some(dir.path().join("out.txt")));
    front.again.push_back(true);
    front.inputs.push_back(Some(good));
    front.outputs.push_back(Some(dir.path().join("out.xml")));
    front.again.push_back(false);

    let outcomes = run(&mut front);

    assert_eq!(outcomes.len(), 2);
    assert!(!outcomes[0].is_success());
    assert!(outcomes[1].is_success());
    assert_eq!(front.reports.len(), 2);
    assert!(front.reports[0].contains("Unsupported output file type"));
    assert!(front.reports[1].starts_with("Success: Converted"));
    assert!(dir.path().join("out.xml").exists());
}
