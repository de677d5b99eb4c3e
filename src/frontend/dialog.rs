//! Native dialog front end.
//!
//! File pickers stand in for the two "Browse..." fields and each conversion
//! result is shown in a modal message box. The session continues until the
//! user cancels a picker or declines another conversion.

use super::{FrontEnd, Outcome};
use crate::format::Format;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

const TITLE: &str = "fmtconv";

#[derive(Debug, Default)]
pub struct DialogFrontEnd;

impl DialogFrontEnd {
    pub fn new() -> Self {
        Self
    }
}

fn with_filters(dialog: FileDialog) -> FileDialog {
    let all: Vec<&str> = Format::ALL
        .iter()
        .flat_map(|format| format.extensions().iter().copied())
        .collect();
    let dialog = dialog.add_filter("Supported files", &all[..]);
    Format::ALL
        .iter()
        .fold(dialog, |dialog, format| {
            dialog.add_filter(format.name(), format.extensions())
        })
}

impl FrontEnd for DialogFrontEnd {
    fn select_input(&mut self) -> Option<PathBuf> {
        with_filters(FileDialog::new().set_title("Select input file")).pick_file()
    }

    fn select_output(&mut self, input: &Path) -> Option<PathBuf> {
        let mut dialog = with_filters(FileDialog::new().set_title("Select output file"));
        if let Some(dir) = input.parent() {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }

    fn report(&mut self, outcome: &Outcome) {
        let (level, title) = if outcome.is_success() {
            (MessageLevel::Info, "Conversion complete")
        } else {
            (MessageLevel::Error, "Conversion failed")
        };
        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(outcome.message())
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn again(&mut self) -> bool {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(TITLE)
            .set_description("Convert another file?")
            .set_buttons(MessageButtons::YesNo)
            .show()
            == MessageDialogResult::Yes
    }
}
