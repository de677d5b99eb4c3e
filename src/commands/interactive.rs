//! No-argument mode: pick files interactively.

use crate::error::Result;
use crate::frontend;
use std::io::Write;

/// Run the native dialog front end.
#[cfg(feature = "gui")]
pub(super) fn cmd_interactive<W: Write>(_out: &mut W) -> Result<()> {
    let mut front = frontend::dialog::DialogFrontEnd::new();
    let outcomes = frontend::run(&mut front);
    log::info!("dialog session ended after {} attempt(s)", outcomes.len());
    Ok(())
}

/// Run the terminal front end on stdin and `out`.
#[cfg(not(feature = "gui"))]
pub(super) fn cmd_interactive<W: Write>(out: &mut W) -> Result<()> {
    let stdin = std::io::stdin();
    let mut front = frontend::terminal::TerminalFrontEnd::new(stdin.lock(), out);
    let outcomes = frontend::run(&mut front);
    log::info!("terminal session ended after {} attempt(s)", outcomes.len());
    Ok(())
}
