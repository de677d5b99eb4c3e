//! Filesystem utilities.
//!
//! Output files are written atomically so a failed conversion never leaves a
//! half-written file behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;

use std::io;
use std::path::Path;

/// Read a whole file as UTF-8 text, dropping a leading byte-order mark.
pub fn read_text(path: &Path) -> io::Result<String> {
    let text = std::fs::read_to_string(path)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
