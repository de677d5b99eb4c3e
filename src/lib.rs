//! fmtconv: verify JSON, YAML and XML files and convert between them.
//!
//! The core is UI-agnostic: [`verify::verify`] checks well-formedness,
//! [`convert::convert`] maps one format onto another through the generic
//! [`document::Document`] model, and [`frontend`] holds the session logic
//! shared by the interactive front ends.

pub mod cli;
pub mod codec;
pub mod commands;
pub mod convert;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod frontend;
pub mod fs;
pub mod logging;
pub mod verify;
