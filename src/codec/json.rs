//! JSON codec: strict parsing, 4-space pretty printing.

use super::CodecError;
use crate::document::Document;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

pub fn parse(text: &str) -> Result<Document, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Render pretty-printed JSON with a trailing newline.
pub fn render(document: &Document) -> Result<String, CodecError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| CodecError::Unrepresentable(e.to_string()))
}
