//! XML codec.
//!
//! Reading builds a small element tree and checks well-formedness: exactly one
//! root, balanced tags with valid names, no stray text outside the root, only
//! XML 1.0 characters, and declarations only where the grammar allows them.
//! Loading that tree as a
//! [`Document`] drops the root element and keeps its content.
//!
//! Writing is deliberately shallow: a synthetic `<root>` element gets one child
//! per top-level key, and each child's text is the string form of the value.
//! Nested structures are not expanded into elements.

use super::CodecError;
use crate::document::{Document, Mapping};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use regex::Regex;
use std::sync::LazyLock;

/// Name of the synthetic wrapper element written around flattened output.
pub const ROOT: &str = "root";

const INDENT: usize = 2;

static ELEMENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{N}._-]*$").expect("Invalid element name regex")
});

/// Names accepted on input. Same shape as [`ELEMENT_NAME`], plus `:` for
/// namespace prefixes.
static TAG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}_:][\p{L}\p{N}._:-]*$").expect("Invalid tag name regex")
});

/// The XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn check_chars(content: &str, position: usize) -> Result<(), CodecError> {
    match content.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(CodecError::Malformed(format!(
            "invalid character U+{:04X} at byte {position}",
            u32::from(c)
        ))),
        None => Ok(()),
    }
}

fn check_name(kind: &str, name: &[u8], position: usize) -> Result<String, CodecError> {
    let name = String::from_utf8_lossy(name).into_owned();
    if !TAG_NAME.is_match(&name) {
        return Err(CodecError::Malformed(format!(
            "invalid {kind} name '{name}' at byte {position}"
        )));
    }
    Ok(name)
}

/// A parsed XML element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn from_start(tag: &BytesStart<'_>, position: usize) -> Result<Self, CodecError> {
        let name = check_name("element", tag.name().as_ref(), position)?;
        let mut attributes = Vec::new();
        for attr in tag.attributes() {
            let attr = attr.map_err(|e| CodecError::Xml(e.into()))?;
            let key = check_name("attribute", attr.key.as_ref(), position)?;
            if attr.value.contains(&b'<') {
                return Err(CodecError::Malformed(format!(
                    "'<' in the value of attribute '{key}' at byte {position}"
                )));
            }
            let value = attr.unescape_value()?.into_owned();
            check_chars(&value, position)?;
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    /// Convert a nested element. Leaves become strings; anything with
    /// structure becomes a mapping.
    fn into_document(self) -> Document {
        if self.children.is_empty() && self.attributes.is_empty() {
            return Document::String(self.text.trim().to_string());
        }
        Document::Mapping(self.into_mapping())
    }

    /// Attributes become `@name` keys, children become keys (repeated names
    /// collapse into a sequence), and leftover text is kept under `#text`.
    fn into_mapping(self) -> Mapping {
        let mut mapping = Mapping::new();
        for (key, value) in self.attributes {
            mapping.insert(format!("@{key}"), Document::String(value));
        }
        for child in self.children {
            let name = child.name.clone();
            let value = child.into_document();
            match mapping.get_mut(&name) {
                None => {
                    mapping.insert(name, value);
                }
                Some(Document::Sequence(items)) => items.push(value),
                Some(existing) => {
                    let first = std::mem::take(existing);
                    *existing = Document::Sequence(vec![first, value]);
                }
            }
        }
        let text = self.text.trim();
        if !text.is_empty() {
            mapping.insert("#text", Document::String(text.to_string()));
        }
        mapping
    }
}

/// Parse text into its root element, enforcing well-formedness.
pub fn parse_tree(text: &str) -> Result<Element, CodecError> {
    if let Some((position, c)) = text.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        return Err(CodecError::Malformed(format!(
            "invalid character U+{:04X} at byte {position}",
            u32::from(c)
        )));
    }

    let mut reader = Reader::from_str(text);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut first_event = true;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| CodecError::XmlSyntax {
                position: reader.buffer_position(),
                source,
            })?;
        let position = reader.buffer_position();
        match event {
            Event::Decl(_) if !first_event => {
                return Err(CodecError::Malformed(format!(
                    "XML declaration not at the start of the document (byte {position})"
                )));
            }
            Event::DocType(_) if root.is_some() || !stack.is_empty() => {
                return Err(CodecError::Malformed(format!(
                    "DOCTYPE after the root element has started (byte {position})"
                )));
            }
            Event::Start(tag) => {
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots(position));
                }
                stack.push(Element::from_start(&tag, position)?);
            }
            Event::Empty(tag) => {
                let element = Element::from_start(&tag, position)?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::End(tag) => {
                check_name("element", tag.name().as_ref(), position)?;
                let element = stack.pop().ok_or_else(|| {
                    CodecError::Malformed(format!(
                        "unexpected closing tag </{}> at byte {}",
                        String::from_utf8_lossy(tag.name().as_ref()),
                        position
                    ))
                })?;
                attach(&mut stack, &mut root, element, position)?;
            }
            Event::Text(content) => {
                let content = content.unescape()?;
                check_chars(&content, position)?;
                push_text(&mut stack, &content, position)?;
            }
            Event::CData(content) => {
                let content = String::from_utf8_lossy(&content.into_inner()).into_owned();
                push_text(&mut stack, &content, position)?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and doctypes
            // carry no document content.
            _ => {}
        }
        first_event = false;
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(CodecError::Malformed(format!(
            "unclosed element <{}> at end of input",
            open.name
        )));
    }
    root.ok_or_else(|| CodecError::Malformed("no root element found".to_string()))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: usize,
) -> Result<(), CodecError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(multiple_roots(position));
    } else {
        *root = Some(element);
    }
    Ok(())
}

fn push_text(stack: &mut [Element], content: &str, position: usize) -> Result<(), CodecError> {
    match stack.last_mut() {
        Some(current) => current.text.push_str(content),
        None if content.trim().is_empty() => {}
        None => {
            return Err(CodecError::Malformed(format!(
                "text outside of the root element at byte {position}"
            )));
        }
    }
    Ok(())
}

fn multiple_roots(position: usize) -> CodecError {
    CodecError::Malformed(format!(
        "junk after document element: second root element at byte {position}"
    ))
}

/// Load XML as a document. The root element itself is not kept; its content
/// becomes the top-level mapping.
pub fn parse(text: &str) -> Result<Document, CodecError> {
    let root = parse_tree(text)?;
    Ok(Document::Mapping(root.into_mapping()))
}

/// Render a mapping as `<root>` with one flattened child per key.
pub fn render(document: &Document) -> Result<String, CodecError> {
    let mapping = document.as_mapping().ok_or_else(|| {
        CodecError::Unrepresentable(format!(
            "XML output requires a top-level mapping, found a {}",
            document.kind()
        ))
    })?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
    for (key, value) in mapping.iter() {
        if !ELEMENT_NAME.is_match(key) {
            return Err(CodecError::Unrepresentable(format!(
                "key '{key}' is not a valid XML element name"
            )));
        }
        let text = value.to_text();
        if let Some(c) = text.chars().find(|c| !is_xml_char(*c)) {
            return Err(CodecError::Unrepresentable(format!(
                "value of '{key}' contains U+{:04X}, which XML 1.0 cannot represent",
                u32::from(c)
            )));
        }
        if text.is_empty() {
            writer.write_event(Event::Empty(BytesStart::new(key)))?;
        } else {
            writer.write_event(Event::Start(BytesStart::new(key)))?;
            writer.write_event(Event::Text(BytesText::new(&text)))?;
            writer.write_event(Event::End(BytesEnd::new(key)))?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;

    let mut out = String::from_utf8(writer.into_inner())
        .map_err(|e| CodecError::Unrepresentable(e.to_string()))?;
    out.push('\n');
    Ok(out)
}
