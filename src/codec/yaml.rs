//! YAML codec.
//!
//! Loading is safe: only plain data is constructed, custom tags are refused,
//! and a stream must hold at most one document. Output is block style.

use super::CodecError;
use crate::document::Document;
use serde::Deserialize;

pub fn parse(text: &str) -> Result<Document, CodecError> {
    let mut documents = serde_yaml::Deserializer::from_str(text);
    let Some(first) = documents.next() else {
        return Ok(Document::Null);
    };
    let document = Document::deserialize(first)?;
    if documents.next().is_some() {
        return Err(CodecError::Malformed(
            "expected a single YAML document but found more than one".to_string(),
        ));
    }
    Ok(document)
}

pub fn render(document: &Document) -> Result<String, CodecError> {
    Ok(serde_yaml::to_string(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Mapping;

    #[test]
    fn parse_block_mapping() {
        let doc = parse("name: demo\nitems:\n  - 1\n  - two\n").unwrap();
        let map = doc.as_mapping().unwrap();
        assert_eq!(map.get("name"), Some(&Document::from("demo")));
        assert_eq!(
            map.get("items"),
            Some(&Document::from(vec![Document::from(1), Document::from("two")]))
        );
    }

    #[test]
    fn parse_empty_stream_is_null() {
        assert_eq!(parse("").unwrap(), Document::Null);
        assert_eq!(parse("# only a comment\n").unwrap(), Document::Null);
    }

    #[test]
    fn parse_rejects_tab_indentation() {
        let err = parse("a:\n\tb: 1\n").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn parse_rejects_unclosed_flow_sequence() {
        assert!(parse("a: [1, 2\n").is_err());
    }

    #[test]
    fn parse_rejects_multiple_documents() {
        let err = parse("a: 1\n---\nb: 2\n").unwrap_err();
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn parse_rejects_object_construction_tags() {
        assert!(parse("!!python/object/apply:os.system [\"ls\"]\n").is_err());
    }

    #[test]
    fn render_is_block_style() {
        let inner = Mapping::from_iter([("c", Document::from(2))]);
        let doc = Document::Mapping(Mapping::from_iter([
            ("a", Document::from(1)),
            ("list", Document::from(vec![Document::from("x"), Document::from("y")])),
            ("nested", Document::Mapping(inner)),
        ]));
        let text = render(&doc).unwrap();
        assert_eq!(text, "a: 1\nlist:\n- x\n- y\nnested:\n  c: 2\n");
        assert!(!text.contains('['));
        assert!(!text.contains('{'));
    }

    #[test]
    fn render_quotes_numeric_looking_strings() {
        let doc = Document::Mapping(Mapping::from_iter([("n", Document::from("1"))]));
        let back = parse(&render(&doc).unwrap()).unwrap();
        assert_eq!(back, doc);
    }
}
