//! Markup reading: XML text to [`MarkupDocument`]
//!
//! Comments, processing instructions and the doctype are dropped. Text is
//! never trimmed, segment content depends on its whitespace.

use super::document::{MarkupDocument, MarkupElement, MarkupNode, XmlDeclaration};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesStart, Event};

/// Parse markup text into a single-root node tree
///
/// # Errors
/// Returns an error if the XML is malformed, has no root element, has more
/// than one root element, or leaves elements unclosed.
pub fn parse_markup(content: &str) -> Result<MarkupDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    reader.trim_text(false);

    let mut declaration = None;
    let mut root: Option<MarkupElement> = None;
    let mut stack: Vec<MarkupElement> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Decl(decl)) => {
                declaration = Some(read_declaration(&decl)?);
            }
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = stack.pop() {
                    attach(&mut stack, &mut root, completed)?;
                }
            }
            Ok(Event::Text(e)) => {
                // Text outside the root element is formatting whitespace only
                if let Some(parent) = stack.last_mut() {
                    let text = e.unescape().map_err(Error::XmlError)?;
                    push_text(parent, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(parent) = stack.last_mut() {
                    let text = String::from_utf8(e.into_inner().into_owned())?;
                    push_text(parent, &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(e)),
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::InvalidStructure(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    let root = root.ok_or_else(|| Error::InvalidStructure("document has no root element".into()))?;
    Ok(MarkupDocument { declaration, root })
}

/// Builds an element (name + ordered attributes) from a start or empty tag.
fn element_from_start(e: &BytesStart<'_>) -> Result<MarkupElement> {
    let name = String::from_utf8(e.name().as_ref().to_vec())?;
    let mut element = MarkupElement::new(name);

    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())?;
        let value = attr.unescape_value().map_err(Error::XmlError)?;
        element.attributes.insert(key, value.into_owned());
    }

    Ok(element)
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<XmlDeclaration> {
    let version = String::from_utf8(decl.version()?.into_owned())?;
    let encoding = match decl.encoding() {
        Some(value) => Some(String::from_utf8(value?.into_owned())?),
        None => None,
    };
    let standalone = match decl.standalone() {
        Some(value) => Some(String::from_utf8(value?.into_owned())?),
        None => None,
    };
    Ok(XmlDeclaration {
        version,
        encoding,
        standalone,
    })
}

fn attach(
    stack: &mut [MarkupElement],
    root: &mut Option<MarkupElement>,
    element: MarkupElement,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(MarkupNode::Element(element));
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(Error::InvalidStructure(format!(
            "second root element <{}>",
            element.name
        )));
    }
    Ok(())
}

/// Appends text, merging with a preceding text node (CDATA next to text).
fn push_text(parent: &mut MarkupElement, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(MarkupNode::Text(previous)) = parent.children.last_mut() {
        previous.push_str(text);
    } else {
        parent.children.push(MarkupNode::Text(text.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_keeps_segment_whitespace() {
        let doc = parse_markup(r#"<source>Hello <x id="1"/> world</source>"#).unwrap();

        assert_eq!(
            doc.root.children,
            vec![
                MarkupNode::text("Hello "),
                MarkupElement::new("x").with_attr("id", "1").into(),
                MarkupNode::text(" world"),
            ]
        );
    }

    #[test]
    fn test_parse_unescapes_embedded_tag_text() {
        let doc = parse_markup(r#"<bpt id="1">&lt;b class="a"&gt;</bpt>"#).unwrap();
        assert_eq!(doc.root.text(), r#"<b class="a">"#);
    }

    #[test]
    fn test_parse_reads_declaration_and_drops_comments() {
        let doc = parse_markup(
            "\u{feff}<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- note --><root a=\"1\"/>\n",
        )
        .unwrap();

        let decl = doc.declaration.unwrap();
        assert_eq!(decl.version, "1.0");
        assert_eq!(decl.encoding.as_deref(), Some("utf-8"));
        assert_eq!(decl.standalone, None);
        assert_eq!(doc.root.attr("a"), Some("1"));
        assert!(doc.root.children.is_empty());
    }

    #[test]
    fn test_parse_rejects_two_roots() {
        let err = parse_markup("<a/><b/>").unwrap_err();
        assert!(matches!(err, Error::InvalidStructure(_)));
    }

    #[test]
    fn test_parse_rejects_unclosed_root() {
        assert!(parse_markup("<a><b></b>").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(parse_markup("   ").is_err());
    }
}
