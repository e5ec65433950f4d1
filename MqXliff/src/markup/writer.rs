//! Markup writing: [`MarkupDocument`] back to XML text
//!
//! No indentation is added; every text node is written exactly as stored so
//! segments survive a load/save cycle unchanged.

use super::document::{MarkupDocument, MarkupElement, MarkupNode};
use crate::error::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Serialize a markup document to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_markup(doc: &MarkupDocument) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    if let Some(ref decl) = doc.declaration {
        writer.write_event(Event::Decl(BytesDecl::new(
            &decl.version,
            decl.encoding.as_deref(),
            decl.standalone.as_deref(),
        )))?;
        writer.get_mut().push(b'\n');
    }

    write_element(&mut writer, &doc.root)?;

    let xml = String::from_utf8(writer.into_inner())?;
    Ok(xml)
}

/// Serialize a single element (and its subtree) to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_element(element: &MarkupElement) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, element)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &MarkupElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow()))?;
    for child in &element.children {
        match child {
            MarkupNode::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
            }
            MarkupNode::Element(nested) => write_element(writer, nested)?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
