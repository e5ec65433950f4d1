//! Generic markup node tree with its XML reader and writer

mod document;
mod reader;
mod writer;

pub use document::{MarkupDocument, MarkupElement, MarkupNode, XmlDeclaration};
pub use reader::parse_markup;
pub use writer::{serialize_element, serialize_markup};
