//! Generic markup node tree
//!
//! Mirrors the XML it was read from closely enough to be written back:
//! element names keep their prefixes, attributes keep declaration order,
//! and text between elements is kept as-is (including whitespace).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed markup document: optional XML declaration plus a single root element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupDocument {
    /// The `<?xml ...?>` declaration, if the source had one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<XmlDeclaration>,
    /// The document element.
    pub root: MarkupElement,
}

/// The `<?xml version=... encoding=... standalone=...?>` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlDeclaration {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standalone: Option<String>,
}

/// A node in the tree: either character data or an element.
///
/// Serialized untagged, so text children show up in JSON as bare strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkupNode {
    Text(String),
    Element(MarkupElement),
}

/// An element with its attributes and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupElement {
    /// Qualified tag name (e.g. `trans-unit`, `mq:historical-unit`).
    pub name: String,
    /// Attributes in declaration order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    /// Child nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Creates a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        MarkupNode::Text(text.into())
    }

    /// Returns the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&MarkupElement> {
        match self {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        }
    }

    /// Returns the text if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MarkupNode::Text(text) => Some(text),
            MarkupNode::Element(_) => None,
        }
    }
}

impl From<MarkupElement> for MarkupNode {
    fn from(element: MarkupElement) -> Self {
        MarkupNode::Element(element)
    }
}

impl MarkupElement {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        MarkupElement {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter; keeps insertion order.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style child append.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<MarkupNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Builder-style text child append.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(MarkupNode::Text(text.into()))
    }

    /// Looks up an attribute value by qualified name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Sets (or replaces in place) an attribute value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Iterates over the child elements, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &MarkupElement> {
        self.children.iter().filter_map(MarkupNode::as_element)
    }

    /// Mutable variant of [`MarkupElement::elements`].
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut MarkupElement> {
        self.children.iter_mut().filter_map(|node| match node {
            MarkupNode::Element(element) => Some(element),
            MarkupNode::Text(_) => None,
        })
    }

    /// First child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&MarkupElement> {
        self.elements().find(|e| e.name == name)
    }

    /// First child element with the given name, mutably.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut MarkupElement> {
        self.elements_mut().find(|e| e.name == name)
    }

    /// Concatenation of the direct text children. Nested elements are skipped.
    #[must_use]
    pub fn text(&self) -> String {
        self.children.iter().filter_map(MarkupNode::as_text).collect()
    }
}
