//! Rich text model: formatting ranges made of content runs

use serde::{Deserialize, Serialize};

/// Nested text of a formatting `bpt`/`ept` pair, as opposed to an inline tag's text.
pub const FORMAT_PLACEHOLDER: &str = "{}";

/// One of the five formatting flags a range can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatFlag {
    Bold,
    Italic,
    Underlined,
    Subscript,
    Superscript,
}

impl FormatFlag {
    /// Order in which the encoder opens and closes formatting markers.
    pub const ENCODE_ORDER: [FormatFlag; 5] = [
        FormatFlag::Bold,
        FormatFlag::Italic,
        FormatFlag::Subscript,
        FormatFlag::Superscript,
        FormatFlag::Underlined,
    ];

    /// Maps a `ctype` attribute value to a flag.
    #[must_use]
    pub fn from_ctype(ctype: &str) -> Option<Self> {
        match ctype {
            "bold" => Some(FormatFlag::Bold),
            "italic" => Some(FormatFlag::Italic),
            "underlined" => Some(FormatFlag::Underlined),
            "x-sub" => Some(FormatFlag::Subscript),
            "x-sup" => Some(FormatFlag::Superscript),
            _ => None,
        }
    }

    /// The `ctype` attribute value written for this flag.
    #[must_use]
    pub fn ctype(self) -> &'static str {
        match self {
            FormatFlag::Bold => "bold",
            FormatFlag::Italic => "italic",
            FormatFlag::Underlined => "underlined",
            FormatFlag::Subscript => "x-sub",
            FormatFlag::Superscript => "x-sup",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FormatFlag::Bold => 0,
            FormatFlag::Italic => 1,
            FormatFlag::Underlined => 2,
            FormatFlag::Subscript => 3,
            FormatFlag::Superscript => 4,
        }
    }
}

/// An attribute-value pair within an inline tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrVal {
    pub attr: String,
    pub val: String,
}

impl AttrVal {
    #[must_use]
    pub fn new(attr: impl Into<String>, val: impl Into<String>) -> Self {
        AttrVal {
            attr: attr.into(),
            val: val.into(),
        }
    }
}

/// An inline tag carried opaquely through a segment.
///
/// Closing tags can have attributes too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineTag {
    pub name: String,
    #[serde(default)]
    pub attrs: Vec<AttrVal>,
}

impl InlineTag {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        InlineTag {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, attr: impl Into<String>, val: impl Into<String>) -> Self {
        self.attrs.push(AttrVal::new(attr, val));
        self
    }
}

/// A single content run within a [`FormatRange`]: text, or exactly one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentRun {
    /// Literal text.
    #[serde(rename = "text")]
    Text { text: String },
    /// A structural placeholder, like "{1}". Carries nothing.
    StructuralTag,
    /// An opening inline tag.
    OpenTag(InlineTag),
    /// An empty (self-closing) inline tag.
    EmptyTag(InlineTag),
    /// A closing inline tag.
    CloseTag(InlineTag),
}

impl ContentRun {
    /// Creates a text run.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        ContentRun::Text { text: text.into() }
    }

    /// The run's text, if it is a text run.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentRun::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// A range of content with uniform formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRange {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underlined: bool,
    #[serde(default)]
    pub subscript: bool,
    #[serde(default)]
    pub superscript: bool,
    #[serde(default)]
    pub content: Vec<ContentRun>,
}

impl FormatRange {
    /// A range with no formatting and no content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty range with the same flags as `proto`.
    #[must_use]
    pub fn inheriting(proto: &FormatRange) -> Self {
        FormatRange {
            bold: proto.bold,
            italic: proto.italic,
            underlined: proto.underlined,
            subscript: proto.subscript,
            superscript: proto.superscript,
            content: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, flag: FormatFlag) -> bool {
        match flag {
            FormatFlag::Bold => self.bold,
            FormatFlag::Italic => self.italic,
            FormatFlag::Underlined => self.underlined,
            FormatFlag::Subscript => self.subscript,
            FormatFlag::Superscript => self.superscript,
        }
    }

    pub fn set(&mut self, flag: FormatFlag, on: bool) {
        match flag {
            FormatFlag::Bold => self.bold = on,
            FormatFlag::Italic => self.italic = on,
            FormatFlag::Underlined => self.underlined = on,
            FormatFlag::Subscript => self.subscript = on,
            FormatFlag::Superscript => self.superscript = on,
        }
    }

    /// Builder-style flag setter.
    #[must_use]
    pub fn with_flag(mut self, flag: FormatFlag) -> Self {
        self.set(flag, true);
        self
    }

    /// Builder-style run append.
    #[must_use]
    pub fn with_run(mut self, run: ContentRun) -> Self {
        self.content.push(run);
        self
    }

    /// Builder-style text run append.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_run(ContentRun::text(text))
    }

    /// True if any of the five flags is set.
    #[must_use]
    pub fn is_formatted(&self) -> bool {
        FormatFlag::ENCODE_ORDER.iter().any(|&flag| self.get(flag))
    }

    /// Text of this range's text runs; tags contribute nothing.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.content.iter().filter_map(ContentRun::as_text).collect()
    }
}

/// Concatenated text of a whole range sequence.
#[must_use]
pub fn plain_text(ranges: &[FormatRange]) -> String {
    ranges
        .iter()
        .flat_map(|range| range.content.iter())
        .filter_map(ContentRun::as_text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ctype_mapping() {
        for flag in FormatFlag::ENCODE_ORDER {
            assert_eq!(FormatFlag::from_ctype(flag.ctype()), Some(flag));
        }
        assert_eq!(FormatFlag::from_ctype("x-strike"), None);
        assert_eq!(FormatFlag::from_ctype("Bold"), None);
    }

    #[test]
    fn test_inheriting_copies_flags_only() {
        let proto = FormatRange::new()
            .with_flag(FormatFlag::Italic)
            .with_flag(FormatFlag::Superscript)
            .with_text("a");
        let next = FormatRange::inheriting(&proto);

        assert!(next.italic && next.superscript);
        assert!(!next.bold && !next.underlined && !next.subscript);
        assert!(next.content.is_empty());
    }

    #[test]
    fn test_plain_text_ignores_tags() {
        let ranges = vec![
            FormatRange::new()
                .with_text("Press ")
                .with_run(ContentRun::StructuralTag),
            FormatRange::new()
                .with_flag(FormatFlag::Bold)
                .with_run(ContentRun::OpenTag(InlineTag::new("kbd")))
                .with_text("Enter")
                .with_run(ContentRun::CloseTag(InlineTag::new("kbd"))),
        ];
        assert_eq!(plain_text(&ranges), "Press Enter");
        assert_eq!(ranges[1].plain_text(), "Enter");
    }

    #[test]
    fn test_json_shape() {
        let range = FormatRange::new()
            .with_flag(FormatFlag::Bold)
            .with_text("hi")
            .with_run(ContentRun::EmptyTag(InlineTag::new("br").with_attr("class", "x")));

        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bold": true,
                "italic": false,
                "underlined": false,
                "subscript": false,
                "superscript": false,
                "content": [
                    { "type": "text", "text": "hi" },
                    { "type": "EmptyTag", "name": "br", "attrs": [{ "attr": "class", "val": "x" }] }
                ]
            })
        );

        let back: FormatRange = serde_json::from_value(json).unwrap();
        assert_eq!(back, range);
    }
}
