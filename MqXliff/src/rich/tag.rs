//! Inline tag text: the serialized tag stored inside `bpt`/`ept`/`ph`
//!
//! memoQ keeps the original tag as escaped text, e.g.
//! `<bpt id="3">&lt;a href="x"&gt;</bpt>`. Here that text is turned into an
//! [`InlineTag`] and back.

use super::types::{AttrVal, InlineTag};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;

/// Which shape of tag text to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name a="v">`
    Open,
    /// `</name>` (attributes kept if present)
    Close,
    /// `<name a="v"/>`
    Empty,
}

/// Parse raw tag text (`<a x="1">`, `</a>`, `<a x="1"/>`) into name and ordered attributes
///
/// End and self-closing forms are normalized to a start tag first. Attribute
/// order is kept and duplicates are not merged.
///
/// # Errors
/// Returns [`Error::MalformedTagText`] if the text is not exactly one tag.
pub fn parse_inline_tag(text: &str) -> Result<InlineTag> {
    let malformed = |reason: String| Error::MalformedTagText {
        text: text.to_owned(),
        reason,
    };

    let mut normalized = text.trim().to_owned();
    if let Some(rest) = normalized.strip_prefix("</") {
        normalized = format!("<{rest}");
    }
    if let Some(rest) = normalized.strip_suffix("/>") {
        normalized = format!("{rest}>");
    }

    let mut reader = Reader::from_str(&normalized);
    let tag = match reader.read_event() {
        Ok(Event::Start(e)) => {
            let name = String::from_utf8(e.name().as_ref().to_vec())
                .map_err(|err| malformed(err.to_string()))?;
            if name.contains('/') {
                return Err(malformed(format!("tag name {name:?} contains '/'")));
            }
            let mut tag = InlineTag::new(name);

            let mut attributes = e.attributes();
            attributes.with_checks(false);
            for attr in attributes {
                let attr = attr.map_err(|err| malformed(err.to_string()))?;
                let key = String::from_utf8(attr.key.as_ref().to_vec())
                    .map_err(|err| malformed(err.to_string()))?;
                let value = attr
                    .unescape_value()
                    .map_err(|err| malformed(err.to_string()))?;
                tag.attrs.push(AttrVal::new(key, value.into_owned()));
            }
            tag
        }
        Ok(_) => return Err(malformed("expected a start, end or empty tag".into())),
        Err(err) => return Err(malformed(err.to_string())),
    };

    match reader.read_event() {
        Ok(Event::Eof) => Ok(tag),
        Ok(_) => Err(malformed("unexpected content after the tag".into())),
        Err(err) => Err(malformed(err.to_string())),
    }
}

impl InlineTag {
    /// Renders the tag back to the text stored inside `bpt`/`ept`/`ph`.
    #[must_use]
    pub fn to_tag_text(&self, kind: TagKind) -> String {
        let mut out = String::from("<");
        if kind == TagKind::Close {
            out.push('/');
        }
        out.push_str(&self.name);
        for attr in &self.attrs {
            out.push(' ');
            out.push_str(&attr.attr);
            out.push_str("=\"");
            out.push_str(&escape(attr.val.as_str()));
            out.push('"');
        }
        if kind == TagKind::Empty {
            out.push('/');
        }
        out.push('>');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_keeps_attribute_order() {
        let tag = parse_inline_tag(r#"<a x="1" y="2">"#).unwrap();
        assert_eq!(tag.name, "a");
        assert_eq!(tag.attrs, vec![AttrVal::new("x", "1"), AttrVal::new("y", "2")]);
    }

    #[test]
    fn test_parse_normalizes_end_and_empty_tags() {
        assert_eq!(parse_inline_tag("</span>").unwrap(), InlineTag::new("span"));
        assert_eq!(
            parse_inline_tag(r#"<img src="a.png"/>"#).unwrap(),
            InlineTag::new("img").with_attr("src", "a.png")
        );
        assert_eq!(
            parse_inline_tag(r#"<br />"#).unwrap(),
            InlineTag::new("br")
        );
    }

    #[test]
    fn test_parse_close_tag_with_attributes() {
        let tag = parse_inline_tag(r#"</mq:rxt displaytext="b" val="x">"#).unwrap();
        assert_eq!(tag.name, "mq:rxt");
        assert_eq!(
            tag.attrs,
            vec![AttrVal::new("displaytext", "b"), AttrVal::new("val", "x")]
        );
    }

    #[test]
    fn test_parse_keeps_duplicate_attributes() {
        let tag = parse_inline_tag(r#"<a x="1" x="2">"#).unwrap();
        assert_eq!(tag.attrs, vec![AttrVal::new("x", "1"), AttrVal::new("x", "2")]);
    }

    #[test]
    fn test_parse_unescapes_values() {
        let tag = parse_inline_tag(r#"<a title="&quot;R&amp;D&quot;">"#).unwrap();
        assert_eq!(tag.attrs[0].val, r#""R&D""#);
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in ["", "plain words", "{}", "<a x=\"1\"><b>", "<a x=\"1>"] {
            let err = parse_inline_tag(text).unwrap_err();
            assert!(
                matches!(err, Error::MalformedTagText { .. }),
                "{text:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_slash_in_name() {
        for text in ["<a/b>", "</a/b>", "<a/ x=\"1\">"] {
            let err = parse_inline_tag(text).unwrap_err();
            assert!(
                matches!(err, Error::MalformedTagText { .. }),
                "{text:?} gave {err:?}"
            );
        }
        assert_eq!(parse_inline_tag("</a/>").unwrap(), InlineTag::new("a"));
    }

    #[test]
    fn test_to_tag_text() {
        let tag = InlineTag::new("a")
            .with_attr("href", "x?a=1&b=2")
            .with_attr("id", "k");
        assert_eq!(
            tag.to_tag_text(TagKind::Open),
            r#"<a href="x?a=1&amp;b=2" id="k">"#
        );
        assert_eq!(InlineTag::new("a").to_tag_text(TagKind::Close), "</a>");
        assert_eq!(InlineTag::new("br").to_tag_text(TagKind::Empty), "<br/>");
    }

    #[test]
    fn test_tag_text_parses_back() {
        let tag = InlineTag::new("span")
            .with_attr("style", "color: \"red\"")
            .with_attr("lang", "de");
        for kind in [TagKind::Open, TagKind::Close, TagKind::Empty] {
            assert_eq!(parse_inline_tag(&tag.to_tag_text(kind)).unwrap(), tag);
        }
    }
}
