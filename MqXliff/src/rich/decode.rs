//! Segment markup to formatting ranges
//!
//! Single pass over the segment's child nodes. Formatting markers close the
//! range being built and start a new one; everything else is appended to it.

use std::collections::HashMap;

use super::diagnostics::{Diagnostics, TracingDiagnostics, Warning};
use super::tag::parse_inline_tag;
use super::types::{ContentRun, FORMAT_PLACEHOLDER, FormatFlag, FormatRange};
use crate::error::Result;
use crate::markup::{MarkupElement, MarkupNode};

/// What a segment child node means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentNode<'a> {
    Text(&'a str),
    /// `bpt` with a `ctype`: turns a flag on.
    FormatStart { id: &'a str, ctype: &'a str },
    /// `bpt` without a (non-empty) `ctype`: an opening inline tag.
    OpenTag(&'a str),
    /// `ept` holding the `{}` placeholder: turns a flag off.
    FormatEnd { id: &'a str },
    /// `ept` holding tag text: a closing inline tag.
    CloseTag(&'a str),
    /// `ph`: an empty inline tag.
    EmptyTag(&'a str),
    /// `x`: a structural placeholder.
    Structural,
    /// Any other element; skipped.
    Other,
}

impl<'a> SegmentNode<'a> {
    pub(crate) fn classify(node: &'a MarkupNode) -> Self {
        let element = match node {
            MarkupNode::Text(text) => return SegmentNode::Text(text),
            MarkupNode::Element(element) => element,
        };

        match element.name.as_str() {
            // An empty ctype counts as absent
            "bpt" => match element.attr("ctype") {
                Some(ctype) if !ctype.is_empty() => SegmentNode::FormatStart {
                    id: element.attr("id").unwrap_or_default(),
                    ctype,
                },
                _ => SegmentNode::OpenTag(tag_text(element)),
            },
            "ept" => {
                let text = tag_text(element);
                if text == FORMAT_PLACEHOLDER {
                    SegmentNode::FormatEnd {
                        id: element.attr("id").unwrap_or_default(),
                    }
                } else {
                    SegmentNode::CloseTag(text)
                }
            }
            "ph" => SegmentNode::EmptyTag(tag_text(element)),
            "x" => SegmentNode::Structural,
            _ => SegmentNode::Other,
        }
    }
}

/// The nested text of a tag element: its first child, if that is text.
fn tag_text(element: &MarkupElement) -> &str {
    element
        .children
        .first()
        .and_then(MarkupNode::as_text)
        .unwrap_or_default()
}

/// Decode a segment's child nodes into formatting ranges
///
/// Warnings are logged through `tracing`.
///
/// # Errors
/// Returns an error if an inline tag's text is malformed.
pub fn decode_runs(nodes: &[MarkupNode]) -> Result<Vec<FormatRange>> {
    decode_runs_with(nodes, &TracingDiagnostics)
}

/// Decode a segment's child nodes into formatting ranges, reporting warnings to `diagnostics`
///
/// A formatting marker always pushes the range before it, even when that
/// range is empty; only an empty trailing range is dropped.
///
/// # Errors
/// Returns an error if an inline tag's text is malformed.
pub fn decode_runs_with(
    nodes: &[MarkupNode],
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<FormatRange>> {
    let mut ranges = Vec::new();
    let mut range = FormatRange::new();
    let mut markers: HashMap<&str, FormatFlag> = HashMap::new();

    for node in nodes {
        match SegmentNode::classify(node) {
            SegmentNode::Text(text) => range.content.push(ContentRun::text(text)),
            SegmentNode::FormatStart { id, ctype } => {
                let next = FormatRange::inheriting(&range);
                ranges.push(std::mem::replace(&mut range, next));

                if let Some(flag) = FormatFlag::from_ctype(ctype) {
                    range.set(flag, true);
                    markers.insert(id, flag);
                } else {
                    diagnostics.warn(&Warning::UnrecognizedFormatKind {
                        id: id.to_owned(),
                        ctype: ctype.to_owned(),
                    });
                }
            }
            SegmentNode::FormatEnd { id } => {
                let next = FormatRange::inheriting(&range);
                ranges.push(std::mem::replace(&mut range, next));

                if let Some(&flag) = markers.get(id) {
                    range.set(flag, false);
                } else {
                    diagnostics.warn(&Warning::UnmatchedCloseMarker { id: id.to_owned() });
                }
            }
            SegmentNode::OpenTag(text) => {
                range.content.push(ContentRun::OpenTag(parse_inline_tag(text)?));
            }
            SegmentNode::CloseTag(text) => {
                range.content.push(ContentRun::CloseTag(parse_inline_tag(text)?));
            }
            SegmentNode::EmptyTag(text) => {
                range.content.push(ContentRun::EmptyTag(parse_inline_tag(text)?));
            }
            SegmentNode::Structural => range.content.push(ContentRun::StructuralTag),
            SegmentNode::Other => {}
        }
    }

    // We might have a trailing range
    if !range.content.is_empty() {
        ranges.push(range);
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::rich::diagnostics::CollectingDiagnostics;
    use crate::rich::types::{InlineTag, plain_text};
    use pretty_assertions::assert_eq;

    fn fmt_start(ctype: &str, id: &str) -> MarkupNode {
        MarkupElement::new("bpt")
            .with_attr("id", id)
            .with_attr("ctype", ctype)
            .with_text(FORMAT_PLACEHOLDER)
            .into()
    }

    fn fmt_end(id: &str) -> MarkupNode {
        MarkupElement::new("ept")
            .with_attr("id", id)
            .with_text(FORMAT_PLACEHOLDER)
            .into()
    }

    fn tag(name: &str, id: &str, text: &str) -> MarkupNode {
        MarkupElement::new(name)
            .with_attr("id", id)
            .with_text(text)
            .into()
    }

    #[test]
    fn test_bold_scenario() {
        let nodes = vec![fmt_start("bold", "1"), MarkupNode::text("hi"), fmt_end("1")];
        let ranges = decode_runs(&nodes).unwrap();

        assert_eq!(
            ranges,
            vec![
                FormatRange::new(),
                FormatRange::new().with_flag(FormatFlag::Bold).with_text("hi"),
            ]
        );
    }

    #[test]
    fn test_adjacent_markers_emit_empty_range() {
        let nodes = vec![
            MarkupNode::text("a"),
            fmt_start("bold", "1"),
            fmt_start("italic", "2"),
            MarkupNode::text("b"),
        ];
        let ranges = decode_runs(&nodes).unwrap();

        assert_eq!(
            ranges,
            vec![
                FormatRange::new().with_text("a"),
                FormatRange::new().with_flag(FormatFlag::Bold),
                FormatRange::new()
                    .with_flag(FormatFlag::Bold)
                    .with_flag(FormatFlag::Italic)
                    .with_text("b"),
            ]
        );
    }

    #[test]
    fn test_overlapping_flags_close_by_id() {
        let nodes = vec![
            fmt_start("underlined", "1"),
            MarkupNode::text("u"),
            fmt_start("x-sup", "2"),
            MarkupNode::text("us"),
            fmt_end("1"),
            MarkupNode::text("s"),
            fmt_end("2"),
            MarkupNode::text("plain"),
        ];
        let ranges = decode_runs(&nodes).unwrap();

        let summary: Vec<_> = ranges
            .iter()
            .map(|r| (r.underlined, r.superscript, r.plain_text()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (false, false, String::new()),
                (true, false, "u".to_owned()),
                (true, true, "us".to_owned()),
                (false, true, "s".to_owned()),
                (false, false, "plain".to_owned()),
            ]
        );
    }

    #[test]
    fn test_inline_tags_stay_in_current_range() {
        let nodes = vec![
            MarkupNode::text("Click "),
            tag("bpt", "1", r#"<a href="x">"#),
            MarkupNode::text("here"),
            tag("ept", "1", "</a>"),
            tag("ph", "2", "<br/>"),
            MarkupElement::new("x").with_attr("id", "3").into(),
        ];
        let ranges = decode_runs(&nodes).unwrap();

        assert_eq!(ranges.len(), 1);
        assert_eq!(
            ranges[0].content,
            vec![
                ContentRun::text("Click "),
                ContentRun::OpenTag(InlineTag::new("a").with_attr("href", "x")),
                ContentRun::text("here"),
                ContentRun::CloseTag(InlineTag::new("a")),
                ContentRun::EmptyTag(InlineTag::new("br")),
                ContentRun::StructuralTag,
            ]
        );
    }

    #[test]
    fn test_unknown_elements_are_ignored() {
        let nodes = vec![
            MarkupNode::text("a"),
            MarkupElement::new("mrk").with_text("hidden").into(),
            MarkupElement::new("it").with_attr("pos", "open").into(),
            MarkupNode::text("b"),
        ];
        let ranges = decode_runs(&nodes).unwrap();

        assert_eq!(ranges, vec![FormatRange::new().with_text("a").with_text("b")]);
    }

    #[test]
    fn test_text_round_trip() {
        let nodes = vec![
            MarkupNode::text("one "),
            fmt_start("italic", "1"),
            MarkupNode::text("two "),
            tag("ph", "2", "<img/>"),
            fmt_end("1"),
            MarkupNode::text("three"),
        ];
        let expected: String = nodes.iter().filter_map(MarkupNode::as_text).collect();
        let ranges = decode_runs(&nodes).unwrap();

        assert_eq!(plain_text(&ranges), expected);
    }

    #[test]
    fn test_empty_segment_decodes_to_nothing() {
        assert!(decode_runs(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_unrecognized_ctype_warns_and_sets_nothing() {
        let nodes = vec![fmt_start("x-strike", "7"), MarkupNode::text("t")];
        let diagnostics = CollectingDiagnostics::new();
        let ranges = decode_runs_with(&nodes, &diagnostics).unwrap();

        assert_eq!(ranges, vec![FormatRange::new(), FormatRange::new().with_text("t")]);
        assert_eq!(
            diagnostics.take(),
            vec![Warning::UnrecognizedFormatKind {
                id: "7".into(),
                ctype: "x-strike".into()
            }]
        );
    }

    #[test]
    fn test_unmatched_close_marker_is_a_noop() {
        let nodes = vec![
            fmt_start("bold", "1"),
            MarkupNode::text("b"),
            fmt_end("9"),
            MarkupNode::text("still bold"),
        ];
        let diagnostics = CollectingDiagnostics::new();
        let ranges = decode_runs_with(&nodes, &diagnostics).unwrap();

        assert_eq!(ranges.len(), 3);
        assert!(ranges[2].bold);
        assert_eq!(
            diagnostics.take(),
            vec![Warning::UnmatchedCloseMarker { id: "9".into() }]
        );
    }

    #[test]
    fn test_malformed_inline_tag_is_fatal() {
        let nodes = vec![MarkupNode::text("a"), tag("ph", "1", "not a tag")];
        let err = decode_runs(&nodes).unwrap_err();
        assert!(matches!(err, Error::MalformedTagText { .. }));
    }

    #[test]
    fn test_empty_ctype_is_an_inline_tag() {
        let nodes = vec![
            MarkupNode::text("a"),
            MarkupElement::new("bpt")
                .with_attr("id", "1")
                .with_attr("ctype", "")
                .with_text("<b>")
                .into(),
            MarkupNode::text("b"),
        ];
        let diagnostics = CollectingDiagnostics::new();
        let ranges = decode_runs_with(&nodes, &diagnostics).unwrap();

        assert_eq!(
            ranges,
            vec![FormatRange::new()
                .with_text("a")
                .with_run(ContentRun::OpenTag(InlineTag::new("b")))
                .with_text("b")]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_classify_ept_without_text_is_close_tag() {
        let node: MarkupNode = MarkupElement::new("ept").with_attr("id", "1").into();
        assert_eq!(SegmentNode::classify(&node), SegmentNode::CloseTag(""));
    }
}
