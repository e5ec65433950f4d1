//! Formatting ranges to segment markup
//!
//! All running state lives in an [`EncoderState`] owned by one call, so
//! separate segments (and threads) never share marker ids.

use serde::{Deserialize, Serialize};

use super::tag::TagKind;
use super::types::{ContentRun, FORMAT_PLACEHOLDER, FormatFlag, FormatRange, InlineTag};
use crate::markup::{MarkupElement, MarkupNode};

/// How the encoder treats a flag that is already open when the next range also has it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReopenPolicy {
    /// Bold is opened once; italic, underline, subscript and superscript get a
    /// fresh `bpt` for every range that has them. Matches documents written by
    /// earlier versions byte for byte.
    #[default]
    Compatible,
    /// No flag is reopened while it is running.
    Guarded,
}

/// Encoder settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub reopen_policy: ReopenPolicy,
}

/// Encode formatting ranges into segment child nodes with default options
#[must_use]
pub fn encode_runs(ranges: &[FormatRange]) -> Vec<MarkupNode> {
    encode_runs_with(ranges, EncodeOptions::default())
}

/// Encode formatting ranges into segment child nodes
///
/// The result is meant to replace the children of a `source` or `target`
/// element; the caller installs it.
#[must_use]
pub fn encode_runs_with(ranges: &[FormatRange], options: EncodeOptions) -> Vec<MarkupNode> {
    let mut state = EncoderState::new(options.reopen_policy);
    for range in ranges {
        state.open_flags(range);
        state.close_flags(range);
        for run in &range.content {
            state.push_run(run);
        }
    }
    state.finish()
}

struct EncoderState {
    policy: ReopenPolicy,
    /// Marker id of each running flag, indexed by [`FormatFlag::index`].
    running: [Option<u32>; 5],
    /// Open inline tags awaiting their close, innermost last.
    open_tags: Vec<(String, u32)>,
    next_id: u32,
    nodes: Vec<MarkupNode>,
}

impl EncoderState {
    fn new(policy: ReopenPolicy) -> Self {
        EncoderState {
            policy,
            running: [None; 5],
            open_tags: Vec::new(),
            next_id: 1,
            nodes: Vec::new(),
        }
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn guards(&self, flag: FormatFlag) -> bool {
        flag == FormatFlag::Bold || self.policy == ReopenPolicy::Guarded
    }

    fn open_flags(&mut self, range: &FormatRange) {
        for flag in FormatFlag::ENCODE_ORDER {
            if !range.get(flag) {
                continue;
            }
            if self.running[flag.index()].is_some() && self.guards(flag) {
                continue;
            }
            let id = self.take_id();
            self.running[flag.index()] = Some(id);
            self.nodes.push(
                MarkupElement::new("bpt")
                    .with_attr("ctype", flag.ctype())
                    .with_attr("id", id.to_string())
                    .with_text(FORMAT_PLACEHOLDER)
                    .into(),
            );
        }
    }

    fn close_flags(&mut self, range: &FormatRange) {
        for flag in FormatFlag::ENCODE_ORDER {
            if range.get(flag) {
                continue;
            }
            if let Some(id) = self.running[flag.index()].take() {
                self.push_format_end(id);
            }
        }
    }

    fn push_format_end(&mut self, id: u32) {
        self.nodes.push(
            MarkupElement::new("ept")
                .with_attr("id", id.to_string())
                .with_text(FORMAT_PLACEHOLDER)
                .into(),
        );
    }

    fn push_run(&mut self, run: &ContentRun) {
        let node = match run {
            ContentRun::Text { text } => MarkupNode::text(text.as_str()),
            ContentRun::StructuralTag => {
                let id = self.take_id();
                MarkupElement::new("x").with_attr("id", id.to_string()).into()
            }
            ContentRun::OpenTag(tag) => {
                let id = self.take_id();
                self.open_tags.push((tag.name.clone(), id));
                inline_tag_element("bpt", id, tag, TagKind::Open)
            }
            ContentRun::CloseTag(tag) => {
                let id = match self.open_tags.iter().rposition(|(name, _)| *name == tag.name) {
                    Some(pos) => self.open_tags.remove(pos).1,
                    None => self.take_id(),
                };
                inline_tag_element("ept", id, tag, TagKind::Close)
            }
            ContentRun::EmptyTag(tag) => {
                let id = self.take_id();
                inline_tag_element("ph", id, tag, TagKind::Empty)
            }
        };
        self.nodes.push(node);
    }

    /// Closes whatever formatting is still running after the last range.
    fn finish(mut self) -> Vec<MarkupNode> {
        for flag in FormatFlag::ENCODE_ORDER {
            if let Some(id) = self.running[flag.index()].take() {
                self.push_format_end(id);
            }
        }
        self.nodes
    }
}

fn inline_tag_element(name: &str, id: u32, tag: &InlineTag, kind: TagKind) -> MarkupNode {
    MarkupElement::new(name)
        .with_attr("id", id.to_string())
        .with_text(tag.to_tag_text(kind))
        .into()
}
