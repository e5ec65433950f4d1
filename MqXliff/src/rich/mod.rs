//! Rich text segments
//!
//! A segment's markup (`source`/`target` children) is a flat mix of text,
//! formatting markers and inline tags:
//!
//! ```text
//! Press <bpt id="1" ctype="bold">{}</bpt>Enter<ept id="1">{}</ept> <ph id="2">&lt;br/&gt;</ph>
//! ```
//!
//! [`decode_runs`] turns that into a list of [`FormatRange`]s, each with one
//! set of bold/italic/underline/subscript/superscript flags; [`encode_runs`]
//! goes the other way. Formatting markers are told apart from inline tags by
//! their content: `{}` for formatting, the escaped original tag otherwise.

mod decode;
mod diagnostics;
mod encode;
mod tag;
mod types;

pub use decode::{decode_runs, decode_runs_with};
pub use diagnostics::{CollectingDiagnostics, Diagnostics, TracingDiagnostics, Warning};
pub use encode::{EncodeOptions, ReopenPolicy, encode_runs, encode_runs_with};
pub use tag::{TagKind, parse_inline_tag};
pub use types::{
    AttrVal, ContentRun, FORMAT_PLACEHOLDER, FormatFlag, FormatRange, InlineTag, plain_text,
};
