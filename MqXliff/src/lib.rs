//! # MqXliff
//!
//! A pure-Rust library for memoQ bilingual XLIFF (`.mqxliff`) files.
//!
//! ## Overview
//!
//! - **Rich text codec** - segment markup (`bpt`/`ept`/`ph`/`x`) to and from
//!   formatting ranges with bold, italic, underline, subscript and superscript
//! - **Documents** - load, inspect, edit and save translation units
//! - **Markup** - order-preserving XML node tree with a JSON form
//!
//! ## Quick Start
//!
//! ### Reading a row
//!
//! ```no_run
//! use mqxliff::document::read_mqxliff;
//!
//! let doc = read_mqxliff("manual.docx.mqxliff")?;
//! let info = doc.info();
//! println!("{} units, {:?} -> {:?}", info.tu_count, info.src_lang, info.trg_lang);
//!
//! let tu = doc.tu(0)?;
//! for range in tu.src_rich()? {
//!     println!("bold={} {}", range.bold, range.plain_text());
//! }
//! # Ok::<(), mqxliff::Error>(())
//! ```
//!
//! ### Writing formatted text
//!
//! ```
//! use mqxliff::rich::{FormatFlag, FormatRange, encode_runs};
//!
//! let nodes = encode_runs(&[
//!     FormatRange::new().with_text("Press "),
//!     FormatRange::new().with_flag(FormatFlag::Bold).with_text("Enter"),
//! ]);
//! assert_eq!(nodes.len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `mqxliff` command-line binary

pub mod config;
pub mod document;
pub mod error;
pub mod markup;
pub mod rich;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{CodecConfig, load_config};
    pub use crate::document::{
        BatchSummary, DocInfo, DocSummary, Segment, TransUnit, TransUnitMut, TuStatus,
        XliffDocument, find_mqxliff_files, read_mqxliff, summarize_files, write_mqxliff,
    };
    pub use crate::error::{Error, Result};
    pub use crate::markup::{MarkupDocument, MarkupElement, MarkupNode};
    pub use crate::rich::{
        ContentRun, Diagnostics, EncodeOptions, FormatFlag, FormatRange, InlineTag, ReopenPolicy,
        decode_runs, encode_runs,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
