use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CodecConfig;
use crate::document::Segment;

pub mod edit;
pub mod info;
pub mod rich;
pub mod rows;
pub mod scan;
pub mod to_json;

/// Which segment of a translation unit a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SegmentArg {
    #[value(alias = "src")]
    Source,
    #[value(alias = "trg")]
    Target,
}

impl From<SegmentArg> for Segment {
    fn from(arg: SegmentArg) -> Self {
        match arg {
            SegmentArg::Source => Segment::Source,
            SegmentArg::Target => Segment::Target,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show languages, document name and unit count
    Info {
        /// Source .mqxliff file
        file: PathBuf,
    },

    /// List translation units with status, match rate and plain text
    Rows {
        /// Source .mqxliff file
        file: PathBuf,

        /// Only list the first N units
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only list units with this status (e.g. `NotStarted`)
        #[arg(long)]
        status: Option<String>,
    },

    /// Print a segment as formatting ranges (JSON)
    Rich {
        /// Source .mqxliff file
        file: PathBuf,

        /// Zero-based unit index
        #[arg(short, long)]
        index: usize,

        /// Segment to decode
        #[arg(short, long, value_enum, default_value = "source")]
        segment: SegmentArg,
    },

    /// Overwrite a segment from formatting ranges (JSON file)
    SetRich {
        /// Source .mqxliff file
        file: PathBuf,

        /// Zero-based unit index
        #[arg(short, long)]
        index: usize,

        /// Segment to overwrite
        #[arg(short, long, value_enum, default_value = "target")]
        segment: SegmentArg,

        /// JSON file holding an array of formatting ranges
        #[arg(short, long)]
        ranges: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Overwrite a unit's target with plain text
    SetTarget {
        /// Source .mqxliff file
        file: PathBuf,

        /// Zero-based unit index
        #[arg(short, long)]
        index: usize,

        /// New target text
        text: String,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Change a unit's status
    SetStatus {
        /// Source .mqxliff file
        file: PathBuf,

        /// Zero-based unit index
        #[arg(short, long)]
        index: usize,

        /// New status (e.g. `ManuallyConfirmed`)
        status: String,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the document's node tree as JSON
    ToJson {
        /// Source .mqxliff file
        file: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Find .mqxliff files under a directory and summarize them
    Scan {
        /// Directory to search
        dir: PathBuf,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    pub fn execute(&self, config: &CodecConfig) -> anyhow::Result<()> {
        match self {
            Commands::Info { file } => info::execute(file),
            Commands::Rows {
                file,
                limit,
                status,
            } => rows::execute(file, *limit, status.as_deref()),
            Commands::Rich {
                file,
                index,
                segment,
            } => rich::show(file, *index, (*segment).into(), config),
            Commands::SetRich {
                file,
                index,
                segment,
                ranges,
                output,
            } => rich::set(
                file,
                *index,
                (*segment).into(),
                ranges,
                output.as_deref(),
                config,
            ),
            Commands::SetTarget {
                file,
                index,
                text,
                output,
            } => edit::set_target(file, *index, text, output.as_deref()),
            Commands::SetStatus {
                file,
                index,
                status,
                output,
            } => edit::set_status(file, *index, status, output.as_deref()),
            Commands::ToJson { file, output } => to_json::execute(file, output.as_deref(), config),
            Commands::Scan { dir, quiet } => scan::execute(dir, !*quiet),
        }
    }
}
