//! Error types for `MqXliff`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `MqXliff` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path given to a document operation does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    // ==================== Inline Markup Errors ====================
    /// The text of an embedded inline tag could not be parsed as one element.
    #[error("malformed inline tag text {text:?}: {reason}")]
    MalformedTagText {
        /// The raw tag text as found in the segment.
        text: String,
        /// What the parser tripped over.
        reason: String,
    },

    // ==================== Document Structure Errors ====================
    /// A required element is missing from the document tree.
    #[error("missing <{name}> element")]
    MissingElement {
        /// Name of the element that was expected.
        name: String,
    },

    /// The markup has no single root element.
    #[error("invalid markup structure: {0}")]
    InvalidStructure(String),

    /// Translation unit index is past the end of the body.
    #[error("translation unit {index} out of range (document has {count})")]
    UnitOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of translation units in the document.
        count: usize,
    },

    /// The translation unit has no `<source>` or `<target>` child.
    #[error("translation unit has no <{segment}> segment")]
    SegmentNotFound {
        /// `source` or `target`.
        segment: &'static str,
    },

    /// A status string does not name a memoQ row status.
    #[error("unknown translation unit status: {0}")]
    InvalidStatus(String),

    // ==================== Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttrError(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML configuration error.
    #[error("config error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttrError(err.to_string())
    }
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `MqXliff` operations.
pub type Result<T> = std::result::Result<T, Error>;
