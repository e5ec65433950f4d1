//! Reading and writing `.mqxliff` files

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::XliffDocument;
use crate::error::{Error, Result};

/// File extension memoQ uses for bilingual XLIFF exports.
pub const MQXLIFF_EXTENSION: &str = "mqxliff";

/// Read a memoQ XLIFF file from disk
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not a valid document.
pub fn read_mqxliff<P: AsRef<Path>>(path: P) -> Result<XliffDocument> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let doc = XliffDocument::parse(&content)?;
    tracing::info!(
        "Loaded {} ({} translation units)",
        path.display(),
        doc.unit_count()
    );
    Ok(doc)
}

/// Write a memoQ XLIFF document to disk
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_mqxliff<P: AsRef<Path>>(doc: &XliffDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let xml = doc.write_xliff()?;
    fs::write(path, xml)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Recursively collect `.mqxliff` files under `dir`, sorted by path
///
/// # Errors
/// Returns an error if a directory cannot be traversed.
pub fn find_mqxliff_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_mqxliff = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(MQXLIFF_EXTENSION));
        if is_mqxliff {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
