//! Summaries across many `.mqxliff` files
//!
//! Files are read in parallel; one unreadable file does not stop the batch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::Serialize;

use super::{DocInfo, XliffDocument, read_mqxliff};

/// Status label used for units without `mq:status`.
pub const NO_STATUS: &str = "(none)";
/// Status label used for units whose `mq:status` is not a known value.
pub const INVALID_STATUS: &str = "(invalid)";

/// What one document contains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocSummary {
    pub info: DocInfo,
    /// Number of units per status label, sorted by label.
    pub status_counts: BTreeMap<String, usize>,
}

impl DocSummary {
    #[must_use]
    pub fn of(doc: &XliffDocument) -> Self {
        let mut status_counts = BTreeMap::new();
        for tu in doc.units() {
            *status_counts
                .entry(tu.status_label().to_string())
                .or_default() += 1;
        }
        DocSummary {
            info: doc.info(),
            status_counts,
        }
    }
}

/// Result of a batch summary
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Successfully read files, in input order.
    pub documents: Vec<(PathBuf, DocSummary)>,
    /// Files that failed, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    /// Total translation units across all readable files.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.documents.iter().map(|(_, s)| s.info.tu_count).sum()
    }

    /// Status counts merged across all readable files.
    #[must_use]
    pub fn status_counts(&self) -> BTreeMap<String, usize> {
        let mut merged = BTreeMap::new();
        for (_, summary) in &self.documents {
            for (label, count) in &summary.status_counts {
                *merged.entry(label.clone()).or_default() += count;
            }
        }
        merged
    }
}

/// Read and summarize `files` in parallel
///
/// `progress` is called once per file with `(current, total, path)`.
pub fn summarize_files<F>(files: &[PathBuf], progress: F) -> BatchSummary
where
    F: Fn(usize, usize, &Path) + Sync,
{
    let processed = AtomicUsize::new(0);
    let total = files.len();

    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = read_mqxliff(path).map(|doc| DocSummary::of(&doc));
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(current, total, path);
            (path.clone(), result)
        })
        .collect();

    let mut batch = BatchSummary::default();
    for (path, result) in results {
        match result {
            Ok(summary) => batch.documents.push((path, summary)),
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", path.display());
                batch.failed.push((path, e.to_string()));
            }
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DOC: &str = r#"<xliff><file source-language="en" target-language="fr"><body>
<trans-unit id="1" mq:status="NotStarted"><source>a</source></trans-unit>
<trans-unit id="2" mq:status="NotStarted"><source>b</source></trans-unit>
<trans-unit id="3"><source>c</source></trans-unit>
<trans-unit id="4" mq:status="Bogus"><source>d</source></trans-unit>
</body></file></xliff>"#;

    #[test]
    fn test_doc_summary_counts_statuses() {
        let doc = XliffDocument::parse(DOC).unwrap();
        let summary = DocSummary::of(&doc);

        assert_eq!(summary.info.tu_count, 4);
        assert_eq!(summary.status_counts.get("NotStarted"), Some(&2));
        assert_eq!(summary.status_counts.get(NO_STATUS), Some(&1));
        assert_eq!(summary.status_counts.get(INVALID_STATUS), Some(&1));
    }

    #[test]
    fn test_summarize_files_keeps_going_after_failure() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.mqxliff");
        let bad = temp.path().join("bad.mqxliff");
        fs::write(&good, DOC).unwrap();
        fs::write(&bad, "<xliff><file>").unwrap();

        let calls = AtomicUsize::new(0);
        let batch = summarize_files(&[good.clone(), bad.clone()], |_, total, _| {
            assert_eq!(total, 2);
            calls.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(batch.documents.len(), 1);
        assert_eq!(batch.documents[0].0, good);
        assert_eq!(batch.failed.len(), 1);
        assert_eq!(batch.failed[0].0, bad);
        assert_eq!(batch.unit_count(), 4);
        assert_eq!(batch.status_counts().get("NotStarted"), Some(&2));
    }
}
