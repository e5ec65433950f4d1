//! CLI command for listing translation units

use std::path::Path;

use console::style;

use crate::document::{TuStatus, read_mqxliff};

/// Longest plain text shown per column before it is cut off
const MAX_COLUMN_CHARS: usize = 48;

fn truncate(text: &str) -> String {
    let single_line = text.replace(['\n', '\r', '\t'], " ");
    if single_line.chars().count() <= MAX_COLUMN_CHARS {
        return single_line;
    }
    let cut: String = single_line.chars().take(MAX_COLUMN_CHARS - 1).collect();
    format!("{cut}…")
}

pub fn execute(file: &Path, limit: Option<usize>, status: Option<&str>) -> anyhow::Result<()> {
    let doc = read_mqxliff(file)?;
    let wanted: Option<TuStatus> = status.map(str::parse).transpose()?;

    let mut shown = 0;
    for (index, tu) in doc.units().enumerate() {
        if limit.is_some_and(|limit| shown >= limit) {
            break;
        }
        // An unknown status is shown as such and never matches a filter
        if wanted.is_some() && tu.status().ok().flatten() != wanted {
            continue;
        }

        let source = tu.src_plain().unwrap_or_default();
        let target = tu.trg_plain().unwrap_or_default();

        println!(
            "{:>5} {:<22} {:>5.1}%  {}  {} {}",
            style(index).dim(),
            tu.status_label(),
            tu.match_rate(),
            truncate(&source),
            style("→").dim(),
            truncate(&target)
        );
        shown += 1;
    }

    if shown == 0 {
        println!("No translation units found");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Hello\nworld"), "Hello world");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "x".repeat(100);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_COLUMN_CHARS);
        assert!(cut.ends_with('…'));
    }
}
