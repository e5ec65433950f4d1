//! CLI command for summarizing every .mqxliff file under a directory

use std::path::Path;

use console::style;

use crate::cli::progress::{DOCUMENT, LOOKING_GLASS, print_step, simple_bar};
use crate::document::{find_mqxliff_files, summarize_files};

pub fn execute(dir: &Path, show_progress: bool) -> anyhow::Result<()> {
    print_step(1, 2, &LOOKING_GLASS, &format!("Searching {}...", dir.display()));
    let files = find_mqxliff_files(dir)?;
    if files.is_empty() {
        println!("No .mqxliff files found");
        return Ok(());
    }

    print_step(2, 2, &DOCUMENT, &format!("Reading {} files...", files.len()));
    let pb = show_progress.then(|| simple_bar(files.len() as u64, "Scanning"));
    let batch = summarize_files(&files, |_, _, _| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    for (path, summary) in &batch.documents {
        let info = &summary.info;
        println!(
            "{:>6}  {} -> {}  {}",
            info.tu_count,
            info.src_lang.as_deref().unwrap_or("?"),
            info.trg_lang.as_deref().unwrap_or("?"),
            path.strip_prefix(dir).unwrap_or(path).display()
        );
    }

    println!();
    println!(
        "{} units in {} files",
        style(batch.unit_count()).bold(),
        batch.documents.len()
    );
    for (status, count) in batch.status_counts() {
        println!("  {status:<24}{count:>8}");
    }

    if !batch.failed.is_empty() {
        println!();
        for (path, e) in &batch.failed {
            eprintln!("{} {}: {e}", style("failed:").red().bold(), path.display());
        }
    }

    Ok(())
}
