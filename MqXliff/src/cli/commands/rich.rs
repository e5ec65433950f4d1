//! CLI commands for reading and writing rich text segments

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use console::style;

use crate::config::CodecConfig;
use crate::document::{Segment, read_mqxliff, write_mqxliff};
use crate::rich::{CollectingDiagnostics, FormatRange};

/// Decode one segment and print its ranges as JSON
pub fn show(
    file: &Path,
    index: usize,
    segment: Segment,
    config: &CodecConfig,
) -> anyhow::Result<()> {
    let doc = read_mqxliff(file)?;
    let tu = doc.tu(index)?;

    let diagnostics = CollectingDiagnostics::new();
    let ranges = tu.rich_with(segment, &diagnostics)?;

    let warnings = diagnostics.take();
    for warning in &warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }
    if config.decoder.strict && !warnings.is_empty() {
        bail!(
            "{} {} of unit {index} has {} markup warning(s)",
            file.display(),
            segment.element_name(),
            warnings.len()
        );
    }

    println!("{}", config.to_json(&ranges)?);
    Ok(())
}

/// Replace one segment with ranges read from a JSON file
pub fn set(
    file: &Path,
    index: usize,
    segment: Segment,
    ranges_path: &Path,
    output: Option<&Path>,
    config: &CodecConfig,
) -> anyhow::Result<()> {
    let json = fs::read_to_string(ranges_path)
        .with_context(|| format!("reading {}", ranges_path.display()))?;
    let ranges: Vec<FormatRange> = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a list of formatting ranges", ranges_path.display()))?;

    let mut doc = read_mqxliff(file)?;
    doc.tu_mut(index)?
        .set_rich_with(segment, &ranges, config.encode_options())?;

    let dest = output.unwrap_or(file);
    write_mqxliff(&doc, dest)?;
    println!(
        "Updated {} of unit {index} ({} ranges) -> {}",
        segment.element_name(),
        ranges.len(),
        dest.display()
    );
    Ok(())
}
