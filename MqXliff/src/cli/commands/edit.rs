//! CLI commands for plain edits: target text and status

use std::path::Path;

use crate::document::{TuStatus, read_mqxliff, write_mqxliff};

pub fn set_target(
    file: &Path,
    index: usize,
    text: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut doc = read_mqxliff(file)?;
    doc.tu_mut(index)?.set_trg_plain(text)?;

    let dest = output.unwrap_or(file);
    write_mqxliff(&doc, dest)?;
    println!("Updated target of unit {index} -> {}", dest.display());
    Ok(())
}

pub fn set_status(
    file: &Path,
    index: usize,
    status: &str,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let status: TuStatus = status.parse()?;
    let mut doc = read_mqxliff(file)?;
    doc.tu_mut(index)?.set_status(status);

    let dest = output.unwrap_or(file);
    write_mqxliff(&doc, dest)?;
    println!("Unit {index} is now {status} -> {}", dest.display());
    Ok(())
}
