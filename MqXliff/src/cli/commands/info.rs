//! CLI command for document summaries

use std::path::Path;

use crate::cli::progress::print_header;
use crate::document::read_mqxliff;

pub fn execute(file: &Path) -> anyhow::Result<()> {
    let doc = read_mqxliff(file)?;
    let info = doc.info();

    print_header(&file.display().to_string());
    println!("Document:   {}", info.doc_name.as_deref().unwrap_or("-"));
    println!("Source:     {}", info.src_lang.as_deref().unwrap_or("-"));
    println!("Target:     {}", info.trg_lang.as_deref().unwrap_or("-"));
    println!("Units:      {}", info.tu_count);

    Ok(())
}
