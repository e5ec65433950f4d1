//! CLI command for dumping a document as JSON

use std::fs;
use std::path::Path;

use crate::config::CodecConfig;
use crate::document::read_mqxliff;

pub fn execute(file: &Path, output: Option<&Path>, config: &CodecConfig) -> anyhow::Result<()> {
    let doc = read_mqxliff(file)?;
    let json = config.to_json(doc.markup())?;

    match output {
        Some(dest) => {
            fs::write(dest, json)?;
            println!("Wrote {}", dest.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
