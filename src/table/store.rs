use super::{SicEntry, SicTable};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Write the table as a pretty-printed JSON array
pub fn write_table(path: &Path, table: &SicTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create table file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table.entries())
        .context("Failed to serialize SIC table")?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!(path = %path.display(), entries = table.len(), "wrote SIC table");
    Ok(())
}

/// Read a table previously written by [`write_table`]
pub fn read_table(path: &Path) -> Result<SicTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open table file {}", path.display()))?;
    let entries: Vec<SicEntry> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse table file {}", path.display()))?;

    debug!(path = %path.display(), entries = entries.len(), "loaded SIC table");
    Ok(SicTable::new(entries))
}
