//! Newline-delimited JSON persistence for conversation records
//!
//! One self-contained record per line, UTF-8. serde_json emits non-ASCII
//! characters literally, which downstream tokenizers expect.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::record::ConversationRecord;

/// Write `records` to `destination`, one JSON object per line.
/// Creates or overwrites the file. A failed write is fatal for the run;
/// callers retry from scratch rather than resuming a partial file.
pub fn persist(records: &[ConversationRecord], destination: &Path) -> Result<()> {
    let file = File::create(destination)
        .with_context(|| format!("failed to create output file: {:?}", destination))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        let line = serde_json::to_string(record)?;
        writeln!(writer, "{}", line)
            .with_context(|| format!("failed to write record to {:?}", destination))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush output file: {:?}", destination))?;

    info!(count = records.len(), path = ?destination, "wrote dataset file");
    Ok(())
}

/// Read a one-record-per-line JSON file back into memory.
/// Blank lines are skipped; a line that fails to parse is an error, since a
/// file this crate wrote should round-trip exactly.
pub fn load_jsonl(path: &Path) -> Result<Vec<ConversationRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open dataset file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {} of {:?}", idx + 1, path))?;
        if line.trim().is_empty() {
            continue;
        }
        let record: ConversationRecord = serde_json::from_str(&line)
            .with_context(|| format!("invalid record on line {} of {:?}", idx + 1, path))?;
        records.push(record);
    }

    Ok(records)
}
