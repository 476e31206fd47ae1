use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::ecs::resources::DecayLog;

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush recorded decay transitions to `decay_changes.jsonl` in the given
/// output directory, creating the directory if it does not exist.
pub fn flush_decay_log(log: &DecayLog, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    write_jsonl(&output_dir.join("decay_changes.jsonl"), log.records.iter())
}
