use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::Local;

/// Writes `value` as pretty-printed JSON, newline-terminated.
pub(crate) fn save_json_file<T>(value: &T, path: &Path) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("failed to write JSON to {}", path.display()))?;
    writeln!(writer).with_context(|| format!("failed to write to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

/// Timestamped summary filename inside `dir`.
pub(crate) fn summary_path(dir: &Path) -> PathBuf {
    dir.join(format!("chase-{}.json", Local::now().format("%Y%m%d-%H%M%S")))
}
