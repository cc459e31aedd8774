//! Size-bounded CSV export.
//!
//! Physical contract of the downstream loader: semicolon delimiter, UTF-8
//! with byte-order mark, CRLF line endings, header row repeated in every
//! file. Tables larger than the configured row budget split into
//! `{prefix} V{version}-{chunk}.csv` chunks; the version is the first one
//! whose `-1` chunk does not exist yet in the output directory.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use tracing::{info, warn};

use crate::table::UploadRecord;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// First version number whose `-1` chunk is not yet present.
pub fn find_next_version(output_dir: &Path, prefix: &str) -> u32 {
    let mut version = 1;
    while output_dir
        .join(format!("{prefix} V{version}-1.csv"))
        .exists()
    {
        version += 1;
    }
    version
}

/// Write a table as one or more CSV chunks, returning the written paths.
/// An empty table writes nothing.
pub fn write_csv_split<R: UploadRecord>(
    records: &[R],
    output_dir: &Path,
    prefix: &str,
    max_rows: usize,
) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        warn!(prefix, "table is empty, skipping export");
        return Ok(Vec::new());
    }
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let version = find_next_version(output_dir, prefix);
    let mut written = Vec::new();
    for (index, chunk) in records.chunks(max_rows.max(1)).enumerate() {
        let path = output_dir.join(format!("{prefix} V{version}-{}.csv", index + 1));
        write_chunk(&path, chunk).with_context(|| format!("write {}", path.display()))?;
        info!(file = %path.display(), row_count = chunk.len(), "exported chunk");
        written.push(path);
    }
    Ok(written)
}

fn write_chunk<R: UploadRecord>(path: &Path, records: &[R]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::CRLF)
        .from_writer(file);
    writer.write_record(R::headers())?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}
