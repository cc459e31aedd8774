//! Single-workbook XLSX export for the export-direction format.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::table::UploadRecord;

/// Write a table as one XLSX worksheet: header row, then data rows. Never
/// split, whatever the row count.
pub fn write_xlsx<R: UploadRecord>(records: &[R], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in R::headers().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .context("write header cell")?;
    }
    for (row, record) in records.iter().enumerate() {
        for (col, value) in record.to_row().iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, value.as_str())
                .context("write data cell")?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("save {}", path.display()))?;
    info!(file = %path.display(), row_count = records.len(), "exported workbook");
    Ok(())
}
