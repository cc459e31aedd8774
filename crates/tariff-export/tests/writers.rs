//! Integration tests for the CSV split writer and the XLSX writer.

use std::fs;

use tariff_export::{UploadRecord, find_next_version, write_csv_split, write_xlsx};

#[derive(Debug, Clone)]
struct Row {
    code: String,
    value: String,
}

impl UploadRecord for Row {
    fn headers() -> &'static [&'static str] {
        &["Code", "Value"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![self.code.clone(), self.value.clone()]
    }
}

fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| Row {
            code: format!("2501{i:04}"),
            value: format!("v{i}"),
        })
        .collect()
}

#[test]
fn split_at_row_budget_boundary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let max_rows = 5;
    let written =
        write_csv_split(&rows(max_rows + 1), dir.path(), "NZ UPLOAD _ZD14", max_rows).expect("write");
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("NZ UPLOAD _ZD14 V1-1.csv"));
    assert!(written[1].ends_with("NZ UPLOAD _ZD14 V1-2.csv"));

    let first = fs::read(&written[0]).expect("read first");
    let second = fs::read(&written[1]).expect("read second");
    // UTF-8 BOM leads both files.
    assert_eq!(&first[..3], b"\xEF\xBB\xBF");
    assert_eq!(&second[..3], b"\xEF\xBB\xBF");

    let first_text = String::from_utf8(first).expect("utf-8");
    let second_text = String::from_utf8(second).expect("utf-8");
    let first_lines: Vec<&str> = first_text.trim_end().split("\r\n").collect();
    let second_lines: Vec<&str> = second_text.trim_end().split("\r\n").collect();
    // Header repeats in every chunk; budget rows in the first, one in the second.
    assert_eq!(first_lines.len(), max_rows + 1);
    assert_eq!(second_lines.len(), 2);
    assert_eq!(first_lines[0], "\u{feff}Code;Value");
    assert!(second_lines[0].ends_with("Code;Value"));
    assert_eq!(first_lines[1], "25010000;v0");
}

#[test]
fn exact_budget_stays_in_one_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = write_csv_split(&rows(5), dir.path(), "NZ UPLOAD _ZD14", 5).expect("write");
    assert_eq!(written.len(), 1);
}

#[test]
fn version_probing_increments() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert_eq!(find_next_version(dir.path(), "NZ UPLOAD _ZD14"), 1);
    write_csv_split(&rows(2), dir.path(), "NZ UPLOAD _ZD14", 100).expect("first write");
    assert_eq!(find_next_version(dir.path(), "NZ UPLOAD _ZD14"), 2);
    let written = write_csv_split(&rows(2), dir.path(), "NZ UPLOAD _ZD14", 100).expect("second");
    assert!(written[0].ends_with("NZ UPLOAD _ZD14 V2-1.csv"));
}

#[test]
fn empty_table_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = write_csv_split::<Row>(&[], dir.path(), "NZ UPLOAD _ZD14", 5).expect("write");
    assert!(written.is_empty());
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
}

#[test]
fn xlsx_writes_single_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("CA EXPORT HS.xlsx");
    write_xlsx(&rows(3), &path).expect("write workbook");
    let metadata = fs::metadata(&path).expect("stat workbook");
    assert!(metadata.len() > 0);
}
