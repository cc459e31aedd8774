//! Run summary rendering.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Country: {} ({})", result.country, result.year);
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.findings_path {
        println!("Findings report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Rows"),
        header_cell("Files"),
        header_cell("First file"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for output in &result.outputs {
        let first_file = output
            .files
            .first()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&output.format)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(output.rows),
            file_count_cell(output.files.len(), output.rows),
            Cell::new(first_file),
        ]);
    }
    println!("{table}");

    print_findings(result);

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_findings(result: &RunResult) {
    let Some(findings) = &result.findings else {
        return;
    };
    if !findings.has_findings() {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Finding"),
        header_cell("Count"),
        header_cell("Examples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    if !findings.rates.missing_hs.is_empty() {
        table.add_row(vec![
            Cell::new("HS codes without rate text").fg(Color::Yellow),
            Cell::new(findings.rates.missing_hs.len()),
            Cell::new(examples(&findings.rates.missing_hs)),
        ]);
    }
    if !findings.config.unmapped_country_groups.is_empty() {
        table.add_row(vec![
            Cell::new("Country groups not in config").fg(Color::Yellow),
            Cell::new(findings.config.unmapped_country_groups.len()),
            Cell::new(examples(&findings.config.unmapped_country_groups)),
        ]);
    }
    if !findings.config.unmapped_uoms.is_empty() {
        table.add_row(vec![
            Cell::new("Units not in config").fg(Color::Yellow),
            Cell::new(findings.config.unmapped_uoms.len()),
            Cell::new(examples(&findings.config.unmapped_uoms)),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");

    if findings.config.has_findings() {
        println!("Config fragment for the unmapped items:");
        println!("{}", findings.config.config_fragment());
    }
}

fn examples(values: &[String]) -> String {
    let shown: Vec<&str> = values.iter().take(5).map(String::as_str).collect();
    if values.len() > shown.len() {
        format!("{}, ...", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_count_cell(files: usize, rows: usize) -> Cell {
    if files == 0 && rows > 0 {
        // Rows generated but nothing written (dry run or empty-table skip).
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(files)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
