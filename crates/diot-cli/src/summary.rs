use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use diot_core::ConversionReport;
use diot_model::FilingProfile;

pub fn print_report(report: &ConversionReport) {
    if report.dry_run {
        println!("Dry run: no files were written.");
    }
    println!("{}", report_table(report));
}

pub fn report_table(report: &ConversionReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Input"), Cell::new(report.input.display())]);
    table.add_row(vec![
        Cell::new("Input columns"),
        Cell::new(report.input_columns),
    ]);
    table.add_row(vec![
        Cell::new("Rows converted").add_attribute(Attribute::Bold),
        Cell::new(report.rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("TXT report"),
        output_cell(&report.txt_output.display().to_string(), report.dry_run),
    ]);
    table.add_row(vec![
        Cell::new("CSV report"),
        output_cell(&report.csv_output.display().to_string(), report.dry_run),
    ]);
    table.add_row(vec![
        Cell::new("TXT SHA-256"),
        digest_cell(report.txt_sha256.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("CSV SHA-256"),
        digest_cell(report.csv_sha256.as_deref()),
    ]);
    table
}

/// Report columns in output order with the way each value is produced.
pub fn schema_table(profile: &FilingProfile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Input names"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    let renames = profile.renames();
    for (idx, column) in profile.schema().iter().enumerate() {
        let value = match profile.rule_for(column) {
            Some(rule) => Cell::new(rule).fg(Color::Green),
            None => dim_cell("copied, blank when absent"),
        };
        let mut names = renames.sources_for(column);
        if renames.resolve(column) == column {
            names.push(column);
        }
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(column),
            value,
            Cell::new(names.join(", ")),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn output_cell(path: &str, dry_run: bool) -> Cell {
    if dry_run {
        dim_cell(format!("{path} (not written)"))
    } else {
        Cell::new(path)
    }
}

fn digest_cell(digest: Option<&str>) -> Cell {
    match digest {
        Some(digest) => Cell::new(digest),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
