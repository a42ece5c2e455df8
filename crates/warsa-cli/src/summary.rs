use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use warsa_cli::types::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output_dir.display());

    let stats = &summary.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows"), Cell::new(stats.rows)]);
    table.add_row(vec![
        Cell::new("Data statements"),
        Cell::new(stats.data_statements),
    ]);
    table.add_row(vec![
        Cell::new("Schema statements"),
        Cell::new(stats.schema_statements),
    ]);
    table.add_row(vec![
        Cell::new("Annotated values"),
        count_cell(stats.annotations, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Reified statements"),
        count_cell(stats.reified, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Data file")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        path_cell(&summary.data_file),
    ]);
    table.add_row(vec![
        Cell::new("Schema file")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        path_cell(&summary.schema_file),
    ]);
    println!("{table}");
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
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn path_cell(path: &Path) -> Cell {
    Cell::new(path.display()).fg(Color::Green)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
