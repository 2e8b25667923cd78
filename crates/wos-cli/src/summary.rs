use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wos_map::{Header, MappingReport, MappingRow, ResolutionRule};

pub fn print_preview(rows: &[MappingRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Field name"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, row) in rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(row.header.as_str()),
            Cell::new(&row.field_name),
            rule_cell(row.rule),
        ]);
    }
    println!("{table}");
    print_rule_counts(&MappingReport::from_rows(rows));
}

pub fn print_report(report: &MappingReport) {
    print_rule_counts(report);
    if !report.has_collisions() {
        println!("No field name collisions.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field name"),
        header_cell("Headers"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for collision in &report.collisions {
        let headers = collision
            .headers
            .iter()
            .map(Header::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(&collision.field_name).fg(Color::Red),
            Cell::new(headers),
            Cell::new(collision.headers.len())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!();
    println!("Collisions:");
    println!("{table}");
}

fn print_rule_counts(report: &MappingReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Columns")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for rule in ResolutionRule::ALL {
        table.add_row(vec![rule_cell(rule), Cell::new(report.count(rule))]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rule_cell(rule: ResolutionRule) -> Cell {
    let cell = Cell::new(rule.label());
    match rule {
        ResolutionRule::Fallback => cell.fg(Color::Yellow),
        _ => cell,
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
