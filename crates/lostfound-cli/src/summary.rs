use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lostfound_cli::pipeline::StandardizeOutcome;
use lostfound_model::{LocationInfo, ResolvedUnit};

/// Printed to stderr so stdout stays valid JSON.
pub fn print_standardize_summary(outcome: &StandardizeOutcome, clock: &str) {
    eprintln!(
        "Rows: {} read, {} skipped, {} records",
        outcome.rows,
        outcome.skipped,
        outcome.records.len()
    );
    match &outcome.teryt_fingerprint {
        Some(fingerprint) => eprintln!("TERYT: {}", short_fingerprint(fingerprint)),
        None => eprintln!("TERYT: disabled"),
    }
    eprintln!("Today: {clock}");

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Rewrites")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, count) in &outcome.report.field_changes {
        table.add_row(vec![Cell::new(field), count_cell(*count, Color::Yellow)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(outcome.report.total_changes(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        dim_cell("records changed"),
        Cell::new(format!(
            "{} / {}",
            outcome.report.changed_records, outcome.report.records
        )),
    ]);
    eprintln!("{table}");
    print_warning_table(outcome);
}

fn print_warning_table(outcome: &StandardizeOutcome) {
    if outcome.warnings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for warning in &outcome.warnings {
        table.add_row(vec![
            Cell::new(warning.row),
            match &warning.field {
                Some(field) => Cell::new(field),
                None => dim_cell("-"),
            },
            Cell::new(&warning.message).fg(Color::Yellow),
        ]);
    }
    eprintln!();
    eprintln!("Import warnings:");
    eprintln!("{table}");
}

pub fn location_table(info: &LocationInfo) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Input"),
        header_cell("Resolved"),
        header_cell("Code"),
        header_cell("Details"),
        header_cell("Valid"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Center);
    for (level, unit) in [
        ("voivodeship", &info.voivodeship),
        ("county", &info.county),
        ("municipality", &info.municipality),
    ] {
        table.add_row(vec![
            Cell::new(level).fg(Color::Blue),
            Cell::new(&unit.input),
            optional_cell(unit.name.as_deref()),
            optional_cell(unit.code.as_deref()),
            optional_cell(details(unit).as_deref()),
            valid_cell(unit.valid),
        ]);
    }
    table
}

fn details(unit: &ResolvedUnit) -> Option<String> {
    let parts: Vec<String> = [
        unit.full_name.clone(),
        unit.kind.clone(),
        unit.capital.as_ref().map(|capital| format!("capital {capital}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
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
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn valid_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}
