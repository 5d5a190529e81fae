use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Color, Table};
use lostfound_model::{Suggestion, Unit, UnitKind};
use lostfound_teryt::{TerytDirectory, UnitQuery};
use tracing::info;

use lostfound_cli::pipeline::{
    StandardizeConfig, StandardizeOutcome, clock_label, standardize_file, write_records,
};

use crate::cli::{AutocompleteArgs, FindArgs, StandardizeArgs, TerytCommand};
use crate::summary::{
    apply_table_style, header_cell, location_table, optional_cell, print_standardize_summary,
};

pub fn run_standardize(args: &StandardizeArgs, teryt_dir: Option<&Path>) -> Result<StandardizeOutcome> {
    let config = StandardizeConfig {
        source: args.source.into(),
        teryt_dir: teryt_dir.map(Path::to_path_buf),
        no_teryt: args.no_teryt,
        today: args.today,
    };
    let outcome = standardize_file(&args.input, &config)?;
    write_records(&outcome.records, args.output.as_deref())?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), records = outcome.records.len(), "wrote records");
    }
    print_standardize_summary(&outcome, &clock_label(&config));
    Ok(outcome)
}

pub fn run_teryt(command: &TerytCommand, teryt_dir: Option<&Path>) -> Result<()> {
    let directory = TerytDirectory::load(teryt_dir).context("load TERYT reference data")?;
    let table = match command {
        TerytCommand::Voivodeships => voivodeship_table(&directory),
        TerytCommand::Counties { voivodeship } => county_table(&directory, voivodeship)?,
        TerytCommand::Municipalities {
            voivodeship,
            county,
        } => municipality_table(&directory, voivodeship, county.as_deref())?,
        TerytCommand::Find(args) => find_table(&directory, args)?,
        TerytCommand::Autocomplete(args) => autocomplete_table(&directory, args),
        TerytCommand::Info {
            municipality,
            county,
            voivodeship,
        } => location_table(&directory.location_info(municipality, county, voivodeship)),
    };
    println!("{table}");
    Ok(())
}

fn voivodeship_table(directory: &TerytDirectory) -> Table {
    let mut table = new_table(&["Code", "Name", "Full name", "Capital"]);
    for unit in directory.voivodeships() {
        table.add_row(vec![
            code_cell(&unit.code),
            Cell::new(&unit.name),
            Cell::new(&unit.full_name),
            Cell::new(&unit.capital),
        ]);
    }
    table
}

fn county_table(directory: &TerytDirectory, voivodeship: &str) -> Result<Table> {
    let Some(parent) = directory.find_voivodeship(voivodeship) else {
        bail!("unknown voivodeship: {voivodeship:?}");
    };
    let mut table = new_table(&["Code", "Name", "Full name", "Kind"]);
    for unit in directory.counties_in(&parent.name) {
        table.add_row(vec![
            code_cell(&unit.code),
            Cell::new(&unit.name),
            Cell::new(&unit.full_name),
            Cell::new(unit.kind),
        ]);
    }
    Ok(table)
}

fn municipality_table(
    directory: &TerytDirectory,
    voivodeship: &str,
    county: Option<&str>,
) -> Result<Table> {
    let Some(parent) = directory.find_voivodeship(voivodeship) else {
        bail!("unknown voivodeship: {voivodeship:?}");
    };
    let mut table = new_table(&["Code", "Name", "Full name", "Kind", "County"]);
    for unit in directory.municipalities_in(county, Some(&parent.name)) {
        table.add_row(vec![
            code_cell(&unit.code),
            Cell::new(&unit.name),
            Cell::new(&unit.full_name),
            Cell::new(unit.kind),
            Cell::new(&unit.county),
        ]);
    }
    Ok(table)
}

fn find_table(directory: &TerytDirectory, args: &FindArgs) -> Result<Table> {
    let kind = UnitKind::from(args.kind);
    let query = UnitQuery {
        kind,
        name: &args.name,
        county: args.county.as_deref(),
        voivodeship: args.voivodeship.as_deref(),
    };
    let Some(unit) = directory.find(&query) else {
        bail!("no {kind} matches {:?}", args.name);
    };
    let mut table = new_table(&["Kind", "Code", "Name", "Full name", "Parent"]);
    table.add_row(vec![
        Cell::new(unit.kind()).fg(Color::Blue),
        code_cell(unit.code()),
        Cell::new(unit.name()),
        Cell::new(unit.full_name()),
        optional_cell(parent_label(&unit).as_deref()),
    ]);
    Ok(table)
}

fn parent_label(unit: &Unit<'_>) -> Option<String> {
    match unit {
        Unit::Voivodeship(_) => None,
        Unit::County(county) => Some(format!("woj. {}", county.voivodeship)),
        Unit::Municipality(municipality) => Some(format!(
            "pow. {}, woj. {}",
            municipality.county, municipality.voivodeship
        )),
    }
}

fn autocomplete_table(directory: &TerytDirectory, args: &AutocompleteArgs) -> Table {
    let voivodeship = args.voivodeship.as_deref();
    let suggestions: Vec<Suggestion> = match args.kind.suggest_scope() {
        Some(scope) => directory.suggest(scope, &args.query, voivodeship),
        None => directory.autocomplete(UnitKind::Voivodeship, &args.query, voivodeship),
    };
    let mut table = new_table(&["Kind", "Name", "Label"]);
    for suggestion in suggestions {
        table.add_row(vec![
            Cell::new(suggestion.kind).fg(Color::Blue),
            Cell::new(&suggestion.name),
            Cell::new(&suggestion.label),
        ]);
    }
    table
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    table
}

fn code_cell(code: &str) -> Cell {
    Cell::new(code).fg(Color::DarkGrey)
}
