//! The `standardize` pipeline: read, import, standardize, write.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use lostfound_ingest::{
    ImportSource, ImportWarning, RawRow, import_rows, read_rows, write_csv_records,
};
use lostfound_model::ItemRecord;
use lostfound_normalization::{
    Clock, ReferenceTables, StandardizeOptions, StandardizeReport, Standardizer,
};
use lostfound_teryt::TerytDirectory;
use tracing::{info, info_span, trace};

use crate::logging::redact_value;

/// Settings for one `standardize` run.
#[derive(Debug, Clone, Default)]
pub struct StandardizeConfig {
    pub source: ImportSource,
    /// Replacement reference lists; `None` falls back to the environment,
    /// then to the built-in lists.
    pub teryt_dir: Option<PathBuf>,
    /// Run without a TERYT directory (degraded territorial rules).
    pub no_teryt: bool,
    /// Date that relative words such as "wczoraj" count from.
    pub today: Option<NaiveDate>,
}

impl StandardizeConfig {
    fn options(&self) -> StandardizeOptions {
        match self.today {
            Some(today) => StandardizeOptions::new().with_today(today),
            None => StandardizeOptions::new(),
        }
    }
}

/// What a `standardize` run produced.
#[derive(Debug, Clone)]
pub struct StandardizeOutcome {
    pub records: Vec<ItemRecord>,
    /// Rows read from the input.
    pub rows: usize,
    pub skipped: usize,
    pub warnings: Vec<ImportWarning>,
    pub report: StandardizeReport,
    /// Fingerprint of the reference data used, if any.
    pub teryt_fingerprint: Option<String>,
}

/// Loads the TERYT directory unless the run is degraded.
pub fn load_teryt(config: &StandardizeConfig) -> Result<Option<Arc<TerytDirectory>>> {
    if config.no_teryt {
        info!("running without TERYT reference data");
        return Ok(None);
    }
    let directory = TerytDirectory::load(config.teryt_dir.as_deref())
        .context("load TERYT reference data")?;
    Ok(Some(Arc::new(directory)))
}

/// Reads `input` and standardizes every imported record.
pub fn standardize_file(input: &Path, config: &StandardizeConfig) -> Result<StandardizeOutcome> {
    let span = info_span!("standardize", input = %input.display(), source = %config.source);
    let _guard = span.enter();

    let rows = read_rows(input).with_context(|| format!("read {}", input.display()))?;
    let directory = load_teryt(config)?;
    standardize_rows(&rows, config, directory)
}

/// Imports and standardizes rows that are already in memory.
pub fn standardize_rows(
    rows: &[RawRow],
    config: &StandardizeConfig,
    directory: Option<Arc<TerytDirectory>>,
) -> Result<StandardizeOutcome> {
    let options = config.options();
    let today = options.clock.today();
    let teryt_fingerprint = directory
        .as_ref()
        .map(|directory| directory.fingerprint().to_string());
    let standardizer = Standardizer::new(&ReferenceTables::default(), directory, options)
        .context("compile standardization rules")?;

    let imported = import_rows(config.source, rows, today);
    let (records, report) = standardizer.standardize_all(&imported.records);
    for (index, record) in records.iter().enumerate() {
        trace!(
            record = index + 1,
            item_name = redact_value(record.item_name.as_deref().unwrap_or_default()),
            municipality = redact_value(record.municipality.as_deref().unwrap_or_default()),
            "standardized record"
        );
    }

    Ok(StandardizeOutcome {
        records,
        rows: rows.len(),
        skipped: imported.skipped,
        warnings: imported.warnings,
        report,
        teryt_fingerprint,
    })
}

/// Writes records to `output`, or to stdout as pretty JSON.
///
/// An output path ending in `.csv` gets the spreadsheet CSV layout; any
/// other path gets JSON.
pub fn write_records(records: &[ItemRecord], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            let writer = BufWriter::new(file);
            let written = if is_csv(path) {
                write_csv_records(writer, records).map_err(anyhow::Error::from)
            } else {
                write_json(writer, records)
            };
            written.with_context(|| format!("write {}", path.display()))
        }
        None => write_json(io::stdout().lock(), records).context("write records to stdout"),
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn write_json(mut writer: impl Write, records: &[ItemRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Clock the run uses, for display.
pub fn clock_label(config: &StandardizeConfig) -> String {
    match config.options().clock {
        Clock::System => "system".to_string(),
        Clock::Fixed(date) => date.format("%Y-%m-%d").to_string(),
    }
}
