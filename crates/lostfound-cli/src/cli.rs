//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lostfound_ingest::ImportSource;
use lostfound_model::UnitKind;
use lostfound_teryt::SuggestScope;

#[derive(Parser)]
#[command(
    name = "lostfound",
    version,
    about = "Lost-and-found registry tools - standardize item records, query TERYT",
    long_about = "Standardize found-item records before they enter the registry.\n\n\
                  Imports CSV or JSON registers (native export, office spreadsheets,\n\
                  dane.gov.pl rows), fixes spelling, capitalization, dates, brands and\n\
                  territorial names, and writes the records as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow item values (names, places) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory with replacement voivodeships.csv, counties.csv and
    /// municipalities.csv.
    #[arg(
        long = "teryt-dir",
        value_name = "DIR",
        env = "LOSTFOUND_TERYT_DIR",
        global = true
    )]
    pub teryt_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a register file and standardize its records.
    Standardize(StandardizeArgs),

    /// Query the TERYT territorial reference lists.
    #[command(subcommand)]
    Teryt(TerytCommand),
}

#[derive(Args)]
pub struct StandardizeArgs {
    /// CSV or JSON file with item rows.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Layout of the input rows.
    #[arg(long = "source", value_enum, default_value = "native")]
    pub source: SourceArg,

    /// Write the records here instead of stdout (`.csv` for a spreadsheet, else JSON).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip TERYT lookups; territorial names are only title cased.
    #[arg(long = "no-teryt")]
    pub no_teryt: bool,

    /// Date that relative dates ("wczoraj") count from, YYYY-MM-DD.
    #[arg(long = "today", value_name = "DATE", value_parser = parse_date)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum TerytCommand {
    /// List all voivodeships.
    Voivodeships,

    /// List the counties of a voivodeship.
    Counties {
        #[arg(value_name = "VOIVODESHIP")]
        voivodeship: String,
    },

    /// List the municipalities of a voivodeship.
    Municipalities {
        #[arg(value_name = "VOIVODESHIP")]
        voivodeship: String,

        /// Only municipalities of this county.
        #[arg(long = "county")]
        county: Option<String>,
    },

    /// Resolve a name to its canonical unit.
    Find(FindArgs),

    /// Suggest units for a partial name.
    Autocomplete(AutocompleteArgs),

    /// Resolve a municipality / county / voivodeship triple.
    Info {
        municipality: String,
        county: String,
        voivodeship: String,
    },
}

#[derive(Args)]
pub struct FindArgs {
    #[arg(value_enum)]
    pub kind: KindArg,

    #[arg(value_name = "NAME")]
    pub name: String,

    /// Parent county (municipalities only).
    #[arg(long = "county")]
    pub county: Option<String>,

    /// Parent voivodeship.
    #[arg(long = "voivodeship")]
    pub voivodeship: Option<String>,
}

#[derive(Args)]
pub struct AutocompleteArgs {
    #[arg(value_name = "QUERY")]
    pub query: String,

    #[arg(long = "kind", value_enum, default_value = "municipality")]
    pub kind: ScopeArg,

    /// Only units of this voivodeship.
    #[arg(long = "voivodeship")]
    pub voivodeship: Option<String>,
}

/// CLI import source choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Native,
    Spreadsheet,
    DaneGov,
}

impl From<SourceArg> for ImportSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Native => ImportSource::Native,
            SourceArg::Spreadsheet => ImportSource::Spreadsheet,
            SourceArg::DaneGov => ImportSource::DaneGov,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    Voivodeship,
    County,
    Municipality,
}

impl From<KindArg> for UnitKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Voivodeship => UnitKind::Voivodeship,
            KindArg::County => UnitKind::County,
            KindArg::Municipality => UnitKind::Municipality,
        }
    }
}

/// Autocomplete targets; `all` lists municipalities, then counties.
#[derive(Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    Municipality,
    County,
    Voivodeship,
    All,
}

impl ScopeArg {
    /// `None` for voivodeships, which [`SuggestScope`] does not cover.
    pub fn suggest_scope(self) -> Option<SuggestScope> {
        match self {
            ScopeArg::Municipality => Some(SuggestScope::Municipality),
            ScopeArg::County => Some(SuggestScope::County),
            ScopeArg::All => Some(SuggestScope::All),
            ScopeArg::Voivodeship => None,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD ({e})"))
}
