//! Per-field standardization rules.
//!
//! [`RuleSet`] is the compiled form of [`ReferenceTables`]: patterns are
//! built once, lookups are keyed by lowercase text. Each rule is a method
//! usable on its own; the standardizer only decides which rule applies to
//! which field.

mod brand;
mod date;
mod location;
mod spelling;
mod territory;
mod text;

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

use crate::error::Result;
use crate::tables::ReferenceTables;

pub use date::{is_iso_date, parse_date, relative_days, standardize_date};
pub use text::capitalize_first;

#[derive(Debug, Clone)]
pub struct RuleSet {
    spelling: Vec<(Regex, String)>,
    brands: Vec<(String, String)>,
    colors: BTreeMap<String, String>,
    voivodeship_aliases: BTreeMap<String, String>,
    lowercase_words: BTreeSet<String>,
    street_prefixes: Vec<(Regex, String)>,
}

impl RuleSet {
    pub fn new(tables: &ReferenceTables) -> Result<Self> {
        Ok(Self {
            spelling: spelling::compile(&tables.spelling)?,
            brands: tables
                .brands
                .iter()
                .map(|(alias, canonical)| (alias.trim().to_lowercase(), canonical.clone()))
                .filter(|(alias, _)| !alias.is_empty())
                .collect(),
            colors: lowercase_keys(&tables.colors),
            voivodeship_aliases: lowercase_keys(&tables.voivodeship_aliases),
            lowercase_words: tables
                .lowercase_words
                .iter()
                .map(|word| word.to_lowercase())
                .collect(),
            street_prefixes: location::compile(&tables.street_prefixes)?,
        })
    }
}

fn lowercase_keys(pairs: &[(String, String)]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for (alias, canonical) in pairs {
        map.entry(alias.trim().to_lowercase())
            .or_insert_with(|| canonical.clone());
    }
    map
}
