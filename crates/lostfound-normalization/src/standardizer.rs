//! Record-level standardization.

use std::collections::BTreeMap;
use std::sync::Arc;

use lostfound_model::{ItemRecord, fields};
use lostfound_teryt::TerytDirectory;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::options::StandardizeOptions;
use crate::rules::{RuleSet, standardize_date};
use crate::tables::ReferenceTables;

/// Applies every field rule to item records.
///
/// Holds compiled rules, an optional shared TERYT directory and the
/// options. Without a directory it runs in degraded mode: voivodeships go
/// through the alias table, counties and municipalities are only title
/// cased.
#[derive(Debug, Clone)]
pub struct Standardizer {
    rules: RuleSet,
    directory: Option<Arc<TerytDirectory>>,
    options: StandardizeOptions,
}

/// Batch outcome of [`Standardizer::standardize_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StandardizeReport {
    /// Records processed.
    pub records: usize,
    /// Records with at least one rewritten field.
    pub changed_records: usize,
    /// Rewrites per field name (`custom_fields.<key>` for custom fields).
    pub field_changes: BTreeMap<String, usize>,
}

impl StandardizeReport {
    pub fn total_changes(&self) -> usize {
        self.field_changes.values().sum()
    }
}

impl Standardizer {
    pub fn new(
        tables: &ReferenceTables,
        directory: Option<Arc<TerytDirectory>>,
        options: StandardizeOptions,
    ) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::new(tables)?,
            directory,
            options,
        })
    }

    /// Built-in tables and default options.
    pub fn with_directory(directory: Option<Arc<TerytDirectory>>) -> Result<Self> {
        Self::new(&ReferenceTables::default(), directory, StandardizeOptions::default())
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn directory(&self) -> Option<&TerytDirectory> {
        self.directory.as_deref()
    }

    pub fn options(&self) -> &StandardizeOptions {
        &self.options
    }

    /// Returns a standardized copy of `record`.
    ///
    /// Absent and empty fields are left alone, as is every field the rules
    /// do not cover. Never fails.
    pub fn standardize(&self, record: &ItemRecord) -> ItemRecord {
        self.standardize_tracked(record).0
    }

    /// Standardizes a batch, counting rewrites per field.
    pub fn standardize_all(&self, records: &[ItemRecord]) -> (Vec<ItemRecord>, StandardizeReport) {
        let mut report = StandardizeReport::default();
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            let (standardized, changed) = self.standardize_tracked(record);
            report.records += 1;
            if !changed.is_empty() {
                report.changed_records += 1;
            }
            for field in changed {
                *report.field_changes.entry(field).or_default() += 1;
            }
            out.push(standardized);
        }
        info!(
            records = report.records,
            changed_records = report.changed_records,
            changes = report.total_changes(),
            "standardized records"
        );
        (out, report)
    }

    fn standardize_tracked(&self, record: &ItemRecord) -> (ItemRecord, Vec<String>) {
        let mut out = record.clone();
        let mut changed = Vec::new();
        let mut track = |field: &str, before: &Option<String>, after: &Option<String>| {
            if before != after {
                debug!(field, "standardized field");
                changed.push(field.to_string());
            }
        };

        let item_name = map_text(&record.item_name, |text| {
            self.rules.capitalize(&self.rules.correct_spelling(text))
        });
        track(fields::ITEM_NAME, &record.item_name, &item_name);
        out.item_name = item_name;

        let description = map_text(&record.description, |text| self.rules.correct_spelling(text));
        track(fields::DESCRIPTION, &record.description, &description);
        out.description = description;

        let location = map_text(&record.location_found, |text| {
            self.rules.standardize_location(text)
        });
        track(fields::LOCATION_FOUND, &record.location_found, &location);
        out.location_found = location;

        let (voivodeship, county, municipality) = self.standardize_territory(record);
        track(fields::VOIVODESHIP, &record.voivodeship, &voivodeship);
        track(fields::COUNTY, &record.county, &county);
        track(fields::MUNICIPALITY, &record.municipality, &municipality);
        out.voivodeship = voivodeship;
        out.county = county;
        out.municipality = municipality;

        let today = self.options.clock.today();
        let date_found = map_text(&record.date_found, |text| standardize_date(text, today));
        track(fields::DATE_FOUND, &record.date_found, &date_found);
        out.date_found = date_found;

        let (custom_fields, custom_changes) = self.standardize_custom_fields(record.custom_fields.as_ref());
        for key in custom_changes {
            let field = format!("{}.{key}", fields::CUSTOM_FIELDS);
            debug!(field = field.as_str(), "standardized field");
            changed.push(field);
        }
        out.custom_fields = custom_fields;

        (out, changed)
    }

    /// Resolves voivodeship, then county, then municipality.
    ///
    /// Each level uses the already standardized value of its parents as
    /// the filter context; nothing is revisited after a miss.
    fn standardize_territory(
        &self,
        record: &ItemRecord,
    ) -> (Option<String>, Option<String>, Option<String>) {
        let directory = self.directory();

        let voivodeship = map_text(&record.voivodeship, |text| {
            self.rules.standardize_voivodeship(text, directory)
        });
        let voivodeship_ctx = non_empty(&voivodeship);

        let county = map_text(&record.county, |text| {
            self.rules.standardize_county(text, voivodeship_ctx, directory)
        });
        let county_ctx = non_empty(&county);

        let municipality = map_text(&record.municipality, |text| {
            self.rules
                .standardize_municipality(text, county_ctx, voivodeship_ctx, directory)
        });

        (voivodeship, county, municipality)
    }

    /// Rewrites brand and colour keys inside `custom_fields`.
    ///
    /// A string-encoded object is decoded, and re-encoded only when a value
    /// changed. Anything that is not an object is returned as is.
    fn standardize_custom_fields(&self, value: Option<&Value>) -> (Option<Value>, Vec<String>) {
        let Some(value) = value else {
            return (None, Vec::new());
        };
        let (mut map, encoded) = match value {
            Value::Object(map) => (map.clone(), false),
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => (map, true),
                _ => return (Some(value.clone()), Vec::new()),
            },
            _ => return (Some(value.clone()), Vec::new()),
        };

        let mut changed = Vec::new();
        for (key, slot) in map.iter_mut() {
            let Some(text) = slot.as_str().filter(|text| !text.is_empty()) else {
                continue;
            };
            let rewritten = if fields::BRAND_KEYS.contains(&key.as_str()) {
                self.rules.standardize_brand(text)
            } else if key == fields::COLOR_KEY {
                self.rules.standardize_color(text)
            } else {
                continue;
            };
            if rewritten != text {
                changed.push(key.clone());
                *slot = Value::String(rewritten);
            }
        }

        if changed.is_empty() {
            return (Some(value.clone()), changed);
        }
        let out = if encoded {
            Value::String(Value::Object(map).to_string())
        } else {
            Value::Object(map)
        };
        (Some(out), changed)
    }
}

/// Applies `rule` to non-empty text; absent and empty values pass through.
fn map_text(value: &Option<String>, rule: impl FnOnce(&str) -> String) -> Option<String> {
    match value.as_deref() {
        Some(text) if !text.is_empty() => Some(rule(text)),
        other => other.map(str::to_string),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}
