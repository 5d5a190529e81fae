//! Raw rows to item records.

use std::fmt;

use chrono::{Days, Months, NaiveDate};
use lostfound_model::{ItemRecord, fields};
use serde::Serialize;
use serde_json::{Map, Number, Value};
use tracing::{info, warn};

use crate::aliases::{
    CATEGORY, COLLECTION_DEADLINE, ESTIMATED_VALUE, Fallback, FieldAliases, ID, ImportSource,
    STATUS,
};
use crate::categories::{lookup_category, lookup_status};
use crate::reader::RawRow;

/// Excel day 0; serial 25569 is 1970-01-01.
const EXCEL_EPOCH: Option<NaiveDate> = NaiveDate::from_ymd_opt(1899, 12, 30);
/// Last serial Excel accepts (9999-12-31).
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

/// A problem with one value of one row. The row is still imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportWarning {
    /// 1-based row number within the input.
    pub row: usize,
    pub field: Option<String>,
    pub message: String,
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "row {} ({field}): {}", self.row, self.message),
            None => write!(f, "row {}: {}", self.row, self.message),
        }
    }
}

/// Result of [`import_rows`].
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub records: Vec<ItemRecord>,
    pub warnings: Vec<ImportWarning>,
    /// Rows with no values at all.
    pub skipped: usize,
}

/// Maps raw rows to item records with the alias table of `source`.
///
/// For every target field the first alias holding a non-empty value wins;
/// when none does, the field's fallback applies (`today` feeds date
/// fallbacks). Category and status labels become codes, spreadsheet serial
/// dates become `YYYY-MM-DD`, and estimated values become numbers.
///
/// Native rows are taken as records already: blank values are kept as
/// given, nothing is filled in, and keys without an alias entry are copied
/// unchanged.
pub fn import_rows(source: ImportSource, rows: &[RawRow], today: NaiveDate) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;
        if row.values().all(is_blank) {
            warn!(row = row_number, "skipping empty row");
            outcome.skipped += 1;
            continue;
        }
        let mut mapper = RowMapper {
            source,
            today,
            row: row_number,
            warnings: &mut outcome.warnings,
        };
        outcome.records.push(mapper.map(row));
    }
    info!(
        source = source.as_str(),
        records = outcome.records.len(),
        skipped = outcome.skipped,
        warnings = outcome.warnings.len(),
        "imported rows"
    );
    outcome
}

struct RowMapper<'a> {
    source: ImportSource,
    today: NaiveDate,
    row: usize,
    warnings: &'a mut Vec<ImportWarning>,
}

impl RowMapper<'_> {
    fn map(&mut self, row: &RawRow) -> ItemRecord {
        let keep_unmapped = self.source.keeps_unmapped_keys();
        let mut record = ItemRecord::new();
        for entry in self.source.field_aliases() {
            let value = match first_present(row, entry) {
                Some(raw) => self.convert(entry.target, raw),
                None if keep_unmapped => first_given(row, entry).cloned(),
                None => self.fallback(entry.fallback),
            };
            if let Some(value) = value {
                write_target(&mut record, entry.target, value);
            }
        }
        if keep_unmapped {
            for (key, value) in row {
                if !self.is_alias(key) {
                    record.other.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
        }
        if record.item_name.as_deref().is_none_or(str::is_empty) {
            self.warn(Some(fields::ITEM_NAME), "missing item name".to_string());
        }
        record
    }

    fn is_alias(&self, key: &str) -> bool {
        self.source
            .field_aliases()
            .iter()
            .any(|entry| entry.aliases.iter().any(|alias| *alias == key))
    }

    fn convert(&mut self, target: &str, raw: &Value) -> Option<Value> {
        match target {
            CATEGORY => Some(self.code(target, raw, "other", |label| {
                lookup_category(label).map(|category| category.as_str())
            })),
            STATUS => Some(self.code(target, raw, "stored", |label| {
                lookup_status(label).map(|status| status.as_str())
            })),
            fields::DATE_FOUND | COLLECTION_DEADLINE => Some(self.date(target, raw)),
            ESTIMATED_VALUE => self.amount(raw),
            ID => Some(match raw {
                Value::Number(number) => Value::String(number.to_string()),
                other => trimmed(other),
            }),
            _ => Some(trimmed(raw)),
        }
    }

    /// Label to code, warning about labels that fall back to `default`.
    fn code(
        &mut self,
        target: &str,
        raw: &Value,
        default: &'static str,
        lookup: impl Fn(&str) -> Option<&'static str>,
    ) -> Value {
        let label = display(raw);
        let code = lookup(&label).unwrap_or_else(|| {
            self.warn(Some(target), format!("unknown {target} {label:?}, using {default}"));
            default
        });
        Value::String(code.to_string())
    }

    fn date(&mut self, target: &str, raw: &Value) -> Value {
        if !self.source.excel_dates() {
            return trimmed(raw);
        }
        let serial = match raw {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => serial_text(text.trim()),
            _ => None,
        };
        let Some(serial) = serial else {
            return trimmed(raw);
        };
        match excel_serial_date(serial) {
            Some(date) => Value::String(date.format("%Y-%m-%d").to_string()),
            None => {
                self.warn(Some(target), format!("date serial {serial} is out of range"));
                trimmed(raw)
            }
        }
    }

    fn amount(&mut self, raw: &Value) -> Option<Value> {
        let parsed = match raw {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().replace(',', ".").parse::<f64>().ok(),
            _ => None,
        };
        match parsed.and_then(Number::from_f64) {
            Some(number) => Some(Value::Number(number)),
            None => {
                self.warn(
                    Some(ESTIMATED_VALUE),
                    format!("not a number: {:?}", display(raw)),
                );
                None
            }
        }
    }

    fn fallback(&self, fallback: Fallback) -> Option<Value> {
        let date = match fallback {
            Fallback::None => return None,
            Fallback::Literal(text) => return Some(Value::String(text.to_string())),
            Fallback::Today => Some(self.today),
            Fallback::YearsAfterToday(years) => self.today.checked_add_months(Months::new(years * 12)),
        };
        date.map(|date| Value::String(date.format("%Y-%m-%d").to_string()))
    }

    fn warn(&mut self, field: Option<&str>, message: String) {
        warn!(row = self.row, field, "{message}");
        self.warnings.push(ImportWarning {
            row: self.row,
            field: field.map(str::to_string),
            message,
        });
    }
}

/// Date for an Excel serial day number. Fractions (time of day) are dropped.
pub fn excel_serial_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let days = serial.floor() as u64;
    EXCEL_EPOCH?.checked_add_days(Days::new(days))
}

/// Serial numbers arriving as CSV text. Only five-digit day numbers
/// (1927 to 2173) are taken as serials, so plain years stay text.
fn serial_text(text: &str) -> Option<f64> {
    let integer = text.split_once('.').map_or(text, |(integer, _)| integer);
    if integer.len() != 5 || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn first_present<'r>(row: &'r RawRow, entry: &FieldAliases) -> Option<&'r Value> {
    entry
        .aliases
        .iter()
        .filter_map(|alias| lookup(row, alias))
        .find(|value| !is_blank(value))
}

/// First alias present in the row, blank or not.
fn first_given<'r>(row: &'r RawRow, entry: &FieldAliases) -> Option<&'r Value> {
    entry.aliases.iter().find_map(|alias| lookup(row, alias))
}

/// Direct key first; dotted aliases then walk nested objects.
fn lookup<'r>(row: &'r RawRow, alias: &str) -> Option<&'r Value> {
    if let Some(value) = row.get(alias) {
        return Some(value);
    }
    let (head, rest) = alias.split_once('.')?;
    match row.get(head)? {
        Value::Object(nested) => lookup(nested, rest),
        _ => None,
    }
}

fn write_target(record: &mut ItemRecord, target: &str, value: Value) {
    let Some((head, rest)) = target.split_once('.') else {
        record.set_field(target, value);
        return;
    };
    let slot = record
        .other
        .entry(head.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(nested) = slot {
        insert_path(nested, rest, value);
    }
}

fn insert_path(object: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            object.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let slot = object
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(nested) = slot {
                insert_path(nested, rest, value);
            }
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Object(map) => map.values().all(is_blank),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn trimmed(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(text.trim().to_string()),
        other => other.clone(),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}
