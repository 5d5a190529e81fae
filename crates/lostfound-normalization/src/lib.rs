//! Standardization of found-item records.
//!
//! A raw [`ItemRecord`](lostfound_model::ItemRecord) goes through
//! [`Standardizer::standardize`] once before it is stored:
//!
//! - `item_name`: spelling correction, then Polish title case
//! - `description`: spelling correction
//! - `location_found`: street prefix cleanup, then title case
//! - `voivodeship` / `county` / `municipality`: TERYT canonical names,
//!   resolved top-down, with a title-case fallback
//! - `date_found`: ISO `YYYY-MM-DD` where parseable
//! - `custom_fields`: brand and colour names
//!
//! Every other field passes through untouched.

#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod rules;
pub mod standardizer;
pub mod tables;

pub use error::{NormalizationError, Result};
pub use options::{Clock, StandardizeOptions};
pub use rules::{RuleSet, capitalize_first, is_iso_date, parse_date, standardize_date};
pub use standardizer::{StandardizeReport, Standardizer};
pub use tables::{ReferenceTables, StreetPrefix};
