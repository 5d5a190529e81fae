//! Data model for the lost-and-found registry.
//!
//! Plain types shared by the territorial directory, the standardizer, the
//! importers and the CLI. Nothing in this crate performs lookups or I/O.

#![deny(unsafe_code)]

pub mod enums;
pub mod error;
pub mod record;
pub mod suggestion;
pub mod territory;

pub use enums::{ItemCategory, ItemStatus};
pub use error::{ModelError, Result};
pub use record::{CustomFields, ItemRecord, fields};
pub use suggestion::{LocationInfo, ResolvedUnit, Suggestion};
pub use territory::{
    County, CountyKind, Municipality, MunicipalityKind, TerritorialUnit, Unit, UnitKind,
    Voivodeship,
};
