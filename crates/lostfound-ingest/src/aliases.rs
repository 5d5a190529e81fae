//! Per-source field alias tables.
//!
//! Each import source names the record fields differently: the native
//! JSON export uses the record's own keys, spreadsheets use Polish column
//! headers, dane.gov.pl rows use short Polish keys. A table lists, per
//! target field, the source keys to try in order.

use std::fmt;
use std::str::FromStr;

use lostfound_model::fields;
use serde::{Deserialize, Serialize};

/// Value used when no alias holds a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Leave the field out.
    None,
    Literal(&'static str),
    /// Import date, `YYYY-MM-DD`.
    Today,
    /// Import date plus whole years (the statutory collection deadline).
    YearsAfterToday(u32),
}

/// Source keys for one record field.
///
/// `target` and aliases may be dotted paths: `lost_and_found_office.name`
/// writes (or reads) the `name` key of a nested object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    pub target: &'static str,
    pub aliases: &'static [&'static str],
    pub fallback: Fallback,
}

const fn field(
    target: &'static str,
    aliases: &'static [&'static str],
    fallback: Fallback,
) -> FieldAliases {
    FieldAliases {
        target,
        aliases,
        fallback,
    }
}

pub const ID: &str = "id";
pub const CATEGORY: &str = "category";
pub const STATUS: &str = "status";
pub const ESTIMATED_VALUE: &str = "estimated_value";
pub const COLLECTION_DEADLINE: &str = "collection_deadline";

/// Years an office keeps an unclaimed item.
const COLLECTION_YEARS: u32 = 2;

/// The registry's own rows. Keys missing from the row stay missing, and
/// keys not listed here are copied as they are.
const NATIVE: &[FieldAliases] = &[
    field(ID, &["id"], Fallback::None),
    field(fields::ITEM_NAME, &["item_name"], Fallback::None),
    field(CATEGORY, &["category"], Fallback::None),
    field(fields::DESCRIPTION, &["description"], Fallback::None),
    field(fields::DATE_FOUND, &["date_found"], Fallback::None),
    field(fields::LOCATION_FOUND, &["location_found"], Fallback::None),
    field("location_type", &["location_type"], Fallback::None),
    field("coordinates_lat", &["coordinates_lat"], Fallback::None),
    field("coordinates_lon", &["coordinates_lon"], Fallback::None),
    field(fields::MUNICIPALITY, &["municipality"], Fallback::None),
    field(fields::COUNTY, &["county"], Fallback::None),
    field(fields::VOIVODESHIP, &["voivodeship"], Fallback::None),
    field(ESTIMATED_VALUE, &["estimated_value"], Fallback::None),
    field(STATUS, &["status"], Fallback::None),
    field(COLLECTION_DEADLINE, &["collection_deadline"], Fallback::None),
    field("lost_and_found_office", &["lost_and_found_office"], Fallback::None),
    field("office_name", &["office_name"], Fallback::None),
    field("office_address", &["office_address"], Fallback::None),
    field("office_phone", &["office_phone"], Fallback::None),
    field("office_email", &["office_email"], Fallback::None),
    field("office_hours", &["office_hours"], Fallback::None),
    field("photo_url", &["photo_url"], Fallback::None),
    field("notes", &["notes"], Fallback::None),
    field("entry_date", &["entry_date"], Fallback::None),
    field("update_date", &["update_date"], Fallback::None),
    field(fields::CUSTOM_FIELDS, &["custom_fields"], Fallback::None),
];

const SPREADSHEET: &[FieldAliases] = &[
    field(ID, &["id", "ID", "Id"], Fallback::None),
    field(
        fields::ITEM_NAME,
        &["item_name", "Nazwa przedmiotu", "Nazwa", "name"],
        Fallback::None,
    ),
    field(
        CATEGORY,
        &["category", "kategoria", "Kategoria"],
        Fallback::Literal("other"),
    ),
    field(
        fields::DESCRIPTION,
        &["description", "opis", "Opis"],
        Fallback::None,
    ),
    field(
        fields::DATE_FOUND,
        &["date_found", "data_znalezienia", "Data znalezienia"],
        Fallback::Today,
    ),
    field(
        fields::LOCATION_FOUND,
        &["location_found", "miejsce_znalezienia", "Miejsce znalezienia"],
        Fallback::None,
    ),
    field("location_type", &["location_type", "typ_miejsca"], Fallback::None),
    field(
        fields::MUNICIPALITY,
        &["municipality", "gmina", "Gmina"],
        Fallback::None,
    ),
    field(fields::COUNTY, &["county", "powiat", "Powiat"], Fallback::None),
    field(
        fields::VOIVODESHIP,
        &["voivodeship", "wojewodztwo", "Wojewodztwo", "Województwo"],
        Fallback::None,
    ),
    field(
        ESTIMATED_VALUE,
        &["estimated_value", "szacunkowa_wartosc"],
        Fallback::None,
    ),
    field(STATUS, &["status", "Status"], Fallback::Literal("stored")),
    field(
        COLLECTION_DEADLINE,
        &["collection_deadline", "data_waznosci", "Termin odbioru"],
        Fallback::YearsAfterToday(COLLECTION_YEARS),
    ),
    field(
        "lost_and_found_office.name",
        &["office_name", "Nazwa biura", "Biuro"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.address",
        &["office_address", "Adres biura"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.phone",
        &["office_phone", "Telefon"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.email",
        &["office_email", "Email"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.opening_hours",
        &["office_hours", "Godziny otwarcia"],
        Fallback::None,
    ),
    field("photo_url", &["photo_url", "zdjecie_url"], Fallback::None),
    field("notes", &["notes", "uwagi"], Fallback::None),
    field(fields::CUSTOM_FIELDS, &["custom_fields"], Fallback::None),
];

const DANE_GOV: &[FieldAliases] = &[
    field(ID, &["id", "public_id"], Fallback::None),
    field(
        fields::ITEM_NAME,
        &["item_name", "nazwa"],
        Fallback::Literal("Unknown"),
    ),
    field(CATEGORY, &["category"], Fallback::Literal("other")),
    field(fields::DESCRIPTION, &["description", "opis"], Fallback::None),
    field(
        fields::DATE_FOUND,
        &["date_found", "data_znalezienia"],
        Fallback::Today,
    ),
    field(
        fields::LOCATION_FOUND,
        &["location_found", "miejsce_znalezienia"],
        Fallback::None,
    ),
    field("location_type", &["location_type"], Fallback::None),
    field(fields::MUNICIPALITY, &["municipality", "gmina"], Fallback::None),
    field(fields::COUNTY, &["county", "powiat"], Fallback::None),
    field(
        fields::VOIVODESHIP,
        &["voivodeship", "wojewodztwo"],
        Fallback::None,
    ),
    field(ESTIMATED_VALUE, &["estimated_value"], Fallback::None),
    field(STATUS, &["status"], Fallback::Literal("stored")),
    field(COLLECTION_DEADLINE, &["collection_deadline"], Fallback::None),
    field(
        "lost_and_found_office.name",
        &["lost_and_found_office.name", "biuro"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.address",
        &["lost_and_found_office.address", "adres_biura"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.phone",
        &["lost_and_found_office.phone", "telefon"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.email",
        &["lost_and_found_office.email"],
        Fallback::None,
    ),
    field(
        "lost_and_found_office.opening_hours",
        &["lost_and_found_office.opening_hours"],
        Fallback::None,
    ),
    field(fields::CUSTOM_FIELDS, &["custom_fields"], Fallback::None),
];

/// Where import rows come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportSource {
    /// The registry's own JSON export.
    #[default]
    Native,
    /// Office spreadsheets (CSV or JSON converted from XLSX).
    Spreadsheet,
    /// Open-data rows from dane.gov.pl.
    DaneGov,
}

impl ImportSource {
    pub const ALL: [ImportSource; 3] = [
        ImportSource::Native,
        ImportSource::Spreadsheet,
        ImportSource::DaneGov,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportSource::Native => "native",
            ImportSource::Spreadsheet => "spreadsheet",
            ImportSource::DaneGov => "dane-gov",
        }
    }

    /// Alias table, one entry per target field, in output order.
    pub fn field_aliases(&self) -> &'static [FieldAliases] {
        match self {
            ImportSource::Native => NATIVE,
            ImportSource::Spreadsheet => SPREADSHEET,
            ImportSource::DaneGov => DANE_GOV,
        }
    }

    /// Whether numeric date cells are Excel serial day numbers.
    pub fn excel_dates(&self) -> bool {
        matches!(self, ImportSource::Spreadsheet)
    }

    /// Whether row keys outside the alias table are copied into the
    /// record. Only the native shape is trusted to carry record keys.
    pub fn keeps_unmapped_keys(&self) -> bool {
        matches!(self, ImportSource::Native)
    }
}

impl fmt::Display for ImportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        ImportSource::ALL
            .into_iter()
            .find(|source| source.as_str() == name)
            .ok_or_else(|| format!("unknown import source: {s:?} (expected native, spreadsheet or dane-gov)"))
    }
}
