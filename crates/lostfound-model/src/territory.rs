//! Territorial units of the Polish administrative division (TERYT).
//!
//! The hierarchy has three levels:
//!
//! ```text
//! Voivodeship (województwo)
//! └── County (powiat, or a city with county rights)
//!     └── Municipality (gmina)
//! ```
//!
//! Every unit carries a canonical `name`: lowercase ASCII with words joined
//! by `-` (e.g. `warminsko-mazurskie`, `zielona-gora`). That name is the key
//! used across the rest of the system. `full_name` is the display form and
//! may contain diacritics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Level of a territorial unit in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    Voivodeship,
    County,
    Municipality,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Voivodeship => "voivodeship",
            UnitKind::County => "county",
            UnitKind::Municipality => "municipality",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = ModelError;

    /// Accepts the English names as well as the Polish ones used by the
    /// registry front-end (`wojewodztwo`, `powiat`, `gmina`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "voivodeship" | "wojewodztwo" | "województwo" => Ok(UnitKind::Voivodeship),
            "county" | "powiat" => Ok(UnitKind::County),
            "municipality" | "gmina" => Ok(UnitKind::Municipality),
            _ => Err(ModelError::unknown("unit kind", s)),
        }
    }
}

/// County flavour: a regular rural county or a city with county rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountyKind {
    /// Powiat ziemski.
    County,
    /// Miasto na prawach powiatu.
    CityCounty,
}

impl CountyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountyKind::County => "county",
            CountyKind::CityCounty => "city-county",
        }
    }
}

impl fmt::Display for CountyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountyKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "county" | "powiat" => Ok(CountyKind::County),
            "city-county" | "miasto na prawach powiatu" => Ok(CountyKind::CityCounty),
            _ => Err(ModelError::unknown("county kind", s)),
        }
    }
}

/// Municipality flavour (gmina miejska / wiejska / miejsko-wiejska).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MunicipalityKind {
    Urban,
    Rural,
    UrbanRural,
}

impl MunicipalityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MunicipalityKind::Urban => "urban",
            MunicipalityKind::Rural => "rural",
            MunicipalityKind::UrbanRural => "urban-rural",
        }
    }
}

impl fmt::Display for MunicipalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MunicipalityKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urban" | "miejska" => Ok(MunicipalityKind::Urban),
            "rural" | "wiejska" => Ok(MunicipalityKind::Rural),
            "urban-rural" | "miejsko-wiejska" => Ok(MunicipalityKind::UrbanRural),
            _ => Err(ModelError::unknown("municipality kind", s)),
        }
    }
}

/// Top-level region (16 in total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voivodeship {
    /// Two-digit TERYT code (e.g. "12").
    pub code: String,
    pub name: String,
    pub full_name: String,
    /// Display name of the seat of the voivode.
    pub capital: String,
}

/// Second-level unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct County {
    /// Four-digit TERYT code (voivodeship code + county number).
    pub code: String,
    pub name: String,
    pub full_name: String,
    pub kind: CountyKind,
    /// Canonical name of the enclosing voivodeship.
    pub voivodeship: String,
}

/// Third-level unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    /// Seven-digit TERYT code (county code + municipality number + type digit).
    pub code: String,
    pub name: String,
    pub full_name: String,
    pub kind: MunicipalityKind,
    /// Canonical name of the enclosing county.
    pub county: String,
    /// Canonical name of the voivodeship the county belongs to.
    pub voivodeship: String,
}

/// Common view over the three unit flavours.
///
/// The lookup policy in the directory is written once against this trait.
pub trait TerritorialUnit {
    const KIND: UnitKind;

    fn code(&self) -> &str;
    fn name(&self) -> &str;
    fn full_name(&self) -> &str;
    /// Canonical name of the immediately enclosing unit.
    fn parent_name(&self) -> Option<&str>;
}

impl TerritorialUnit for Voivodeship {
    const KIND: UnitKind = UnitKind::Voivodeship;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn parent_name(&self) -> Option<&str> {
        None
    }
}

impl TerritorialUnit for County {
    const KIND: UnitKind = UnitKind::County;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn parent_name(&self) -> Option<&str> {
        Some(&self.voivodeship)
    }
}

impl TerritorialUnit for Municipality {
    const KIND: UnitKind = UnitKind::Municipality;

    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn parent_name(&self) -> Option<&str> {
        Some(&self.county)
    }
}

/// A borrowed unit of any level, as returned by kind-generic lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'a> {
    Voivodeship(&'a Voivodeship),
    County(&'a County),
    Municipality(&'a Municipality),
}

impl<'a> Unit<'a> {
    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Voivodeship(_) => UnitKind::Voivodeship,
            Unit::County(_) => UnitKind::County,
            Unit::Municipality(_) => UnitKind::Municipality,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Unit::Voivodeship(unit) => &unit.name,
            Unit::County(unit) => &unit.name,
            Unit::Municipality(unit) => &unit.name,
        }
    }

    pub fn full_name(&self) -> &'a str {
        match self {
            Unit::Voivodeship(unit) => &unit.full_name,
            Unit::County(unit) => &unit.full_name,
            Unit::Municipality(unit) => &unit.full_name,
        }
    }

    pub fn code(&self) -> &'a str {
        match self {
            Unit::Voivodeship(unit) => &unit.code,
            Unit::County(unit) => &unit.code,
            Unit::Municipality(unit) => &unit.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_kind_parses_polish_and_english() {
        assert_eq!("gmina".parse::<UnitKind>(), Ok(UnitKind::Municipality));
        assert_eq!(" Powiat ".parse::<UnitKind>(), Ok(UnitKind::County));
        assert_eq!("voivodeship".parse::<UnitKind>(), Ok(UnitKind::Voivodeship));
        assert!("village".parse::<UnitKind>().is_err());
    }

    #[test]
    fn county_kind_round_trips_through_str() {
        for kind in [CountyKind::County, CountyKind::CityCounty] {
            assert_eq!(kind.as_str().parse::<CountyKind>(), Ok(kind));
        }
    }

    #[test]
    fn municipality_kind_accepts_polish_labels() {
        assert_eq!(
            "miejsko-wiejska".parse::<MunicipalityKind>(),
            Ok(MunicipalityKind::UrbanRural)
        );
        assert_eq!("wiejska".parse::<MunicipalityKind>(), Ok(MunicipalityKind::Rural));
    }

    #[test]
    fn parent_names_follow_hierarchy() {
        let county = County {
            code: "1206".to_string(),
            name: "krakowski".to_string(),
            full_name: "krakowski".to_string(),
            kind: CountyKind::County,
            voivodeship: "malopolskie".to_string(),
        };
        assert_eq!(county.parent_name(), Some("malopolskie"));
        assert_eq!(Unit::County(&county).kind(), UnitKind::County);
        assert_eq!(<County as TerritorialUnit>::KIND, UnitKind::County);
    }
}
