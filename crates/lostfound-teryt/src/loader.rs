//! Reference data sources and load-time validation.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use lostfound_model::{
    County, CountyKind, Municipality, MunicipalityKind, UnitKind, Voivodeship,
};

use sha2::{Digest, Sha256};

use crate::csv_utils::{Row, read_csv_rows, require};
use crate::error::{Result, TerytError};
use crate::text::canonical_key;

/// Environment variable for overriding the reference data directory.
pub const TERYT_DIR_ENV_VAR: &str = "LOSTFOUND_TERYT_DIR";

pub const VOIVODESHIPS_FILE: &str = "voivodeships.csv";
pub const COUNTIES_FILE: &str = "counties.csv";
pub const MUNICIPALITIES_FILE: &str = "municipalities.csv";

const BUILTIN_VOIVODESHIPS: &str = include_str!("../data/voivodeships.csv");
const BUILTIN_COUNTIES: &str = include_str!("../data/counties.csv");
const BUILTIN_MUNICIPALITIES: &str = include_str!("../data/municipalities.csv");

/// CSV text of the three reference lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSources {
    pub voivodeships: String,
    pub counties: String,
    pub municipalities: String,
}

impl ReferenceSources {
    /// Lists compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            voivodeships: BUILTIN_VOIVODESHIPS.to_string(),
            counties: BUILTIN_COUNTIES.to_string(),
            municipalities: BUILTIN_MUNICIPALITIES.to_string(),
        }
    }

    /// Reads `voivodeships.csv`, `counties.csv` and `municipalities.csv`
    /// from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            std::fs::read_to_string(&path).map_err(|err| TerytError::io(path, err))
        };
        Ok(Self {
            voivodeships: read(VOIVODESHIPS_FILE)?,
            counties: read(COUNTIES_FILE)?,
            municipalities: read(MUNICIPALITIES_FILE)?,
        })
    }
}

/// Directory named by [`TERYT_DIR_ENV_VAR`], if set and non-empty.
pub fn env_teryt_dir() -> Option<PathBuf> {
    std::env::var_os(TERYT_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Parsed and cross-checked reference lists, in file order.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReferenceData {
    pub voivodeships: Vec<Voivodeship>,
    pub counties: Vec<County>,
    pub municipalities: Vec<Municipality>,
}

pub(crate) fn parse_sources(sources: &ReferenceSources) -> Result<ReferenceData> {
    let voivodeships = read_csv_rows(VOIVODESHIPS_FILE, sources.voivodeships.as_bytes())?
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_voivodeship(row, idx + 1))
        .collect::<Result<Vec<_>>>()?;
    let counties = read_csv_rows(COUNTIES_FILE, sources.counties.as_bytes())?
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_county(row, idx + 1))
        .collect::<Result<Vec<_>>>()?;
    let municipalities = read_csv_rows(MUNICIPALITIES_FILE, sources.municipalities.as_bytes())?
        .iter()
        .enumerate()
        .map(|(idx, row)| parse_municipality(row, idx + 1))
        .collect::<Result<Vec<_>>>()?;

    Ok(ReferenceData {
        voivodeships,
        counties,
        municipalities,
    })
}

fn parse_voivodeship(row: &Row, row_number: usize) -> Result<Voivodeship> {
    let src = VOIVODESHIPS_FILE;
    Ok(Voivodeship {
        code: require(row, "code", src, row_number)?,
        name: canonical_name(require(row, "name", src, row_number)?, src, row_number)?,
        full_name: require(row, "full_name", src, row_number)?,
        capital: require(row, "capital", src, row_number)?,
    })
}

fn parse_county(row: &Row, row_number: usize) -> Result<County> {
    let src = COUNTIES_FILE;
    let kind: CountyKind = require(row, "kind", src, row_number)?
        .parse()
        .map_err(|err: lostfound_model::ModelError| invalid(src, row_number, err.to_string()))?;
    Ok(County {
        code: require(row, "code", src, row_number)?,
        name: canonical_name(require(row, "name", src, row_number)?, src, row_number)?,
        full_name: require(row, "full_name", src, row_number)?,
        kind,
        voivodeship: require(row, "voivodeship", src, row_number)?,
    })
}

fn parse_municipality(row: &Row, row_number: usize) -> Result<Municipality> {
    let src = MUNICIPALITIES_FILE;
    let kind: MunicipalityKind = require(row, "kind", src, row_number)?
        .parse()
        .map_err(|err: lostfound_model::ModelError| invalid(src, row_number, err.to_string()))?;
    Ok(Municipality {
        code: require(row, "code", src, row_number)?,
        name: canonical_name(require(row, "name", src, row_number)?, src, row_number)?,
        full_name: require(row, "full_name", src, row_number)?,
        kind,
        county: require(row, "county", src, row_number)?,
        voivodeship: require(row, "voivodeship", src, row_number)?,
    })
}

/// Canonical names must already be in canonical form; lookups compare
/// them verbatim.
fn canonical_name(name: String, src: &str, row_number: usize) -> Result<String> {
    let key = canonical_key(&name);
    if key == name {
        Ok(name)
    } else {
        Err(invalid(
            src,
            row_number,
            format!("name `{name}` is not canonical (expected `{key}`)"),
        ))
    }
}

fn invalid(src: &str, row_number: usize, message: String) -> TerytError {
    TerytError::InvalidValue {
        source_name: src.to_string(),
        row: row_number,
        message,
    }
}

/// Checks parent references and uniqueness across the three lists.
pub(crate) fn validate(data: &ReferenceData) -> Result<()> {
    let mut voivodeship_names = BTreeSet::new();
    let mut voivodeship_codes = BTreeSet::new();
    for unit in &data.voivodeships {
        unique(&mut voivodeship_names, UnitKind::Voivodeship, "name", &unit.name)?;
        unique(&mut voivodeship_codes, UnitKind::Voivodeship, "code", &unit.code)?;
    }

    let mut county_keys = BTreeSet::new();
    let mut county_codes = BTreeSet::new();
    for unit in &data.counties {
        if !voivodeship_names.contains(unit.voivodeship.as_str()) {
            return Err(TerytError::UnknownParent {
                kind: UnitKind::County,
                name: unit.name.clone(),
                parent: unit.voivodeship.clone(),
            });
        }
        let key = format!("{}/{}", unit.voivodeship, unit.name);
        unique(&mut county_keys, UnitKind::County, "name", &key)?;
        unique(&mut county_codes, UnitKind::County, "code", &unit.code)?;
    }

    let mut municipality_codes = BTreeSet::new();
    for unit in &data.municipalities {
        let parent = format!("{}/{}", unit.voivodeship, unit.county);
        if !county_keys.contains(&parent) {
            return Err(TerytError::UnknownParent {
                kind: UnitKind::Municipality,
                name: unit.name.clone(),
                parent,
            });
        }
        unique(&mut municipality_codes, UnitKind::Municipality, "code", &unit.code)?;
    }
    Ok(())
}

fn unique(
    seen: &mut BTreeSet<String>,
    kind: UnitKind,
    what: &'static str,
    value: &str,
) -> Result<()> {
    if seen.insert(value.to_string()) {
        Ok(())
    } else {
        Err(TerytError::Duplicate {
            kind,
            what,
            value: value.to_string(),
        })
    }
}

/// SHA-256 (hex) over one tab-separated line per unit, so CSV quoting,
/// whitespace and BOMs do not affect it.
pub(crate) fn fingerprint(data: &ReferenceData) -> String {
    let mut hasher = Sha256::new();
    for unit in &data.voivodeships {
        hasher.update(format!(
            "V\t{}\t{}\t{}\t{}\n",
            unit.code, unit.name, unit.full_name, unit.capital
        ));
    }
    for unit in &data.counties {
        hasher.update(format!(
            "C\t{}\t{}\t{}\t{}\t{}\n",
            unit.code, unit.name, unit.full_name, unit.kind, unit.voivodeship
        ));
    }
    for unit in &data.municipalities {
        hasher.update(format!(
            "M\t{}\t{}\t{}\t{}\t{}\t{}\n",
            unit.code, unit.name, unit.full_name, unit.kind, unit.county, unit.voivodeship
        ));
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sources_parse_and_validate() {
        let data = parse_sources(&ReferenceSources::builtin()).expect("parse builtin");
        assert_eq!(data.voivodeships.len(), 16);
        assert!(!data.counties.is_empty());
        assert!(!data.municipalities.is_empty());
        validate(&data).expect("builtin data is consistent");
    }

    #[test]
    fn fingerprint_ignores_csv_formatting() {
        let plain = ReferenceSources {
            voivodeships: "code,name,full_name,capital\n12,malopolskie,małopolskie,Kraków\n"
                .to_string(),
            counties: "code,name,full_name,kind,voivodeship\n".to_string(),
            municipalities: "code,name,full_name,kind,county,voivodeship\n".to_string(),
        };
        let padded = ReferenceSources {
            voivodeships: "\u{feff}code, name, full_name, capital\n 12 , malopolskie , małopolskie , Kraków \n"
                .to_string(),
            ..plain.clone()
        };
        let a = fingerprint(&parse_sources(&plain).expect("plain"));
        let b = fingerprint(&parse_sources(&padded).expect("padded"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn rejects_non_canonical_name() {
        let sources = ReferenceSources {
            voivodeships: "code,name,full_name,capital\n12,Małopolskie,małopolskie,Kraków\n"
                .to_string(),
            counties: "code,name,full_name,kind,voivodeship\n".to_string(),
            municipalities: "code,name,full_name,kind,county,voivodeship\n".to_string(),
        };
        let err = parse_sources(&sources).unwrap_err();
        assert!(matches!(err, TerytError::InvalidValue { row: 1, .. }), "{err}");
    }

    #[test]
    fn rejects_unknown_county_kind() {
        let sources = ReferenceSources {
            voivodeships: "code,name,full_name,capital\n12,malopolskie,małopolskie,Kraków\n"
                .to_string(),
            counties: "code,name,full_name,kind,voivodeship\n1206,krakowski,krakowski,district,malopolskie\n"
                .to_string(),
            municipalities: "code,name,full_name,kind,county,voivodeship\n".to_string(),
        };
        let err = parse_sources(&sources).unwrap_err();
        assert!(err.to_string().contains("unknown county kind"), "{err}");
    }
}
