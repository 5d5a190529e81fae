//! In-memory TERYT directory.

use std::path::Path;

use lostfound_model::{
    County, CountyKind, LocationInfo, Municipality, ResolvedUnit, Suggestion, TerritorialUnit,
    Unit, UnitKind, Voivodeship,
};
use tracing::info;

use crate::error::Result;
use crate::loader::{self, ReferenceData, ReferenceSources};
use crate::matching::{MAX_COMPLETIONS, best_match, completions};
use crate::text::canonical_key;

/// A lookup request for any unit kind, with optional parent filters.
///
/// Parent filters are free text and resolve the same way the unit name
/// does. `county` only applies to municipality queries; both filters are
/// ignored for voivodeship queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitQuery<'a> {
    pub kind: UnitKind,
    pub name: &'a str,
    pub county: Option<&'a str>,
    pub voivodeship: Option<&'a str>,
}

impl<'a> UnitQuery<'a> {
    pub fn voivodeship(name: &'a str) -> Self {
        Self {
            kind: UnitKind::Voivodeship,
            name,
            county: None,
            voivodeship: None,
        }
    }

    pub fn county(name: &'a str, voivodeship: Option<&'a str>) -> Self {
        Self {
            kind: UnitKind::County,
            name,
            county: None,
            voivodeship,
        }
    }

    pub fn municipality(name: &'a str, county: Option<&'a str>, voivodeship: Option<&'a str>) -> Self {
        Self {
            kind: UnitKind::Municipality,
            name,
            county,
            voivodeship,
        }
    }
}

/// Which unit kinds [`TerytDirectory::suggest`] searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestScope {
    #[default]
    Municipality,
    County,
    /// Municipalities first, then counties.
    All,
}

/// Read-only gazetteer of voivodeships, counties and municipalities.
///
/// Loaded once and never mutated; share it behind an `Arc` between
/// threads. Lookups never fail: unknown or blank input yields `None`, an
/// empty list or the input echoed back.
#[derive(Debug, Clone)]
pub struct TerytDirectory {
    data: ReferenceData,
    fingerprint: String,
}

impl TerytDirectory {
    /// Directory over the lists compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_sources(&ReferenceSources::builtin())
    }

    /// Directory over the three CSV files in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let directory = Self::from_sources(&ReferenceSources::from_dir(dir)?)?;
        info!(dir = %dir.display(), "using TERYT reference data from directory");
        Ok(directory)
    }

    /// Uses `dir` if given, else the directory named by
    /// `LOSTFOUND_TERYT_DIR`, else the built-in lists.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir.map(Path::to_path_buf).or_else(loader::env_teryt_dir) {
            Some(dir) => Self::from_dir(&dir),
            None => Self::builtin(),
        }
    }

    pub fn from_sources(sources: &ReferenceSources) -> Result<Self> {
        let data = loader::parse_sources(sources)?;
        Self::from_data(data)
    }

    /// Directory over already-built units, validated like loaded data.
    pub fn from_units(
        voivodeships: Vec<Voivodeship>,
        counties: Vec<County>,
        municipalities: Vec<Municipality>,
    ) -> Result<Self> {
        Self::from_data(ReferenceData {
            voivodeships,
            counties,
            municipalities,
        })
    }

    fn from_data(data: ReferenceData) -> Result<Self> {
        loader::validate(&data)?;
        let fingerprint = loader::fingerprint(&data);
        info!(
            voivodeships = data.voivodeships.len(),
            counties = data.counties.len(),
            municipalities = data.municipalities.len(),
            fingerprint = %&fingerprint[..12],
            "loaded TERYT reference data"
        );
        Ok(Self { data, fingerprint })
    }

    /// SHA-256 (hex) of the loaded lists.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn voivodeships(&self) -> &[Voivodeship] {
        &self.data.voivodeships
    }

    pub fn counties(&self) -> &[County] {
        &self.data.counties
    }

    pub fn municipalities(&self) -> &[Municipality] {
        &self.data.municipalities
    }

    /// Resolves a voivodeship by TERYT code or by name.
    pub fn find_voivodeship(&self, query: &str) -> Option<&Voivodeship> {
        let trimmed = query.trim();
        if let Some(unit) = self.data.voivodeships.iter().find(|v| v.code == trimmed) {
            return Some(unit);
        }
        let candidates: Vec<&Voivodeship> = self.data.voivodeships.iter().collect();
        best_match(&candidates, query).map(|found| found.unit)
    }

    /// Resolves a county, optionally within a voivodeship.
    ///
    /// A voivodeship filter that does not resolve yields `None`.
    pub fn find_county(&self, name: &str, voivodeship: Option<&str>) -> Option<&County> {
        let candidates = self.counties_within(voivodeship)?;
        best_match(&candidates, name).map(|found| found.unit)
    }

    /// Resolves a municipality, narrowed by voivodeship and then by county.
    pub fn find_municipality(
        &self,
        name: &str,
        county: Option<&str>,
        voivodeship: Option<&str>,
    ) -> Option<&Municipality> {
        let candidates = self.municipalities_within(county, voivodeship)?;
        best_match(&candidates, name).map(|found| found.unit)
    }

    pub fn find(&self, query: &UnitQuery<'_>) -> Option<Unit<'_>> {
        match query.kind {
            UnitKind::Voivodeship => self.find_voivodeship(query.name).map(Unit::Voivodeship),
            UnitKind::County => self
                .find_county(query.name, query.voivodeship)
                .map(Unit::County),
            UnitKind::Municipality => self
                .find_municipality(query.name, query.county, query.voivodeship)
                .map(Unit::Municipality),
        }
    }

    pub fn validate(&self, query: &UnitQuery<'_>) -> bool {
        self.find(query).is_some()
    }

    /// Canonical name of the resolved unit, or the input unchanged.
    pub fn canonicalize(&self, query: &UnitQuery<'_>) -> String {
        match self.find(query) {
            Some(unit) => unit.name().to_string(),
            None => query.name.to_string(),
        }
    }

    /// Up to ten suggestions of one kind, sorted by canonical name.
    ///
    /// Queries shorter than two characters, and voivodeship filters that do
    /// not resolve, yield no suggestions.
    pub fn autocomplete(
        &self,
        kind: UnitKind,
        query: &str,
        voivodeship: Option<&str>,
    ) -> Vec<Suggestion> {
        match kind {
            UnitKind::Voivodeship => {
                let candidates: Vec<&Voivodeship> = self.data.voivodeships.iter().collect();
                completions(&candidates, query)
                    .into_iter()
                    .map(voivodeship_suggestion)
                    .collect()
            }
            UnitKind::County => match self.counties_within(voivodeship) {
                Some(candidates) => completions(&candidates, query)
                    .into_iter()
                    .map(county_suggestion)
                    .collect(),
                None => Vec::new(),
            },
            UnitKind::Municipality => match self.municipalities_within(None, voivodeship) {
                Some(candidates) => completions(&candidates, query)
                    .into_iter()
                    .map(municipality_suggestion)
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    /// Auto-complete across one or both lower levels.
    pub fn suggest(
        &self,
        scope: SuggestScope,
        query: &str,
        voivodeship: Option<&str>,
    ) -> Vec<Suggestion> {
        let mut out = match scope {
            SuggestScope::Municipality => {
                self.autocomplete(UnitKind::Municipality, query, voivodeship)
            }
            SuggestScope::County => self.autocomplete(UnitKind::County, query, voivodeship),
            SuggestScope::All => {
                let mut all = self.autocomplete(UnitKind::Municipality, query, voivodeship);
                all.extend(self.autocomplete(UnitKind::County, query, voivodeship));
                all
            }
        };
        out.truncate(MAX_COMPLETIONS);
        out
    }

    /// Counties of the resolved voivodeship; empty if it does not resolve.
    pub fn counties_in(&self, voivodeship: &str) -> Vec<&County> {
        if voivodeship.trim().is_empty() {
            return Vec::new();
        }
        self.counties_within(Some(voivodeship)).unwrap_or_default()
    }

    /// Municipalities narrowed by voivodeship and county, in directory order.
    pub fn municipalities_in(
        &self,
        county: Option<&str>,
        voivodeship: Option<&str>,
    ) -> Vec<&Municipality> {
        self.municipalities_within(county, voivodeship)
            .unwrap_or_default()
    }

    /// Resolves a full municipality / county / voivodeship triple.
    pub fn location_info(&self, municipality: &str, county: &str, voivodeship: &str) -> LocationInfo {
        let voivodeship_info = match self.find_voivodeship(voivodeship) {
            Some(unit) => ResolvedUnit {
                capital: Some(unit.capital.clone()),
                ..resolved(voivodeship, unit)
            },
            None => ResolvedUnit::unresolved(voivodeship),
        };
        let county_info = match self.find_county(county, Some(voivodeship)) {
            Some(unit) => ResolvedUnit {
                kind: Some(unit.kind.to_string()),
                ..resolved(county, unit)
            },
            None => ResolvedUnit::unresolved(county),
        };
        let municipality_info =
            match self.find_municipality(municipality, Some(county), Some(voivodeship)) {
                Some(unit) => ResolvedUnit {
                    kind: Some(unit.kind.to_string()),
                    ..resolved(municipality, unit)
                },
                None => ResolvedUnit::unresolved(municipality),
            };
        LocationInfo {
            municipality: municipality_info,
            county: county_info,
            voivodeship: voivodeship_info,
        }
    }

    /// Counties under the voivodeship filter. `None` means the filter was
    /// given but did not resolve.
    fn counties_within(&self, voivodeship: Option<&str>) -> Option<Vec<&County>> {
        match non_blank(voivodeship) {
            Some(query) => {
                let parent = self.find_voivodeship(query)?;
                Some(
                    self.data
                        .counties
                        .iter()
                        .filter(|c| c.voivodeship == parent.name)
                        .collect(),
                )
            }
            None => Some(self.data.counties.iter().collect()),
        }
    }

    fn municipalities_within(
        &self,
        county: Option<&str>,
        voivodeship: Option<&str>,
    ) -> Option<Vec<&Municipality>> {
        let parent = match non_blank(voivodeship) {
            Some(query) => Some(self.find_voivodeship(query)?),
            None => None,
        };
        let county_filter = non_blank(county).map(|q| (q.trim().to_lowercase(), canonical_key(q)));

        Some(
            self.data
                .municipalities
                .iter()
                .filter(|m| parent.is_none_or(|v| m.voivodeship == v.name))
                .filter(|m| match &county_filter {
                    Some((lower, key)) => {
                        m.county.contains(lower.as_str())
                            || (!key.is_empty() && m.county.contains(key.as_str()))
                    }
                    None => true,
                })
                .collect(),
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolved<T: TerritorialUnit>(input: &str, unit: &T) -> ResolvedUnit {
    ResolvedUnit {
        name: Some(unit.name().to_string()),
        full_name: Some(unit.full_name().to_string()),
        code: Some(unit.code().to_string()),
        valid: true,
        ..ResolvedUnit::unresolved(input)
    }
}

fn county_kind_label(kind: CountyKind) -> &'static str {
    match kind {
        CountyKind::County => "powiat",
        CountyKind::CityCounty => "miasto na prawach powiatu",
    }
}

fn voivodeship_suggestion(unit: &Voivodeship) -> Suggestion {
    Suggestion {
        kind: UnitKind::Voivodeship,
        name: unit.name.clone(),
        full_name: unit.full_name.clone(),
        county: None,
        county_kind: None,
        voivodeship: unit.name.clone(),
        label: format!("woj. {}", unit.name),
    }
}

fn county_suggestion(unit: &County) -> Suggestion {
    Suggestion {
        kind: UnitKind::County,
        name: unit.name.clone(),
        full_name: unit.full_name.clone(),
        county: None,
        county_kind: Some(unit.kind),
        voivodeship: unit.voivodeship.clone(),
        label: format!(
            "{} ({}), woj. {}",
            unit.name,
            county_kind_label(unit.kind),
            unit.voivodeship
        ),
    }
}

fn municipality_suggestion(unit: &Municipality) -> Suggestion {
    Suggestion {
        kind: UnitKind::Municipality,
        name: unit.name.clone(),
        full_name: unit.full_name.clone(),
        county: Some(unit.county.clone()),
        county_kind: None,
        voivodeship: unit.voivodeship.clone(),
        label: format!(
            "{}, pow. {}, woj. {}",
            unit.name, unit.county, unit.voivodeship
        ),
    }
}
