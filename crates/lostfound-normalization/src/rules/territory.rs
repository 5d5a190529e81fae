use lostfound_teryt::TerytDirectory;

use super::RuleSet;

impl RuleSet {
    /// Canonical voivodeship name.
    ///
    /// Tries the directory (when given), then the built-in alias table,
    /// then falls back to title case.
    pub fn standardize_voivodeship(&self, value: &str, directory: Option<&TerytDirectory>) -> String {
        if let Some(unit) = directory.and_then(|teryt| teryt.find_voivodeship(value)) {
            return unit.name.clone();
        }
        match self.voivodeship_aliases.get(&value.trim().to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => self.capitalize(value),
        }
    }

    /// Canonical county name within `voivodeship`, else title case.
    pub fn standardize_county(
        &self,
        value: &str,
        voivodeship: Option<&str>,
        directory: Option<&TerytDirectory>,
    ) -> String {
        match directory.and_then(|teryt| teryt.find_county(value, voivodeship)) {
            Some(unit) => unit.name.clone(),
            None => self.capitalize(value),
        }
    }

    /// Canonical municipality name within `county` and `voivodeship`, else
    /// title case.
    pub fn standardize_municipality(
        &self,
        value: &str,
        county: Option<&str>,
        voivodeship: Option<&str>,
        directory: Option<&TerytDirectory>,
    ) -> String {
        match directory.and_then(|teryt| teryt.find_municipality(value, county, voivodeship)) {
            Some(unit) => unit.name.clone(),
            None => self.capitalize(value),
        }
    }
}
