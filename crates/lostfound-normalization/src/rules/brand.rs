use super::RuleSet;
use super::text::capitalize_first;

impl RuleSet {
    /// Canonical brand name.
    ///
    /// Exact alias first, then the first alias (in table order) contained
    /// in the input, then the input with its first letter uppercased.
    pub fn standardize_brand(&self, value: &str) -> String {
        let normalized = value.trim().to_lowercase();
        if normalized.is_empty() {
            return value.to_string();
        }
        self.brands
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .or_else(|| {
                self.brands
                    .iter()
                    .find(|(alias, _)| normalized.contains(alias.as_str()))
            })
            .map(|(_, canonical)| canonical.clone())
            .unwrap_or_else(|| capitalize_first(value))
    }

    /// Colour display name: exact table match, else title case.
    pub fn standardize_color(&self, value: &str) -> String {
        match self.colors.get(&value.trim().to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => self.capitalize(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tables::{BRANDS, COLORS, ReferenceTables};

    use super::*;

    fn rules() -> RuleSet {
        RuleSet::new(&ReferenceTables::default()).expect("compile rules")
    }

    #[test]
    fn brand_aliases() {
        let rules = rules();
        assert_eq!(rules.standardize_brand("vw"), "Volkswagen");
        assert_eq!(rules.standardize_brand("  IPHONE "), "Apple");
        assert_eq!(rules.standardize_brand("samsung galaxy s21"), "Samsung");
        assert_eq!(rules.standardize_brand("Mercedes-Benz"), "Mercedes-Benz");
    }

    #[test]
    fn unknown_brand_gets_first_letter_uppercased() {
        let rules = rules();
        assert_eq!(rules.standardize_brand("casio G-Shock"), "Casio G-Shock");
        assert_eq!(rules.standardize_brand(""), "");
    }

    #[test]
    fn canonical_values_are_fixed_points() {
        let rules = rules();
        for (_, canonical) in BRANDS {
            assert_eq!(rules.standardize_brand(canonical), *canonical);
        }
        for (_, canonical) in COLORS {
            assert_eq!(rules.standardize_color(canonical), *canonical);
        }
    }

    #[test]
    fn colors() {
        let rules = rules();
        assert_eq!(rules.standardize_color("BLACK"), "Czarny");
        assert_eq!(rules.standardize_color("zolty"), "Żółty");
        assert_eq!(rules.standardize_color("granatowy z paskami"), "Granatowy z Paskami");
    }
}
