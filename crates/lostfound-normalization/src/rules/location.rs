use regex::Regex;

use super::RuleSet;
use crate::error::{NormalizationError, Result};
use crate::tables::StreetPrefix;

/// One pattern per prefix group, anchored at the start of the text.
///
/// A variant matches as a whole word: followed by a dot, whitespace or the
/// end of the text. Trailing whitespace after the variant is consumed.
pub(super) fn compile(prefixes: &[StreetPrefix]) -> Result<Vec<(Regex, String)>> {
    prefixes
        .iter()
        .filter(|prefix| !prefix.variants.is_empty())
        .map(|prefix| {
            let mut variants: Vec<String> = prefix
                .variants
                .iter()
                .map(|v| regex::escape(v.trim().trim_end_matches('.')))
                .filter(|v| !v.is_empty())
                .collect();
            // Longest first so `ulica` is not cut short by `ul`.
            variants.sort_by_key(|v| std::cmp::Reverse(v.len()));
            let pattern = format!(r"(?i)^(?:{})(?:\.\s*|\s+|$)", variants.join("|"));
            Regex::new(&pattern)
                .map(|re| (re, format!("{} ", prefix.canonical.trim())))
                .map_err(|source| NormalizationError::StreetPrefixPattern {
                    canonical: prefix.canonical.clone(),
                    source,
                })
        })
        .collect()
}

impl RuleSet {
    /// Normalizes a street-type prefix at the start of an address, then
    /// applies [`RuleSet::capitalize`].
    ///
    /// Only the start of the text is examined; `Rynek 1, ulica boczna`
    /// keeps its mid-string `ulica`.
    pub fn standardize_location(&self, text: &str) -> String {
        let mut out = text.trim().to_string();
        for (pattern, replacement) in &self.street_prefixes {
            if let Some(found) = pattern.find(&out) {
                out = format!("{replacement}{}", &out[found.end()..]);
                break;
            }
        }
        self.capitalize(out.trim_end())
    }
}
