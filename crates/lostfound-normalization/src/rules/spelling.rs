use regex::{NoExpand, Regex};

use super::RuleSet;
use crate::error::{NormalizationError, Result};

/// One whole-word, case-insensitive pattern per misspelling.
pub(super) fn compile(entries: &[(String, String)]) -> Result<Vec<(Regex, String)>> {
    entries
        .iter()
        .filter(|(typo, _)| !typo.trim().is_empty())
        .map(|(typo, correction)| {
            let typo = typo.trim().to_lowercase();
            let pattern = format!(r"(?i)\b{}\b", regex::escape(&typo));
            Regex::new(&pattern)
                .map(|re| (re, correction.clone()))
                .map_err(|source| NormalizationError::SpellingPattern { typo, source })
        })
        .collect()
}

impl RuleSet {
    /// Lowercases `text` and replaces every whole-word misspelling.
    ///
    /// Words are delimited by Unicode word boundaries, so `dowodu` is left
    /// alone while `dowod` becomes `dowód`.
    pub fn correct_spelling(&self, text: &str) -> String {
        let mut out = text.to_lowercase();
        for (pattern, correction) in &self.spelling {
            if pattern.is_match(&out) {
                out = pattern
                    .replace_all(&out, NoExpand(correction.as_str()))
                    .into_owned();
            }
        }
        out
    }
}
