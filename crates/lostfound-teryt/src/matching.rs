//! Name matching shared by every unit kind.
//!
//! The directory narrows candidates by parent first and then hands the
//! remaining slice to [`best_match`] or [`completions`]. Candidate order is
//! directory order, and every step returns the first hit in that order.

use lostfound_model::TerritorialUnit;

use crate::text::canonical_key;

/// Minimum query length (in characters) for auto-complete.
pub const MIN_COMPLETION_CHARS: usize = 2;
/// Maximum number of auto-complete results.
pub const MAX_COMPLETIONS: usize = 10;

/// Which resolution step produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchStep {
    /// Query equals the canonical name.
    ExactName,
    /// Query equals the display name, ignoring case.
    ExactFullName,
    /// Query is contained in the canonical or the display name.
    Substring,
    /// Diacritic-folded query and display name contain one another.
    Folded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a, T> {
    pub unit: &'a T,
    pub step: MatchStep,
}

/// Resolves a free-text query against `candidates`.
///
/// Steps are tried in [`MatchStep`] order; a later step only runs when no
/// candidate satisfied the earlier ones. Blank queries never match.
pub fn best_match<'a, T: TerritorialUnit>(candidates: &[&'a T], query: &str) -> Option<Match<'a, T>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let first = |step: MatchStep, pred: &dyn Fn(&T) -> bool| {
        candidates
            .iter()
            .copied()
            .find(|unit| pred(unit))
            .map(|unit| Match { unit, step })
    };

    first(MatchStep::ExactName, &|unit| unit.name() == needle)
        .or_else(|| {
            first(MatchStep::ExactFullName, &|unit| {
                unit.full_name().to_lowercase() == needle
            })
        })
        .or_else(|| {
            first(MatchStep::Substring, &|unit| {
                unit.name().contains(&needle) || unit.full_name().to_lowercase().contains(&needle)
            })
        })
        .or_else(|| {
            let key = canonical_key(&needle);
            if key.is_empty() {
                return None;
            }
            first(MatchStep::Folded, &|unit| {
                let folded = canonical_key(unit.full_name());
                mutually_contains(&folded, &key) || mutually_contains(unit.name(), &key)
            })
        })
}

/// Auto-complete over `candidates`.
///
/// The minimum length applies to the query as typed, surrounding spaces
/// included; matching then uses the trimmed, canonical form. Prefix
/// matches on the canonical name win; when there are none, any canonical
/// name containing the query qualifies. Results are sorted by
/// canonical name (stable, so equal names keep directory order) and capped
/// at [`MAX_COMPLETIONS`].
pub fn completions<'a, T: TerritorialUnit>(candidates: &[&'a T], query: &str) -> Vec<&'a T> {
    if query.chars().count() < MIN_COMPLETION_CHARS {
        return Vec::new();
    }
    let key = canonical_key(query.trim());
    if key.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<&'a T> = candidates
        .iter()
        .copied()
        .filter(|unit| unit.name().starts_with(&key))
        .collect();
    if hits.is_empty() {
        hits = candidates
            .iter()
            .copied()
            .filter(|unit| unit.name().contains(&key))
            .collect();
    }
    hits.sort_by(|a, b| a.name().cmp(b.name()));
    hits.truncate(MAX_COMPLETIONS);
    hits
}

fn mutually_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
