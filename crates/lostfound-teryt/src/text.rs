//! Diacritic folding and canonical keys for Polish place names.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritics, keeping case.
///
/// Canonical decomposition handles every Polish letter except `ł`, which
/// has no decomposition and is mapped explicitly.
///
/// ```
/// use lostfound_teryt::fold_diacritics;
///
/// assert_eq!(fold_diacritics("Łódź"), "Lodz");
/// assert_eq!(fold_diacritics("Świętokrzyskie"), "Swietokrzyskie");
/// ```
pub fn fold_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'ł' => 'l',
            'Ł' => 'L',
            other => other,
        })
        .collect()
}

/// Canonical form of a place name: folded, lowercase, words joined by `-`.
///
/// Any run of characters that are not letters or digits becomes a single
/// separator, so `"Bielsko - Biała"` and `"bielsko_biała"` share a key.
///
/// ```
/// use lostfound_teryt::canonical_key;
///
/// assert_eq!(canonical_key("Kostrzyn nad Odrą"), "kostrzyn-nad-odra");
/// assert_eq!(canonical_key("  Bielsko - Biała "), "bielsko-biala");
/// ```
pub fn canonical_key(text: &str) -> String {
    let folded = fold_diacritics(text).to_lowercase();
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
