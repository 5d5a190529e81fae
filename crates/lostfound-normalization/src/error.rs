use thiserror::Error;

/// Failure to compile reference tables into rules.
///
/// Standardizing a record never fails; only building the rule set can.
#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("spelling entry `{typo}` does not compile: {source}")]
    SpellingPattern {
        typo: String,
        #[source]
        source: regex::Error,
    },

    #[error("street prefix `{canonical}` does not compile: {source}")]
    StreetPrefixPattern {
        canonical: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
