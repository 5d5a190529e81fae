//! TERYT territorial directory.
//!
//! Loads the voivodeship / county / municipality reference lists and
//! answers name queries against them with tolerance for case, partial
//! input and missing diacritics.
//!
//! ```
//! use lostfound_teryt::{TerytDirectory, UnitQuery};
//!
//! let teryt = TerytDirectory::builtin().expect("built-in reference data");
//! let county = teryt.find_county("Kraków", Some("małopolskie")).expect("county");
//! assert_eq!(county.name, "krakow");
//! assert_eq!(teryt.canonicalize(&UnitQuery::voivodeship("śląskie")), "slaskie");
//! ```

#![deny(unsafe_code)]

mod csv_utils;
pub mod directory;
pub mod error;
pub mod loader;
pub mod matching;
pub mod text;

pub use directory::{SuggestScope, TerytDirectory, UnitQuery};
pub use error::{Result, TerytError};
pub use loader::{ReferenceSources, TERYT_DIR_ENV_VAR};
pub use matching::{MAX_COMPLETIONS, MIN_COMPLETION_CHARS, Match, MatchStep, best_match, completions};
pub use text::{canonical_key, fold_diacritics};
