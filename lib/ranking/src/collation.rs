//! Base-level collation keys for company names.
//!
//! Names compare equal when they differ only in case or diacritics, so
//! "Émile" and "emile" tie and fall through to the id tie-break.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort key comparing names at base level (case and accents ignored)
pub fn name_key(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
