// crates/pinmap-core/src/text.rs

/// Convert a string into a folded key suitable for matching and dedup keys.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII.
///
/// # Examples
///
/// ```
/// use pinmap_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Zürich"), "zurich");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and lowercasing.
///
/// Matches strings that differ only in diacritics or case, which is the
/// comparison used for recents/saved-place keys.
///
/// # Examples
///
/// ```
/// use pinmap_core::text::equals_folded;
///
/// assert!(equals_folded("Straße", "strasse"));
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Berlin", "Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_diacritics_and_case() {
        assert_eq!(fold_key("São Paulo"), "sao paulo");
        assert_eq!(fold_key("PARIS"), "paris");
    }

    #[test]
    fn folded_equality() {
        assert!(equals_folded("Genève", "geneve"));
        assert!(!equals_folded("Lyon", "Lille"));
    }
}
