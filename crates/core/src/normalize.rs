//! Romanized-field normalization.

/// Normalize a romanized name: trim, collapse internal whitespace runs
/// to single spaces, uppercase. Idempotent — normalizing an already
/// normalized string returns it unchanged.
pub fn normalize_romaji(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
