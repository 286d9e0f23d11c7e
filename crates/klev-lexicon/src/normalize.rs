//! Text normalization and tokenization.
//!
//! Query text arrives in Russian, Romanian, or a mix of both, often with
//! punctuation glued to words. Normalization lowercases, replaces every
//! character that is not a letter, digit, or whitespace with a space, and
//! splits on whitespace. Letter and digit classification is Unicode-aware, so
//! Cyrillic and Romanian diacritics survive intact.

/// Returns true if a character is kept by normalization.
fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || c.is_whitespace()
}

/// Normalizes text into an ordered sequence of lowercase tokens.
///
/// Returns an empty vector for empty or all-whitespace input, which callers
/// treat as "no query".
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Normalizes text and joins the tokens with single spaces.
pub fn normalize_text(text: &str) -> String {
    normalize(text).join(" ")
}

/// Splits text into lowercase whitespace-separated words without stripping
/// punctuation.
///
/// Date detection runs over these words so that composite dates such as
/// `18.01.2026` are seen as a single unit.
pub fn split_words(text: &str) -> Vec<String> {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Lowercases and trims a query without touching its punctuation.
pub fn fold_query(text: &str) -> String {
    text.trim().to_lowercase()
}
