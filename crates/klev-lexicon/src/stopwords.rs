//! Stopword filtering for keyword extraction.
//!
//! The default set holds the functional words (prepositions and conjunctions)
//! that users type around real search terms in Russian and Romanian, plus a
//! handful of English ones. The extended set adds the Stopwords ISO lists for
//! all three languages from the `stop-words` crate.
//!
//! Stopwords are low-value terms that should never become search keywords:
//! a single "на" would match nearly every Russian report in the corpus.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// A stopword filter for Russian, Romanian, and English queries.
///
/// Uses a `HashSet` for O(1) lookup performance. All words are stored in
/// lowercase for case-insensitive matching.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates the default stopword filter with the built-in functional words.
    pub fn new() -> Self {
        let mut words: HashSet<String> = HashSet::new();
        add_words(&mut words, RUSSIAN_FUNCTION_WORDS);
        add_words(&mut words, ROMANIAN_FUNCTION_WORDS);
        add_words(&mut words, ENGLISH_FUNCTION_WORDS);
        Self { words }
    }

    /// Creates a stopword filter extended with the Stopwords ISO lists for
    /// Russian, Romanian, and English.
    pub fn extended() -> Self {
        let mut stopwords = Self::new();
        add_words(&mut stopwords.words, stop_words::get(LANGUAGE::Russian));
        add_words(&mut stopwords.words, stop_words::get(LANGUAGE::Romanian));
        add_words(&mut stopwords.words, stop_words::get(LANGUAGE::English));
        stopwords
    }

    /// Checks if a term is a stopword.
    ///
    /// The check is case-insensitive for all scripts.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Inserts words in lowercase for case-insensitive matching.
fn add_words(words: &mut HashSet<String>, slice: &[&str]) {
    for word in slice {
        words.insert(word.to_lowercase());
    }
}

/// Russian prepositions and conjunctions.
static RUSSIAN_FUNCTION_WORDS: &[&str] = &["на", "в", "о", "по", "и", "с"];

/// Romanian prepositions and conjunctions, written without diacritics as users
/// usually type them.
static ROMANIAN_FUNCTION_WORDS: &[&str] = &["la", "pe", "in", "despre", "si", "cu"];

/// English articles and conjunctions.
static ENGLISH_FUNCTION_WORDS: &[&str] = &["the", "a", "an", "of", "and", "or"];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_russian_function_words() {
        let sw = Stopwords::new();
        for word in ["на", "в", "о", "по", "и", "с"] {
            assert!(sw.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn contains_romanian_function_words() {
        let sw = Stopwords::new();
        for word in ["la", "pe", "in", "despre", "si", "cu"] {
            assert!(sw.contains(word), "{word} should be a stopword");
        }
    }

    #[test]
    fn contains_english_function_words() {
        let sw = Stopwords::new();
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(sw.contains("of"));
    }

    #[test]
    fn case_insensitive_for_cyrillic() {
        let sw = Stopwords::new();
        assert!(sw.contains("НА"));
        assert!(sw.contains("На"));
        assert!(sw.contains("The"));
    }

    #[test]
    fn domain_terms_are_not_stopwords() {
        let sw = Stopwords::new();
        assert!(!sw.contains("днестр"));
        assert!(!sw.contains("рыбалка"));
        assert!(!sw.contains("lacul"));
        assert!(!sw.contains("competitie"));
        assert!(!sw.contains("ianuarie"));
    }

    #[test]
    fn default_set_is_small() {
        let sw = Stopwords::new();
        assert_eq!(sw.len(), 18);
        assert!(!sw.is_empty());
    }

    #[test]
    fn extended_set_is_a_superset() {
        let base = Stopwords::new();
        let extended = Stopwords::extended();
        assert!(extended.len() > base.len());
        assert!(extended.contains("на"));
        assert!(extended.contains("despre"));
    }
}
