//! Keyword extraction from query text.

use std::{collections::HashSet, slice};

use serde::Serialize;
use tracing::debug;

use crate::{
    date::detect_date_tokens,
    normalize::{normalize, split_words},
    stopwords::Stopwords,
};

/// Default minimum keyword length in characters.
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 2;

/// A deduplicated set of keywords.
///
/// Keeps first-insertion order so that store filters and log lines are
/// deterministic; matching and scoring never depend on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    /// Keywords in first-insertion order.
    words: Vec<String>,
}

impl KeywordSet {
    /// Creates an empty keyword set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyword, returning true if it was not already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.words.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Returns true if the keyword is present.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the keywords.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Returns the keywords as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Returns the keywords as an unordered set.
    pub fn to_set(&self) -> HashSet<String> {
        self.words.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Extracts search keywords from query text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Words never used as keywords.
    stopwords: Stopwords,
    /// Tokens shorter than this many characters are dropped.
    min_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(Stopwords::new(), DEFAULT_MIN_KEYWORD_LEN)
    }
}

impl KeywordExtractor {
    /// Creates an extractor with the given stopwords and minimum length.
    pub fn new(stopwords: Stopwords, min_len: usize) -> Self {
        Self { stopwords, min_len }
    }

    /// Returns the stopwords used by this extractor.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Extracts keywords from a query.
    ///
    /// Date tokens synthesized from the query ("18 января" gives `18.01`,
    /// `18-01`, `18/01`) come first, followed by every normalized token that
    /// is not a stopword and is at least `min_len` characters long.
    pub fn extract(&self, query: &str) -> KeywordSet {
        let mut keywords = KeywordSet::new();

        for token in detect_date_tokens(&split_words(query)) {
            keywords.insert(token);
        }

        for token in normalize(query) {
            if token.is_empty() || self.stopwords.contains(&token) {
                continue;
            }
            if token.chars().count() < self.min_len {
                continue;
            }
            keywords.insert(token);
        }

        debug!(query, keywords = ?keywords.as_slice(), "extracted keywords");
        keywords
    }
}

/// Extracts keywords from a query with the default extractor.
pub fn extract_keywords(query: &str) -> KeywordSet {
    KeywordExtractor::default().extract(query)
}
