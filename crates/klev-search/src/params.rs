//! Tunable search parameters.

use std::time::Duration;

use klev_config::Config;
use klev_expand::DEFAULT_MAX_VARIANTS;
use klev_lexicon::DEFAULT_MIN_KEYWORD_LEN;

use crate::{
    retrieve::DEFAULT_CANDIDATE_LIMIT,
    score::{DEFAULT_RESULT_LIMIT, DEFAULT_TITLE_WINDOW},
};

/// Parameters controlling retrieval, scoring and fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum documents fetched per kind.
    pub candidate_limit: usize,
    /// Maximum results returned per kind.
    pub result_limit: usize,
    /// Leading characters treated as the title.
    pub title_window: usize,
    /// Overall deadline for one search, if any.
    pub timeout: Option<Duration>,
    /// Cap on fallback query variants.
    pub max_variants: usize,
    /// Minimum keyword length in characters.
    pub min_keyword_len: usize,
    /// Whether to use the extended stopword lists.
    pub extended_stopwords: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            result_limit: DEFAULT_RESULT_LIMIT,
            title_window: DEFAULT_TITLE_WINDOW,
            timeout: None,
            max_variants: DEFAULT_MAX_VARIANTS,
            min_keyword_len: DEFAULT_MIN_KEYWORD_LEN,
            extended_stopwords: false,
        }
    }
}

impl From<&Config> for SearchParams {
    fn from(config: &Config) -> Self {
        let timeout_ms = config.search.timeout_ms;
        Self {
            candidate_limit: config.search.candidate_limit,
            result_limit: config.search.result_limit,
            title_window: config.search.title_window,
            timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
            max_variants: config.expand.max_variants,
            min_keyword_len: config.lexicon.min_keyword_len,
            extended_stopwords: config.lexicon.extended_stopwords,
        }
    }
}
