//! Query orchestration: keyword search with a variant fallback.

use std::{
    fmt,
    time::{Duration, Instant},
};

use klev_expand::Expander;
use klev_lexicon::{KeywordExtractor, KeywordSet, Stopwords, fold_query};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    document::{DocumentKind, SearchResult},
    error::{SearchError, StoreError},
    params::SearchParams,
    retrieve::retrieve,
    score::rank,
    store::DocumentStore,
};

/// Which query produced a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "query", rename_all = "lowercase")]
pub enum ResultSource {
    /// The query as typed.
    Original,
    /// A fallback variant of the query.
    Variant(String),
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original query"),
            Self::Variant(variant) => write!(f, "variant \"{variant}\""),
        }
    }
}

/// How a search arrived at its results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    /// The query that produced the results, or `None` if nothing matched.
    pub source: Option<ResultSource>,
    /// Keywords of the producing query (of the original when nothing matched).
    pub keywords: Vec<String>,
    /// Number of fallback variants searched.
    pub variants_tried: usize,
}

/// Wall-clock budget of one search.
#[derive(Debug, Clone, Copy)]
struct Deadline {
    /// When the search started.
    start: Instant,
    /// Allowed duration.
    timeout: Option<Duration>,
}

impl Deadline {
    /// Starts the clock.
    fn start(timeout: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }

    /// Returns the timeout in milliseconds if it has passed.
    fn expired(&self) -> Option<u64> {
        let timeout = self.timeout?;
        (self.start.elapsed() >= timeout)
            .then(|| u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Searches reports and competitions in a document store.
///
/// Queries are reduced to keywords, matched against the store, scored and
/// ranked per kind. When the query as typed finds nothing, its Russian and
/// Romanian variants are tried in order until one does.
#[derive(Debug)]
pub struct Searcher<S> {
    /// Document source.
    store: S,
    /// Query to keyword reduction.
    extractor: KeywordExtractor,
    /// Fallback variant generation.
    expander: Expander,
    /// Limits and tuning.
    params: SearchParams,
    /// Cancels in-flight and future searches.
    cancel: CancellationToken,
}

impl<S: DocumentStore> Searcher<S> {
    /// Creates a searcher with default parameters.
    pub fn new(store: S) -> Self {
        Self::with_params(store, SearchParams::default())
    }

    /// Creates a searcher with the given parameters.
    pub fn with_params(store: S, params: SearchParams) -> Self {
        let stopwords = if params.extended_stopwords {
            Stopwords::extended()
        } else {
            Stopwords::new()
        };
        Self {
            store,
            extractor: KeywordExtractor::new(stopwords, params.min_keyword_len),
            expander: Expander::new(params.max_variants),
            params,
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Sets the per-search timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.params.timeout = timeout;
        self
    }

    /// Returns the search parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Returns the cancellation token shared with store calls.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Returns the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the keywords a query reduces to.
    pub fn keywords(&self, query: &str) -> KeywordSet {
        self.extractor.extract(query)
    }

    /// Searches reports and competitions, falling back to query variants.
    ///
    /// Reports come before competitions. A blank query returns no results
    /// without contacting the store.
    pub fn search_all(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.search_all_with_report(query).map(|(results, _)| results)
    }

    /// Like [`Self::search_all`], also describing which query matched.
    pub fn search_all_with_report(
        &self,
        query: &str,
    ) -> Result<(Vec<SearchResult>, SearchReport), SearchError> {
        let mut report = SearchReport::default();
        if query.trim().is_empty() {
            return Ok((Vec::new(), report));
        }

        let deadline = Deadline::start(self.params.timeout);
        let keywords = self.extractor.extract(query);
        report.keywords = keywords.as_slice().to_vec();
        if keywords.is_empty() {
            debug!(query, "no keywords in query");
            return Ok((Vec::new(), report));
        }

        let results = self.search_keywords(&keywords, &deadline)?;
        if !results.is_empty() {
            report.source = Some(ResultSource::Original);
            return Ok((results, report));
        }

        let original = fold_query(query);
        for variant in self.expander.expand(query) {
            if variant == original {
                continue;
            }
            report.variants_tried += 1;
            let variant_keywords = self.extractor.extract(&variant);
            debug!(%variant, keywords = ?variant_keywords.as_slice(), "trying fallback variant");

            let results = self.search_keywords(&variant_keywords, &deadline)?;
            if !results.is_empty() {
                info!(
                    query,
                    %variant,
                    results = results.len(),
                    "fallback variant matched"
                );
                report.keywords = variant_keywords.as_slice().to_vec();
                report.source = Some(ResultSource::Variant(variant));
                return Ok((results, report));
            }
        }

        debug!(query, variants_tried = report.variants_tried, "no results");
        Ok((Vec::new(), report))
    }

    /// Searches one document kind for the query as typed, without fallback.
    pub fn search_kind(
        &self,
        query: &str,
        kind: DocumentKind,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let deadline = Deadline::start(self.params.timeout);
        let keywords = self.extractor.extract(query);
        self.search_one(kind, &keywords, &deadline)
    }

    /// Searches every kind for a keyword set.
    fn search_keywords(
        &self,
        keywords: &KeywordSet,
        deadline: &Deadline,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut results = Vec::new();
        for kind in DocumentKind::ALL {
            results.extend(self.search_one(kind, keywords, deadline)?);
        }
        Ok(results)
    }

    /// Retrieves, scores and ranks one kind.
    fn search_one(
        &self,
        kind: DocumentKind,
        keywords: &KeywordSet,
        deadline: &Deadline,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }
        self.checkpoint(deadline)?;

        let candidates = retrieve(
            &self.store,
            kind,
            keywords,
            self.params.candidate_limit,
            &self.cancel,
        )
        .map_err(|e| match e {
            StoreError::Cancelled => SearchError::Cancelled,
            other => SearchError::Store(other),
        })?;

        let ranked = rank(
            kind,
            candidates,
            keywords,
            self.params.title_window,
            self.params.result_limit,
        );
        debug!(%kind, results = ranked.len(), "ranked candidates");
        Ok(ranked
            .into_iter()
            .map(|scored| scored.candidate.into_result())
            .collect())
    }

    /// Fails if the search was cancelled or ran out of time.
    fn checkpoint(&self, deadline: &Deadline) -> Result<(), SearchError> {
        if self.cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        if let Some(ms) = deadline.expired() {
            return Err(SearchError::TimedOut(ms));
        }
        Ok(())
    }
}
