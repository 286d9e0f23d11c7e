//! Keyword search over fishing reports and competitions.
//!
//! A [`Searcher`] reduces a free-text query to keywords, fetches matching
//! documents from a [`DocumentStore`], scores them and returns the best
//! [`SearchResult`]s per kind. If the query as typed matches nothing, its
//! Russian and Romanian variants are searched in turn.
//!
//! ```
//! use klev_search::{MemoryStore, Searcher};
//!
//! let store = MemoryStore::from_json(
//!     r#"{"reports": [{"id": "r1", "title": "Отчет о Днестре", "text": ""}]}"#,
//! )?;
//! let results = Searcher::new(store).search_all("днестр")?;
//! assert_eq!(results[0].id, "r1");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod params;
mod retrieve;
mod score;
mod searcher;
mod store;

pub use document::{Candidate, DocumentKind, RawDocument, SearchResult, parse_timestamp};
pub use error::{SearchError, StoreError};
pub use params::SearchParams;
pub use retrieve::{DEFAULT_CANDIDATE_LIMIT, retrieve};
pub use score::{
    DEFAULT_RESULT_LIMIT, DEFAULT_TITLE_WINDOW, Score, ScoredCandidate, passes, rank, score,
};
pub use searcher::{ResultSource, SearchReport, Searcher};
pub use store::{DocumentStore, FindQuery, MemoryStore};
