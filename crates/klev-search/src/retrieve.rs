//! Candidate retrieval from a document store.

use klev_lexicon::KeywordSet;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    document::{Candidate, DocumentKind},
    error::StoreError,
    store::{DocumentStore, FindQuery},
};

/// Default number of candidates fetched per document kind.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 20;

/// Fetches candidates of one kind that mention any of the keywords.
///
/// An empty keyword set returns no candidates without contacting the store.
/// Documents that fail to decode are skipped.
pub fn retrieve<S: DocumentStore + ?Sized>(
    store: &S,
    kind: DocumentKind,
    keywords: &KeywordSet,
    limit: usize,
    cancel: &CancellationToken,
) -> Result<Vec<Candidate>, StoreError> {
    if keywords.is_empty() {
        return Ok(Vec::new());
    }

    let query = FindQuery::for_kind(kind, keywords, limit);
    let raw = store.find(&query, cancel)?;
    let fetched = raw.len();
    let candidates: Vec<Candidate> = raw
        .iter()
        .filter_map(|doc| Candidate::decode(kind, doc))
        .collect();

    debug!(
        %kind,
        fetched,
        decoded = candidates.len(),
        pattern = %query.pattern(),
        "retrieved candidates"
    );
    Ok(candidates)
}
