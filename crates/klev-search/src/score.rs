//! Keyword relevance scoring and ranking.
//!
//! A keyword earns two points per occurrence in a candidate's content and a
//! five point bonus when it appears near the start, where the title sits.

use klev_lexicon::KeywordSet;

use crate::document::{Candidate, DocumentKind};

/// Default number of characters treated as the title region.
pub const DEFAULT_TITLE_WINDOW: usize = 100;

/// Default number of results kept per document kind.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Points per keyword occurrence.
const OCCURRENCE_POINTS: usize = 2;

/// Bonus for a keyword inside the title window.
const TITLE_BONUS: usize = 5;

/// Matched keywords a report needs once the query has more than this many.
const REPORT_MIN_MATCHED: usize = 2;

/// Score of one candidate against a keyword set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Relevance points.
    pub points: usize,
    /// Distinct keywords found at least once.
    pub matched: usize,
}

/// Scores lowercased content against the keywords.
pub fn score(content: &str, keywords: &KeywordSet, title_window: usize) -> Score {
    let head = head_chars(content, title_window);
    let mut result = Score::default();

    for keyword in keywords {
        let occurrences = content.matches(keyword).count();
        if occurrences == 0 {
            continue;
        }
        result.matched += 1;
        result.points += OCCURRENCE_POINTS * occurrences;
        if head.contains(keyword) {
            result.points += TITLE_BONUS;
        }
    }
    result
}

/// Returns the first `n` characters of `text`, or all of it when shorter.
fn head_chars(text: &str, n: usize) -> &str {
    text.char_indices().nth(n).map_or(text, |(end, _)| &text[..end])
}

/// Returns true if a candidate with this score is kept.
///
/// Reports must match every keyword of a one or two keyword query, and at
/// least two keywords otherwise. Competitions only need a positive score.
pub fn passes(kind: DocumentKind, score: Score, keyword_count: usize) -> bool {
    if score.points == 0 {
        return false;
    }
    match kind {
        DocumentKind::Report => score.matched >= keyword_count.min(REPORT_MIN_MATCHED),
        DocumentKind::Competition => true,
    }
}

/// A candidate paired with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    /// The scored candidate.
    pub candidate: Candidate,
    /// Its score.
    pub score: Score,
}

/// Scores, filters and ranks candidates of one kind.
///
/// Sorting is stable, so equal scores keep retrieval order (newest first).
/// At most `limit` candidates are returned.
pub fn rank(
    kind: DocumentKind,
    candidates: Vec<Candidate>,
    keywords: &KeywordSet,
    title_window: usize,
    limit: usize,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = score(&candidate.content(), keywords, title_window);
            passes(kind, score, keywords.len()).then_some(ScoredCandidate { candidate, score })
        })
        .collect();

    scored.sort_by(|a, b| b.score.points.cmp(&a.score.points));
    scored.truncate(limit);
    scored
}
