//! Query text analysis for fishing report and competition search.
//!
//! Queries arrive in Russian, Romanian, or a mix of both. This crate turns raw
//! query text into the keyword set that drives retrieval and scoring:
//!
//! 1. **Normalization**: lowercase, strip punctuation, split on whitespace
//! 2. **Date detection**: "18 января" or `18.01.2026` becomes the zero-padded
//!    `DD.MM` tokens used in stored titles
//! 3. **Filtering**: stopwords and tokens below the minimum length are dropped
//!
//! It also classifies chat-style small talk so that greetings never reach the
//! document store.

#![warn(missing_docs)]

mod date;
mod intent;
mod keyword;
mod months;
mod normalize;
mod stopwords;

pub use date::{DateParts, detect_date_tokens};
pub use intent::{Intent, detect_intent};
pub use keyword::{DEFAULT_MIN_KEYWORD_LEN, KeywordExtractor, KeywordSet, extract_keywords};
pub use months::month_number;
pub use normalize::{fold_query, normalize, normalize_text, split_words};
pub use stopwords::Stopwords;
