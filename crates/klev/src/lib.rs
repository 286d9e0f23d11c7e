//! klev: multilingual fishing search
//!
//! Command-line front end for searching fishing reports and competitions
//! written in Russian and Romanian. Queries are reduced to keywords, matched
//! against a JSON corpus, and retried with translated and transliterated
//! variants when the query as typed finds nothing.

#![warn(missing_docs)]

pub mod cli;
