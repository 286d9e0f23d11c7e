//! Russian/Romanian query expansion.
//!
//! When a query finds nothing, the search falls back to alternate phrasings:
//! each word (or known multi-word place name) is substituted with its
//! translations from a built-in dictionary and with its Latin
//! transliteration, and every combination becomes a query variant.
//!
//! ```
//! let variants = klev_expand::expand("озеро данчены");
//! assert_eq!(variants[0], "озеро данчены");
//! assert!(variants.contains(&"lacul danceni".to_string()));
//! ```

#![warn(missing_docs)]

mod dictionary;
mod expand;
mod translit;

pub use dictionary::Dictionary;
pub use expand::{DEFAULT_MAX_VARIANTS, Expander, Expansion, Unit, expand};
pub use translit::{contains_cyrillic, transliterate};
