//! Query variant generation.

use std::collections::HashSet;

use klev_lexicon::fold_query;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    dictionary::Dictionary,
    translit::{contains_cyrillic, transliterate},
};

/// Default cap on the number of generated variants.
pub const DEFAULT_MAX_VARIANTS: usize = 256;

/// One segment of a query: a single word or a dictionary phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// The unit as it appears in the normalized query.
    pub text: String,
    /// True if the unit is a multi-word dictionary phrase.
    pub phrase: bool,
    /// The unit itself, its translations, then its transliteration.
    pub options: Vec<String>,
}

impl Unit {
    /// Builds a unit and its substitution options.
    fn new(dictionary: &Dictionary, text: String, phrase: bool) -> Self {
        let mut options = vec![text.clone()];
        if let Some(translations) = dictionary.lookup(&text) {
            options.extend(translations.iter().map(|t| (*t).to_string()));
        }
        if contains_cyrillic(&text) {
            let latin = transliterate(&text);
            if latin != text {
                options.push(latin);
            }
        }

        let mut seen = HashSet::new();
        options.retain(|o| seen.insert(o.clone()));

        Self {
            text,
            phrase,
            options,
        }
    }
}

/// The full result of expanding a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expansion {
    /// The lowercased, trimmed query.
    pub query: String,
    /// Query segments with their options.
    pub units: Vec<Unit>,
    /// Distinct variants, the normalized query first.
    pub variants: Vec<String>,
    /// True if generation stopped at the variant cap.
    pub truncated: bool,
}

/// An ordered list of distinct, non-empty variants.
#[derive(Debug, Default)]
struct VariantList {
    /// Variants in insertion order.
    items: Vec<String>,
    /// Membership index over `items`.
    seen: HashSet<String>,
}

impl VariantList {
    /// Adds a variant unless it is empty or already present.
    fn push(&mut self, variant: String) {
        if variant.is_empty() || self.seen.contains(&variant) {
            return;
        }
        self.seen.insert(variant.clone());
        self.items.push(variant);
    }

    /// Number of variants collected.
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Expands queries into Russian/Romanian variants.
#[derive(Debug, Clone, Copy)]
pub struct Expander {
    /// Upper bound on the number of variants returned.
    max_variants: usize,
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VARIANTS)
    }
}

impl Expander {
    /// Creates an expander returning at most `max_variants` variants.
    ///
    /// A cap of zero is treated as one: the query itself is always returned.
    pub fn new(max_variants: usize) -> Self {
        Self {
            max_variants: max_variants.max(1),
        }
    }

    /// Returns the variant cap.
    pub fn max_variants(&self) -> usize {
        self.max_variants
    }

    /// Expands a query into its variants.
    ///
    /// The lowercased, trimmed query always comes first. An empty query
    /// yields a single empty variant.
    pub fn expand(&self, query: &str) -> Vec<String> {
        self.expand_detailed(query).variants
    }

    /// Expands a query, keeping the segmentation for diagnostics.
    pub fn expand_detailed(&self, query: &str) -> Expansion {
        let query = fold_query(query);
        if query.is_empty() {
            return Expansion {
                query,
                units: Vec::new(),
                variants: vec![String::new()],
                truncated: false,
            };
        }

        let dictionary = Dictionary::builtin();
        let words: Vec<&str> = query.split_whitespace().collect();
        let units = segment(dictionary, &words);

        let whole = contains_cyrillic(&query)
            .then(|| transliterate(&query))
            .filter(|latin| *latin != query);

        // Leave room for the whole-query transliteration.
        let product_cap = if whole.is_some() {
            self.max_variants.saturating_sub(1).max(1)
        } else {
            self.max_variants
        };

        let mut variants = VariantList::default();
        variants.push(query.clone());
        let truncated = combine(&units, &mut variants, product_cap);
        if let Some(latin) = whole
            && variants.len() < self.max_variants
        {
            variants.push(latin);
        }

        if truncated {
            warn!(
                %query,
                max_variants = self.max_variants,
                "query expansion truncated at variant cap"
            );
        }
        debug!(%query, variants = variants.len(), "expanded query");

        Expansion {
            query,
            units,
            variants: variants.items,
            truncated,
        }
    }
}

/// Expands a query with the default expander.
pub fn expand(query: &str) -> Vec<String> {
    Expander::default().expand(query)
}

/// Splits words into units, preferring the longest dictionary phrase at each
/// position.
fn segment(dictionary: &Dictionary, words: &[&str]) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let longest = dictionary.max_phrase_words().min(words.len() - i);
        let phrase = (2..=longest)
            .rev()
            .map(|n| (n, words[i..i + n].join(" ")))
            .find(|(_, p)| dictionary.lookup(p).is_some());

        match phrase {
            Some((n, text)) => {
                units.push(Unit::new(dictionary, text, true));
                i += n;
            }
            None => {
                units.push(Unit::new(dictionary, words[i].to_string(), false));
                i += 1;
            }
        }
    }
    units
}

/// Adds the Cartesian product of unit options to `variants` until it holds
/// `cap` entries. The first unit varies slowest.
///
/// Returns true if combinations were left ungenerated.
fn combine(units: &[Unit], variants: &mut VariantList, cap: usize) -> bool {
    if units.is_empty() {
        return false;
    }

    let mut index = vec![0usize; units.len()];
    loop {
        if variants.len() >= cap {
            return true;
        }

        let combo: Vec<&str> = units
            .iter()
            .zip(&index)
            .map(|(unit, &i)| unit.options[i].as_str())
            .collect();
        variants.push(combo.join(" "));

        if !advance(units, &mut index) {
            return false;
        }
    }
}

/// Steps the odometer to the next combination, last unit fastest.
///
/// Returns false once every combination has been visited.
fn advance(units: &[Unit], index: &mut [usize]) -> bool {
    for pos in (0..units.len()).rev() {
        index[pos] += 1;
        if index[pos] < units[pos].options.len() {
            return true;
        }
        index[pos] = 0;
    }
    false
}
