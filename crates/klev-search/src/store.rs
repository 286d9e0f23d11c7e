//! Document store contract and an in-memory JSON implementation.

use std::{
    cmp::Reverse,
    collections::HashMap,
    fs,
    path::Path,
    sync::Arc,
};

use klev_lexicon::KeywordSet;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    document::{DocumentKind, RawDocument, parse_timestamp},
    error::StoreError,
};

/// A keyword lookup against one collection.
///
/// A document matches when any of `fields` contains any of `keywords` as a
/// case-insensitive substring. Matches come back newest first, at most
/// `limit` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    /// Collection name.
    pub collection: String,
    /// Fields searched for keywords.
    pub fields: Vec<String>,
    /// Regex-escaped keywords.
    pub keywords: Vec<String>,
    /// Maximum number of documents returned.
    pub limit: usize,
}

impl FindQuery {
    /// Builds the lookup for a document kind.
    pub fn for_kind(kind: DocumentKind, keywords: &KeywordSet, limit: usize) -> Self {
        Self {
            collection: kind.collection().to_string(),
            fields: kind.fields().iter().map(|f| (*f).to_string()).collect(),
            keywords: keywords.iter().map(regex::escape).collect(),
            limit,
        }
    }

    /// The keyword disjunction as a regex pattern.
    pub fn pattern(&self) -> String {
        self.keywords.join("|")
    }

    /// Compiles the keyword disjunction into a case-insensitive regex.
    pub fn compile(&self) -> Result<Regex, StoreError> {
        RegexBuilder::new(&self.pattern())
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

/// A read-only source of searchable documents.
pub trait DocumentStore: Send + Sync {
    /// Returns the documents matching `query`, newest first.
    ///
    /// Implementations should return [`StoreError::Cancelled`] once `cancel`
    /// fires.
    fn find(
        &self,
        query: &FindQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawDocument>, StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn find(
        &self,
        query: &FindQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawDocument>, StoreError> {
        (**self).find(query, cancel)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn find(
        &self,
        query: &FindQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawDocument>, StoreError> {
        (**self).find(query, cancel)
    }
}

/// Documents held in memory, keyed by collection.
///
/// Loads from JSON corpus files shaped like
/// `{"reports": [...], "competitions": [...]}`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Collection name to documents, in load order.
    collections: HashMap<String, Vec<RawDocument>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document to a collection.
    pub fn insert(&mut self, collection: &str, document: RawDocument) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
    }

    /// Returns the number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, Vec::len)
    }

    /// Returns true if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.collections.values().all(Vec::is_empty)
    }

    /// Parses a corpus from JSON text.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| StoreError::Malformed(format!("invalid JSON: {e}")))?;
        let mut store = Self::new();
        store.extend_from_value(value)?;
        Ok(store)
    }

    /// Loads a corpus file.
    pub fn load_file(path: &Path) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.add_file(path)?;
        Ok(store)
    }

    /// Loads and merges several corpus files, in order.
    pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for path in paths {
            store.add_file(path.as_ref())?;
        }
        Ok(store)
    }

    /// Adds the documents of a corpus file.
    pub fn add_file(&mut self, path: &Path) -> Result<(), StoreError> {
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        self.extend_from_value(value)?;
        debug!(path = %path.display(), "loaded corpus");
        Ok(())
    }

    /// Adds every collection of a parsed corpus.
    fn extend_from_value(&mut self, value: Value) -> Result<(), StoreError> {
        let Value::Object(collections) = value else {
            return Err(StoreError::Malformed(
                "corpus must be an object of collections".to_string(),
            ));
        };

        for (name, documents) in collections {
            let Value::Array(documents) = documents else {
                return Err(StoreError::Malformed(format!(
                    "collection '{name}' must be an array"
                )));
            };
            for (i, document) in documents.into_iter().enumerate() {
                let Value::Object(document) = document else {
                    return Err(StoreError::Malformed(format!(
                        "{name}[{i}] must be an object"
                    )));
                };
                self.insert(&name, document);
            }
        }
        Ok(())
    }
}

/// Returns true if any of the fields holds a string matching `pattern`.
fn matches_any(document: &RawDocument, fields: &[String], pattern: &Regex) -> bool {
    fields.iter().any(|field| {
        document
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|text| pattern.is_match(text))
    })
}

impl DocumentStore for MemoryStore {
    fn find(
        &self,
        query: &FindQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawDocument>, StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if query.keywords.is_empty() {
            return Ok(Vec::new());
        }
        let Some(documents) = self.collections.get(&query.collection) else {
            return Ok(Vec::new());
        };

        let pattern = query.compile()?;
        let mut hits = Vec::new();
        for document in documents {
            if cancel.is_cancelled() {
                return Err(StoreError::Cancelled);
            }
            if matches_any(document, &query.fields, &pattern) {
                let created = document.get("createdAt").and_then(parse_timestamp);
                hits.push((document, created));
            }
        }

        // Newest first; undated documents last, in load order.
        hits.sort_by_key(|(_, created)| Reverse(*created));
        Ok(hits
            .into_iter()
            .take(query.limit)
            .map(|(document, _)| document.clone())
            .collect())
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn corpus() -> MemoryStore {
        MemoryStore::from_json(
            &json!({
                "reports": [
                    {"id": "old", "title": "Днестр весной", "text": "", "createdAt": "2025-04-01T00:00:00Z"},
                    {"id": "undated", "title": "Днестр без даты", "text": ""},
                    {"id": "new", "title": "Рыбалка", "text": "на ДНЕСТРЕ", "createdAt": "2026-01-18T00:00:00Z"},
                    {"id": "other", "title": "Озеро", "text": "карп", "createdAt": "2026-02-01T00:00:00Z"}
                ],
                "competitions": []
            })
            .to_string(),
        )
        .unwrap()
    }

    fn find(store: &MemoryStore, query: &FindQuery) -> Vec<String> {
        store
            .find(query, &CancellationToken::new())
            .unwrap()
            .iter()
            .map(|d| d["id"].as_str().unwrap().to_string())
            .collect()
    }

    fn keywords(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn builds_query_for_kind() {
        let q = FindQuery::for_kind(DocumentKind::Competition, &keywords(&["18.01", "lac"]), 20);
        assert_eq!(q.collection, "competitions");
        assert_eq!(q.fields, vec!["title", "location"]);
        assert_eq!(q.keywords, vec![r"18\.01", "lac"]);
        assert_eq!(q.pattern(), r"18\.01|lac");
    }

    #[test]
    fn matches_case_insensitively_newest_first() {
        let store = corpus();
        let q = FindQuery::for_kind(DocumentKind::Report, &keywords(&["днестр"]), 20);
        assert_eq!(find(&store, &q), vec!["new", "old", "undated"]);
    }

    #[test]
    fn respects_limit() {
        let store = corpus();
        let q = FindQuery::for_kind(DocumentKind::Report, &keywords(&["днестр"]), 2);
        assert_eq!(find(&store, &q), vec!["new", "old"]);
    }

    #[test]
    fn escaped_keywords_match_literally() {
        let mut store = MemoryStore::new();
        let doc = json!({"id": "d", "title": "Этап 18.01.2026", "location": "Данчены"});
        let decoy = json!({"id": "x", "title": "Этап 18-01", "location": ""});
        for value in [doc, decoy] {
            if let Value::Object(map) = value {
                store.insert("competitions", map);
            }
        }
        let q = FindQuery::for_kind(DocumentKind::Competition, &keywords(&["18.01"]), 20);
        assert_eq!(find(&store, &q), vec!["d"]);
    }

    #[test]
    fn empty_keywords_and_unknown_collections() {
        let store = corpus();
        let q = FindQuery::for_kind(DocumentKind::Report, &KeywordSet::new(), 20);
        assert!(find(&store, &q).is_empty());
        let q = FindQuery::for_kind(DocumentKind::Competition, &keywords(&["днестр"]), 20);
        assert!(find(&store, &q).is_empty());
    }

    #[test]
    fn cancelled_token_aborts() {
        let store = corpus();
        let token = CancellationToken::new();
        token.cancel();
        let q = FindQuery::for_kind(DocumentKind::Report, &keywords(&["днестр"]), 20);
        assert!(matches!(store.find(&q, &token), Err(StoreError::Cancelled)));
    }

    #[test]
    fn rejects_malformed_corpus() {
        assert!(matches!(
            MemoryStore::from_json("[]"),
            Err(StoreError::Malformed(_))
        ));
        assert!(matches!(
            MemoryStore::from_json(r#"{"reports": {}}"#),
            Err(StoreError::Malformed(_))
        ));
        assert!(matches!(
            MemoryStore::from_json(r#"{"reports": [1]}"#),
            Err(StoreError::Malformed(_))
        ));
        assert!(matches!(
            MemoryStore::from_json("{"),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn loads_and_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        fs::write(&a, r#"{"reports": [{"id": "1", "title": "t"}]}"#).unwrap();
        fs::write(&b, r#"{"reports": [{"id": "2", "title": "t"}], "competitions": []}"#).unwrap();

        let store = MemoryStore::load_files(&[a, b]).unwrap();
        assert_eq!(store.len("reports"), 2);
        assert_eq!(store.len("competitions"), 0);
        assert!(!store.is_empty());
    }

    #[test]
    fn load_errors_carry_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            MemoryStore::load_file(&missing),
            Err(StoreError::Read { path, .. }) if path == missing
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();
        assert!(matches!(
            MemoryStore::load_file(&broken),
            Err(StoreError::Parse { .. })
        ));
    }
}
