//! Searchable documents and search results.
//!
//! Stores hand documents over untyped. [`Candidate::decode`] projects them
//! onto the few fields search needs; documents that lack an identifier or a
//! title are skipped rather than failing the whole search.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// An untyped document as returned by a store.
pub type RawDocument = Map<String, Value>;

/// The two kinds of searchable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A fishing report with free text and photos.
    Report,
    /// A competition announcement with a location.
    Competition,
}

impl DocumentKind {
    /// Every kind, in result order.
    pub const ALL: [Self; 2] = [Self::Report, Self::Competition];

    /// Store collection holding documents of this kind.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Report => "reports",
            Self::Competition => "competitions",
        }
    }

    /// Fields matched against keywords.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Report => &["title", "text"],
            Self::Competition => &["title", "location"],
        }
    }

    /// Field holding the document body.
    fn body_field(self) -> &'static str {
        match self {
            Self::Report => "text",
            Self::Competition => "location",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report => write!(f, "report"),
            Self::Competition => write!(f, "competition"),
        }
    }
}

/// A typed projection of a store document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Document kind.
    pub kind: DocumentKind,
    /// Store identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Report text or competition location.
    pub body: String,
    /// Number of attached photos (reports only).
    pub photos_count: usize,
    /// Creation time, if the document has a readable one.
    pub created_at: Option<DateTime<Utc>>,
}

impl Candidate {
    /// Decodes a raw document.
    ///
    /// Returns `None` when the identifier (`id` or `_id`) or the title is
    /// missing or not a string. A missing body decodes as empty.
    pub fn decode(kind: DocumentKind, raw: &RawDocument) -> Option<Self> {
        let Some(id) = raw.get("id").or_else(|| raw.get("_id")).and_then(id_string) else {
            debug!(%kind, "skipping document without a string id");
            return None;
        };
        let Some(title) = raw.get("title").and_then(Value::as_str) else {
            debug!(%kind, id = %id, "skipping document without a string title");
            return None;
        };

        let body = raw
            .get(kind.body_field())
            .and_then(Value::as_str)
            .unwrap_or_default();
        let photos_count = match kind {
            DocumentKind::Report => raw
                .get("photos")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
            DocumentKind::Competition => 0,
        };

        Some(Self {
            kind,
            id,
            title: title.to_string(),
            body: body.to_string(),
            photos_count,
            created_at: raw.get("createdAt").and_then(parse_timestamp),
        })
    }

    /// Lowercased `title + " " + body`, the text keywords are scored against.
    pub fn content(&self) -> String {
        format!("{} {}", self.title, self.body).to_lowercase()
    }

    /// Converts the candidate into its public result form.
    pub fn into_result(self) -> SearchResult {
        match self.kind {
            DocumentKind::Report => SearchResult {
                kind: self.kind,
                id: self.id,
                title: self.title,
                text: Some(self.body),
                location: None,
                has_photos: Some(self.photos_count > 0),
                photos_count: Some(self.photos_count),
            },
            DocumentKind::Competition => SearchResult {
                kind: self.kind,
                id: self.id,
                title: self.title,
                text: None,
                location: Some(self.body),
                has_photos: None,
                photos_count: None,
            },
        }
    }
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Document kind.
    pub kind: DocumentKind,
    /// Store identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Report text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Competition location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether the report has photos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_photos: Option<bool>,
    /// Number of report photos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos_count: Option<usize>,
}

/// Reads an identifier: a plain string or an extended-JSON `{"$oid": "..."}`.
fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Reads a timestamp.
///
/// Accepts an RFC 3339 string, integer milliseconds since the epoch, or an
/// extended-JSON `{"$date": ...}` wrapper around either.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        Value::Object(map) => map.get("$date").and_then(parse_timestamp),
        _ => None,
    }
}
