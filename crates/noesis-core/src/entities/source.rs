use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Author;

/// A bibliographic source a definition is quoted from. The `kind` union
/// carries the book-, journal-, or web-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub submitted_by: String,
    pub submitted_date: DateTime<Utc>,
    pub title: String,
    /// Associated authors, in the order the server returns them.
    pub authors: Vec<Author>,
    pub kind: SourceKind,
}

/// Type-specific payload of a [`Source`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceKind {
    Book(BookDetails),
    Journal(JournalDetails),
    Web(WebDetails),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BookDetails {
    pub publication_date: DateTime<Utc>,
    pub publication_place: String,
    pub pages_from: u32,
    pub pages_to: u32,
    pub edition: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub ean: Option<String>,
    pub doi: Option<String>,
    /// Online edition of the book, if one exists.
    pub web: Option<WebDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JournalDetails {
    pub article_name: String,
    pub publication_date: DateTime<Utc>,
    pub publication_place: String,
    pub pages_from: u32,
    pub pages_to: u32,
    pub doi: Option<String>,
    pub edition: Option<String>,
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WebDetails {
    pub url: String,
    pub access_date: DateTime<Utc>,
    pub publication_date: Option<DateTime<Utc>>,
}
