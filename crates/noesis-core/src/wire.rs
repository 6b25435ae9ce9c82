//! Wire-format records and their one-way conversion into domain entities.
//!
//! The backend speaks camelCase JSON with dates as RFC 3339 strings and
//! type-specific fields nested under per-variant property bags
//! (`personProperties`, `bookProperties`, …). Conversion flattens each record
//! into its tagged-union domain shape exactly once, at the fetch boundary;
//! the reverse direction is never needed.
//!
//! Type and status tags arrive as raw strings so an out-of-contract value
//! surfaces as a [`ConvertError`] naming the record and the tag, not as an
//! opaque deserialize failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    Author, AuthorKind, BookDetails, Definition, JournalDetails, Rejection, ReviewStatus, Source,
    SourceKind, Stats, UserDefinition, WebDetails,
};
use crate::enums::Category;
use crate::errors::ConvertError;

// ── Wire records ───────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedAuthor {
    pub id: String,
    pub slug_id: String,
    pub submitted_by: String,
    pub submitted_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub person_properties: Option<PersonProperties>,
    pub organization_properties: Option<OrganizationProperties>,
}

/// Person variant bag. Also the payload of author create/change requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonProperties {
    pub first_name: String,
    pub last_name: String,
}

/// Organization variant bag. Also the payload of author create/change requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationProperties {
    pub organization_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedSource {
    pub id: String,
    pub submitted_by: String,
    pub submitted_date: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub authors: Vec<FetchedAuthor>,
    pub book_properties: Option<FetchedBookProperties>,
    pub journal_properties: Option<FetchedJournalProperties>,
    pub web_properties: Option<FetchedWebProperties>,
}

/// Book variant bag. Also the payload of source create/change requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FetchedBookProperties {
    pub publication_date: String,
    pub publication_place: String,
    pub pages_from: u32,
    pub pages_to: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<FetchedWebProperties>,
}

/// Journal variant bag. Also the payload of source create/change requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FetchedJournalProperties {
    pub article_name: String,
    pub publication_date: String,
    pub publication_place: String,
    pub pages_from: u32,
    pub pages_to: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

/// Web variant bag. Also the payload of source create/change requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FetchedWebProperties {
    pub url: String,
    pub access_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedDefinition {
    pub id: String,
    pub category: Category,
    pub content: String,
    pub source: FetchedSource,
    pub submitted_by: String,
    pub submitted_on: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedUserDefinition {
    #[serde(flatten)]
    pub definition: FetchedDefinition,
    pub status: String,
    pub declinement_message: Option<String>,
    #[serde(default)]
    pub rejections: Vec<FetchedRejection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedRejection {
    pub rejected_by: String,
    pub rejected_on: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedStats {
    pub definition_count: u64,
    pub source_count: u64,
    pub author_count: u64,
    pub current_quarter_definition_count: u64,
    pub current_quarter_source_count: u64,
    pub current_quarter_author_count: u64,
}

// ── Scalar helpers ─────────────────────────────────────────────────

/// Parse a wire date string (RFC 3339) into `DateTime<Utc>`.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidDate`] naming the wire field.
pub fn parse_wire_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, ConvertError> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| ConvertError::InvalidDate {
            field,
            value: value.to_string(),
        })
}

/// Parse an optional wire date string; absent stays absent.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidDate`] if a present value does not parse.
pub fn parse_wire_date_opt(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ConvertError> {
    value.map(|v| parse_wire_date(field, v)).transpose()
}

/// Convert every element of `items`, preserving order and cardinality.
///
/// The first failing element aborts the whole conversion; no partial
/// output is ever produced.
///
/// # Errors
///
/// Returns the first converter error.
pub fn convert_all<T, U, E>(
    items: Vec<T>,
    convert: impl Fn(T) -> Result<U, E>,
) -> Result<Vec<U>, E> {
    items.into_iter().map(convert).collect()
}

// ── Record conversions ─────────────────────────────────────────────

impl TryFrom<FetchedAuthor> for Author {
    type Error = ConvertError;

    fn try_from(fetched: FetchedAuthor) -> Result<Self, ConvertError> {
        let submitted_date = parse_wire_date("submittedDate", &fetched.submitted_date)?;

        let kind = match fetched.kind.as_str() {
            "person" => {
                let bag = fetched
                    .person_properties
                    .ok_or_else(|| ConvertError::MissingProperties {
                        id: fetched.id.clone(),
                        kind: fetched.kind.clone(),
                    })?;
                AuthorKind::Person {
                    first_name: bag.first_name,
                    last_name: bag.last_name,
                }
            }
            "organization" => {
                let bag =
                    fetched
                        .organization_properties
                        .ok_or_else(|| ConvertError::MissingProperties {
                            id: fetched.id.clone(),
                            kind: fetched.kind.clone(),
                        })?;
                AuthorKind::Organization {
                    organization_name: bag.organization_name,
                }
            }
            _ => {
                return Err(ConvertError::UnknownType {
                    id: fetched.id,
                    kind: fetched.kind,
                });
            }
        };

        Ok(Self {
            id: fetched.id,
            slug_id: fetched.slug_id,
            submitted_by: fetched.submitted_by,
            submitted_date,
            kind,
        })
    }
}

impl TryFrom<FetchedWebProperties> for WebDetails {
    type Error = ConvertError;

    fn try_from(fetched: FetchedWebProperties) -> Result<Self, ConvertError> {
        Ok(Self {
            url: fetched.url,
            access_date: parse_wire_date("accessDate", &fetched.access_date)?,
            publication_date: parse_wire_date_opt(
                "publicationDate",
                fetched.publication_date.as_deref(),
            )?,
        })
    }
}

impl TryFrom<FetchedBookProperties> for BookDetails {
    type Error = ConvertError;

    fn try_from(fetched: FetchedBookProperties) -> Result<Self, ConvertError> {
        Ok(Self {
            publication_date: parse_wire_date("publicationDate", &fetched.publication_date)?,
            publication_place: fetched.publication_place,
            pages_from: fetched.pages_from,
            pages_to: fetched.pages_to,
            edition: fetched.edition,
            publisher: fetched.publisher,
            isbn: fetched.isbn,
            ean: fetched.ean,
            doi: fetched.doi,
            web: fetched.web.map(WebDetails::try_from).transpose()?,
        })
    }
}

impl TryFrom<FetchedJournalProperties> for JournalDetails {
    type Error = ConvertError;

    fn try_from(fetched: FetchedJournalProperties) -> Result<Self, ConvertError> {
        Ok(Self {
            article_name: fetched.article_name,
            publication_date: parse_wire_date("publicationDate", &fetched.publication_date)?,
            publication_place: fetched.publication_place,
            pages_from: fetched.pages_from,
            pages_to: fetched.pages_to,
            doi: fetched.doi,
            edition: fetched.edition,
            publisher: fetched.publisher,
        })
    }
}

impl TryFrom<FetchedSource> for Source {
    type Error = ConvertError;

    fn try_from(fetched: FetchedSource) -> Result<Self, ConvertError> {
        let submitted_date = parse_wire_date("submittedDate", &fetched.submitted_date)?;
        let authors = convert_all(fetched.authors, Author::try_from)?;

        let kind = match fetched.kind.as_str() {
            "book" => {
                let bag = fetched
                    .book_properties
                    .ok_or_else(|| ConvertError::MissingProperties {
                        id: fetched.id.clone(),
                        kind: fetched.kind.clone(),
                    })?;
                SourceKind::Book(bag.try_into()?)
            }
            "journal" => {
                let bag =
                    fetched
                        .journal_properties
                        .ok_or_else(|| ConvertError::MissingProperties {
                            id: fetched.id.clone(),
                            kind: fetched.kind.clone(),
                        })?;
                SourceKind::Journal(bag.try_into()?)
            }
            "web" => {
                let bag = fetched
                    .web_properties
                    .ok_or_else(|| ConvertError::MissingProperties {
                        id: fetched.id.clone(),
                        kind: fetched.kind.clone(),
                    })?;
                SourceKind::Web(bag.try_into()?)
            }
            _ => {
                return Err(ConvertError::UnknownType {
                    id: fetched.id,
                    kind: fetched.kind,
                });
            }
        };

        Ok(Self {
            id: fetched.id,
            submitted_by: fetched.submitted_by,
            submitted_date,
            title: fetched.title,
            authors,
            kind,
        })
    }
}

impl TryFrom<FetchedDefinition> for Definition {
    type Error = ConvertError;

    fn try_from(fetched: FetchedDefinition) -> Result<Self, ConvertError> {
        Ok(Self {
            id: fetched.id,
            category: fetched.category,
            content: fetched.content,
            source: fetched.source.try_into()?,
            submitted_by: fetched.submitted_by,
            submitted_on: parse_wire_date("submittedOn", &fetched.submitted_on)?,
        })
    }
}

impl TryFrom<FetchedRejection> for Rejection {
    type Error = ConvertError;

    fn try_from(fetched: FetchedRejection) -> Result<Self, ConvertError> {
        Ok(Self {
            rejected_by: fetched.rejected_by,
            rejected_on: parse_wire_date("rejectedOn", &fetched.rejected_on)?,
            reason: fetched.reason,
        })
    }
}

impl TryFrom<FetchedUserDefinition> for UserDefinition {
    type Error = ConvertError;

    fn try_from(fetched: FetchedUserDefinition) -> Result<Self, ConvertError> {
        let status = match fetched.status.as_str() {
            "approved" => ReviewStatus::Approved,
            "pending" => ReviewStatus::Pending,
            "declined" => ReviewStatus::Declined {
                declinement_message: fetched.declinement_message,
            },
            _ => {
                return Err(ConvertError::UnknownType {
                    id: fetched.definition.id,
                    kind: fetched.status,
                });
            }
        };

        Ok(Self {
            definition: fetched.definition.try_into()?,
            status,
            rejections: convert_all(fetched.rejections, Rejection::try_from)?,
        })
    }
}

impl From<FetchedStats> for Stats {
    fn from(fetched: FetchedStats) -> Self {
        Self {
            definition_count: fetched.definition_count,
            source_count: fetched.source_count,
            author_count: fetched.author_count,
            current_quarter_definition_count: fetched.current_quarter_definition_count,
            current_quarter_source_count: fetched.current_quarter_source_count,
            current_quarter_author_count: fetched.current_quarter_author_count,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────
