//! Definition resource client.
//!
//! Besides the usual CRUD shape, definitions carry the review workflow:
//! submit, approve, reject (with a reason appended to the rejection log),
//! and the own-definitions listing that exposes status and rejection
//! history to the submitting user.

use noesis_core::entities::{Definition, UserDefinition};
use noesis_core::enums::Category;
use noesis_core::wire::{FetchedDefinition, FetchedUserDefinition, convert_all};

use crate::page::{PageCountRequest, PageRequest};
use crate::transport::ApiClient;
use crate::ClientError;

/// Listing size used by the landing page when the caller has no preference.
pub const DEFAULT_NEWEST_LIMIT: u32 = 4;

#[derive(Debug, serde::Deserialize)]
struct GetDefinitionResponse {
    definition: FetchedDefinition,
}

#[derive(Debug, serde::Deserialize)]
struct GetDefinitionsResponse {
    definitions: Vec<FetchedDefinition>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetUserDefinitionsResponse {
    user_definitions: Vec<FetchedUserDefinition>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitDefinitionResponse {
    definition_id: String,
}

#[derive(Debug, serde::Deserialize)]
struct PageCountResponse {
    count: u64,
}

#[derive(Debug, serde::Serialize)]
struct RejectDefinitionRequest {
    id: String,
    /// Free-text reason shown to the submitter.
    content: String,
}

/// Sparse predicate narrowing a definition listing.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionFilter {
    /// Text-contains match on the definition content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
    /// Publication years of the quoted source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishing_years: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDefinitionRequest {
    pub category: Category,
    pub content: String,
    pub source_id: String,
}

/// Partial update keyed by id; omitted fields leave the server state
/// unchanged.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDefinitionRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl ApiClient {
    /// Fetch the most recently approved definitions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or a record cannot be converted.
    pub async fn newest_definitions(&self, limit: u32) -> Result<Vec<Definition>, ClientError> {
        let response: GetDefinitionsResponse = self
            .get(
                "definitions/newest_definitions",
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(convert_all(response.definitions, Definition::try_from)?)
    }

    /// Fetch a single definition by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or the record cannot be converted.
    pub async fn definition_by_id(&self, id: &str) -> Result<Definition, ClientError> {
        let response: GetDefinitionResponse = self
            .get("definitions/definition", &[("id", id.to_string())])
            .await?;
        Ok(response.definition.try_into()?)
    }

    /// Fetch one page of definitions, in server order. Passing a token uses
    /// the protected variant of the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or a record cannot be converted.
    pub async fn definition_page(
        &self,
        request: &PageRequest<DefinitionFilter>,
        token: Option<&str>,
    ) -> Result<Vec<Definition>, ClientError> {
        let response: GetDefinitionsResponse = match token {
            Some(token) => self.post_authed("definitions/page", request, token).await?,
            None => self.post("definitions/page", request).await?,
        };
        Ok(convert_all(response.definitions, Definition::try_from)?)
    }

    /// Count pages matching the filter at the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn definition_page_count(
        &self,
        request: &PageCountRequest<DefinitionFilter>,
        token: Option<&str>,
    ) -> Result<u64, ClientError> {
        let response: PageCountResponse = match token {
            Some(token) => {
                self.post_authed("definitions/page_count", request, token)
                    .await?
            }
            None => self.post("definitions/page_count", request).await?,
        };
        Ok(response.count)
    }

    /// Fetch one page of the caller's own definitions, including review
    /// status and the rejection log. Requires authentication; only the
    /// owning or reviewing user may see rejection history.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or a record cannot be converted.
    pub async fn own_definition_page(
        &self,
        token: &str,
        request: &PageRequest<DefinitionFilter>,
    ) -> Result<Vec<UserDefinition>, ClientError> {
        let response: GetUserDefinitionsResponse = self
            .post_authed("definitions/own_page", request, token)
            .await?;
        Ok(convert_all(
            response.user_definitions,
            UserDefinition::try_from,
        )?)
    }

    /// Submit a new definition for review. Returns the new definition's id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn submit_definition(
        &self,
        token: &str,
        request: &SubmitDefinitionRequest,
    ) -> Result<String, ClientError> {
        let response: SubmitDefinitionResponse = self
            .post_authed("definitions/submit", request, token)
            .await?;
        Ok(response.definition_id)
    }

    /// Change an existing definition.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn change_definition(
        &self,
        token: &str,
        request: &ChangeDefinitionRequest,
    ) -> Result<(), ClientError> {
        let _ack: String = self.put_authed("definitions", request, token).await?;
        Ok(())
    }

    /// Delete a definition. Nothing references a definition, so the
    /// response carries no dependent ids.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn delete_definition(&self, token: &str, id: &str) -> Result<(), ClientError> {
        let _ack: String = self
            .delete_authed("definitions", &[("id", id.to_string())], token)
            .await?;
        Ok(())
    }

    /// Approve a pending definition.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn approve_definition(&self, token: &str, id: &str) -> Result<(), ClientError> {
        let _ack: String = self
            .get_authed("definitions/approve", &[("id", id.to_string())], token)
            .await?;
        Ok(())
    }

    /// Reject a definition with a reason. The server appends the reason to
    /// the rejection log and flips the status to declined.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn reject_definition(
        &self,
        token: &str,
        id: &str,
        reason: &str,
    ) -> Result<(), ClientError> {
        let request = RejectDefinitionRequest {
            id: id.to_string(),
            content: reason.to_string(),
        };
        let _ack: String = self
            .post_authed("definitions/reject", &request, token)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const WIRE_DEFINITION: &str = r#"{
        "id": "d-1",
        "category": "machine_intelligence",
        "content": "Goal-directed behavior under resource bounds.",
        "source": {
            "id": "s-9",
            "submittedBy": "u-7",
            "submittedDate": "2023-05-10T12:00:00Z",
            "title": "On Minds",
            "type": "web",
            "authors": [],
            "webProperties": {
                "url": "https://example.org/on-minds",
                "accessDate": "2023-05-09T00:00:00Z"
            }
        },
        "submittedBy": "u-3",
        "submittedOn": "2023-06-01T18:00:00Z"
    }"#;

    #[test]
    fn submit_request_serializes_camel_case() {
        let request = SubmitDefinitionRequest {
            category: Category::MachineIntelligence,
            content: "Goal-directed behavior.".into(),
            source_id: "s-9".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "category": "machine_intelligence",
                "content": "Goal-directed behavior.",
                "sourceId": "s-9"
            })
        );
    }

    #[test]
    fn change_request_with_only_content_is_sparse() {
        let request = ChangeDefinitionRequest {
            id: "d-1".into(),
            content: Some("Sharper wording.".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "id": "d-1", "content": "Sharper wording." })
        );
    }

    #[test]
    fn reject_request_maps_reason_to_content_key() {
        let request = RejectDefinitionRequest {
            id: "d-1".into(),
            content: "missing page number".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "id": "d-1", "content": "missing page number" })
        );
    }

    #[test]
    fn filter_with_years_and_categories_is_camel_case() {
        let filter = DefinitionFilter {
            categories: Some(vec![Category::PlantIntelligence]),
            publishing_years: Some(vec![1999, 2020]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "categories": ["plant_intelligence"],
                "publishingYears": [1999, 2020]
            })
        );
    }

    #[test]
    fn definition_response_parses_and_converts() {
        let json = format!(r#"{{ "definition": {WIRE_DEFINITION} }}"#);
        let response: GetDefinitionResponse = serde_json::from_str(&json).unwrap();
        let definition = Definition::try_from(response.definition).unwrap();
        assert_eq!(definition.id, "d-1");
        assert_eq!(definition.category, Category::MachineIntelligence);
        assert_eq!(definition.source.title, "On Minds");
    }

    #[test]
    fn user_definition_listing_parses_rejection_log() {
        let json = r#"{
            "userDefinitions": [
                {
                    "id": "d-2",
                    "category": "human_intelligence",
                    "content": "The capacity to learn.",
                    "source": {
                        "id": "s-9",
                        "submittedBy": "u-7",
                        "submittedDate": "2023-05-10T12:00:00Z",
                        "title": "On Minds",
                        "type": "web",
                        "authors": [],
                        "webProperties": {
                            "url": "https://example.org/on-minds",
                            "accessDate": "2023-05-09T00:00:00Z"
                        }
                    },
                    "submittedBy": "u-3",
                    "submittedOn": "2023-06-02T18:00:00Z",
                    "status": "pending",
                    "rejections": [
                        {
                            "rejectedBy": "mod-1",
                            "rejectedOn": "2023-06-03T10:00:00Z",
                            "reason": "no page"
                        }
                    ]
                }
            ]
        }"#;
        let response: GetUserDefinitionsResponse = serde_json::from_str(json).unwrap();
        let listing = convert_all(response.user_definitions, UserDefinition::try_from).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].rejections.len(), 1);
        assert_eq!(listing[0].rejections[0].rejected_by, "mod-1");
    }

    #[test]
    fn default_newest_limit_matches_landing_page() {
        assert_eq!(DEFAULT_NEWEST_LIMIT, 4);
    }
}
