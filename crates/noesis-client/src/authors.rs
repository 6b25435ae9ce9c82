//! Author resource client.

use noesis_core::entities::Author;
use noesis_core::enums::AuthorType;
use noesis_core::wire::{FetchedAuthor, OrganizationProperties, PersonProperties, convert_all};

use crate::page::{PageCountRequest, PageRequest};
use crate::transport::ApiClient;
use crate::ClientError;

#[derive(Debug, serde::Deserialize)]
struct GetAuthorResponse {
    author: FetchedAuthor,
}

#[derive(Debug, serde::Deserialize)]
struct GetAuthorsResponse {
    authors: Vec<FetchedAuthor>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthorResponse {
    author_id: String,
}

#[derive(Debug, serde::Deserialize)]
struct PageCountResponse {
    count: u64,
}

#[derive(Debug, serde::Deserialize)]
struct DeleteAuthorResponse {
    #[serde(default)]
    sources: Vec<String>,
}

/// Sparse predicate narrowing an author listing.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<AuthorType>>,
    /// Text-contains match on the display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[serde(rename = "type")]
    pub kind: AuthorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_properties: Option<PersonProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_properties: Option<OrganizationProperties>,
}

impl CreateAuthorRequest {
    #[must_use]
    pub fn person(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            kind: AuthorType::Person,
            person_properties: Some(PersonProperties {
                first_name: first_name.into(),
                last_name: last_name.into(),
            }),
            organization_properties: None,
        }
    }

    #[must_use]
    pub fn organization(organization_name: impl Into<String>) -> Self {
        Self {
            kind: AuthorType::Organization,
            person_properties: None,
            organization_properties: Some(OrganizationProperties {
                organization_name: organization_name.into(),
            }),
        }
    }
}

/// Partial update keyed by id; omitted bags leave the server state unchanged.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAuthorRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AuthorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_properties: Option<PersonProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_properties: Option<OrganizationProperties>,
}

impl ApiClient {
    /// Fetch a single author by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or the record cannot be converted.
    pub async fn author_by_id(&self, id: &str) -> Result<Author, ClientError> {
        let response: GetAuthorResponse = self
            .get("authors/author", &[("id", id.to_string())])
            .await?;
        Ok(response.author.try_into()?)
    }

    /// Fetch one page of authors, in server order. Passing a token uses the
    /// protected variant of the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or a record cannot be converted.
    pub async fn author_page(
        &self,
        request: &PageRequest<AuthorFilter>,
        token: Option<&str>,
    ) -> Result<Vec<Author>, ClientError> {
        let response: GetAuthorsResponse = match token {
            Some(token) => self.post_authed("authors/page", request, token).await?,
            None => self.post("authors/page", request).await?,
        };
        Ok(convert_all(response.authors, Author::try_from)?)
    }

    /// Count pages matching the filter at the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn author_page_count(
        &self,
        request: &PageCountRequest<AuthorFilter>,
        token: Option<&str>,
    ) -> Result<u64, ClientError> {
        let response: PageCountResponse = match token {
            Some(token) => self.post_authed("authors/page_count", request, token).await?,
            None => self.post("authors/page_count", request).await?,
        };
        Ok(response.count)
    }

    /// Submit a new author. Returns the new author's id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn create_author(
        &self,
        token: &str,
        request: &CreateAuthorRequest,
    ) -> Result<String, ClientError> {
        let response: CreateAuthorResponse = self.post_authed("authors", request, token).await?;
        Ok(response.author_id)
    }

    /// Change an existing author. Fields omitted from the request are left
    /// unchanged server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn change_author(
        &self,
        token: &str,
        request: &ChangeAuthorRequest,
    ) -> Result<(), ClientError> {
        let _ack: String = self.put_authed("authors", request, token).await?;
        Ok(())
    }

    /// Delete an author. Returns the ids of sources that cited the author,
    /// so the caller can warn the user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn delete_author(&self, token: &str, id: &str) -> Result<Vec<String>, ClientError> {
        let response: DeleteAuthorResponse = self
            .delete_authed("authors", &[("id", id.to_string())], token)
            .await?;
        Ok(response.sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn create_person_request_serializes_only_person_bag() {
        let request = CreateAuthorRequest::person("Ada", "Lovelace");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "person",
                "personProperties": { "firstName": "Ada", "lastName": "Lovelace" }
            })
        );
    }

    #[test]
    fn create_organization_request_serializes_only_org_bag() {
        let request = CreateAuthorRequest::organization("Acme Institute");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "organization",
                "organizationProperties": { "organizationName": "Acme Institute" }
            })
        );
    }

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        assert_eq!(
            serde_json::to_value(AuthorFilter::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn filter_keys_are_camel_case_and_sparse() {
        let filter = AuthorFilter {
            types: Some(vec![AuthorType::Person]),
            name: Some("love".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "types": ["person"], "name": "love" })
        );
    }

    #[test]
    fn delete_response_defaults_to_no_dependents() {
        let response: DeleteAuthorResponse = serde_json::from_str("{}").unwrap();
        assert!(response.sources.is_empty());

        let response: DeleteAuthorResponse =
            serde_json::from_str(r#"{ "sources": ["s-1", "s-2"] }"#).unwrap();
        assert_eq!(response.sources, vec!["s-1", "s-2"]);
    }

    #[test]
    fn author_page_response_parses_wire_records() {
        let json = r#"{
            "authors": [
                {
                    "id": "a-1",
                    "slugId": "ada-lovelace-1815",
                    "submittedBy": "u-1",
                    "submittedDate": "2023-04-01T10:30:00Z",
                    "type": "person",
                    "personProperties": { "firstName": "Ada", "lastName": "Lovelace" }
                }
            ]
        }"#;
        let response: GetAuthorsResponse = serde_json::from_str(json).unwrap();
        let authors = convert_all(response.authors, Author::try_from).unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].slug_id, "ada-lovelace-1815");
    }
}
