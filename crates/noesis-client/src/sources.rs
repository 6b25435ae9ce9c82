//! Source resource client.

use noesis_core::entities::Source;
use noesis_core::enums::SourceType;
use noesis_core::wire::{
    FetchedBookProperties, FetchedJournalProperties, FetchedSource, FetchedWebProperties,
    convert_all,
};

use crate::page::{PageCountRequest, PageRequest};
use crate::transport::ApiClient;
use crate::ClientError;

#[derive(Debug, serde::Deserialize)]
struct GetSourceResponse {
    source: FetchedSource,
}

#[derive(Debug, serde::Deserialize)]
struct GetSourcesResponse {
    sources: Vec<FetchedSource>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSourceResponse {
    source_id: String,
}

#[derive(Debug, serde::Deserialize)]
struct PageCountResponse {
    count: u64,
}

#[derive(Debug, serde::Deserialize)]
struct DeleteSourceResponse {
    #[serde(default)]
    definitions: Vec<String>,
}

/// Sparse predicate narrowing a source listing.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<SourceType>>,
    /// Text-contains match on the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
}

/// Create payload: the type tag, the associated author ids, and exactly one
/// property bag matching the tag. Bags reuse the wire shapes, so dates are
/// RFC 3339 strings.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSourceRequest {
    #[serde(rename = "type")]
    pub kind: SourceType,
    pub title: String,
    /// Ids of associated authors, in citation order.
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_properties: Option<FetchedBookProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_properties: Option<FetchedJournalProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_properties: Option<FetchedWebProperties>,
}

/// Partial update keyed by id; omitted fields leave the server state
/// unchanged.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSourceRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_properties: Option<FetchedBookProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_properties: Option<FetchedJournalProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_properties: Option<FetchedWebProperties>,
}

impl ApiClient {
    /// Fetch a single source by id, including its authors.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or the record cannot be converted.
    pub async fn source_by_id(&self, id: &str) -> Result<Source, ClientError> {
        let response: GetSourceResponse = self
            .get("sources/source", &[("id", id.to_string())])
            .await?;
        Ok(response.source.try_into()?)
    }

    /// Fetch one page of sources, in server order. Passing a token uses the
    /// protected variant of the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server reports a
    /// failure, or a record cannot be converted.
    pub async fn source_page(
        &self,
        request: &PageRequest<SourceFilter>,
        token: Option<&str>,
    ) -> Result<Vec<Source>, ClientError> {
        let response: GetSourcesResponse = match token {
            Some(token) => self.post_authed("sources/page", request, token).await?,
            None => self.post("sources/page", request).await?,
        };
        Ok(convert_all(response.sources, Source::try_from)?)
    }

    /// Count pages matching the filter at the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn source_page_count(
        &self,
        request: &PageCountRequest<SourceFilter>,
        token: Option<&str>,
    ) -> Result<u64, ClientError> {
        let response: PageCountResponse = match token {
            Some(token) => self.post_authed("sources/page_count", request, token).await?,
            None => self.post("sources/page_count", request).await?,
        };
        Ok(response.count)
    }

    /// Submit a new source. Returns the new source's id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn create_source(
        &self,
        token: &str,
        request: &CreateSourceRequest,
    ) -> Result<String, ClientError> {
        let response: CreateSourceResponse = self.post_authed("sources", request, token).await?;
        Ok(response.source_id)
    }

    /// Change an existing source.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn change_source(
        &self,
        token: &str,
        request: &ChangeSourceRequest,
    ) -> Result<(), ClientError> {
        let _ack: String = self.put_authed("sources", request, token).await?;
        Ok(())
    }

    /// Delete a source. Returns the ids of definitions that quoted it, so
    /// the caller can warn the user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server reports a
    /// failure.
    pub async fn delete_source(&self, token: &str, id: &str) -> Result<Vec<String>, ClientError> {
        let response: DeleteSourceResponse = self
            .delete_authed("sources", &[("id", id.to_string())], token)
            .await?;
        Ok(response.definitions)
    }
}
