//! Envelope transport over reqwest.
//!
//! Centralizes URL construction, header handling, and envelope decoding so
//! the resource modules stay focused on payload types and wire-to-domain
//! mapping. Every request resolves to a `Result`; the caller never sees a
//! bare `reqwest::Response`.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use noesis_config::ApiConfig;

use crate::error::{ApiFault, ClientError};

/// The uniform `{message, error, data}` wrapper every endpoint returns.
///
/// `data` is absent both on failure and on endpoints with no payload, so its
/// absence is the universal failure signal the backend contract defines.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub data: Option<T>,
}

/// HTTP client for the Noesis backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from the API configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build `<base_url>/api/v1/<endpoint>` plus `?key=value` pairs joined
    /// with `&`, in given order. Values are URL-encoded.
    fn endpoint_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}/api/v1/{endpoint}", self.base_url);
        for (index, (key, value)) in params.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        Self::dispatch(endpoint, self.http.get(self.endpoint_url(endpoint, params))).await
    }

    pub(crate) async fn get_authed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        token: &str,
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .get(self.endpoint_url(endpoint, params))
            .bearer_auth(token);
        Self::dispatch(endpoint, request).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let request = self.http.post(self.endpoint_url(endpoint, &[])).json(body);
        Self::dispatch(endpoint, request).await
    }

    pub(crate) async fn post_authed<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        token: &str,
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .post(self.endpoint_url(endpoint, &[]))
            .bearer_auth(token)
            .json(body);
        Self::dispatch(endpoint, request).await
    }

    pub(crate) async fn put_authed<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        token: &str,
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .put(self.endpoint_url(endpoint, &[]))
            .bearer_auth(token)
            .json(body);
        Self::dispatch(endpoint, request).await
    }

    pub(crate) async fn delete_authed<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        token: &str,
    ) -> Result<T, ClientError> {
        let request = self
            .http
            .delete(self.endpoint_url(endpoint, params))
            .bearer_auth(token);
        Self::dispatch(endpoint, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await.map_err(|error| {
            tracing::error!(endpoint, %error, "request failed");
            ClientError::Http(error)
        })?;
        Self::decode(endpoint, response).await
    }

    /// Decode a response body as an [`Envelope<T>`] and unwrap it.
    ///
    /// A non-envelope body is a transport failure; an envelope without `data`
    /// is a server-reported failure carrying the envelope's message.
    pub(crate) async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let envelope: Envelope<T> = response.json().await.map_err(|error| {
            tracing::error!(endpoint, %error, "broken response");
            ClientError::Http(error)
        })?;

        match envelope.data {
            Some(data) => Ok(data),
            None => {
                tracing::warn!(endpoint, message = %envelope.message, "server reported failure");
                Err(ClientError::Api {
                    endpoint: endpoint.to_string(),
                    message: envelope.message,
                    fault: envelope.error.map(ApiFault::from_value),
                })
            }
        }
    }
}
