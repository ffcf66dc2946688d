//! Thin JSON transport over the back-office REST API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::ClientError;

/// Uniform response envelope: `{ "success": bool, "data": … }`.
///
/// Failed operations come back with `success: false` and an optional
/// human-readable message.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shared HTTP transport for all resource clients.
///
/// Holds the API base URL and a connection-pooled [`reqwest::Client`] with a
/// per-request timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Creates a transport for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { base_url, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a resource, unwrapping the response envelope.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ClientError> {
        debug!(path = path, "GET");
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// POST a JSON body, unwrapping the response envelope.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(path = path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// PUT a JSON body, unwrapping the response envelope.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!(path = path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// DELETE a resource; only the success flag of the envelope matters.
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        debug!(path = path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body)?;
        if envelope.success {
            Ok(())
        } else {
            Err(ClientError::Rejected(rejection_message(envelope.message)))
        }
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;

        if !envelope.success {
            return Err(ClientError::Rejected(rejection_message(envelope.message)));
        }
        envelope.data.ok_or(ClientError::MissingData)
    }
}

fn rejection_message(message: Option<String>) -> String {
    message.unwrap_or_else(|| "no reason given".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::pagination::Page;

    #[test]
    fn test_envelope_decodes_scalar_data() {
        let envelope: Envelope<i64> =
            serde_json::from_str(r#"{"success":true,"data":7}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(7));
        assert_eq!(envelope.message, None);
    }

    #[test]
    fn test_envelope_decodes_page_data() {
        let json = r#"{
            "success": true,
            "data": {
                "data": ["a", "b"],
                "pagination": { "totalPages": 3, "currentPage": 1, "totalItems": 21 }
            }
        }"#;

        let envelope: Envelope<Page<String>> = serde_json::from_str(json).unwrap();
        let page = envelope.data.unwrap();
        assert_eq!(page.data, vec!["a", "b"]);
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.pagination.total_items, Some(21));
    }

    #[test]
    fn test_envelope_decodes_failure() {
        let envelope: Envelope<i64> =
            serde_json::from_str(r#"{"success":false,"message":"duplicate sku"}"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message.as_deref(), Some("duplicate sku"));
    }

    #[test]
    fn test_rejection_message_fallback() {
        assert_eq!(rejection_message(None), "no reason given");
        assert_eq!(rejection_message(Some("nope".into())), "nope");
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let api = ApiClient::new("http://localhost:3000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.url("payments"), "http://localhost:3000/api/payments");
        assert_eq!(api.url("/payments/42"), "http://localhost:3000/api/payments/42");
    }
}
