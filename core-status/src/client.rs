//! Status document client

use crate::error::{Result, StatusError};
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Default host serving the status document.
pub const DEFAULT_BASE_URL: &str = "https://tonearm.dev/";

/// Remote status document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatus {
    /// Latest released version string.
    pub latest_version: String,
    /// Optional announcement to surface in the UI.
    #[serde(default)]
    pub message: Option<String>,
    /// Where to get the latest release.
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Client for the status document endpoint.
pub struct StatusApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl StatusApi {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/status.json", self.base_url.trim_end_matches('/'))
    }

    /// Fetch and decode the current status document.
    pub async fn fetch(&self) -> Result<AppStatus> {
        let request = HttpRequest::new(HttpMethod::Get, self.endpoint());
        let response = self.http.execute(request).await?;

        if !response.is_success() {
            return Err(StatusError::UnexpectedStatus(response.status));
        }

        let status: AppStatus = response.json()?;
        debug!(latest_version = %status.latest_version, "Fetched status document");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::http::HttpResponse;
    use bytes::Bytes;
    use mockall::mock;
    use mockall::predicate::function;
    use std::collections::HashMap;

    mock! {
        Http {}

        #[async_trait]
        impl HttpClient for Http {
            async fn execute(&self, request: HttpRequest) -> BridgeResult<HttpResponse>;
        }
    }

    fn json_response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[tokio::test]
    async fn test_fetch_decodes_status_document() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .with(function(|request: &HttpRequest| {
                request.url == "https://tonearm.dev/status.json"
            }))
            .returning(|_| {
                Ok(json_response(
                    200,
                    r#"{"latest_version": "2.1.0", "message": "New release"}"#,
                ))
            });

        let api = StatusApi::new(Arc::new(http), DEFAULT_BASE_URL);
        let status = api.fetch().await.unwrap();

        assert_eq!(status.latest_version, "2.1.0");
        assert_eq!(status.message.as_deref(), Some("New release"));
        assert!(status.download_url.is_none());
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .returning(|_| Ok(json_response(503, "unavailable")));

        let api = StatusApi::new(Arc::new(http), "https://example.org");
        let result = api.fetch().await;

        assert!(matches!(result, Err(StatusError::UnexpectedStatus(503))));
    }

    #[tokio::test]
    async fn test_fetch_surfaces_malformed_body() {
        let mut http = MockHttp::new();
        http.expect_execute()
            .returning(|_| Ok(json_response(200, "not json")));

        let api = StatusApi::new(Arc::new(http), "https://example.org/");
        assert!(matches!(api.fetch().await, Err(StatusError::Bridge(_))));
    }
}
