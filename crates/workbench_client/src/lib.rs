//! HTTP client for the SEO workbench API plus the request-lifecycle state
//! machine the dashboard screens share.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

pub mod error;
pub mod lifecycle;
pub mod protocol;
pub mod response;

pub use error::ClientError;
pub use lifecycle::{RequestLifecycle, RequestSeq, RequestState};
pub use reqwest::StatusCode;
pub use response::ApiResponse;

/// How a non-2xx status with a parseable JSON body is classified.
///
/// The workbench service historically returned error documents that the
/// dashboard displayed like any other result; `DisplayBody` preserves that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorBodyPolicy {
    /// Parse the error body and hand it to the renderer as a success.
    #[default]
    DisplayBody,
    /// Map it to [`ClientError::RemoteStatus`] instead.
    TreatAsFailure,
}

pub struct WorkbenchClient {
    http: Client,
    base_url: String,
    policy: ErrorBodyPolicy,
}

impl WorkbenchClient {
    pub fn new(base_url: impl Into<String>, policy: ErrorBodyPolicy) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `/keywords/research`; the whole body is passed through for display.
    pub async fn research_keywords(
        &self,
        request: &protocol::KeywordResearchRequest,
    ) -> Result<ApiResponse, ClientError> {
        let body = self.post_json("/keywords/research", request).await?;
        Ok(ApiResponse::RawJson(body))
    }

    /// POST `/content/brief`; the whole body is passed through for display.
    pub async fn build_brief(
        &self,
        request: &protocol::ContentBriefRequest,
    ) -> Result<ApiResponse, ClientError> {
        let body = self.post_json("/content/brief", request).await?;
        Ok(ApiResponse::RawJson(body))
    }

    /// POST `/content/generate`; decodes the structured article when present.
    pub async fn generate_article(
        &self,
        request: &protocol::GenerateArticleRequest,
    ) -> Result<ApiResponse, ClientError> {
        let body = self.post_json("/content/generate", request).await?;
        Ok(ApiResponse::article_from_value(body))
    }

    /// One outbound call per invocation; no retry, no deduplication.
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ClientError> {
        debug!(path, "posting workbench request");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|source| {
            warn!(path, %status, "workbench response body was not JSON");
            ClientError::MalformedBody { status, source }
        })?;

        if !status.is_success() && self.policy == ErrorBodyPolicy::TreatAsFailure {
            warn!(path, %status, "workbench request failed");
            return Err(ClientError::RemoteStatus {
                status,
                body: value,
            });
        }

        debug!(path, %status, "workbench request completed");
        Ok(value)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
