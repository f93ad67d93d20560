use crate::ports::outbound::{DependencyRepository, RequestPayload};
use crate::shared::error::TodeError;
use crate::shared::Result;
use crate::visualization::domain::{DependencyNode, SearchDepth};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Message shown whenever the dependency API cannot deliver a tree
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching dependencies";

/// Default base URL of the dependency API
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    body: &'a RequestPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    body: Option<DependencyNode>,
    #[serde(default)]
    error_message: Option<String>,
}

/// TodeApiClient adapter for the dependency-resolution API
///
/// This adapter implements the DependencyRepository port. Requests are sent
/// once: there is no retry and no caching.
pub struct TodeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl TodeApiClient {
    /// Creates a client for the API at `api_url`
    ///
    /// # Errors
    /// Returns an error if `api_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(api_url: &str) -> Result<Self> {
        let base_url = Self::validate_base_url(api_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("tode/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn validate_base_url(api_url: &str) -> Result<String> {
        let parsed = reqwest::Url::parse(api_url).map_err(|e| TodeError::Validation {
            message: format!("Invalid API URL '{}': {}", api_url, e),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(TodeError::Validation {
                message: format!(
                    "Invalid API URL '{}': only http and https are supported",
                    api_url
                ),
            }
            .into());
        }

        Ok(api_url.trim_end_matches('/').to_string())
    }

    /// Full endpoint URL for a payload and depth
    pub fn endpoint(&self, payload: &RequestPayload, depth: SearchDepth) -> String {
        format!(
            "{}/api/dependencies/{}/{}",
            self.base_url,
            payload.route(),
            depth
        )
    }

    /// Turns an HTTP status and body text into a tree or a fetch error
    pub fn decode_response(status: u16, text: &str) -> Result<DependencyNode> {
        if !(200..300).contains(&status) {
            return Err(fetch_failed(format!(
                "{} (HTTP {})",
                FETCH_ERROR_MESSAGE, status
            )));
        }

        let response: ApiResponse = serde_json::from_str(text).map_err(|e| {
            fetch_failed(format!("{}: invalid response: {}", FETCH_ERROR_MESSAGE, e))
        })?;

        match response.body {
            Some(tree) => Ok(tree),
            None => Err(fetch_failed(
                response
                    .error_message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| FETCH_ERROR_MESSAGE.to_string()),
            )),
        }
    }
}

fn fetch_failed(message: String) -> anyhow::Error {
    TodeError::FetchFailed { message }.into()
}

#[async_trait]
impl DependencyRepository for TodeApiClient {
    async fn fetch_dependencies(
        &self,
        payload: &RequestPayload,
        depth: SearchDepth,
    ) -> Result<DependencyNode> {
        let url = self.endpoint(payload, depth);

        let response = self
            .client
            .post(&url)
            .json(&ApiRequest { body: payload })
            .send()
            .await
            .map_err(|e| fetch_failed(format!("{}: {}", FETCH_ERROR_MESSAGE, e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| fetch_failed(format!("{}: {}", FETCH_ERROR_MESSAGE, e)))?;

        Self::decode_response(status, &text)
    }
}
