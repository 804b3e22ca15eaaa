//! HTTP client for the compatibility validate endpoint
//!
//! Thin reqwest wrapper; status handling and body parsing are pure
//! functions so they can be tested without a server.

use std::time::Duration;

use thiserror::Error;

use super::types::{CompatibilityRequest, CompatibilityResponse};

const VALIDATE_PATH: &str = "/api/trade-license/validate";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum CompatError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
    #[error("compatibility request failed: {0}")]
    Request(String),
    #[error("compatibility service returned {status}: {detail}")]
    Service { status: u16, detail: String },
    #[error("failed to parse compatibility response: {0}")]
    Parse(String),
}

#[derive(Clone)]
pub struct CompatClient {
    http: reqwest::Client,
    base_url: String,
}

impl CompatClient {
    pub fn new(base_url: &str) -> Result<Self, CompatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CompatError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn validate(
        &self,
        request: &CompatibilityRequest,
    ) -> Result<CompatibilityResponse, CompatError> {
        let url = format!("{}{}", self.base_url, VALIDATE_PATH);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| CompatError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CompatError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(CompatError::Service {
                status,
                detail: extract_detail(&text)
                    .unwrap_or_else(|| "unable to validate trade license compatibility".to_string()),
            });
        }

        parse_response(&text)
    }
}

/// Parse a successful response body
fn parse_response(json: &str) -> Result<CompatibilityResponse, CompatError> {
    serde_json::from_str(json).map_err(|e| CompatError::Parse(e.to_string()))
}

/// Pull the `detail` field out of an error body, if it carries one
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(|s| s.to_string())
}
