use std::time::Duration;

use crate::error::RequestError;
use crate::wire::{CompletionRequest, CompletionResponse};

/// Bound on every completion call. Finite and explicit; a hung local
/// server surfaces as [`RequestError::ConnectionFailed`] instead of an
/// open-ended wait.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The health probe is a lightweight reachability check and gets a much
/// shorter timeout.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Server error bodies are kept short in the error value.
const MAX_ERROR_BODY: usize = 600;

/// HTTP client for one completion endpoint.
pub struct CompletionClient {
    http: reqwest::Client,
    api_url: String,
}

impl CompletionClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Issue a single POST and classify the outcome. No retries.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, RequestError> {
        let response = self
            .http
            .post(&self.api_url)
            .timeout(REQUEST_TIMEOUT)
            .json(request)
            .send()
            .await
            .map_err(RequestError::ConnectionFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::ServerError {
                status: status.as_u16(),
                body: truncate_body(body),
            });
        }

        let payload: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RequestError::MalformedResponse(e.to_string()))?;

        match payload.text() {
            Some(text) => Ok(text.trim().to_string()),
            None => Err(RequestError::MalformedResponse(
                "missing choices[0].text".to_string(),
            )),
        }
    }

    /// Probe `<api_url>/health`. True when the endpoint answers with a
    /// success status; any transport failure reads as unreachable.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.api_url.trim_end_matches('/'));
        match self
            .http
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                log::debug!("health probe failed: {err}");
                false
            }
        }
    }
}

fn truncate_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(empty body)".to_string();
    }
    if trimmed.len() <= MAX_ERROR_BODY {
        return trimmed.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}
