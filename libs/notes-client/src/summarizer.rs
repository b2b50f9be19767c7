//! Calls the external summarization service.
//!
//! Failures come back as [`ClientError::Upstream`] and never touch the
//! caller's text.

use apikit::TracedClient;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::ClientError;

pub const MIN_INPUT_CHARS: usize = 100;
pub const DEFAULT_FAILURE: &str = "Failed to summarize content";

#[derive(Deserialize)]
struct SummaryResp {
    summary: String,
}

#[derive(Deserialize)]
struct FailureResp {
    detail: String,
}

#[derive(Clone)]
pub struct SummarizerClient {
    http: TracedClient,
    url: String,
}

/// Reject text that is too short to summarize, before any request.
pub fn check_input(text: &str) -> Result<(), ClientError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid(
            "content",
            "Please add some content to summarize",
        ));
    }
    if trimmed.chars().count() < MIN_INPUT_CHARS {
        return Err(ClientError::invalid(
            "content",
            "Please add at least 100 characters for meaningful summarization",
        ));
    }
    Ok(())
}

impl SummarizerClient {
    pub fn new(http: TracedClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::new(TracedClient::new(inner), &config.summarizer_url))
    }

    #[tracing::instrument(name = "client.summarize", skip_all, fields(chars = text.chars().count()))]
    pub async fn summarize(&self, text: &str) -> Result<String, ClientError> {
        check_input(text)?;

        let builder = self
            .http
            .request(Method::POST, &self.url)
            .json(&json!({ "text": text }));

        let resp = match self.http.send(builder).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "summarizer unreachable");
                return Err(ClientError::Upstream(DEFAULT_FAILURE.to_string()));
            }
        };

        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(status = status.as_u16(), error = %e, "failed to read summarizer response");
                Default::default()
            }
        };

        if status.is_success() {
            return serde_json::from_slice::<SummaryResp>(&body)
                .map(|r| r.summary)
                .map_err(|e| {
                    tracing::warn!(error = %e, "malformed summarizer response");
                    ClientError::Upstream(DEFAULT_FAILURE.to_string())
                });
        }

        let message = serde_json::from_slice::<FailureResp>(&body)
            .map(|r| r.detail)
            .ok()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
        tracing::warn!(status = status.as_u16(), %message, "summarizer rejected the request");
        Err(ClientError::Upstream(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_short_input_is_rejected_locally() {
        let err = check_input("   \n ").unwrap_err();
        assert_eq!(err.to_string(), "Please add some content to summarize");

        let err = check_input(&"a".repeat(99)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please add at least 100 characters for meaningful summarization"
        );

        // Surrounding whitespace does not count towards the minimum
        let padded = format!("   {}   ", "b".repeat(99));
        assert!(check_input(&padded).is_err());

        assert!(check_input(&"c".repeat(100)).is_ok());
    }
}
