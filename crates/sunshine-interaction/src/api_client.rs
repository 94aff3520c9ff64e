//! HTTP implementation of the remote assistant collaborator.
//!
//! Talks to the marketplace's assistant endpoint with a single
//! request/response exchange per turn. Configuration priority:
//! explicit [`AssistantApiConfig`] > environment variables.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use sunshine_core::assistant::{AssistantClient, AssistantError, AssistantReply, AssistantRequest};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the assistant endpoint.
#[derive(Debug, Clone)]
pub struct AssistantApiConfig {
    /// Base URL of the assistant service.
    pub base_url: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
}

impl AssistantApiConfig {
    /// Loads configuration from environment variables.
    ///
    /// `SUNSHINE_ASSISTANT_URL` is required; `SUNSHINE_ASSISTANT_API_KEY`
    /// is optional.
    pub fn try_from_env() -> Result<Self, AssistantError> {
        let base_url = env::var("SUNSHINE_ASSISTANT_URL").map_err(|_| {
            AssistantError::Config("SUNSHINE_ASSISTANT_URL not found in environment".into())
        })?;
        let api_key = env::var("SUNSHINE_ASSISTANT_API_KEY").ok();

        Ok(Self { base_url, api_key })
    }
}

/// Assistant client that talks to the marketplace backend over HTTP.
#[derive(Clone)]
pub struct HttpAssistantClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAssistantClient {
    /// Creates a client from connection settings.
    ///
    /// The request timeout lives here: the orchestrator imposes none of
    /// its own and never retries.
    pub fn new(config: AssistantApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/assistant/chat", self.base_url)
    }
}

#[async_trait]
impl AssistantClient for HttpAssistantClient {
    async fn generate(&self, request: AssistantRequest) -> Result<AssistantReply, AssistantError> {
        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(|err| AssistantError::Request {
            message: format!("assistant request failed: {err}"),
            is_retryable: err.is_connect() || err.is_timeout(),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read assistant error body".to_string());
            return Err(map_http_error(status, body));
        }

        response
            .json::<AssistantReply>()
            .await
            .map_err(|err| AssistantError::InvalidResponse(err.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn map_http_error(status: StatusCode, body: String) -> AssistantError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    AssistantError::Http {
        status: status.as_u16(),
        message,
        is_retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = HttpAssistantClient::new(AssistantApiConfig {
            base_url: "https://api.example.com/".to_string(),
            api_key: None,
        });
        assert_eq!(client.endpoint(), "https://api.example.com/assistant/chat");
    }

    #[test]
    fn test_map_http_error_parses_structured_body() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"missing message field"}}"#.to_string(),
        );
        match err {
            AssistantError::Http {
                status,
                message,
                is_retryable,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "missing message field");
                assert!(!is_retryable);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_http_error_retryable_statuses() {
        let retryable = map_http_error(StatusCode::SERVICE_UNAVAILABLE, "down".to_string());
        match retryable {
            AssistantError::Http { is_retryable, .. } => assert!(is_retryable),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
