//! OpenAI chat completions client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::{
    config::Config,
    error::{AppResult, RelayError},
    proxy::{
        headers::build_default_headers,
        provider::ChatProvider,
        types::{ChatCompletionRequest, ChatCompletionResponse},
    },
    routes::metrics::record_upstream_status,
};

/// Error payload returned by the OpenAI API on non-2xx responses
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

/// Pull the human-readable message out of an upstream error body
fn upstream_error_message(body: &str) -> String {
    match serde_json::from_str::<UpstreamErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// OpenAI client used by the relay service
pub struct OpenAIProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.openai_api_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            timeout: config.upstream_timeout,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAIProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> AppResult<ChatCompletionResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RelayError::MissingCredential)?;

        let url = format!("{}/chat/completions", self.base_url);
        let headers = build_default_headers(api_key)?;

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, timeout = e.is_timeout(), "Failed to send request to OpenAI");
                RelayError::from(e)
            })?;

        let status = response.status();
        record_upstream_status(status.as_u16());
        debug!(url = %url, status = %status, "Received response from OpenAI");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status.as_u16(), body = %body, "OpenAI returned an error");
            return Err(RelayError::UpstreamCall {
                status: Some(status.as_u16()),
                message: upstream_error_message(&body),
            });
        }

        response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!(error = %e, "Failed to decode OpenAI response");
            RelayError::from(e)
        })
    }
}
