//! Anthropic Messages API client

use crate::config::ProviderConfig;
use crate::error::{ParleyError, ParleyResult};
use crate::llm::messages::{ContentBlock, Turn};
use crate::llm::provider_types::ModelParameters;
use crate::llm::responses::CompletionResponse;
use super::CompletionBackend;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::instrument;

/// Beta header value opting in to prompt caching
const PROMPT_CACHING_BETA: &str = "prompt-caching-2024-07-31";

/// Anthropic provider client
pub struct AnthropicClient {
    config: ProviderConfig,
    params: ModelParameters,
    http_client: Client,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    pub fn new(config: ProviderConfig, params: ModelParameters, http_client: Client) -> Self {
        Self {
            config,
            params,
            http_client,
        }
    }

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.params.model
    }
}

#[async_trait]
impl CompletionBackend for AnthropicClient {
    fn has_credentials(&self) -> bool {
        self.config.has_api_key()
    }

    #[instrument(skip(self, system, turns), level = "debug")]
    async fn complete(
        &self,
        system: &[ContentBlock],
        turns: &[Turn],
    ) -> ParleyResult<CompletionResponse> {
        let url = format!("{}/v1/messages", self.config.base_url());

        let mut request_body = json!({
            "model": self.params.model,
            "max_tokens": self.params.max_tokens,
            "system": system,
            "messages": turns,
        });
        if let Some(temperature) = self.params.temperature {
            request_body["temperature"] = json!(temperature);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ParleyError::config("Anthropic API key is not configured"))?;

        let mut request = self
            .http_client
            .post(&url)
            .json(&request_body)
            .header("x-api-key", api_key)
            .header("anthropic-version", self.config.api_version());

        if self.params.enable_prompt_caching {
            request = request.header("anthropic-beta", PROMPT_CACHING_BETA);
        }

        let response = request.send().await.map_err(|e| {
            ParleyError::upstream_with_provider(
                format!("Anthropic request failed: {}", e),
                "anthropic",
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Anthropic API returned an error: {}", body);
            return Err(ParleyError::http(
                format!("Anthropic API error ({}): {}", status, body),
                Some(status.as_u16()),
            ));
        }

        response
            .json::<CompletionResponse>()
            .await
            .map_err(|e| ParleyError::json(format!("Failed to decode Anthropic response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(key: Option<&str>) -> AnthropicClient {
        let mut config = ProviderConfig::new();
        if let Some(key) = key {
            config = config.with_api_key(key);
        }
        AnthropicClient::new(config, ModelParameters::default(), Client::new())
    }

    #[test]
    fn test_has_credentials() {
        assert!(client_with_key(Some("test-key")).has_credentials());
        assert!(!client_with_key(None).has_credentials());
    }

    #[test]
    fn test_model_accessor() {
        let client = client_with_key(Some("test-key"));
        assert_eq!(client.model(), "claude-3-5-sonnet-20240620");
    }
}
