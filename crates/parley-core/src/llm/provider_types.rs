//! Model parameters for provider requests

use serde::{Deserialize, Serialize};

/// Default model identifier
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";

/// Default maximum output tokens per reply
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Parameters controlling the model invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Model identifier
    pub model: String,
    /// Maximum output tokens
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Opt in to the provider's prompt-caching beta
    ///
    /// When enabled, requests carry the prompt-caching beta header and
    /// cache markers on content blocks take effect upstream.
    pub enable_prompt_caching: bool,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            enable_prompt_caching: true,
        }
    }
}

impl ModelParameters {
    /// Create parameters for a specific model
    pub fn for_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the maximum output tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
