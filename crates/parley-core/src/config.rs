//! Provider configuration
//!
//! Credentials and network settings for the model provider. The API key
//! is resolved from the environment at startup; its absence is reported
//! per call as a configuration error rather than a crash.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Anthropic API key
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Configuration for the model provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key for authentication
    pub api_key: Option<String>,
    /// API endpoint base URL (overrides the provider default)
    pub base_url: Option<String>,
    /// API version header value
    pub api_version: Option<String>,
}

impl ProviderConfig {
    /// Create an empty provider configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration from the environment
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV_VAR).ok().filter(|k| !k.is_empty()),
            base_url: None,
            api_version: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whether a credential is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }

    /// Base URL, falling back to the provider default
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// API version header value, falling back to the provider default
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }
}

/// Timeout configuration for provider requests
///
/// The processor itself carries no timeout logic; cancellation is
/// delegated to the HTTP client built from these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
    /// End-to-end request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection_timeout_secs: 30,
            request_timeout_secs: 60,
        }
    }
}

impl TimeoutConfig {
    /// Connection timeout as a Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }

    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
