//! Error types for the Parley chat relay

use thiserror::Error;

/// Result type alias for Parley operations
pub type ParleyResult<T> = Result<T, ParleyError>;

/// Main error type for the Parley chat relay
///
/// Each variant maps to an HTTP-style status code via [`ParleyError::status_code`]
/// so the server layer can translate failures without inspecting variants itself.
#[derive(Error, Debug, Clone)]
pub enum ParleyError {
    /// Invalid caller input (empty message, malformed fields)
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// Server-side configuration problems (missing credential)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The model provider call failed
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        provider: Option<String>,
    },

    /// HTTP transport errors from the provider
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
    },

    /// JSON decode errors from the provider response
    #[error("JSON error: {message}")]
    Json { message: String },
}

impl ParleyError {
    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: None,
        }
    }

    /// Create an invalid input error naming the offending field
    pub fn invalid_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            provider: None,
        }
    }

    /// Create an upstream error tagged with the provider name
    pub fn upstream_with_provider(
        message: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            message: message.into(),
            provider: Some(provider.into()),
        }
    }

    /// Create a new HTTP error
    pub fn http(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Http {
            message: message.into(),
            status_code,
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// HTTP-style status code for this error
    ///
    /// Caller mistakes are 400, everything else is a server-side 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput { .. } => 400,
            Self::Config { .. } | Self::Upstream { .. } | Self::Http { .. } | Self::Json { .. } => {
                500
            }
        }
    }

    /// Outward-facing message, safe to return to callers
    ///
    /// Configuration errors are deliberately generic: the detailed cause
    /// (which credential is missing) stays in server-side logs only.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } => message.clone(),
            Self::Config { .. } => "Server configuration error".to_string(),
            Self::Upstream { message, .. } => format!("Failed to process message: {}", message),
            Self::Http { message, .. } => format!("Failed to process message: {}", message),
            Self::Json { message } => format!("Failed to process message: {}", message),
        }
    }
}
