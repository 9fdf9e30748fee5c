//! Parley Core Library
//!
//! This crate provides the core functionality for the Parley chat relay:
//! conversation history with selective prompt-cache marking, per-user
//! conversation storage, the Anthropic Messages API client, and the
//! message processor that ties them together.

pub mod config;
pub mod conversation;
pub mod error;
pub mod llm;
pub mod processor;
pub mod prompts;

// Re-export commonly used types
pub use config::{ProviderConfig, TimeoutConfig};
pub use conversation::{ConversationHistory, ConversationStore};
pub use error::{ParleyError, ParleyResult};
pub use llm::{
    AnthropicClient, CacheControl, CompletionBackend, CompletionResponse, ContentBlock,
    ModelParameters, ResponseBlock, Turn, TurnRole, Usage,
};
pub use processor::MessageProcessor;
