//! Provider message types and the Anthropic client

pub mod messages;
pub mod provider_types;
pub mod providers;
pub mod responses;

pub use messages::{CacheControl, ContentBlock, Turn, TurnRole};
pub use provider_types::ModelParameters;
pub use providers::{AnthropicClient, CompletionBackend};
pub use responses::{CompletionResponse, ResponseBlock, Usage};
