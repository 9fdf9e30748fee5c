//! Provider implementations

pub mod anthropic;

pub use anthropic::AnthropicClient;

use crate::error::ParleyResult;
use crate::llm::messages::{ContentBlock, Turn};
use crate::llm::responses::CompletionResponse;
use async_trait::async_trait;

/// Seam over the model provider call
///
/// The processor talks to the provider exclusively through this trait so
/// tests can substitute a scripted backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Whether a credential is configured for this backend
    fn has_credentials(&self) -> bool;

    /// Invoke the model once with the given system blocks and turns
    ///
    /// No retries: transient failures surface to the caller unchanged.
    async fn complete(
        &self,
        system: &[ContentBlock],
        turns: &[Turn],
    ) -> ParleyResult<CompletionResponse>;
}
