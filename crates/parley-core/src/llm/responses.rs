//! Structured provider response types
//!
//! The provider reply is deserialized into typed fields with an explicit
//! extras bag for optional or unstable provider metadata. Unknown content
//! block types and absent `usage` are ignorable, not errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One content block in a provider reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseBlock {
    /// Generated text
    Text { text: String },
    /// Any block type this service does not consume
    #[serde(other)]
    Unknown,
}

/// Token usage reported by the provider
///
/// The cache counters only appear when prompt caching is active, and
/// their names are provider-specific; anything else lands in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default)]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_input_tokens: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A complete provider reply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Ordered content blocks
    #[serde(default)]
    pub content: Vec<ResponseBlock>,
    /// Token usage, absent from some replies
    #[serde(default)]
    pub usage: Option<Usage>,
    /// Additional provider metadata (id, model, stop_reason, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl CompletionResponse {
    /// Concatenate all text blocks, in order
    ///
    /// Zero text blocks yields an empty string, which callers return
    /// as-is rather than treating as a failure.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for block in &self.content {
            if let ResponseBlock::Text { text } = block {
                out.push_str(text);
            }
        }
        out
    }
}
