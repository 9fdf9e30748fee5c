//! Conversation turn and content block types
//!
//! These types serialize directly to the Anthropic Messages API wire
//! format, so a `Turn` slice can be dropped into a request body as-is.

use serde::{Deserialize, Serialize};

/// Cache control for Anthropic prompt caching
///
/// When attached to a content block, tells the provider it may reuse
/// previously processed token state for that block across requests.
/// The cache has a 5-minute TTL, refreshed on each read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheControl {
    /// Cache type - currently only "ephemeral" is supported
    #[serde(rename = "type")]
    pub control_type: String,
}

impl CacheControl {
    /// Create a new ephemeral cache control
    pub fn ephemeral() -> Self {
        Self {
            control_type: "ephemeral".to_string(),
        }
    }
}

impl Default for CacheControl {
    fn default() -> Self {
        Self::ephemeral()
    }
}

/// Role of a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// User turn (human input)
    User,
    /// Assistant turn (model reply)
    Assistant,
}

impl std::fmt::Display for TurnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One content block within a turn
///
/// Only text blocks are produced by this service. `cache_control` is
/// omitted from the wire format when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text content
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        cache_control: Option<CacheControl>,
    },
}

impl ContentBlock {
    /// Create a plain text block with no cache marker
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            cache_control: None,
        }
    }

    /// Create a text block that is already cache-marked
    pub fn cached_text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            cache_control: Some(CacheControl::ephemeral()),
        }
    }

    /// Attach an ephemeral cache marker
    pub fn mark_cacheable(&mut self) {
        match self {
            Self::Text { cache_control, .. } => *cache_control = Some(CacheControl::ephemeral()),
        }
    }

    /// Strip any cache marker
    pub fn clear_cacheable(&mut self) {
        match self {
            Self::Text { cache_control, .. } => *cache_control = None,
        }
    }

    /// Whether this block carries a cache marker
    pub fn is_cacheable(&self) -> bool {
        match self {
            Self::Text { cache_control, .. } => cache_control.is_some(),
        }
    }

    /// The text content of this block
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
        }
    }
}

/// One turn in a conversation
///
/// Invariant: every turn has at least one content block. The
/// constructors uphold this; history mutation goes through
/// `ConversationHistory::add_turn` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Role of the sender
    pub role: TurnRole,
    /// Ordered content blocks
    pub content: Vec<ContentBlock>,
}

impl Turn {
    /// Create a turn with the given role and a single text block
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![ContentBlock::text(text)],
        }
    }

    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Create an assistant turn
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }

    /// Whether every block in this turn is cache-marked
    pub fn is_fully_cacheable(&self) -> bool {
        self.content.iter().all(|b| b.is_cacheable())
    }

    /// Whether any block in this turn is cache-marked
    pub fn has_cache_marker(&self) -> bool {
        self.content.iter().any(|b| b.is_cacheable())
    }
}
