//! Process-wide conversation store
//!
//! Maps opaque client-generated user identifiers to their conversation
//! histories. Entries are created lazily on first contact and never
//! evicted: state is ephemeral and per-process, so growth is bounded by
//! the number of distinct users seen since startup.

use crate::conversation::history::ConversationHistory;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one user's history
///
/// The async mutex doubles as the per-user serialization primitive: the
/// processor holds it across the provider call, so at most one in-flight
/// mutation exists per user while different users stay independent.
pub type HistoryHandle = Arc<Mutex<ConversationHistory>>;

/// Mapping from user identifier to conversation history
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: DashMap<String, HistoryHandle>,
}

impl ConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the history for `user_id`, creating it if absent
    ///
    /// Creation is atomic: concurrent first-contact calls for the same
    /// user resolve to one shared history, never two.
    pub fn get_or_create(&self, user_id: &str) -> HistoryHandle {
        self.conversations
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(ConversationHistory::new())))
            .clone()
    }

    /// Whether a history exists for `user_id`
    pub fn contains(&self, user_id: &str) -> bool {
        self.conversations.contains_key(user_id)
    }

    /// Number of tracked users
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
