//! Per-user conversation state

pub mod history;
pub mod store;

pub use history::ConversationHistory;
pub use store::ConversationStore;
