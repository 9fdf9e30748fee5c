//! Message processor
//!
//! The single entry point for the chat operation: validates input, appends
//! the user turn to the caller's conversation, invokes the provider once,
//! appends the assistant turn, and returns the generated text.

use crate::conversation::store::ConversationStore;
use crate::error::{ParleyError, ParleyResult};
use crate::llm::messages::{ContentBlock, TurnRole};
use crate::llm::providers::CompletionBackend;
use crate::prompts;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Orchestrates one chat exchange per call
///
/// The store is injected rather than ambient so the server process owns
/// its lifecycle and tests can build isolated instances.
pub struct MessageProcessor {
    store: Arc<ConversationStore>,
    backend: Arc<dyn CompletionBackend>,
}

impl MessageProcessor {
    /// Create a processor over the given store and backend
    pub fn new(store: Arc<ConversationStore>, backend: Arc<dyn CompletionBackend>) -> Self {
        Self { store, backend }
    }

    /// The conversation store backing this processor
    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    /// Process one user message and return the assistant's reply
    ///
    /// Validation and the credential check run before any state mutation
    /// or upstream call. The per-user lock is held across the provider
    /// await, so concurrent calls for the same user are serialized rather
    /// than interleaving their turn appends.
    ///
    /// On upstream failure the already-appended user turn stays in the
    /// history; there is no rollback and no automatic retry.
    pub async fn process(&self, message: &str, user_id: &str) -> ParleyResult<String> {
        if message.trim().is_empty() {
            return Err(ParleyError::invalid_field("Message is required", "message"));
        }

        if !self.backend.has_credentials() {
            error!("Model provider API key is missing");
            return Err(ParleyError::config("Missing model provider API key"));
        }

        info!(user_id, "Processing chat message");

        let handle = self.store.get_or_create(user_id);
        let mut history = handle.lock().await;

        history.add_turn(TurnRole::User, message);

        let system = [ContentBlock::cached_text(prompts::padded_system_prompt())];
        let response = match self.backend.complete(&system, history.turns()).await {
            Ok(response) => response,
            Err(err) => {
                error!(user_id, "Provider call failed: {}", err);
                // Recognized errors propagate unchanged; the backend only
                // returns ParleyError, so no further wrapping is needed.
                return Err(err);
            }
        };

        let reply = response.text();
        history.add_turn(TurnRole::Assistant, reply.clone());

        if let Some(usage) = &response.usage {
            debug!(
                user_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                cache_creation_input_tokens = ?usage.cache_creation_input_tokens,
                cache_read_input_tokens = ?usage.cache_read_input_tokens,
                "Provider usage"
            );
        }

        info!(user_id, reply_len = reply.len(), "Chat message processed");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::messages::Turn;
    use crate::llm::responses::{CompletionResponse, ResponseBlock};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// Scripted backend: pops queued results and records every request
    struct ScriptedBackend {
        has_credentials: bool,
        responses: StdMutex<Vec<ParleyResult<CompletionResponse>>>,
        seen_requests: StdMutex<Vec<(Vec<ContentBlock>, Vec<Turn>)>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<ParleyResult<CompletionResponse>>) -> Self {
            Self {
                has_credentials: true,
                responses: StdMutex::new(responses),
                seen_requests: StdMutex::new(Vec::new()),
            }
        }

        fn without_credentials() -> Self {
            Self {
                has_credentials: false,
                responses: StdMutex::new(Vec::new()),
                seen_requests: StdMutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.seen_requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn has_credentials(&self) -> bool {
            self.has_credentials
        }

        async fn complete(
            &self,
            system: &[ContentBlock],
            turns: &[Turn],
        ) -> ParleyResult<CompletionResponse> {
            self.seen_requests
                .lock()
                .unwrap()
                .push((system.to_vec(), turns.to_vec()));
            self.responses.lock().unwrap().remove(0)
        }
    }

    fn text_response(parts: &[&str]) -> CompletionResponse {
        CompletionResponse {
            content: parts
                .iter()
                .map(|p| ResponseBlock::Text {
                    text: p.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn processor_with(backend: Arc<ScriptedBackend>) -> MessageProcessor {
        MessageProcessor::new(Arc::new(ConversationStore::new()), backend)
    }

    #[tokio::test]
    async fn test_successful_exchange() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(text_response(&[
            "Hello! ", "How can I help?",
        ]))]));
        let processor = processor_with(backend.clone());

        let reply = processor.process("hello", "abc").await.unwrap();
        assert_eq!(reply, "Hello! How can I help?");

        // History holds exactly the user turn and the assistant turn
        let handle = processor.store().get_or_create("abc");
        let history = handle.lock().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].role, TurnRole::User);
        assert_eq!(history.turns()[0].content[0].as_text(), "hello");
        assert_eq!(history.turns()[1].role, TurnRole::Assistant);
        assert_eq!(
            history.turns()[1].content[0].as_text(),
            "Hello! How can I help?"
        );
    }

    #[tokio::test]
    async fn test_empty_message_rejected_before_any_effect() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let processor = processor_with(backend.clone());

        let err = processor.process("", "u1").await.unwrap_err();
        assert!(matches!(err, ParleyError::InvalidInput { .. }));
        assert_eq!(err.status_code(), 400);

        assert_eq!(backend.call_count(), 0);
        assert!(!processor.store().contains("u1"));
    }

    #[tokio::test]
    async fn test_whitespace_only_message_rejected() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let processor = processor_with(backend.clone());

        let err = processor.process("   ", "u1").await.unwrap_err();
        assert!(matches!(err, ParleyError::InvalidInput { .. }));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_leaves_store_untouched() {
        let backend = Arc::new(ScriptedBackend::without_credentials());
        let processor = processor_with(backend.clone());

        let err = processor.process("hi", "u1").await.unwrap_err();
        assert!(matches!(err, ParleyError::Config { .. }));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.user_message(), "Server configuration error");

        assert_eq!(backend.call_count(), 0);
        assert!(!processor.store().contains("u1"));
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_user_turn() {
        let backend = Arc::new(ScriptedBackend::new(vec![Err(
            ParleyError::upstream_with_provider("connection reset", "anthropic"),
        )]));
        let processor = processor_with(backend.clone());

        let err = processor.process("hi", "u1").await.unwrap_err();
        assert!(matches!(err, ParleyError::Upstream { .. }));

        // No rollback: the user turn is already recorded
        let handle = processor.store().get_or_create("u1");
        let history = handle.lock().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history.turns()[0].role, TurnRole::User);
    }

    #[tokio::test]
    async fn test_empty_provider_reply_is_empty_string() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(text_response(&[]))]));
        let processor = processor_with(backend.clone());

        let reply = processor.process("hi", "u1").await.unwrap();
        assert_eq!(reply, "");

        let handle = processor.store().get_or_create("u1");
        assert_eq!(handle.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_system_block_is_cache_marked() {
        let backend = Arc::new(ScriptedBackend::new(vec![Ok(text_response(&["ok"]))]));
        let processor = processor_with(backend.clone());

        processor.process("hi", "u1").await.unwrap();

        let requests = backend.seen_requests.lock().unwrap();
        let (system, turns) = &requests[0];
        assert_eq!(system.len(), 1);
        assert!(system[0].is_cacheable());
        // The just-appended user turn is part of the outbound sequence
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].content[0].as_text(), "hi");
    }

    #[tokio::test]
    async fn test_multi_turn_window_slides_through_processor() {
        let backend = Arc::new(ScriptedBackend::new(
            (0..4)
                .map(|i| Ok(text_response(&[format!("r{}", i).as_str()])))
                .collect(),
        ));
        let processor = processor_with(backend.clone());

        for i in 0..4 {
            processor
                .process(&format!("question {}", i), "u1")
                .await
                .unwrap();
        }

        let handle = processor.store().get_or_create("u1");
        let history = handle.lock().await;
        let user_marks: Vec<bool> = history
            .turns()
            .iter()
            .filter(|t| t.role == TurnRole::User)
            .map(|t| t.is_fully_cacheable())
            .collect();
        assert_eq!(user_marks, vec![false, true, true, true]);
    }
}
