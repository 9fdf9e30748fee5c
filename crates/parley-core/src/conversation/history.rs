//! Conversation history with a sliding cache window
//!
//! The history keeps every turn for the life of the process and marks the
//! most recent user turns as cache-eligible so the provider can reuse
//! processed token state across requests. Older user turns lose their
//! marker as the window slides forward; the provider would treat stale
//! markers as extra cache breakpoints, so they must come off.

use crate::llm::messages::{Turn, TurnRole};

/// Number of trailing user turns that carry a cache marker
pub const MAX_CACHED_USER_TURNS: usize = 3;

/// Ordered, growable sequence of turns for one user
///
/// Insertion order is chronological order is transmission order. Turns
/// are never evicted; per-user growth is bounded only by session length.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn and re-evaluate cache markers
    ///
    /// The new turn starts unmarked; `apply_cache_markers` then recomputes
    /// the full marking from scratch. O(turns) per append, acceptable for
    /// session-length conversations.
    pub fn add_turn(&mut self, role: TurnRole, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
        self.apply_cache_markers();
    }

    /// Ordered view of all turns for transmission to the provider
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns in the history
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the history holds no turns
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Recompute cache markers across the whole history
    ///
    /// The last `MAX_CACHED_USER_TURNS` user turns get a marker on every
    /// block; all earlier user turns have theirs cleared. Assistant turns
    /// are never marked. Idempotent: re-running without an intervening
    /// append changes nothing.
    fn apply_cache_markers(&mut self) {
        let user_turn_count = self
            .turns
            .iter()
            .filter(|t| t.role == TurnRole::User)
            .count();
        let cached_start = user_turn_count.saturating_sub(MAX_CACHED_USER_TURNS);

        let mut user_index = 0;
        for turn in &mut self.turns {
            if turn.role != TurnRole::User {
                continue;
            }
            if user_index >= cached_start {
                for block in &mut turn.content {
                    block.mark_cacheable();
                }
            } else {
                for block in &mut turn.content {
                    block.clear_cacheable();
                }
            }
            user_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect (role, fully-marked) pairs for assertion readability
    fn markings(history: &ConversationHistory) -> Vec<(TurnRole, bool)> {
        history
            .turns()
            .iter()
            .map(|t| (t.role, t.is_fully_cacheable()))
            .collect()
    }

    #[test]
    fn test_fewer_than_window_all_marked() {
        let mut history = ConversationHistory::new();
        history.add_turn(TurnRole::User, "one");
        history.add_turn(TurnRole::User, "two");

        assert_eq!(
            markings(&history),
            vec![(TurnRole::User, true), (TurnRole::User, true)]
        );
    }

    #[test]
    fn test_window_slides_past_oldest_user_turn() {
        let mut history = ConversationHistory::new();
        for text in ["first", "second", "third", "fourth"] {
            history.add_turn(TurnRole::User, text);
        }

        // After the 4th user message the 1st must be unmarked
        assert_eq!(
            markings(&history),
            vec![
                (TurnRole::User, false),
                (TurnRole::User, true),
                (TurnRole::User, true),
                (TurnRole::User, true),
            ]
        );
    }

    #[test]
    fn test_assistant_turns_never_marked() {
        let mut history = ConversationHistory::new();
        for i in 0..5 {
            history.add_turn(TurnRole::User, format!("q{}", i));
            history.add_turn(TurnRole::Assistant, format!("a{}", i));
        }

        for turn in history.turns() {
            if turn.role == TurnRole::Assistant {
                assert!(!turn.has_cache_marker());
            }
        }
    }

    #[test]
    fn test_window_counts_user_turns_only() {
        let mut history = ConversationHistory::new();
        history.add_turn(TurnRole::User, "q1");
        history.add_turn(TurnRole::Assistant, "a1");
        history.add_turn(TurnRole::User, "q2");
        history.add_turn(TurnRole::Assistant, "a2");
        history.add_turn(TurnRole::User, "q3");

        // Three user turns interleaved with assistant turns: all marked
        let user_marks: Vec<bool> = history
            .turns()
            .iter()
            .filter(|t| t.role == TurnRole::User)
            .map(|t| t.is_fully_cacheable())
            .collect();
        assert_eq!(user_marks, vec![true, true, true]);
    }

    #[test]
    fn test_marking_invariant_after_every_append() {
        let mut history = ConversationHistory::new();
        for i in 0..10 {
            history.add_turn(TurnRole::User, format!("q{}", i));
            history.add_turn(TurnRole::Assistant, format!("a{}", i));

            let user_turns: Vec<&Turn> = history
                .turns()
                .iter()
                .filter(|t| t.role == TurnRole::User)
                .collect();
            let cached_start = user_turns.len().saturating_sub(MAX_CACHED_USER_TURNS);
            for (idx, turn) in user_turns.iter().enumerate() {
                assert_eq!(turn.is_fully_cacheable(), idx >= cached_start);
            }
        }
    }

    #[test]
    fn test_remarking_is_idempotent() {
        let mut history = ConversationHistory::new();
        for i in 0..6 {
            history.add_turn(TurnRole::User, format!("q{}", i));
        }

        let before = history.turns().to_vec();
        history.apply_cache_markers();
        assert_eq!(history.turns(), &before[..]);
    }
}
