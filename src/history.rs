//! In-memory conversation history.
//!
//! One [`History`] lives for the duration of a single process invocation.
//! It is owned by [`App`](crate::app::App) and handed to handlers by
//! reference; nothing here touches the disk.

use crate::message::Turn;

/// Append-only ordered sequence of [`Turn`]s.
#[derive(Debug, Default, Clone)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Appends a completed exchange: the prompt, then the reply.
    pub fn push_exchange(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(Turn::user(prompt));
        self.turns.push(Turn::model(reply));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;

    #[test]
    fn test_starts_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_exchange_keeps_order() {
        let mut history = History::new();
        history.push_exchange("q1", "a1");
        history.push_user("context");
        history.push_exchange("q2", "a2");

        let roles: Vec<Role> = history.turns().iter().map(|t| t.role()).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Model, Role::User, Role::User, Role::Model]
        );
        assert_eq!(history.turns()[4].text(), "a2");
    }
}
