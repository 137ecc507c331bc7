//! The ordered conversation store.
//!
//! A [`MessageStore`] is append-only within a turn: messages are added at
//! the end, never reordered or deleted, and the only wholesale mutation is
//! a reset back to the two seed messages.

use crate::types::{BOT_NAME, Message, Sender};

/// Ordered sequence of conversation messages plus the id allocator.
///
/// The store is never empty after construction: it is seeded with one
/// synthetic user self-introduction and one bot greeting. Ids come from an
/// internal counter that restarts on reset, which makes reset idempotent
/// down to the ids.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageStore {
    /// Creates a store seeded with the introduction and greeting for the
    /// given user name and role.
    pub fn seeded(user_name: &str, user_role: &str) -> Self {
        let mut store = Self {
            messages: Vec::new(),
            next_id: 0,
        };
        store.seed(user_name, user_role);
        store
    }

    /// Appends a message with a freshly allocated id and returns the id.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, sender, text));
        id
    }

    /// Replaces the whole conversation with the two seed messages.
    pub fn reset(&mut self, user_name: &str, user_role: &str) {
        self.messages.clear();
        self.next_id = 0;
        self.seed(user_name, user_role);
    }

    /// Read-only view of the conversation in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false after construction; kept for completeness.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn seed(&mut self, user_name: &str, user_role: &str) {
        self.append(
            Sender::User,
            format!("Hello, my name is {user_name} and I'm your {user_role}."),
        );
        self.append(
            Sender::Bot,
            format!("Hello {user_name}! I'm {BOT_NAME}. How can I assist you today, {user_role}?"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_two_messages() {
        let store = MessageStore::seeded("User 1", "Boss");
        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].sender, Sender::User);
        assert_eq!(
            store.messages()[0].text,
            "Hello, my name is User 1 and I'm your Boss."
        );
        assert_eq!(store.messages()[1].sender, Sender::Bot);
        assert_eq!(
            store.messages()[1].text,
            "Hello User 1! I'm Infera. How can I assist you today, Boss?"
        );
    }

    #[test]
    fn append_preserves_order_and_allocates_unique_ids() {
        let mut store = MessageStore::seeded("User 1", "Boss");
        let a = store.append(Sender::User, "first");
        let b = store.append(Sender::Bot, "second");
        assert!(a < b);
        assert_eq!(store.len(), 4);
        assert_eq!(store.last().unwrap().text, "second");

        let mut ids: Vec<u64> = store.messages().iter().map(|m| m.id).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut store = MessageStore::seeded("User 1", "Boss");
        store.append(Sender::User, "hello");
        store.append(Sender::Bot, "hi");

        store.reset("User 1", "Boss");
        let first = store.messages().to_vec();

        store.reset("User 1", "Boss");
        let second = store.messages().to_vec();

        assert_eq!(first, second);
        assert_eq!(store.len(), 2);
    }
}
