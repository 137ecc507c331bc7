use serde::{Deserialize, Serialize};

/// Display name of the bot in conversations.
pub const BOT_NAME: &str = "Infera";

/// Who produced a message in the conversation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human participant.
    User,

    /// The bot participant, displayed as [`BOT_NAME`].
    Bot,
}

/// One conversational turn as held in the message store.
///
/// `text` is immutable once created and may contain markdown, including
/// fenced code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within a conversation; allocated by the store.
    pub id: u64,

    /// Who produced this message.
    pub sender: Sender,

    /// The raw message text.
    pub text: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(id: u64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, Sender::User, text)
    }

    /// Creates a new bot message.
    pub fn bot(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, Sender::Bot, text)
    }
}
