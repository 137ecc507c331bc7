use serde::{Deserialize, Serialize};

/// Role tag for a projected conversation turn.
///
/// The upstream API distinguishes only two roles: the human is `user`,
/// everything else (the bot, by any display name) is `model`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,

    /// Model role.
    Model,
}

/// A role-tagged turn in the upstream request shape.
///
/// This is the history projector's output: transport-independent, ordered,
/// one entry per stored message plus the draft being sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The role of the turn.
    pub role: Role,

    /// The turn's text content.
    pub content: String,
}

impl Turn {
    /// Creates a new turn with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a new user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates a new model turn.
    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Role::Model, content)
    }
}
