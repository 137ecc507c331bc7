use serde::{Deserialize, Serialize};

use crate::types::{Role, Turn};

/// A single part of a content entry. The API allows several part kinds;
/// this client only ever sends text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// The text of this part.
    pub text: String,
}

impl Part {
    /// Creates a new text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A role-tagged content entry in the Gemini wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// The role of this entry.
    pub role: Role,

    /// The parts making up this entry.
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a new content entry with a single text part.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::new(text)],
        }
    }
}

impl From<Turn> for Content {
    fn from(turn: Turn) -> Self {
        Content::new(turn.role, turn.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn content_wire_shape() {
        let content = Content::from(Turn::user("2+2?"));
        assert_eq!(
            to_value(&content).unwrap(),
            json!({
                "role": "user",
                "parts": [{ "text": "2+2?" }]
            })
        );
    }
}
