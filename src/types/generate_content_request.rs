use serde::{Deserialize, Serialize};

use crate::types::{Content, Turn};

/// Parameters for a `generateContent` call.
///
/// The body carries the full projected conversation; the model is
/// addressing information for the transport (it lives in the request URL,
/// not the payload) and is skipped during serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// The model to route the request to.
    #[serde(skip)]
    pub model: String,

    /// The ordered conversation history, new turn last.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Creates a request from projected turns, preserving their order.
    pub fn new(model: impl Into<String>, turns: Vec<Turn>) -> Self {
        Self {
            model: model.into(),
            contents: turns.into_iter().map(Content::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn request_wire_shape_omits_model() {
        let request = GenerateContentRequest::new(
            "gemini-2.0-flash",
            vec![Turn::user("hi"), Turn::model("hello"), Turn::user("2+2?")],
        );
        assert_eq!(
            to_value(&request).unwrap(),
            json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "hi" }] },
                    { "role": "model", "parts": [{ "text": "hello" }] },
                    { "role": "user", "parts": [{ "text": "2+2?" }] }
                ]
            })
        );
    }

    #[test]
    fn request_preserves_turn_order() {
        let request =
            GenerateContentRequest::new("m", vec![Turn::user("a"), Turn::model("b")]);
        assert_eq!(request.contents.len(), 2);
        assert_eq!(request.contents[0].parts[0].text, "a");
        assert_eq!(request.contents[1].parts[0].text, "b");
    }
}
