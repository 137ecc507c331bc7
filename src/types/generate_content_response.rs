use serde::{Deserialize, Serialize};

/// A part of a candidate response. Every field is optional: the payload is
/// traversed defensively and a missing segment means a malformed response,
/// not a crash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePart {
    /// The text of this part, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The content of a candidate response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseContent {
    /// The parts of the content, if present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ResponsePart>,

    /// The role reported by the API, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// One candidate reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate's content, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ResponseContent>,
}

/// A `generateContent` response payload.
///
/// `{}` deserializes successfully; well-formedness is decided by
/// [`reply_text`](GenerateContentResponse::reply_text), not by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// The candidate replies, if present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Returns the reply text at `candidates[0].content.parts[0].text`, or
    /// `None` if any segment of that path is missing or the text is empty.
    pub fn reply_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn well_formed_response() {
        let response: GenerateContentResponse = from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "2+2 is 4." }],
                    "role": "model"
                }
            }]
        }))
        .unwrap();
        assert_eq!(response.reply_text(), Some("2+2 is 4."));
    }

    #[test]
    fn empty_object_is_malformed() {
        let response: GenerateContentResponse = from_value(json!({})).unwrap();
        assert_eq!(response.reply_text(), None);
    }

    #[test]
    fn missing_parts_is_malformed() {
        let response: GenerateContentResponse = from_value(json!({
            "candidates": [{ "content": { "role": "model" } }]
        }))
        .unwrap();
        assert_eq!(response.reply_text(), None);
    }

    #[test]
    fn missing_content_is_malformed() {
        let response: GenerateContentResponse = from_value(json!({
            "candidates": [{}]
        }))
        .unwrap();
        assert_eq!(response.reply_text(), None);
    }

    #[test]
    fn empty_text_is_malformed() {
        let response: GenerateContentResponse = from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        }))
        .unwrap();
        assert_eq!(response.reply_text(), None);
    }

    #[test]
    fn extra_candidates_are_ignored() {
        let response: GenerateContentResponse = from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.reply_text(), Some("first"));
    }
}
