//! Type definitions for the infera client.
//!
//! Domain types ([`Message`], [`Turn`]) model the local conversation;
//! wire types ([`GenerateContentRequest`], [`GenerateContentResponse`])
//! mirror the Gemini `generateContent` schema.

mod content;
mod generate_content_request;
mod generate_content_response;
mod message;
mod turn;

pub use content::{Content, Part};
pub use generate_content_request::GenerateContentRequest;
pub use generate_content_response::{
    Candidate, GenerateContentResponse, ResponseContent, ResponsePart,
};
pub use message::{BOT_NAME, Message, Sender};
pub use turn::{Role, Turn};
