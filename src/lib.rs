// Public modules
pub mod chat;
pub mod client;
pub mod clipboard;
pub mod error;
pub mod history;
pub mod markdown;
pub mod observability;
pub mod store;
pub mod transport;
pub mod types;

// Re-exports
pub use client::Gemini;
pub use error::{Error, Result};
pub use store::MessageStore;
pub use transport::Transport;
pub use types::*;
