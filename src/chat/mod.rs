//! Chat application module for interactive conversations with the bot.
//!
//! This module provides the conversation controller and the terminal
//! front end built on top of the infera client library. It supports:
//!
//! - One in-flight turn at a time with optimistic message appends
//! - Fallback bot messages for malformed payloads and transport failures
//! - Slash commands for session control
//! - ANSI-styled output with numbered, copyable code blocks
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Conversation state and turn reconciliation
//! - [`commands`]: Slash command parsing and handling
//! - [`render`]: The presentation boundary

mod commands;
mod config;
mod render;
mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_MODEL, DEFAULT_USER_NAME, DEFAULT_USER_ROLE};
pub use render::{AnsiRenderer, Renderer};
pub use session::{
    ChatSession, MALFORMED_REPLY_FALLBACK, SessionStats, TRANSPORT_ERROR_FALLBACK, TurnOutcome,
};
