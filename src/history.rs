//! Projection of stored messages into the upstream request shape.

use crate::types::{Message, Role, Sender, Turn};

/// Projects the conversation into role-tagged turns.
///
/// The mapping is total and order-preserving: every message becomes exactly
/// one turn, `Sender::User` maps to `Role::User`, and any other sender maps
/// to `Role::Model`. The full history is projected every time; resending it
/// whole is a deliberate simplicity/cost tradeoff.
pub fn project(messages: &[Message]) -> Vec<Turn> {
    messages
        .iter()
        .map(|message| {
            let role = match message.sender {
                Sender::User => Role::User,
                _ => Role::Model,
            };
            Turn::new(role, message.text.clone())
        })
        .collect()
}
