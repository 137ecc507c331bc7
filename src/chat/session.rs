//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns the
//! conversation state and reconciles transport outcomes back into it.

use crate::chat::ChatConfig;
use crate::error::Error;
use crate::history::project;
use crate::observability;
use crate::store::MessageStore;
use crate::transport::Transport;
use crate::types::{GenerateContentRequest, Message, Sender, Turn};

/// Fallback bot message for a structurally malformed response payload.
pub const MALFORMED_REPLY_FALLBACK: &str =
    "Sorry, I could not get a response. Please try again.";

/// Fallback bot message for a transport failure.
pub const TRANSPORT_ERROR_FALLBACK: &str =
    "An error occurred while connecting to the chatbot. Please try again later.";

/// How a single call to [`ChatSession::send_turn`] settled.
///
/// Every variant returns the session to idle; failures are substituted into
/// the conversation as fallback bot messages and never propagated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The draft was empty after trimming, or a turn was already in
    /// flight. Nothing changed.
    Ignored,

    /// The reply text was parsed and appended.
    Fulfilled,

    /// The payload arrived but lacked the reply-text field; a fallback
    /// message was appended instead.
    MalformedResponse,

    /// The transport call failed; a fallback message was appended instead.
    TransportError,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: String,

    /// The number of messages in the conversation.
    pub message_count: usize,

    /// Completed turns, including ones that ended in a fallback.
    pub turn_count: u64,

    /// Turns that ended with a fallback message substituted.
    pub fallback_count: u64,

    /// Whether a turn is currently in flight.
    pub awaiting_reply: bool,
}

/// A chat session that manages conversation state and reconciles each
/// turn's outcome.
///
/// The session owns the message store, the not-yet-sent draft, and the
/// awaiting-reply flag; nothing else mutates them. All state changes happen
/// on the caller's task and the transport call is the only suspension
/// point, so appends observe strict completion order.
pub struct ChatSession<T: Transport> {
    transport: T,
    model: String,
    user_name: String,
    user_role: String,
    store: MessageStore,
    pending_input: String,
    awaiting_reply: bool,
    turn_count: u64,
    fallback_count: u64,
    last_error: Option<Error>,
}

impl<T: Transport> ChatSession<T> {
    /// Creates a session with a freshly seeded conversation.
    pub fn new(transport: T, config: ChatConfig) -> Self {
        let store = MessageStore::seeded(&config.user_name, &config.user_role);
        Self {
            transport,
            model: config.model,
            user_name: config.user_name,
            user_role: config.user_role,
            store,
            pending_input: String::new(),
            awaiting_reply: false,
            turn_count: 0,
            fallback_count: 0,
            last_error: None,
        }
    }

    /// Read-only view of the conversation.
    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    /// True strictly between turn start and turn settlement.
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// The current draft text.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replaces the draft text.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Sends the current draft as a turn.
    pub async fn submit(&mut self) -> TurnOutcome {
        let draft = self.pending_input.clone();
        self.send_turn(&draft).await
    }

    /// Runs one full conversation turn.
    ///
    /// The draft is trimmed; an empty draft is a no-op, as is a call while
    /// a previous turn is still in flight (the front end is expected to
    /// disable sending, this guard is defense in depth). Otherwise the user
    /// message is appended optimistically, the prior history is projected
    /// and the new turn appended to the projection exactly once and always
    /// last, and the transport outcome is reconciled back into the store.
    /// Failures become fallback bot messages; no error escapes this method,
    /// and the awaiting flag is cleared on every settled path.
    ///
    /// There is no timeout or retry here. If the transport never settles,
    /// the session stays in the sending state; bounding the wait is the
    /// transport's concern (the bundled client carries reqwest's request
    /// timeout, which surfaces as an ordinary transport failure).
    pub async fn send_turn(&mut self, draft: &str) -> TurnOutcome {
        let prompt = draft.trim();
        if prompt.is_empty() || self.awaiting_reply {
            observability::SESSION_TURNS_IGNORED.click();
            return TurnOutcome::Ignored;
        }

        // Project the history as it existed before this turn, then ride
        // the new turn along as the final entry. The store append below is
        // the optimistic update the presentation layer renders from.
        let mut turns = project(self.store.messages());
        turns.push(Turn::user(prompt));

        self.store.append(Sender::User, prompt);
        self.pending_input.clear();
        self.awaiting_reply = true;

        let request = GenerateContentRequest::new(self.model.clone(), turns);
        let outcome = match self.transport.post_conversation(&request).await {
            Ok(response) => match response.reply_text() {
                Some(reply) => {
                    let reply = reply.to_string();
                    self.last_error = None;
                    self.store.append(Sender::Bot, reply);
                    TurnOutcome::Fulfilled
                }
                None => {
                    self.last_error =
                        Some(Error::malformed_response("reply text missing from payload"));
                    self.store.append(Sender::Bot, MALFORMED_REPLY_FALLBACK);
                    TurnOutcome::MalformedResponse
                }
            },
            Err(err) => {
                self.last_error = Some(err);
                self.store.append(Sender::Bot, TRANSPORT_ERROR_FALLBACK);
                TurnOutcome::TransportError
            }
        };

        // Guaranteed release: every settled path above funnels through here.
        self.awaiting_reply = false;
        self.turn_count += 1;
        observability::SESSION_TURNS.click();
        if outcome != TurnOutcome::Fulfilled {
            self.fallback_count += 1;
            observability::SESSION_FALLBACKS.click();
        }
        outcome
    }

    /// Starts a new chat: reseeds the store, clears the draft and the
    /// transient per-turn state. Idempotent.
    pub fn reset(&mut self) {
        self.store.reset(&self.user_name, &self.user_role);
        self.pending_input.clear();
        self.last_error = None;
    }

    /// Changes the model used for subsequent turns.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    /// Returns the current model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The error behind the most recent fallback, if the last settled turn
    /// had one.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.model.clone(),
            message_count: self.store.len(),
            turn_count: self.turn_count,
            fallback_count: self.fallback_count,
            awaiting_reply: self.awaiting_reply,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::types::{GenerateContentResponse, Role};
    use std::sync::Mutex;

    /// Scripted transport: pops one canned outcome per call and records
    /// every request it sees.
    struct ScriptedTransport {
        script: Mutex<Vec<Result<GenerateContentResponse>>>,
        requests: Mutex<Vec<GenerateContentRequest>>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Result<GenerateContentResponse>>) -> Self {
            Self {
                script: Mutex::new(script),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn reply(text: &str) -> Result<GenerateContentResponse> {
            Ok(serde_json::from_value(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": text }], "role": "model" }
                }]
            }))
            .unwrap())
        }
    }

    #[async_trait::async_trait]
    impl Transport for ScriptedTransport {
        async fn post_conversation(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse> {
            self.requests.lock().unwrap().push(request.clone());
            self.script
                .lock()
                .unwrap()
                .pop()
                .expect("unexpected transport call")
        }
    }

    fn session_with(
        script: Vec<Result<GenerateContentResponse>>,
    ) -> ChatSession<ScriptedTransport> {
        ChatSession::new(ScriptedTransport::new(script), ChatConfig::new())
    }

    #[tokio::test]
    async fn successful_turn_grows_store_to_four() {
        let mut session = session_with(vec![ScriptedTransport::reply("2+2 is 4.")]);
        assert_eq!(session.messages().len(), 2);

        let outcome = session.send_turn("2+2?").await;

        assert_eq!(outcome, TurnOutcome::Fulfilled);
        let messages = session.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].sender, Sender::User);
        assert_eq!(messages[2].text, "2+2?");
        assert_eq!(messages[3].sender, Sender::Bot);
        assert_eq!(messages[3].text, "2+2 is 4.");
        assert!(!session.is_awaiting_reply());
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn request_carries_full_history_with_new_turn_last_exactly_once() {
        let mut session = session_with(vec![ScriptedTransport::reply("ok")]);
        session.send_turn("2+2?").await;

        let requests = session.transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let contents = &requests[0].contents;

        // Two seeds plus the new turn, ordered, new turn last.
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, Role::User);
        assert_eq!(contents[1].role, Role::Model);
        assert_eq!(contents[2].role, Role::User);
        assert_eq!(contents[2].parts[0].text, "2+2?");

        let occurrences = contents
            .iter()
            .filter(|c| c.parts.first().map(|p| p.text.as_str()) == Some("2+2?"))
            .count();
        assert_eq!(occurrences, 1);
    }

    #[tokio::test]
    async fn malformed_payload_substitutes_fallback() {
        let mut session = session_with(vec![Ok(GenerateContentResponse::default())]);
        let outcome = session.send_turn("hello").await;

        assert_eq!(outcome, TurnOutcome::MalformedResponse);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, MALFORMED_REPLY_FALLBACK);
        assert!(!session.is_awaiting_reply());
        assert!(session.last_error().unwrap().is_malformed_response());
    }

    #[tokio::test]
    async fn transport_failure_substitutes_fallback() {
        let mut session =
            session_with(vec![Err(Error::connection("refused", None))]);
        let outcome = session.send_turn("hello").await;

        assert_eq!(outcome, TurnOutcome::TransportError);
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, TRANSPORT_ERROR_FALLBACK);
        assert!(!session.is_awaiting_reply());
        assert!(session.last_error().unwrap().is_connection());
    }

    #[tokio::test]
    async fn whitespace_draft_is_a_noop() {
        let mut session = session_with(vec![]);
        let outcome = session.send_turn("   ").await;

        assert_eq!(outcome, TurnOutcome::Ignored);
        assert_eq!(session.messages().len(), 2);
        assert!(session.transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_send_is_rejected_at_the_boundary() {
        let mut session = session_with(vec![]);
        // Force the in-flight state the way a parked turn would.
        session.awaiting_reply = true;

        let outcome = session.send_turn("hello").await;

        assert_eq!(outcome, TurnOutcome::Ignored);
        assert_eq!(session.messages().len(), 2);
        assert!(session.transport.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_sends_and_clears_the_draft() {
        let mut session = session_with(vec![ScriptedTransport::reply("hi")]);
        session.update_draft("hello there");

        let outcome = session.submit().await;

        assert_eq!(outcome, TurnOutcome::Fulfilled);
        assert_eq!(session.pending_input(), "");
        assert_eq!(session.messages()[2].text, "hello there");
    }

    #[tokio::test]
    async fn reset_reseeds_and_clears_transient_state() {
        let mut session = session_with(vec![Err(Error::connection("refused", None))]);
        session.send_turn("hello").await;
        session.update_draft("half-typed");
        assert!(session.last_error().is_some());

        session.reset();
        let first = session.messages().to_vec();
        assert_eq!(first.len(), 2);
        assert_eq!(session.pending_input(), "");
        assert!(session.last_error().is_none());

        session.reset();
        assert_eq!(session.messages(), first.as_slice());
    }

    #[tokio::test]
    async fn stats_track_turns_and_fallbacks() {
        let mut session = session_with(vec![
            Err(Error::connection("refused", None)),
            ScriptedTransport::reply("ok"),
        ]);
        session.send_turn("one").await;
        session.send_turn("two").await;

        let stats = session.stats();
        assert_eq!(stats.message_count, 6);
        assert_eq!(stats.turn_count, 2);
        assert_eq!(stats.fallback_count, 1);
        assert!(!stats.awaiting_reply);
    }
}
