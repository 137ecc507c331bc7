//! The transport boundary between the conversation controller and the
//! network.

use crate::error::Result;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Performs the network call for one conversation turn.
///
/// Implementations post the projected conversation upstream and return the
/// raw response payload, or fail with a transport error. The controller
/// treats both outcomes as recoverable; nothing behind this trait is
/// allowed to crash a turn.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Posts the conversation and returns the raw response payload.
    async fn post_conversation(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}
