//! Chat provider abstraction
//!
//! The relay service talks to its upstream through this trait so tests can
//! substitute a scripted provider for the HTTP client.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::proxy::types::{ChatCompletionRequest, ChatCompletionResponse};

/// Interface for chat-completion backends
///
/// # Security
///
/// Implementations use their own configured credential and never forward
/// anything from the inbound client request besides the relay payload.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Whether a credential is available for upstream calls
    fn is_configured(&self) -> bool;

    /// Send one chat completion request and return the parsed response
    async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> AppResult<ChatCompletionResponse>;
}
