//! Request logging utilities for relay calls
//!
//! Provides structured logging with correlation IDs so one relay request can
//! be followed from the inbound handler through the upstream call.

use std::time::Instant;
use tracing::{debug, error, info, Span};
use uuid::Uuid;

use crate::error::RelayError;
use crate::relay::Operation;

/// Context for tracking one relay call
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request (for log correlation)
    pub trace_id: String,
    /// When the request started
    pub start_time: Instant,
    /// Provider handling this request
    pub provider: String,
    /// Relay operation being served
    pub operation: Operation,
    /// Model being used
    pub model: Option<String>,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(provider: &str, operation: Operation) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            provider: provider.to_string(),
            operation,
            model: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log the outbound call
    pub fn log_request_start(&self, max_tokens: u32) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            operation = %self.operation,
            model = ?self.model,
            max_tokens = %max_tokens,
            "Calling upstream"
        );
    }

    /// Log the raw reply text (debug level)
    pub fn log_reply(&self, content: &str) {
        debug!(
            trace_id = %self.trace_id,
            operation = %self.operation,
            reply_len = content.len(),
            reply = %content,
            elapsed_ms = %self.elapsed_ms(),
            "Upstream reply received"
        );
    }

    /// Log a completed relay call
    pub fn log_success(&self) {
        info!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            operation = %self.operation,
            elapsed_ms = %self.elapsed_ms(),
            "Relay call completed"
        );
    }

    /// Log a failed relay call
    pub fn log_error(&self, err: &RelayError) {
        error!(
            trace_id = %self.trace_id,
            provider = %self.provider,
            operation = %self.operation,
            model = ?self.model,
            kind = err.kind(),
            elapsed_ms = %self.elapsed_ms(),
            error = %err,
            "Relay call failed"
        );
    }

    /// Create a tracing span for this request
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "relay_call",
            trace_id = %self.trace_id,
            provider = %self.provider,
            operation = %self.operation,
        )
    }
}
