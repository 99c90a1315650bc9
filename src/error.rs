//! Error types for the FitGenius relay
//!
//! `RelayError` is operation-agnostic. Handlers attach the operation they
//! serve with [`RelayError::during`], and the resulting [`OperationError`]
//! is rendered as the uniform failure envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{relay::Operation, routes::metrics::record_outcome};

/// Message shown when no upstream credential is available
const MISSING_CREDENTIAL_MESSAGE: &str = "Chave da OpenAI não configurada.";

/// Relay-level errors
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("required input is missing")]
    MissingInput,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("image exceeds the {limit} byte upload limit")]
    ImageTooLarge { limit: usize },

    #[error("only one image may be attached")]
    MultipleImages,

    #[error("upstream credential is not configured")]
    MissingCredential,

    #[error("upstream credential is not a valid header value: {0}")]
    InvalidCredential(String),

    #[error("{}", describe_upstream_call(.status, .message))]
    UpstreamCall { status: Option<u16>, message: String },

    #[error("upstream reply is not valid JSON: {0}")]
    UpstreamParse(String),
}

fn describe_upstream_call(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("upstream responded with status {}: {}", status, message),
        None => format!("upstream request failed: {}", message),
    }
}

impl RelayError {
    /// Whether the client sent unusable input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RelayError::MissingInput
                | RelayError::MalformedBody(_)
                | RelayError::ImageTooLarge { .. }
                | RelayError::MultipleImages
        )
    }

    /// Error class used in logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::MissingInput
            | RelayError::MalformedBody(_)
            | RelayError::ImageTooLarge { .. }
            | RelayError::MultipleImages => "validation",
            RelayError::MissingCredential | RelayError::InvalidCredential(_) => "config",
            RelayError::UpstreamCall { .. } => "upstream_call",
            RelayError::UpstreamParse(_) => "upstream_parse",
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Attach the operation being served
    pub fn during(self, operation: Operation) -> OperationError {
        OperationError {
            operation,
            source: self,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        RelayError::UpstreamCall {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}

/// Failure envelope returned by every relay route
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureEnvelope {
    /// Always `false`
    pub sucesso: bool,
    /// Client-facing description of the failure
    pub error: String,
    /// Technical detail, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<String>,
}

/// A relay error bound to the operation that produced it
#[derive(Debug, Error)]
#[error("{operation}: {source}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: RelayError,
}

impl OperationError {
    /// Build the failure envelope for this error
    pub fn envelope(&self) -> FailureEnvelope {
        let (error, detalhes) = match &self.source {
            RelayError::MissingInput => (self.operation.missing_input_message().to_string(), None),
            RelayError::MalformedBody(_) => (
                self.operation.missing_input_message().to_string(),
                Some(self.source.to_string()),
            ),
            RelayError::ImageTooLarge { .. } => (
                "Imagem excede o tamanho máximo permitido.".to_string(),
                Some(self.source.to_string()),
            ),
            RelayError::MultipleImages => ("Envie apenas uma imagem.".to_string(), None),
            RelayError::MissingCredential => (MISSING_CREDENTIAL_MESSAGE.to_string(), None),
            RelayError::InvalidCredential(_) => (
                MISSING_CREDENTIAL_MESSAGE.to_string(),
                Some(self.source.to_string()),
            ),
            RelayError::UpstreamCall { .. } | RelayError::UpstreamParse(_) => (
                self.operation.failure_message().to_string(),
                Some(self.source.to_string()),
            ),
        };

        FailureEnvelope {
            sucesso: false,
            error,
            detalhes,
        }
    }
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let status = self.source.status_code();
        let kind = self.source.kind();

        if status.is_server_error() {
            error!(operation = %self.operation, kind = kind, error = %self.source, "Relay request failed");
        } else {
            warn!(operation = %self.operation, kind = kind, error = %self.source, "Relay request rejected");
        }
        // Upstream failures are counted where the round trip is timed
        if !matches!(self.source, RelayError::UpstreamCall { .. } | RelayError::UpstreamParse(_)) {
            record_outcome(self.operation, kind);
        }

        (status, Json(self.envelope())).into_response()
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, RelayError>;
