//! Health check endpoint

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Message reported by the health check
pub const HEALTH_MESSAGE: &str = "Backend FitGenius está rodando!";

/// Health status enum
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub message: String,
}

/// Health check endpoint
///
/// Always 200; does not depend on the upstream credential.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: HealthStatus::Ok,
            message: HEALTH_MESSAGE.to_string(),
        }),
    )
}
