//! HTTP routes for the FitGenius relay
//!
//! This module defines all HTTP endpoints exposed by the service.

pub mod docs;
pub mod food_image;
pub mod health;
pub mod metrics;
pub mod nutrition;
pub mod workout;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppResult, RelayError},
    relay::schema::PromptRequest,
    AppState,
};

/// Room for multipart boundaries and part headers on top of the image ceiling
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The image route accepts bodies past axum's default limit; the exact
    // ceiling is enforced on the image part itself
    let upload_limit = state.relay.max_image_bytes() + MULTIPART_OVERHEAD_BYTES;
    let upload_routes = Router::new()
        .route("/api/analyze-image", post(food_image::analyze_image))
        .layer(DefaultBodyLimit::max(upload_limit));

    let relay_routes = Router::new()
        .route("/api/gerar-treino", post(workout::generate_workout))
        .route(
            "/api/gerar-metas-nutricionais",
            post(nutrition::generate_nutrition_goals),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(relay_routes)
        .merge(upload_routes)
        .merge(docs::create_docs_router())
        // Global middleware (applied to all routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Extract the prompt from a JSON body
///
/// An unreadable body is reported as malformed input.
pub(crate) fn read_prompt(
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> AppResult<Option<String>> {
    match body {
        Ok(Json(request)) => Ok(request.prompt),
        Err(rejection) => Err(RelayError::MalformedBody(rejection.body_text())),
    }
}
