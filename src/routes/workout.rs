//! Workout plan endpoint

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    envelope::Envelope,
    error::OperationError,
    relay::{schema::PromptRequest, Operation},
    routes::read_prompt,
    AppState,
};

/// Generate a workout plan from the user's description
///
/// Replies with `{ "sucesso": true, "treino": [...] }`.
#[utoipa::path(
    post,
    path = "/api/gerar-treino",
    tag = "Treino",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Generated plan", body = crate::relay::schema::WorkoutResponse),
        (status = 400, description = "Missing prompt", body = crate::error::FailureEnvelope),
        (status = 500, description = "Missing credential or upstream failure", body = crate::error::FailureEnvelope)
    )
)]
pub async fn generate_workout(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<Envelope>, OperationError> {
    let operation = Operation::Workout;
    let prompt = read_prompt(body).map_err(|e| e.during(operation))?;

    let treino = state
        .relay
        .generate_workout(prompt)
        .await
        .map_err(|e| e.during(operation))?;

    Ok(Json(Envelope::with_key("treino", treino)))
}
