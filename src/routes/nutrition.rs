//! Nutrition goals endpoint

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    envelope::Envelope,
    error::OperationError,
    relay::{schema::PromptRequest, Operation},
    routes::read_prompt,
    AppState,
};

/// Generate daily calorie and macro targets
#[utoipa::path(
    post,
    path = "/api/gerar-metas-nutricionais",
    tag = "Nutrição",
    request_body = PromptRequest,
    responses(
        (status = 200, description = "Generated goals", body = crate::relay::schema::NutritionGoalsResponse),
        (status = 400, description = "Missing prompt", body = crate::error::FailureEnvelope),
        (status = 500, description = "Missing credential or upstream failure", body = crate::error::FailureEnvelope)
    )
)]
pub async fn generate_nutrition_goals(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<Envelope>, OperationError> {
    let operation = Operation::NutritionGoals;
    let prompt = read_prompt(body).map_err(|e| e.during(operation))?;

    let metas = state
        .relay
        .generate_nutrition_goals(prompt)
        .await
        .map_err(|e| e.during(operation))?;

    Ok(Json(Envelope::with_key("metas", metas)))
}
