//! OpenAPI specification for the relay API
//!
//! Aggregates the relay endpoints and the documented result shapes into a
//! single OpenAPI document.

use utoipa::OpenApi;

use crate::{
    error::FailureEnvelope,
    relay::schema::{
        Exercise, FoodAnalysisResponse, FoodItem, ImageUpload, NutritionGoals,
        NutritionGoalsResponse, PromptRequest, WorkoutDay, WorkoutResponse,
    },
    routes::health::{HealthResponse, HealthStatus},
};

/// OpenAPI specification for the FitGenius relay
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FitGenius Relay API",
        version = "1.0.0",
        description = "Generates workouts and nutrition goals and analyzes meal photos through an LLM"
    ),
    paths(
        crate::routes::health::health_check,
        crate::routes::workout::generate_workout,
        crate::routes::nutrition::generate_nutrition_goals,
        crate::routes::food_image::analyze_image
    ),
    components(
        schemas(
            // Requests
            PromptRequest,
            ImageUpload,
            // Results
            Exercise,
            WorkoutDay,
            WorkoutResponse,
            NutritionGoals,
            NutritionGoalsResponse,
            FoodItem,
            FoodAnalysisResponse,
            // Envelopes
            FailureEnvelope,
            HealthStatus,
            HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Treino", description = "Workout plan generation"),
        (name = "Nutrição", description = "Nutrition goal generation"),
        (name = "Imagem", description = "Meal photo analysis")
    )
)]
pub struct RelayApiDoc;
