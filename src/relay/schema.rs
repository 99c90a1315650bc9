//! Documented result shapes
//!
//! The relay passes the model's JSON through untouched; these types describe
//! what the system instructions ask for and back the OpenAPI document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body of the prompt routes
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PromptRequest {
    /// Free-form description of the user's profile and goals
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Multipart body of the image route
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageUpload {
    /// Meal photo
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// One exercise in a training day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub nome: String,
    /// Number of sets (number or text)
    #[schema(value_type = String)]
    pub series: Value,
    /// Repetitions per set (number or text)
    #[schema(value_type = String)]
    pub repeticoes: Value,
    pub descanso: String,
    pub descricao: String,
}

/// One training day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDay {
    pub dia: String,
    #[serde(rename = "gruposMusculares")]
    pub grupos_musculares: Vec<String>,
    pub exercicios: Vec<Exercise>,
}

/// Daily macro targets
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NutritionGoals {
    pub calorias: f64,
    pub proteinas: f64,
    pub carboidratos: f64,
    pub gorduras: f64,
    pub explicacao: String,
}

/// One recognized food item; quantities in grams
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub nome: String,
    pub quantidade: f64,
    pub calorias: f64,
    pub proteinas: f64,
    pub carboidratos: f64,
    pub gorduras: f64,
}

/// Success envelope of `/api/gerar-treino`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub sucesso: bool,
    pub treino: Vec<WorkoutDay>,
}

/// Success envelope of `/api/gerar-metas-nutricionais`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NutritionGoalsResponse {
    pub sucesso: bool,
    pub metas: NutritionGoals,
}

/// Success envelope of `/api/analyze-image`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FoodAnalysisResponse {
    pub sucesso: bool,
    /// Empty when nothing was recognized
    pub alimentos: Vec<FoodItem>,
}
