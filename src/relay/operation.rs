//! Relay operations and their fixed upstream parameters

use std::fmt;

use crate::prompts;

/// Temperature used by the text operations
const TEXT_TEMPERATURE: f64 = 0.7;

/// One of the relay routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Workout plan generation (`/api/gerar-treino`)
    Workout,
    /// Nutrition goals (`/api/gerar-metas-nutricionais`)
    NutritionGoals,
    /// Meal photo analysis (`/api/analyze-image`)
    FoodImage,
}

impl Operation {
    /// System instruction sent ahead of the user content
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Operation::Workout => prompts::WORKOUT_SYSTEM_PROMPT,
            Operation::NutritionGoals => prompts::NUTRITION_SYSTEM_PROMPT,
            Operation::FoodImage => prompts::FOOD_IMAGE_SYSTEM_PROMPT,
        }
    }

    /// Sampling temperature; `None` leaves the upstream default
    pub fn temperature(&self) -> Option<f64> {
        match self {
            Operation::Workout | Operation::NutritionGoals => Some(TEXT_TEMPERATURE),
            Operation::FoodImage => None,
        }
    }

    /// Response token budget
    pub fn max_tokens(&self) -> u32 {
        match self {
            Operation::Workout => 2500,
            Operation::NutritionGoals | Operation::FoodImage => 1000,
        }
    }

    /// Label used for metrics and structured log fields
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Workout => "workout",
            Operation::NutritionGoals => "nutrition_goals",
            Operation::FoodImage => "food_image",
        }
    }

    /// Message returned when the required input is absent
    pub fn missing_input_message(&self) -> &'static str {
        match self {
            Operation::Workout => "Prompt obrigatório para gerar treino.",
            Operation::NutritionGoals => "Prompt obrigatório para gerar metas.",
            Operation::FoodImage => "Nenhuma imagem enviada.",
        }
    }

    /// Message returned when the upstream call or its reply fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Workout => "Erro ao gerar treino.",
            Operation::NutritionGoals => "Erro ao gerar metas.",
            Operation::FoodImage => "Erro ao analisar imagem.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
