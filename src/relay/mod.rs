//! Relay service
//!
//! Turns client input into a fixed instruction + user message pair, makes
//! one upstream call, and parses the model's reply as JSON.

pub mod image;
pub mod operation;
pub mod reply;
pub mod schema;

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::Instrument;

use crate::{
    config::Config,
    error::{AppResult, RelayError},
    prompts,
    proxy::{
        logging::RequestContext,
        types::{ChatCompletionRequest, ChatMessage, ContentPart, ImageDetail, ImageUrl},
        ChatProvider,
    },
    routes::metrics::record_request,
};

pub use image::{FoodImage, ImageBuffer};
pub use operation::Operation;

/// Stateless relay between the client routes and the chat provider
pub struct RelayService {
    provider: Arc<dyn ChatProvider>,
    model: String,
    strip_code_fences: bool,
    max_image_bytes: usize,
}

impl RelayService {
    pub fn new(config: &Config, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider,
            model: config.openai_model.clone(),
            strip_code_fences: config.strip_code_fences,
            max_image_bytes: config.max_image_bytes,
        }
    }

    /// Upload ceiling for the image route
    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }

    /// Generate a workout plan (array of training days)
    pub async fn generate_workout(&self, prompt: Option<String>) -> AppResult<Value> {
        let prompt = require_prompt(prompt)?;
        self.ensure_configured()?;
        self.complete(
            Operation::Workout,
            vec![
                ChatMessage::system(Operation::Workout.system_prompt()),
                ChatMessage::user(prompt),
            ],
            Ok,
        )
        .await
    }

    /// Generate daily nutrition goals
    pub async fn generate_nutrition_goals(&self, prompt: Option<String>) -> AppResult<Value> {
        let prompt = require_prompt(prompt)?;
        self.ensure_configured()?;
        self.complete(
            Operation::NutritionGoals,
            vec![
                ChatMessage::system(Operation::NutritionGoals.system_prompt()),
                ChatMessage::user(prompt),
            ],
            Ok,
        )
        .await
    }

    /// Identify the foods in a meal photo
    ///
    /// Returns the parsed object so its keys can be merged into the envelope.
    pub async fn analyze_food_image(
        &self,
        image: Option<FoodImage>,
    ) -> AppResult<Map<String, Value>> {
        let image = image.ok_or(RelayError::MissingInput)?;
        if image.bytes.len() > self.max_image_bytes {
            return Err(RelayError::ImageTooLarge {
                limit: self.max_image_bytes,
            });
        }
        self.ensure_configured()?;

        tracing::info!(
            file_name = ?image.file_name,
            size = image.bytes.len(),
            mime_type = %image.mime_type,
            "Meal photo received"
        );

        let parts = vec![
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image.data_uri(),
                    detail: Some(ImageDetail::Low),
                },
            },
            ContentPart::Text {
                text: prompts::FOOD_IMAGE_USER_TEXT.to_string(),
            },
        ];

        self.complete(
            Operation::FoodImage,
            vec![
                ChatMessage::system(Operation::FoodImage.system_prompt()),
                ChatMessage::user_parts(parts),
            ],
            reply::into_object,
        )
        .await
    }

    fn ensure_configured(&self) -> AppResult<()> {
        if self.provider.is_configured() {
            Ok(())
        } else {
            Err(RelayError::MissingCredential)
        }
    }

    /// One upstream round trip for `operation`, with `shape` applied to the parsed reply
    async fn complete<T, F>(
        &self,
        operation: Operation,
        messages: Vec<ChatMessage>,
        shape: F,
    ) -> AppResult<T>
    where
        F: FnOnce(Value) -> AppResult<T>,
    {
        let ctx = RequestContext::new(self.provider.name(), operation).with_model(&self.model);
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: operation.temperature(),
            max_tokens: operation.max_tokens(),
        };

        let span = ctx.create_span();
        let result = async {
            ctx.log_request_start(request.max_tokens);
            let response = self.provider.chat_completion(&request).await?;
            let content = response.into_content().ok_or_else(|| {
                RelayError::UpstreamParse("reply carried no message content".to_string())
            })?;
            ctx.log_reply(&content);
            reply::parse_reply(&content, self.strip_code_fences).and_then(shape)
        }
        .instrument(span)
        .await;

        let elapsed = ctx.start_time.elapsed().as_secs_f64();
        match &result {
            Ok(_) => {
                ctx.log_success();
                record_request(operation, "success", elapsed);
            }
            Err(err) => {
                ctx.log_error(err);
                record_request(operation, err.kind(), elapsed);
            }
        }
        result
    }
}

/// The prompt must be present and non-empty
fn require_prompt(prompt: Option<String>) -> AppResult<String> {
    match prompt {
        Some(prompt) if !prompt.is_empty() => Ok(prompt),
        _ => Err(RelayError::MissingInput),
    }
}
