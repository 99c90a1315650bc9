//! Meal photo analysis endpoint

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::{
    envelope::Envelope,
    error::{AppResult, OperationError, RelayError},
    relay::{FoodImage, ImageBuffer, Operation},
    AppState,
};

/// Multipart field carrying the photo
pub const IMAGE_FIELD: &str = "image";

/// Identify foods and estimate macros from a meal photo
///
/// The keys of the model's object are merged into the envelope:
/// `{ "sucesso": true, "alimentos": [...] }`.
#[utoipa::path(
    post,
    path = "/api/analyze-image",
    tag = "Imagem",
    request_body(content = crate::relay::schema::ImageUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Recognized foods", body = crate::relay::schema::FoodAnalysisResponse),
        (status = 400, description = "Missing or oversized image", body = crate::error::FailureEnvelope),
        (status = 500, description = "Missing credential or upstream failure", body = crate::error::FailureEnvelope)
    )
)]
pub async fn analyze_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Envelope>, OperationError> {
    let operation = Operation::FoodImage;

    let image = match multipart {
        Ok(multipart) => read_image(multipart, state.relay.max_image_bytes())
            .await
            .map_err(|e| e.during(operation))?,
        Err(rejection) => {
            debug!(rejection = %rejection, "Image upload is not multipart");
            None
        }
    };

    let analysis = state
        .relay
        .analyze_food_image(image)
        .await
        .map_err(|e| e.during(operation))?;

    Ok(Json(Envelope::merged(analysis)))
}

/// Stream the `image` field into a bounded buffer
///
/// Other fields are skipped. A second `image` field is rejected.
async fn read_image(mut multipart: Multipart, limit: usize) -> AppResult<Option<FoodImage>> {
    let to_relay_error = |e: MultipartError| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RelayError::ImageTooLarge { limit }
        } else {
            RelayError::MalformedBody(e.body_text())
        }
    };

    let mut seen = false;
    let mut image = None;

    while let Some(mut field) = multipart.next_field().await.map_err(to_relay_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        if seen {
            return Err(RelayError::MultipleImages);
        }
        seen = true;

        let mime_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);

        let mut buffer = ImageBuffer::with_limit(limit);
        while let Some(chunk) = field.chunk().await.map_err(to_relay_error)? {
            buffer.push(&chunk)?;
        }
        image = buffer.finish(mime_type.as_deref(), file_name.as_deref());
    }

    Ok(image)
}
