//! Bounded in-memory buffer for uploaded meal photos

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::{Bytes, BytesMut};

use crate::error::{AppResult, RelayError};

/// MIME type assumed when the upload does not declare one
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// An uploaded image held for the duration of one request
#[derive(Debug, Clone)]
pub struct FoodImage {
    pub bytes: Bytes,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl FoodImage {
    /// `data:` URI carrying the image inline
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Accumulates upload chunks, refusing anything past the ceiling
#[derive(Debug)]
pub struct ImageBuffer {
    limit: usize,
    data: BytesMut,
}

impl ImageBuffer {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            data: BytesMut::new(),
        }
    }

    /// Append a chunk; fails as soon as the total passes the limit
    pub fn push(&mut self, chunk: &[u8]) -> AppResult<()> {
        if self.data.len() + chunk.len() > self.limit {
            return Err(RelayError::ImageTooLarge { limit: self.limit });
        }
        self.data.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Finish the upload; an empty upload counts as no image
    pub fn finish(self, mime_type: Option<&str>, file_name: Option<&str>) -> Option<FoodImage> {
        if self.data.is_empty() {
            return None;
        }
        let mime_type = mime_type
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE);

        Some(FoodImage {
            bytes: self.data.freeze(),
            mime_type: mime_type.to_string(),
            file_name: file_name.map(str::to_string),
        })
    }
}
