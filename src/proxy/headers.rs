//! Header utilities for upstream requests
//!
//! Upstream requests carry only the relay's own credential and content type;
//! nothing from the inbound client request is forwarded.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{AppResult, RelayError};

/// Build the headers sent with every upstream request
pub fn build_default_headers(api_key: &str) -> AppResult<HeaderMap> {
    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", api_key))
        .map_err(|e| RelayError::InvalidCredential(e.to_string()))?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
