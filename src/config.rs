//! Configuration management for the FitGenius relay
//!
//! Configuration is loaded once from environment variables at startup and
//! handed to the relay service as an immutable value.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default upload ceiling for meal photos (10 MB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// OpenAI API URL
    pub openai_api_url: String,
    /// OpenAI API key; requests to the relay routes fail without it
    pub openai_api_key: Option<String>,
    /// Model used for every relay operation
    pub openai_model: String,

    /// Timeout applied to each upstream call
    pub upstream_timeout: Duration,
    /// Largest accepted image upload (in bytes)
    pub max_image_bytes: usize,
    /// Retry the JSON parse on the body of a markdown code fence
    pub strip_code_fences: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: var_or("HOST", "0.0.0.0"),
            port: var_or("PORT", "3000").parse().context("Invalid PORT")?,

            openai_api_url: var_or("OPENAI_API_URL", "https://api.openai.com/v1"),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
            openai_model: var_or("OPENAI_MODEL", "gpt-4o-mini"),

            upstream_timeout: Duration::from_secs(
                var_or("UPSTREAM_TIMEOUT_SECS", "60")
                    .parse()
                    .context("Invalid UPSTREAM_TIMEOUT_SECS")?,
            ),
            max_image_bytes: match lookup("MAX_IMAGE_BYTES") {
                Some(value) => value.parse().context("Invalid MAX_IMAGE_BYTES")?,
                None => DEFAULT_MAX_IMAGE_BYTES,
            },
            strip_code_fences: lookup("RELAY_STRIP_CODE_FENCES")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    /// Whether an upstream credential is available
    pub fn has_credential(&self) -> bool {
        self.openai_api_key.is_some()
    }
}
