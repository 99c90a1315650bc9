//! FitGenius relay - LLM-backed workout, nutrition and meal photo endpoints
//!
//! This library provides the core functionality for the relay server. Each
//! route forwards one prompt or image to a chat-completion API under a fixed
//! instruction and returns the model's JSON reply inside a `sucesso` envelope.

pub mod config;
pub mod docs;
pub mod envelope;
pub mod error;
pub mod prompts;
pub mod proxy;
pub mod relay;
pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};

pub use crate::config::Config;
pub use crate::proxy::{ChatProvider, OpenAIProvider};
pub use crate::relay::RelayService;

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub relay: RelayService,
}

impl AppState {
    /// Create a new application state backed by the OpenAI API
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling; timeouts are per call
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(32)
            .build()
            .context("Failed to build HTTP client")?;

        let provider: Arc<dyn ChatProvider> = Arc::new(OpenAIProvider::new(http_client, &config));

        Ok(Self::with_provider(config, provider))
    }

    /// Create an application state around an arbitrary chat provider
    pub fn with_provider(config: Config, provider: Arc<dyn ChatProvider>) -> Self {
        let relay = RelayService::new(&config, provider);
        Self { config, relay }
    }
}
