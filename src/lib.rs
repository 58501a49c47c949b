//! MCQ Answer Relay
//!
//! A single-endpoint HTTP relay: it accepts a multiple-choice question,
//! forwards it as a formatted prompt to the Gemini API using the caller's
//! credential, and passes the answer back.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::llm::GeminiProviderFactory;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let provider_factory = match &config.provider.base_url {
        Some(base_url) => GeminiProviderFactory::with_base_url(base_url),
        None => GeminiProviderFactory::new(),
    };

    AppState::new(Arc::new(provider_factory), config.provider.model.clone())
}
