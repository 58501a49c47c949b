//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::LlmProvider;

/// Builds a provider bound to one request's credential.
///
/// The factory itself holds no credentials; each inbound request hands its
/// own API key in and gets back a provider that owns that key alone.
pub trait ProviderFactory: Send + Sync + std::fmt::Debug {
    fn provider_for(&self, api_key: &str) -> Arc<dyn LlmProvider>;
}

/// Application state injected into handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider_factory: Arc<dyn ProviderFactory>,
    model: String,
}

impl AppState {
    pub fn new(provider_factory: Arc<dyn ProviderFactory>, model: impl Into<String>) -> Self {
        Self {
            provider_factory,
            model: model.into(),
        }
    }

    /// Fixed model identifier used for every generation call
    pub fn model(&self) -> &str {
        &self.model
    }
}
