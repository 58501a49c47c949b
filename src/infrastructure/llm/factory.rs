use std::sync::Arc;

use super::gemini::GeminiProvider;
use super::http_client::HttpClient;
use crate::api::state::ProviderFactory;
use crate::domain::LlmProvider;

/// Builds a Gemini provider around each request's credential.
///
/// The reqwest connection pool is shared across requests; the credential is
/// not. Every call gets a provider instance that owns only its own key.
#[derive(Debug, Clone)]
pub struct GeminiProviderFactory {
    client: HttpClient,
    base_url: Option<String>,
}

impl GeminiProviderFactory {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new(),
            base_url: None,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            base_url: Some(base_url.into()),
        }
    }
}

impl Default for GeminiProviderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderFactory for GeminiProviderFactory {
    fn provider_for(&self, api_key: &str) -> Arc<dyn LlmProvider> {
        match &self.base_url {
            Some(base_url) => Arc::new(GeminiProvider::with_base_url(
                self.client.clone(),
                api_key,
                base_url,
            )),
            None => Arc::new(GeminiProvider::new(self.client.clone(), api_key)),
        }
    }
}
