use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for generative-text providers (Gemini, etc.)
///
/// One operation: turn a prompt into a text completion. The caller supplies
/// the model identifier; the credential is bound at construction time so a
/// provider instance never outlives its request.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Run a single-turn generation request and return the completion text
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// A recorded generate call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub model: String,
        pub prompt: String,
    }

    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        response: Option<String>,
        error: Option<String>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                response: None,
                error: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn with_response(mut self, response: impl Into<String>) -> Self {
            self.response = Some(response.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Calls observed so far, in order
        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, DomainError> {
            self.calls.lock().unwrap().push(RecordedCall {
                model: model.to_string(),
                prompt: prompt.to_string(),
            });

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.name, error));
            }

            self.response
                .clone()
                .ok_or_else(|| DomainError::provider(self.name, "No mock response configured"))
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}
