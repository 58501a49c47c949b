use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, LlmProvider};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini API provider
///
/// Holds the credential for exactly one request; the surrounding factory
/// builds a fresh instance per inbound call.
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn build_request(&self, prompt: &str) -> serde_json::Value {
        // Single user turn, no sampling parameters
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        // The key travels in a header, never in the URL
        vec![
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let response: GenerateContentResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("gemini", format!("Failed to parse response: {}", e))
        })?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("gemini", "No candidates in response"))?;

        candidate
            .content
            .parts
            .into_iter()
            .find_map(|part| part.text)
            .ok_or_else(|| DomainError::provider("gemini", "No text in response candidate"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GeminiProvider<C> {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, DomainError> {
        let url = self.generate_content_url(model);
        let body = self.build_request(prompt);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// ============================================================================
// Gemini API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Content,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::http_client::mock::MockHttpClient;
    use super::*;
    use serde_json::json;

    const URL: &str =
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

    fn candidate_response(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP",
            }],
            "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 1 },
        })
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let client = MockHttpClient::new().with_response(URL, candidate_response("2"));
        let provider = GeminiProvider::new(client, "test-key");

        let text = provider
            .generate("gemini-1.5-flash", "Question: ...")
            .await
            .unwrap();
        assert_eq!(text, "2");
    }

    #[tokio::test]
    async fn test_generate_preserves_surrounding_whitespace() {
        // Trimming happens at the handler boundary, not here
        let client = MockHttpClient::new().with_response(URL, candidate_response("  2  "));
        let provider = GeminiProvider::new(client, "test-key");

        let text = provider
            .generate("gemini-1.5-flash", "prompt")
            .await
            .unwrap();
        assert_eq!(text, "  2  ");
    }

    #[tokio::test]
    async fn test_generate_posts_single_user_turn() {
        let client = MockHttpClient::new().with_response(URL, candidate_response("1"));
        let provider = GeminiProvider::new(client, "test-key");

        provider
            .generate("gemini-1.5-flash", "the prompt")
            .await
            .unwrap();

        let requests = provider.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, URL);
        assert_eq!(
            requests[0].1,
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "the prompt" }] }],
            })
        );
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_an_error() {
        let client = MockHttpClient::new().with_response(URL, json!({ "candidates": [] }));
        let provider = GeminiProvider::new(client, "test-key");

        let err = provider
            .generate("gemini-1.5-flash", "prompt")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No candidates"));
    }

    #[tokio::test]
    async fn test_generate_propagates_http_errors() {
        let client = MockHttpClient::new().with_error(URL, "HTTP 400: API key not valid");
        let provider = GeminiProvider::new(client, "bad-key");

        let err = provider
            .generate("gemini-1.5-flash", "prompt")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider =
            GeminiProvider::with_base_url(MockHttpClient::new(), "k", "http://localhost:9090/");
        assert_eq!(
            provider.generate_content_url("gemini-1.5-flash"),
            "http://localhost:9090/models/gemini-1.5-flash:generateContent"
        );
    }
}
