//! Gemini provider implementation

mod factory;
mod gemini;
mod http_client;

pub use factory::GeminiProviderFactory;
pub use gemini::GeminiProvider;
pub use http_client::{HttpClient, HttpClientTrait};
