//! Request/response bodies for the generate endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /generate request body
///
/// Every field is optional at the deserialization boundary; presence is
/// checked by [`GenerateRequest::into_fields`] so that absent fields and
/// explicit `null` are handled the same way. The `options` field carries
/// whatever JSON shape the caller sends.
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct GenerateRequest {
    pub api_key: Option<String>,
    pub question: Option<String>,
    pub options: Option<Value>,
}

impl GenerateRequest {
    /// Split the request into its three required fields, or `None` if any of
    /// them is absent or empty.
    pub fn into_fields(self) -> Option<(String, String, Value)> {
        let api_key = self.api_key.filter(|key| !key.is_empty())?;
        let question = self.question.filter(|question| !question.is_empty())?;
        let options = self.options.filter(|options| !value_is_empty(options))?;

        Some((api_key, question, options))
    }
}

// The credential must never reach the logs, so Debug elides it.
impl std::fmt::Debug for GenerateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateRequest")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("question", &self.question)
            .field("options", &self.options)
            .finish()
    }
}

/// Empty or falsy JSON values count as missing, matching how the options
/// field behaves for every shape a caller might send.
fn value_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// POST /generate success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub answer: String,
}
