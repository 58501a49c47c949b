//! Generate endpoint handler

use axum::extract::State;
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, GenerateRequest, GenerateResponse, Json};
use crate::domain::build_prompt;

/// POST /generate
///
/// Validates the three required fields, builds the prompt, runs one
/// generation call with the caller's credential, and passes the trimmed
/// answer through. The question and options never reach the logs either;
/// only derived metadata (lengths, request id) is recorded.
pub async fn generate_answer(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let Some((api_key, question, options)) = request.into_fields() else {
        info!(request_id = %request_id, "Rejecting generate request with missing parameters");
        return Err(ApiError::missing_parameters());
    };

    let prompt = build_prompt(&question, &options);

    debug!(
        request_id = %request_id,
        model = %state.model(),
        prompt_len = prompt.len(),
        "Forwarding generate request"
    );

    let provider = state.provider_factory.provider_for(&api_key);
    let text = provider
        .generate(state.model(), &prompt)
        .await
        .map_err(ApiError::from)?;

    let answer = text.trim().to_string();

    info!(request_id = %request_id, answer_len = answer.len(), "Generate request completed");

    Ok(Json(GenerateResponse { answer }))
}
