//! Axum route handlers for the generate endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::generate::normalizer::InterviewParams;
use crate::generate::parser::parse_questions;
use crate::generate::prompts::interview_questions_prompt;
use crate::llm_client::MODEL;
use crate::models::interview::Interview;
use crate::state::AppState;

/// The single collection all interview records are appended to.
pub const INTERVIEWS_COLLECTION: &str = "interviews";

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub data: Interview,
}

/// GET /api/vapi/generate
///
/// Connectivity probe used by the voice-agent dashboard.
pub async fn handle_ping() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "API is working fine ✅"
    }))
}

/// POST /api/vapi/generate
///
/// Full pipeline: normalize body → prompt the model → parse questions →
/// assemble record → append to the store. The body is read as a raw string
/// and parsed here so that an unparseable body reaches the catch-all 500
/// instead of an extractor rejection.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GenerateResponse>, AppError> {
    let body: Value = serde_json::from_str(&body)?;

    let params = InterviewParams::from_body(&body);
    debug!(
        "Normalized request: role={:?}, type={:?}, level={:?}, amount={:?}",
        params.role, params.interview_type, params.level, params.amount
    );

    let prompt = interview_questions_prompt(&params);
    let output = state.generator.generate(MODEL, &prompt).await?;

    let parsed = parse_questions(&output);
    debug!("Parsed model output via {} branch", parsed.label());
    let questions = parsed.into_list();

    let interview = Interview::build(params, questions);
    // Record serialization failing is an internal fault, not a bad request.
    let document = serde_json::to_value(&interview).map_err(|e| AppError::Internal(e.into()))?;
    state
        .store
        .add_document(INTERVIEWS_COLLECTION, &document)
        .await?;

    Ok(Json(GenerateResponse {
        success: true,
        data: interview,
    }))
}
