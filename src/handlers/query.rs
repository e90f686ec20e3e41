use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ApiResponse, TravelIntent};
use crate::services::ai;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct QueryRequest {
    pub message: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub context: Option<QueryContext>,
}

/// Caller-supplied context. Carried for API compatibility; extraction does
/// not use it yet.
#[derive(Deserialize)]
#[allow(dead_code)]
pub struct QueryContext {
    pub current_location: Option<String>,
    pub user_id: Option<String>,
}

// POST /query
pub async fn parse_query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<ApiResponse<TravelIntent>>, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation(
            "message is required and must be a non-empty string".to_string(),
        ));
    }

    tracing::info!(message = %message, "parsing travel query");

    let intent = ai::intent::extract_intent(state.llm.as_deref(), message).await;

    Ok(Json(ApiResponse::ok(intent)))
}
