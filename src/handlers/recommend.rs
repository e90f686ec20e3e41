use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ApiResponse, RouteConstraints, RouteOption, TravelIntent};
use crate::services::recommend;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RecommendRequest {
    pub intent: TravelIntent,
    #[serde(default)]
    pub constraints: Option<RouteConstraints>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

// POST /recommend
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<ApiResponse<Vec<RouteOption>>>, AppError> {
    let source = req
        .intent
        .source
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let destination = req
        .intent
        .destination
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(source), Some(destination)) = (source, destination) else {
        return Err(AppError::Validation(
            "intent.source and intent.destination are required".to_string(),
        ));
    };

    let limit = req.max_results.unwrap_or(recommend::DEFAULT_LIMIT);
    let options = recommend::recommend(
        source,
        destination,
        req.constraints.as_ref(),
        &state.routes,
        limit,
    );

    tracing::info!(
        source = %source,
        destination = %destination,
        matches = options.len(),
        "recommendation served"
    );

    Ok(Json(ApiResponse::ok(options)))
}
