use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{ApiResponse, LocationKind, LocationSuggestion};
use crate::services::locations;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
    #[serde(rename = "type")]
    pub kind: Option<LocationKind>,
}

// GET /locations/search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<Vec<LocationSuggestion>>>, AppError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Err(AppError::Validation(
            "query parameter \"q\" is required".to_string(),
        ));
    }

    let limit = params.limit.unwrap_or(10);

    let results = match &state.places {
        Some(places) => locations::search_remote(places.as_ref(), query, limit)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "remote location search failed");
                AppError::Upstream("failed to search locations".to_string())
            })?,
        None => locations::search_gazetteer(&state.gazetteer, query, limit, params.kind),
    };

    Ok(Json(ApiResponse::ok(results)))
}

// GET /locations/:id
pub async fn details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<LocationSuggestion>>, AppError> {
    let location = locations::find_by_id(&state.gazetteer, &id)
        .ok_or_else(|| AppError::NotFound(format!("location {id}")))?;

    Ok(Json(ApiResponse::ok(location.clone())))
}
