use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{HistoryResponse, RecommendationResponse},
    services::recommendations,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct HandleQuery {
    pub username: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommends problems for a Codeforces handle
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<HandleQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        username = ?query.username,
        "Processing recommendation request"
    );

    let response = recommendations::get_recommendations(
        state.source.as_ref(),
        &state.recommender,
        query.username.as_deref(),
    )
    .await?;

    tracing::info!(
        request_id = %request_id,
        recommendations = response.recommendations.len(),
        "Recommendation request completed"
    );

    Ok(Json(response))
}

/// Returns the submission history of a Codeforces handle
pub async fn history(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<HandleQuery>,
) -> AppResult<Json<HistoryResponse>> {
    tracing::info!(
        request_id = %request_id,
        username = ?query.username,
        "Processing history request"
    );

    let response =
        recommendations::get_history(state.source.as_ref(), query.username.as_deref()).await?;

    Ok(Json(response))
}
