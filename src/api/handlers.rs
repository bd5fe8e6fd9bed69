use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{RecommendationsResponse, TravelPreferences},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generate three destination recommendations for the submitted preferences
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(preferences): Json<TravelPreferences>,
) -> AppResult<Json<RecommendationsResponse>> {
    preferences.validate()?;

    tracing::info!(
        request_id = %request_id,
        budget = preferences.budget,
        currency = %preferences.currency,
        duration = preferences.duration,
        mood = %preferences.mood,
        country = ?preferences.country_filter(),
        "Processing recommendation request"
    );

    let recommendations = state.recommender.recommend(&preferences).await?;

    tracing::info!(
        request_id = %request_id,
        source = recommendations.source.as_str(),
        results = recommendations.destinations.len(),
        "Recommendations ready"
    );

    Ok(Json(RecommendationsResponse {
        destinations: recommendations.destinations,
    }))
}
