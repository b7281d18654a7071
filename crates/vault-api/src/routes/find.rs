//! Asset search endpoint — the full resolve/synthesize/suggest pipeline.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use uuid::Uuid;

use vault_protocol::{
    FindAssetsRequest, FindAssetsResponse, IntelligenceSummary, MAX_REQUEST_LEN, MIN_REQUEST_LEN,
    ResponseMetadata,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /api/v1/assets/find — resolve a free-text asset request.
///
/// Length bounds are enforced here, before the core pipeline runs; the
/// resolver itself tolerates any non-empty string.
pub async fn find_assets(
    State(state): State<AppState>,
    Json(req): Json<FindAssetsRequest>,
) -> ApiResult<Json<FindAssetsResponse>> {
    let len = req.request.chars().count();
    if !(MIN_REQUEST_LEN..=MAX_REQUEST_LEN).contains(&len) {
        return Err(ApiError::BadRequest(format!(
            "request must be between {MIN_REQUEST_LEN} and {MAX_REQUEST_LEN} characters"
        )));
    }

    let intent = state.resolver.resolve(&req.request, &req.context).await;
    let results = vault_results::synthesize(&state.catalog, &intent);
    let suggestions = vault_results::suggest(&intent, &results);

    tracing::info!(
        parsing_method = ?intent.parsing_method,
        confidence = intent.confidence,
        results = results.len(),
        "asset request resolved"
    );

    let intelligence = IntelligenceSummary::from_intent(&intent);
    let metadata = ResponseMetadata {
        request_id: Uuid::now_v7(),
        query: req.request,
        timestamp: Utc::now(),
    };

    Ok(Json(FindAssetsResponse {
        intent,
        results,
        suggestions,
        intelligence,
        metadata,
    }))
}
