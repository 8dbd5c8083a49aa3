//! Collection Routes
//!
//! - GET /api/:collection/ - Fixture items, bare or paginated
//! - GET /api/:collection - Same, without the trailing slash

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use octofit_core::Collection;

use crate::server::error::{ApiError, ApiResult};
use crate::server::state::AppState;

/// GET /api/:collection/
pub async fn list_collection(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<Value>> {
    let collection: Collection = name
        .parse()
        .map_err(|e: octofit_core::UnknownCollection| ApiError::NotFound(e.to_string()))?;

    let fixtures = state
        .fixtures
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("Fixture API is disabled".to_string()))?;

    tracing::debug!(
        collection = %collection,
        items = fixtures.items(collection).len(),
        envelope = %state.envelope,
        "Serving fixture collection"
    );

    Ok(Json(fixtures.body(collection, state.envelope)))
}
