//! Profile and entry-counter handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::auth::AppState;
use crate::db::ProfileRepository;
use crate::web::dto::{ApiResponse, EntriesRequest, EntriesResponse, ProfileResponse};
use crate::web::error::ApiError;

/// GET /profile/:id - Get a profile by ID.
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let repo = ProfileRepository::new(state.db.pool());
    let profile = repo
        .get_by_id(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("no profile for the given id"))?;

    Ok(Json(ApiResponse::new(ProfileResponse::from(profile))))
}

/// PUT /image - Increment the entry counter and return the new value.
pub async fn increment_entries(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EntriesRequest>,
) -> Result<Json<ApiResponse<EntriesResponse>>, ApiError> {
    let repo = ProfileRepository::new(state.db.pool());
    let entries = repo
        .increment_entries(req.id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("no profile for the given id"))?;

    Ok(Json(ApiResponse::new(EntriesResponse { entries })))
}
