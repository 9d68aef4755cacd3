//! Authentication handlers.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::auth;
use crate::web::dto::{ApiResponse, ProfileResponse, RegisterRequest, SignInRequest};
use crate::web::error::ApiError;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle, cloned per handler call.
    pub db: Database,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// POST /signin - Sign a user in.
pub async fn signin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    // Validate input before touching the store
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let profile = auth::sign_in(state.db.pool(), &req.email, &req.password).await?;

    Ok(Json(ApiResponse::new(ProfileResponse::from(profile))))
}

/// POST /register - Register a new account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    // Validate input before touching the store
    if req.email.is_empty() || req.name.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request(
            "Email, name, and password are required",
        ));
    }

    let profile = auth::register(state.db.pool(), &req.email, &req.name, &req.password).await?;

    Ok(Json(ApiResponse::new(ProfileResponse::from(profile))))
}
