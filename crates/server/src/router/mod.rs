//! # API Router Configuration
//!
//! Configures API routes for the Groundwork application.

use axum::{extract::State as AxumState, routing::get, Json, Router};
use error::Result;

use crate::AppState;

/// Creates the API router with all routes
///
/// # Arguments
///
/// * `state` - Application state containing DB pool and config
///
/// # Returns
///
/// Configured Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/info", get(info_handler))
        .route("/api/v1/seeders", get(seeders_handler))
        .with_state(state)
}

/// Wrapper handler for the info endpoint that uses State extractor
async fn info_handler(AxumState(state): AxumState<AppState>) -> Result<Json<crate::dto::status::InfoResponse>> {
    crate::status::info_handler_inner(&state).await
}

/// Wrapper handler for the seeder history listing
async fn seeders_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<crate::dto::status::SeederHistoryResponse>> {
    crate::status::seeders_handler_inner(&state).await
}

/// Creates the health check router
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(|| async { "OK" }))
}

/// Creates the main application router
///
/// # Arguments
///
/// * `state` - Application state containing DB pool and config
///
/// # Returns
///
/// Main router with health checks and API routes
pub fn create_app_router(state: AppState) -> Router {
    Router::new().merge(create_health_router()).merge(create_router(state))
}
