//! # Status Handlers
//!
//! Health, build info, and seeder-history reporting endpoints.

use axum::Json;
use error::Result;

use crate::{
    dto::status::{InfoResponse, SeederHistoryEntry, SeederHistoryResponse},
    AppState,
};

/// Build and uptime information.
pub async fn info_handler_inner(state: &AppState) -> Result<Json<InfoResponse>> {
    Ok(Json(InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    }))
}

/// Read-only listing of seed units that have completed, ordered by priority.
pub async fn seeders_handler_inner(state: &AppState) -> Result<Json<SeederHistoryResponse>> {
    let records = seeder::history::all_records(&state.db).await?;
    let seeders: Vec<SeederHistoryEntry> = records.into_iter().map(SeederHistoryEntry::from).collect();
    Ok(Json(SeederHistoryResponse { seeders }))
}
