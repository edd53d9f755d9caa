//! # Groundwork API Server
//!
//! Axum-based HTTP API server for the Groundwork application.
//!
//! ## Modules
//!
//! - [`dto`]: Response data transfer objects
//! - [`router`]: API route configuration
//! - [`status`]: Health, info, and seeder reporting handlers

pub mod dto;
pub mod router;
pub mod status;

pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: sea_orm::DbConn,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Creates application state around an established connection.
    #[must_use]
    pub fn new(db: sea_orm::DbConn) -> Self {
        Self {
            db,
            start_time: std::time::Instant::now(),
        }
    }
}
