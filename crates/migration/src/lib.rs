//! # Groundwork Database Migrations
//!
//! Schema migrations for the Groundwork database, managed with
//! `sea-orm-migration`. The migrator creates the `roles` and
//! `seeder_history` tables; initial data is populated by the seeder
//! crate, not by migrations.

pub use sea_orm_migration::prelude::*;

pub mod db;
mod migrator;

mod m20260110_000001_create_roles_table;
mod m20260110_000002_create_seeder_history_table;

pub use db::{connect_from_env, load_config_from_env, DatabaseConfig};
pub use migrator::Migrator;

/// Convenience alias for the Sea-ORM connection handle.
pub type SeaDb = sea_orm::DatabaseConnection;

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<SeaDb, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}
