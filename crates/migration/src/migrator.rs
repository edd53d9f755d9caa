//! # Database Migrator
//!
//! This module implements the Sea-ORM migrator trait for managing database schema changes.
//! The migrator coordinates all migration operations and maintains the migration history.

use sea_orm_migration::prelude::*;

/// The main migrator that coordinates all migration operations
///
/// This struct implements the `MigratorTrait` and is responsible for:
/// - Loading all available migrations
/// - Executing migrations in order
/// - Tracking migration history in the database
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// The migrations managed by this migrator
    ///
    /// Add new migrations to this list as they are created.
    /// Migrations are executed in the order they appear in this list.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(crate::m20260110_000001_create_roles_table::Migration),
            Box::new(crate::m20260110_000002_create_seeder_history_table::Migration),
        ]
    }
}
