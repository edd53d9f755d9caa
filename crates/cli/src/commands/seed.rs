//! # CLI Seed Command
//!
//! Runs the database seeders outside the serve pipeline, e.g. after
//! restoring a database or adding a new seed unit.

use error::Result;
use seeder::{SeedServices, Seeder};
use tokio::sync::watch;
use tracing::info;

use crate::{commands::SeedArgs, config::DatabaseConfig};

/// Runs all registered seed units against the configured database
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Seed command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn seed(config: &DatabaseConfig, args: SeedArgs) -> Result<()> {
    let database_url = crate::config::build_database_url(config);

    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let results = Seeder::builtin().run_all(&db, &SeedServices::new(), shutdown_rx).await?;

    info!(target: "seed", executed = results.len(), "Seeding completed");

    if args.verbose {
        for result in &results {
            info!(
                target: "seed",
                seeder = %result.seed_name,
                inserted = result.inserted_count,
                updated = result.updated_count,
                duration_ms = result.duration_ms,
                "Seed unit summary"
            );
        }
    }

    Ok(())
}
