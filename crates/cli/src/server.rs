//! # CLI Server
//!
//! Server startup and management for the Groundwork CLI.
//!
//! Startup order is fixed: connect, apply pending migrations, run the
//! seeders, then bind the listener. A migration or seed failure aborts
//! startup before the service accepts any traffic.

use std::net::SocketAddr;

use anyhow::anyhow;
use error::Result;
use migration::{Migrator, MigratorTrait as _};
use seeder::{SeedServices, Seeder};
use server::{create_app_router, AppState};
use tokio::{net::TcpListener, sync::watch};
use tracing::info;

use crate::{commands::ServeArgs, config::DatabaseConfig};

/// Starts the API server
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Serve command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn serve(config: &DatabaseConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting API server...");

    let database_url = crate::config::build_database_url(config);

    info!(target: "serve", "Connecting to database...");
    let db = migration::connect_to_database(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    // Run migrations automatically on startup
    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run database migrations: {}", e))?;
    info!(target: "serve", "Database migrations completed successfully");

    // A shutdown signal received during seeding aborts the pass between
    // units; the same channel later drives the HTTP graceful shutdown.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    info!(target: "serve", "Seeding the database...");
    let results = Seeder::builtin()
        .run_all(&db, &SeedServices::new(), shutdown_rx.clone())
        .await?;
    info!(target: "serve", executed = results.len(), "Database seeding completed");

    let state = AppState::new(db);
    let app = create_app_router(state);

    let address = crate::config::parse_socket_addr(&args.host, args.port)
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    serve_http(&app, &address, shutdown_rx).await
}

/// Serves the application over HTTP
async fn serve_http(app: &axum::Router, address: &SocketAddr, mut shutdown_rx: watch::Receiver<bool>) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    Ok(axum::serve(
        listener,
        app.clone().into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        let _ = shutdown_rx.changed().await;
    })
    .await
    .map_err(|e| anyhow!("HTTP server error: {}", e))?)
}

/// Waits for shutdown signals (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
