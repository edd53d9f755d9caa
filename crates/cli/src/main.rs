//! # Groundwork CLI
//!
//! Command-line interface for the Groundwork application.
//!
//! ## Usage
//!
//! ```bash
//! groundwork serve    # Start the API server (runs migrations and seeders automatically)
//! groundwork migrate  # Run database migrations
//! groundwork seed     # Run the database seeders
//! groundwork --help   # Show help
//! ```

mod commands;
mod config;
mod server;

use clap::{CommandFactory as _, Parser};
use error::Result;

use crate::commands::Commands;

/// Groundwork - full-stack application starter
#[derive(Parser, Debug)]
#[command(name = "groundwork")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "GROUNDWORK_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level, &cli.log_format, None) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| error::AppError::config(e.to_string()))?;
            server::serve(&db_config, &args).await
        }
        Commands::Migrate(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| error::AppError::config(e.to_string()))?;
            commands::migrate::migrate(&db_config, args).await
        }
        Commands::Seed(args) => {
            let db_config = config::DatabaseConfig::from_env().map_err(|e| error::AppError::config(e.to_string()))?;
            commands::seed::seed(&db_config, args).await
        }
        Commands::Completions(args) => commands::completions::completions(args.shell, &mut Cli::command()),
        Commands::Validate => commands::validate::validate(),
    }
}
