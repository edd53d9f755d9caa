//! # Seed Data Management
//!
//! This crate provides the database-seeding subsystem: a registry of
//! prioritized [`SeedUnit`]s, a persisted history of which units have
//! already run, and a [`Seeder`] coordinator that drives one ordered,
//! sequential pass over the registry during application startup.
//!
//! Each unit runs inside its own transaction together with its history
//! record, so a crash mid-pass never leaves a unit half-applied or
//! applied-but-unrecorded.
//!
//! ## Example
//!
//! ```rust,ignore
//! use seeder::{SeedServices, Seeder};
//! use tokio::sync::watch;
//!
//! let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//! let results = Seeder::builtin()
//!     .run_all(&db, &SeedServices::new(), shutdown_rx)
//!     .await?;
//! ```

pub mod coordinator;
pub mod history;
pub mod services;
pub mod unit;
pub mod units;

pub use coordinator::Seeder;
pub use error::SeedResult;
pub use services::{RoleDirectory, SeedServices};
pub use unit::SeedUnit;
