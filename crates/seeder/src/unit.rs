//! # Seed Unit Contract
//!
//! A seed unit is one named, prioritized piece of initial-data setup.
//! Units are registered with the [`Seeder`](crate::Seeder) coordinator,
//! which orders them by priority and runs each eligible unit exactly once.

use error::{Result, SeedResult};
use sea_orm::DatabaseTransaction;

use crate::{history, services::SeedServices};

/// Trait for seed data providers
///
/// Implement this trait to provide seed data for the database. Units must
/// be constructible without external state; every collaborator arrives via
/// the transaction and [`SeedServices`] passed to the operations.
#[async_trait::async_trait]
pub trait SeedUnit: Send + Sync {
    /// The unique name of this seed unit.
    ///
    /// Must be stable across runs and at most 255 characters, since it is
    /// the key of the unit's history record.
    fn name(&self) -> &str;

    /// Execution priority. Lower values run earlier; units with equal
    /// priority run in registration order.
    fn priority(&self) -> i32;

    /// Whether this unit should run during the current pass.
    ///
    /// The default implementation reports true iff no history record with
    /// this unit's name exists. Override for always-run units that manage
    /// their own idempotence (per-row existence checks).
    ///
    /// # Errors
    ///
    /// A failed eligibility check aborts the whole pass, like a seed failure.
    async fn should_run(&self, txn: &DatabaseTransaction, _services: &SeedServices) -> Result<bool> {
        Ok(!history::has_run(txn, self.name()).await?)
    }

    /// Runs the seed operation.
    ///
    /// Executes inside the transaction that will also carry this unit's
    /// history record; the coordinator commits both together.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed operation fails. Errors are not handled
    /// here; they propagate out of the coordinator and abort startup.
    async fn seed(&self, txn: &DatabaseTransaction, services: &SeedServices) -> Result<SeedResult>;
}
