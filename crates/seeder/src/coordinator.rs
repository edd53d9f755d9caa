//! # Seed Coordinator
//!
//! Orders the registered seed units, gates each on its eligibility
//! predicate, executes the eligible ones, and records completion.
//! Units run one at a time, in a single pass.
//!
//! Discovery is an explicit registry: units are registered at program
//! initialization rather than scanned out of loaded code, so the set of
//! units and their tiebreak order are fixed at build time.

use std::{sync::Arc, time::Instant};

use error::{AppError, Result, SeedResult};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::watch;
use tracing::{error, info};

use crate::{history, services::SeedServices, unit::SeedUnit, units::RoleSeeder};

/// The seed coordinator: an ordered registry of [`SeedUnit`]s.
pub struct Seeder {
    units: Vec<Arc<dyn SeedUnit>>,
}

impl Seeder {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Creates the registry of built-in units the application seeds at startup.
    #[must_use]
    pub fn builtin() -> Self {
        let mut seeder = Self::new();
        seeder.register(Arc::new(RoleSeeder));
        seeder
    }

    /// Registers a seed unit.
    ///
    /// Registration order is the tiebreak for units sharing a priority.
    pub fn register(&mut self, unit: Arc<dyn SeedUnit>) {
        debug_assert!(unit.name().len() <= 255, "seed unit names are limited to 255 chars");
        self.units.push(unit);
    }

    /// Number of registered units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if no units are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Unit names in execution order (ascending priority, stable).
    #[must_use]
    pub fn execution_order(&self) -> Vec<&str> {
        self.ordered_units().iter().map(|u| u.name()).collect()
    }

    fn ordered_units(&self) -> Vec<&Arc<dyn SeedUnit>> {
        let mut ordered: Vec<&Arc<dyn SeedUnit>> = self.units.iter().collect();
        // sort_by_key is stable, so registration order breaks priority ties.
        ordered.sort_by_key(|u| u.priority());
        ordered
    }

    /// Runs every eligible unit once, in ascending priority order.
    ///
    /// For each unit the coordinator opens a transaction, evaluates the
    /// unit's eligibility predicate, and either skips (continuing with the
    /// next unit) or executes the unit and appends its history record. The
    /// unit's writes and the history row commit together.
    ///
    /// The `shutdown` flag is checked between units; once it is set the
    /// pass aborts with [`AppError::Cancelled`] before the next unit starts.
    ///
    /// # Errors
    ///
    /// The first failing eligibility check, seed operation, or history
    /// write halts the remaining sequence and propagates to the caller.
    /// Units that already committed stay committed.
    pub async fn run_all(
        &self,
        db: &DatabaseConnection,
        services: &SeedServices,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Vec<SeedResult>> {
        let ordered = self.ordered_units();
        info!(units = ordered.len(), "Running seed units");

        let mut results = Vec::new();

        for unit in ordered {
            if *shutdown.borrow() {
                info!(seeder = unit.name(), "Seeding aborted before unit");
                return Err(AppError::cancelled("seeding pass aborted by shutdown signal"));
            }

            let txn = db.begin().await?;

            let eligible = unit.should_run(&txn, services).await.map_err(|e| {
                error!(seeder = unit.name(), error = %e, "Eligibility check failed");
                e
            })?;

            if !eligible {
                info!(seeder = unit.name(), "Skipping seed unit, already applied");
                txn.rollback().await?;
                continue;
            }

            info!(seeder = unit.name(), priority = unit.priority(), "Running seed unit");
            let started = Instant::now();

            let mut result = match unit.seed(&txn, services).await {
                Ok(result) => result,
                Err(e) => {
                    error!(seeder = unit.name(), error = %e, "Seed unit failed");
                    return Err(e);
                }
            };

            history::record_completion(&txn, unit.name(), unit.priority()).await?;
            txn.commit().await?;

            result.duration_ms = started.elapsed().as_millis() as u64;
            info!(
                seeder = unit.name(),
                inserted = result.inserted_count,
                duration_ms = result.duration_ms,
                "Finished seed unit"
            );
            results.push(result);
        }

        Ok(results)
    }
}

impl Default for Seeder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DatabaseTransaction;

    struct Probe {
        name: &'static str,
        priority: i32,
    }

    #[async_trait::async_trait]
    impl SeedUnit for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        async fn seed(&self, _txn: &DatabaseTransaction, _services: &SeedServices) -> Result<SeedResult> {
            Ok(SeedResult::success(self.name, 0, 0))
        }
    }

    #[test]
    fn test_execution_order_sorts_by_priority() {
        let mut seeder = Seeder::new();
        seeder.register(Arc::new(Probe { name: "third", priority: 30 }));
        seeder.register(Arc::new(Probe { name: "first", priority: 1 }));
        seeder.register(Arc::new(Probe { name: "second", priority: 10 }));

        assert_eq!(seeder.execution_order(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_execution_order_ties_break_by_registration() {
        let mut seeder = Seeder::new();
        seeder.register(Arc::new(Probe { name: "a", priority: 5 }));
        seeder.register(Arc::new(Probe { name: "b", priority: 5 }));
        seeder.register(Arc::new(Probe { name: "c", priority: 5 }));

        assert_eq!(seeder.execution_order(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_builtin_registry_contains_role_seeder() {
        let seeder = Seeder::builtin();
        assert!(!seeder.is_empty());
        assert_eq!(seeder.execution_order(), vec!["RoleSeeder"]);
    }
}
