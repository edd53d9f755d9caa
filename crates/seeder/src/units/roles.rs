//! # Role Seeder
//!
//! Ensures the fixed set of application roles exists in the identity store.
//!
//! The unit is doubly idempotent: the default history gate skips the whole
//! unit once it has completed, and the per-role existence checks make a
//! forced re-run (e.g. after a new role is added to the enumeration and
//! the history row is removed) create only the missing rows.

use entity::roles::ApplicationRole;
use error::{Result, SeedResult};
use sea_orm::{DatabaseTransaction, Iterable};
use tracing::debug;

use crate::{services::SeedServices, unit::SeedUnit};

/// Provisions one `roles` row per [`ApplicationRole`] variant.
pub struct RoleSeeder;

#[async_trait::async_trait]
impl SeedUnit for RoleSeeder {
    fn name(&self) -> &str {
        "RoleSeeder"
    }

    fn priority(&self) -> i32 {
        1
    }

    async fn seed(&self, txn: &DatabaseTransaction, services: &SeedServices) -> Result<SeedResult> {
        let mut inserted = 0;

        for role in ApplicationRole::iter() {
            let role_name = role.as_str();
            if services.roles.role_exists(txn, role_name).await? {
                debug!(role = role_name, "Role already exists");
                continue;
            }
            services.roles.create_role(txn, role_name).await?;
            inserted += 1;
        }

        Ok(SeedResult::success(self.name(), inserted, 0))
    }
}
