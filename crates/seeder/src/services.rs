//! # Seed Services
//!
//! The service bundle passed to every seed unit. Collaborators that are
//! external to this subsystem (the identity store's role management) are
//! exposed as narrow traits so units stay decoupled from their backing
//! tables and tests can substitute fakes.

use std::sync::Arc;

use entity::roles;
use error::Result;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter, Set};

/// Role management capability of the identity store.
///
/// The role seeder only needs existence checks and creation; everything
/// else about identity management stays outside this subsystem.
#[async_trait::async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Returns true if a role with the given name exists.
    async fn role_exists(&self, txn: &DatabaseTransaction, name: &str) -> Result<bool>;

    /// Creates a role with the given name.
    async fn create_role(&self, txn: &DatabaseTransaction, name: &str) -> Result<()>;
}

/// [`RoleDirectory`] backed by the `roles` entity.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityRoleDirectory;

#[async_trait::async_trait]
impl RoleDirectory for EntityRoleDirectory {
    async fn role_exists(&self, txn: &DatabaseTransaction, name: &str) -> Result<bool> {
        let count = roles::Entity::find()
            .filter(roles::Column::Name.eq(name))
            .count(txn)
            .await?;
        Ok(count > 0)
    }

    async fn create_role(&self, txn: &DatabaseTransaction, name: &str) -> Result<()> {
        let role = roles::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now()),
        };
        roles::Entity::insert(role).exec(txn).await?;
        Ok(())
    }
}

/// Services available to seed units during a pass.
#[derive(Clone)]
pub struct SeedServices {
    /// Role management capability used by the role seeder.
    pub roles: Arc<dyn RoleDirectory>,
}

impl SeedServices {
    /// Creates the default service bundle backed by the application entities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: Arc::new(EntityRoleDirectory),
        }
    }

    /// Replaces the role directory, e.g. with a fake in tests.
    #[must_use]
    pub fn with_roles(mut self, roles: Arc<dyn RoleDirectory>) -> Self {
        self.roles = roles;
        self
    }
}

impl Default for SeedServices {
    fn default() -> Self {
        Self::new()
    }
}
