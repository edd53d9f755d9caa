//! Roles Entity
//!
//! Represents the application roles provisioned for the identity subsystem.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: uuid::Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The fixed set of roles every deployment starts with.
///
/// The role seeder iterates this enumeration and ensures a matching
/// `roles` row exists for each variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum ApplicationRole {
    /// Full administrative access
    Admin,
    /// Standard authenticated user
    User,
}

impl ApplicationRole {
    /// The role name as stored in the `roles` table.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationRole::Admin => "Admin",
            ApplicationRole::User => "User",
        }
    }
}

impl std::fmt::Display for ApplicationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
