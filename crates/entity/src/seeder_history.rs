//! Seeder History Entity
//!
//! One row per seed unit that has completed successfully. The coordinator
//! consults this table to decide whether a unit still needs to run, so the
//! `seeder_name` column carries a uniqueness constraint.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "seeder_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub seeder_name: String,
    pub last_seeded_at: chrono::DateTime<chrono::Utc>,
    pub seed_priority: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
