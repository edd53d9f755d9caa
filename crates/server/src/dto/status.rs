//! # Status DTOs
//!
//! Response shapes for the health/info/seeder endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build and uptime information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InfoResponse {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
}

/// One completed seed unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeederHistoryEntry {
    /// Unique seed unit name
    pub seeder_name: String,
    /// When the unit last completed (UTC)
    pub last_seeded_at: DateTime<Utc>,
    /// Priority the unit declared when it ran
    pub seed_priority: i32,
}

impl From<entity::seeder_history::Model> for SeederHistoryEntry {
    fn from(model: entity::seeder_history::Model) -> Self {
        Self {
            seeder_name: model.seeder_name,
            last_seeded_at: model.last_seeded_at,
            seed_priority: model.seed_priority,
        }
    }
}

/// Seeder history listing, ordered by priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeederHistoryResponse {
    /// Completed seed units
    pub seeders: Vec<SeederHistoryEntry>,
}
