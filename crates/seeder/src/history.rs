//! # Seed History Store
//!
//! Durable record of which seed units have run and when. One row per unit;
//! the `seeder_name` column is unique, so completion records are upserts.

use chrono::Utc;
use entity::seeder_history;
use error::Result;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

/// Returns true if a history record exists for the given unit name.
pub async fn has_run<C: ConnectionTrait>(conn: &C, name: &str) -> Result<bool> {
    let count = seeder_history::Entity::find()
        .filter(seeder_history::Column::SeederName.eq(name))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Records that a unit has completed.
///
/// Inserts a history row carrying the unit name, the current UTC timestamp
/// and the declared priority. A concurrent or repeated completion for the
/// same name updates the existing row instead of adding a duplicate.
pub async fn record_completion<C: ConnectionTrait>(conn: &C, name: &str, priority: i32) -> Result<()> {
    let record = seeder_history::ActiveModel {
        seeder_name: Set(name.to_string()),
        last_seeded_at: Set(Utc::now()),
        seed_priority: Set(priority),
        ..Default::default()
    };

    seeder_history::Entity::insert(record)
        .on_conflict(
            OnConflict::column(seeder_history::Column::SeederName)
                .update_columns([
                    seeder_history::Column::LastSeededAt,
                    seeder_history::Column::SeedPriority,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;

    Ok(())
}

/// Loads every history record, ordered by priority then name.
///
/// Used by the administrative seeder listing; the priority index keeps the
/// ordering cheap even though volumes are one row per registered unit.
pub async fn all_records<C: ConnectionTrait>(conn: &C) -> Result<Vec<seeder_history::Model>> {
    Ok(seeder_history::Entity::find()
        .order_by_asc(seeder_history::Column::SeedPriority)
        .order_by_asc(seeder_history::Column::SeederName)
        .all(conn)
        .await?)
}
