use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeederHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(SeederHistory::Id))
                    .col(string_len(SeederHistory::SeederName, 255).not_null().unique_key())
                    .col(timestamp_with_time_zone(SeederHistory::LastSeededAt).not_null())
                    .col(integer(SeederHistory::SeedPriority).not_null())
                    .to_owned(),
            )
            .await?;

        // The name index is unique: at most one history row per seed unit.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_seeder_history_name")
                    .table(SeederHistory::Table)
                    .col(SeederHistory::SeederName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_seeder_history_priority")
                    .table(SeederHistory::Table)
                    .col(SeederHistory::SeedPriority)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeederHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeederHistory {
    Table,
    Id,
    SeederName,
    LastSeededAt,
    SeedPriority,
}
