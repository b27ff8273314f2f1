//! Schema migrations for the yip store.

use sea_orm_migration::prelude::*;

/// Runs every schema migration in order. Already-applied migrations are skipped.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateYips)]
    }
}

/// Creates the `yips` table. `IF NOT EXISTS` adopts a table created by an
/// earlier deployment without touching its rows.
struct CreateYips;

impl MigrationName for CreateYips {
    fn name(&self) -> &str {
        "m20240501_000001_create_yips"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateYips {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Yips::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Yips::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Yips::Name).text().not_null())
                    .col(ColumnDef::new(Yips::Yip).text().not_null())
                    .col(ColumnDef::new(Yips::Hashtag).text().not_null())
                    .col(ColumnDef::new(Yips::Likes).integer().not_null().default(0))
                    .col(ColumnDef::new(Yips::Date).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Yips::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Yips {
    Table,
    Id,
    Name,
    Yip,
    Hashtag,
    Likes,
    Date,
}
