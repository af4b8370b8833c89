//! Migration to create the advertisers table.
//!
//! Advertisers own campaigns and carry the monthly budget used for pacing.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advertisers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Advertisers::AdvertiserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Advertisers::AdvertiserName).text().not_null())
                    .col(ColumnDef::new(Advertisers::Industry).text().not_null())
                    .col(ColumnDef::new(Advertisers::MonthlyBudget).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advertisers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advertisers {
    Table,
    AdvertiserId,
    AdvertiserName,
    Industry,
    MonthlyBudget,
}
