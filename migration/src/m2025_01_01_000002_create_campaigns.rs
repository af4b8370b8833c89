//! Migration to create the campaigns table.
//!
//! Every campaign belongs to exactly one advertiser.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaigns::CampaignId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaigns::CampaignName).text().not_null())
                    .col(ColumnDef::new(Campaigns::CampaignType).text().not_null())
                    .col(
                        ColumnDef::new(Campaigns::Status)
                            .text()
                            .not_null()
                            .default("Active"),
                    )
                    .col(ColumnDef::new(Campaigns::AdvertiserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaigns_advertiser_id")
                            .from(Campaigns::Table, Campaigns::AdvertiserId)
                            .to(Advertisers::Table, Advertisers::AdvertiserId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaigns_advertiser_id")
                    .table(Campaigns::Table)
                    .col(Campaigns::AdvertiserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_campaigns_advertiser_id")
                    .table(Campaigns::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Campaigns::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Campaigns {
    Table,
    CampaignId,
    CampaignName,
    CampaignType,
    Status,
    AdvertiserId,
}

#[derive(DeriveIden)]
enum Advertisers {
    Table,
    AdvertiserId,
}
