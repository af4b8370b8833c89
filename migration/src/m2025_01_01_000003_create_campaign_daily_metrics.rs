//! Migration to create the campaign_daily_metrics table.
//!
//! One row per campaign per calendar day, keyed by `(campaign_id, date)`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignDailyMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignDailyMetrics::CampaignId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CampaignDailyMetrics::Date).date().not_null())
                    .col(
                        ColumnDef::new(CampaignDailyMetrics::Impressions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CampaignDailyMetrics::Clicks)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CampaignDailyMetrics::Spend)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(CampaignDailyMetrics::Conversions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CampaignDailyMetrics::Revenue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_campaign_daily_metrics")
                            .col(CampaignDailyMetrics::CampaignId)
                            .col(CampaignDailyMetrics::Date),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_daily_metrics_campaign_id")
                            .from(CampaignDailyMetrics::Table, CampaignDailyMetrics::CampaignId)
                            .to(Campaigns::Table, Campaigns::CampaignId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Daily and weekly rollups group on date across all campaigns
        manager
            .create_index(
                Index::create()
                    .name("idx_campaign_daily_metrics_date")
                    .table(CampaignDailyMetrics::Table)
                    .col(CampaignDailyMetrics::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_campaign_daily_metrics_date")
                    .table(CampaignDailyMetrics::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CampaignDailyMetrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CampaignDailyMetrics {
    Table,
    CampaignId,
    Date,
    Impressions,
    Clicks,
    Spend,
    Conversions,
    Revenue,
}

#[derive(DeriveIden)]
enum Campaigns {
    Table,
    CampaignId,
}
