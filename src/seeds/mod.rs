//! Database seeding functionality
//!
//! Loads a fixed advertiser/campaign/daily-metric dataset into an empty
//! store. The load is all-or-nothing: every row is inserted inside a single
//! transaction and any constraint violation rolls the whole load back.

pub mod sample;

use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait,
};

use crate::error::SeedError;
use crate::models::{advertiser, campaign, daily_metric};

pub use sample::{SAMPLE_MONTH_DAYS, SeedDataset};

/// Number of rows written per table by a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub advertisers: u64,
    pub campaigns: u64,
    pub daily_metrics: u64,
}

/// Seeds the store with the built-in sample dataset (5 advertisers,
/// 12 campaigns, January 2025 daily metrics).
///
/// Precondition: the store is empty. Returns [`SeedError::StoreNotEmpty`]
/// otherwise; callers reset the schema first when they want to reload.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<SeedSummary, SeedError> {
    seed_dataset(db, &SeedDataset::sample()).await
}

/// Loads an arbitrary dataset into an empty store.
pub async fn seed_dataset(
    db: &DatabaseConnection,
    dataset: &SeedDataset,
) -> Result<SeedSummary, SeedError> {
    ensure_empty(db).await?;

    let txn = db
        .begin()
        .await
        .map_err(|e| SeedError::from_db("transaction", e))?;

    let mut summary = SeedSummary::default();

    if !dataset.advertisers.is_empty() {
        let rows = dataset.advertisers.iter().map(|a| advertiser::ActiveModel {
            advertiser_id: Set(a.advertiser_id),
            advertiser_name: Set(a.advertiser_name.clone()),
            industry: Set(a.industry.clone()),
            monthly_budget: Set(a.monthly_budget),
        });
        summary.advertisers = advertiser::Entity::insert_many(rows)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| SeedError::from_db("advertisers", e))?;
    }

    if !dataset.campaigns.is_empty() {
        let rows = dataset.campaigns.iter().map(|c| campaign::ActiveModel {
            campaign_id: Set(c.campaign_id),
            campaign_name: Set(c.campaign_name.clone()),
            campaign_type: Set(c.campaign_type),
            status: Set(c.status),
            advertiser_id: Set(c.advertiser_id),
        });
        summary.campaigns = campaign::Entity::insert_many(rows)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| SeedError::from_db("campaigns", e))?;
    }

    // Chunked to stay well under SQLite's bound-parameter limit
    for chunk in dataset.daily_metrics.chunks(SAMPLE_MONTH_DAYS as usize) {
        let rows = chunk.iter().map(|m| daily_metric::ActiveModel {
            campaign_id: Set(m.campaign_id),
            date: Set(m.date),
            impressions: Set(m.impressions),
            clicks: Set(m.clicks),
            spend: Set(m.spend),
            conversions: Set(m.conversions),
            revenue: Set(m.revenue),
        });
        summary.daily_metrics += daily_metric::Entity::insert_many(rows)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| SeedError::from_db("campaign_daily_metrics", e))?;
    }

    txn.commit()
        .await
        .map_err(|e| SeedError::from_db("transaction", e))?;

    tracing::info!(
        advertisers = summary.advertisers,
        campaigns = summary.campaigns,
        daily_metrics = summary.daily_metrics,
        "Seeded analytics store"
    );

    Ok(summary)
}

async fn ensure_empty(db: &DatabaseConnection) -> Result<(), SeedError> {
    let counts = [
        (
            "advertisers",
            advertiser::Entity::find()
                .count(db)
                .await
                .map_err(|e| SeedError::from_db("advertisers", e))?,
        ),
        (
            "campaigns",
            campaign::Entity::find()
                .count(db)
                .await
                .map_err(|e| SeedError::from_db("campaigns", e))?,
        ),
        (
            "campaign_daily_metrics",
            daily_metric::Entity::find()
                .count(db)
                .await
                .map_err(|e| SeedError::from_db("campaign_daily_metrics", e))?,
        ),
    ];

    if let Some((table, rows)) = counts.into_iter().find(|(_, rows)| *rows > 0) {
        tracing::error!(table, rows, "Refusing to seed a non-empty store");
        return Err(SeedError::StoreNotEmpty { table, rows });
    }

    Ok(())
}
