//! Test utilities for database testing.
//!
//! Provides an in-memory SQLite store with migrations applied and small
//! insert helpers for building hand-made fixtures.

use ads_analytics::models::{CampaignStatus, CampaignType, advertiser, campaign, daily_metric};
use anyhow::Result;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection};

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// Foreign keys stay enforced so fixtures must respect the schema.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// An in-memory database without any tables.
#[allow(dead_code)]
pub async fn setup_unmigrated_db() -> Result<DatabaseConnection> {
    Ok(Database::connect("sqlite::memory:").await?)
}

#[allow(dead_code)]
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

#[allow(dead_code)]
pub async fn insert_advertiser(
    db: &DatabaseConnection,
    advertiser_id: i32,
    name: &str,
    industry: &str,
    monthly_budget: f64,
) -> Result<advertiser::Model> {
    let model = advertiser::ActiveModel {
        advertiser_id: Set(advertiser_id),
        advertiser_name: Set(name.to_string()),
        industry: Set(industry.to_string()),
        monthly_budget: Set(monthly_budget),
    }
    .insert(db)
    .await?;
    Ok(model)
}

#[allow(dead_code)]
pub async fn insert_campaign(
    db: &DatabaseConnection,
    campaign_id: i32,
    advertiser_id: i32,
    campaign_type: CampaignType,
    status: CampaignStatus,
) -> Result<campaign::Model> {
    let model = campaign::ActiveModel {
        campaign_id: Set(campaign_id),
        campaign_name: Set(format!("Campaign {campaign_id}")),
        campaign_type: Set(campaign_type),
        status: Set(status),
        advertiser_id: Set(advertiser_id),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts one metric row; `(impressions, clicks, spend, conversions, revenue)`.
#[allow(dead_code)]
pub async fn insert_metric(
    db: &DatabaseConnection,
    campaign_id: i32,
    date: NaiveDate,
    (impressions, clicks, spend, conversions, revenue): (i32, i32, f64, i32, f64),
) -> Result<daily_metric::Model> {
    let model = daily_metric::ActiveModel {
        campaign_id: Set(campaign_id),
        date: Set(date),
        impressions: Set(impressions),
        clicks: Set(clicks),
        spend: Set(spend),
        conversions: Set(conversions),
        revenue: Set(revenue),
    }
    .insert(db)
    .await?;
    Ok(model)
}
