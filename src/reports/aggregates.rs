//! Store-side aggregation queries.
//!
//! Each query groups the fact table in the database and returns raw sums and
//! distinct counts only. Derived metrics, ranking and bucketing happen in
//! [`super::rows`] so the SQL stays portable between SQLite and Postgres.

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, sea_query::Expr,
};

use crate::models::{CampaignStatus, CampaignType, advertiser, campaign, daily_metric};

/// Per-campaign totals across the whole period.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CampaignTotals {
    pub campaign_id: i32,
    pub campaign_name: String,
    pub campaign_type: CampaignType,
    pub advertiser_name: String,
    pub industry: String,
    pub total_impressions: i64,
    pub total_clicks: i64,
    pub total_spend: f64,
    pub total_conversions: i64,
    pub total_revenue: f64,
}

/// Totals for one calendar day across all campaigns.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
    pub spend: f64,
    pub conversions: i64,
    pub revenue: f64,
}

/// Active-campaign spend for one advertiser.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct BudgetTotals {
    pub advertiser_id: i32,
    pub advertiser_name: String,
    pub monthly_budget: f64,
    pub actual_spend: f64,
    pub active_campaigns: i64,
    /// Number of metric rows behind `actual_spend`
    pub metric_rows: i64,
}

/// Totals for one campaign type.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CampaignTypeTotals {
    pub campaign_type: CampaignType,
    pub num_campaigns: i64,
    pub impressions: i64,
    pub clicks: i64,
    pub spend: f64,
    pub conversions: i64,
    pub revenue: f64,
}

/// Totals for one advertiser industry.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct IndustryTotals {
    pub industry: String,
    pub num_advertisers: i64,
    pub num_campaigns: i64,
    pub spend: f64,
    pub revenue: f64,
}

/// Grand totals. Sums are `None` when no metric rows exist.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct GrandTotals {
    pub total_advertisers: i64,
    pub total_campaigns: i64,
    pub total_impressions: Option<i64>,
    pub total_clicks: Option<i64>,
    pub total_spend: Option<f64>,
    pub total_conversions: Option<i64>,
    pub total_revenue: Option<f64>,
}

fn campaign_id_distinct() -> sea_orm::sea_query::SimpleExpr {
    Expr::col((campaign::Entity, campaign::Column::CampaignId)).count_distinct()
}

fn advertiser_id_distinct() -> sea_orm::sea_query::SimpleExpr {
    Expr::col((advertiser::Entity, advertiser::Column::AdvertiserId)).count_distinct()
}

/// Campaigns joined to their advertiser and metrics (inner joins: campaigns
/// without metrics are absent), ordered by campaign id.
pub async fn campaign_totals<C: ConnectionTrait>(db: &C) -> Result<Vec<CampaignTotals>, DbErr> {
    campaign::Entity::find()
        .select_only()
        .column(campaign::Column::CampaignId)
        .column(campaign::Column::CampaignName)
        .column(campaign::Column::CampaignType)
        .column(advertiser::Column::AdvertiserName)
        .column(advertiser::Column::Industry)
        .column_as(daily_metric::Column::Impressions.sum(), "total_impressions")
        .column_as(daily_metric::Column::Clicks.sum(), "total_clicks")
        .column_as(daily_metric::Column::Spend.sum(), "total_spend")
        .column_as(daily_metric::Column::Conversions.sum(), "total_conversions")
        .column_as(daily_metric::Column::Revenue.sum(), "total_revenue")
        .join(JoinType::InnerJoin, campaign::Relation::Advertiser.def())
        .join(JoinType::InnerJoin, campaign::Relation::DailyMetric.def())
        .group_by(campaign::Column::CampaignId)
        .group_by(campaign::Column::CampaignName)
        .group_by(campaign::Column::CampaignType)
        .group_by(advertiser::Column::AdvertiserName)
        .group_by(advertiser::Column::Industry)
        .order_by_asc(campaign::Column::CampaignId)
        .into_model::<CampaignTotals>()
        .all(db)
        .await
}

/// One row per date, ascending.
pub async fn daily_totals<C: ConnectionTrait>(db: &C) -> Result<Vec<DailyTotals>, DbErr> {
    daily_metric::Entity::find()
        .select_only()
        .column(daily_metric::Column::Date)
        .column_as(daily_metric::Column::Impressions.sum(), "impressions")
        .column_as(daily_metric::Column::Clicks.sum(), "clicks")
        .column_as(daily_metric::Column::Spend.sum(), "spend")
        .column_as(daily_metric::Column::Conversions.sum(), "conversions")
        .column_as(daily_metric::Column::Revenue.sum(), "revenue")
        .group_by(daily_metric::Column::Date)
        .order_by_asc(daily_metric::Column::Date)
        .into_model::<DailyTotals>()
        .all(db)
        .await
}

/// Per-advertiser spend restricted to `Active` campaigns.
pub async fn active_budget_totals<C: ConnectionTrait>(db: &C) -> Result<Vec<BudgetTotals>, DbErr> {
    advertiser::Entity::find()
        .select_only()
        .column(advertiser::Column::AdvertiserId)
        .column(advertiser::Column::AdvertiserName)
        .column(advertiser::Column::MonthlyBudget)
        .column_as(daily_metric::Column::Spend.sum(), "actual_spend")
        .column_as(campaign_id_distinct(), "active_campaigns")
        .column_as(daily_metric::Column::Spend.count(), "metric_rows")
        .join(JoinType::InnerJoin, advertiser::Relation::Campaign.def())
        .join(JoinType::InnerJoin, campaign::Relation::DailyMetric.def())
        .filter(campaign::Column::Status.eq(CampaignStatus::Active))
        .group_by(advertiser::Column::AdvertiserId)
        .group_by(advertiser::Column::AdvertiserName)
        .group_by(advertiser::Column::MonthlyBudget)
        .order_by_asc(advertiser::Column::AdvertiserId)
        .into_model::<BudgetTotals>()
        .all(db)
        .await
}

pub async fn campaign_type_totals<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<CampaignTypeTotals>, DbErr> {
    campaign::Entity::find()
        .select_only()
        .column(campaign::Column::CampaignType)
        .column_as(campaign_id_distinct(), "num_campaigns")
        .column_as(daily_metric::Column::Impressions.sum(), "impressions")
        .column_as(daily_metric::Column::Clicks.sum(), "clicks")
        .column_as(daily_metric::Column::Spend.sum(), "spend")
        .column_as(daily_metric::Column::Conversions.sum(), "conversions")
        .column_as(daily_metric::Column::Revenue.sum(), "revenue")
        .join(JoinType::InnerJoin, campaign::Relation::DailyMetric.def())
        .group_by(campaign::Column::CampaignType)
        .order_by_asc(campaign::Column::CampaignType)
        .into_model::<CampaignTypeTotals>()
        .all(db)
        .await
}

pub async fn industry_totals<C: ConnectionTrait>(db: &C) -> Result<Vec<IndustryTotals>, DbErr> {
    advertiser::Entity::find()
        .select_only()
        .column(advertiser::Column::Industry)
        .column_as(advertiser_id_distinct(), "num_advertisers")
        .column_as(campaign_id_distinct(), "num_campaigns")
        .column_as(daily_metric::Column::Spend.sum(), "spend")
        .column_as(daily_metric::Column::Revenue.sum(), "revenue")
        .join(JoinType::InnerJoin, advertiser::Relation::Campaign.def())
        .join(JoinType::InnerJoin, campaign::Relation::DailyMetric.def())
        .group_by(advertiser::Column::Industry)
        .order_by_asc(advertiser::Column::Industry)
        .into_model::<IndustryTotals>()
        .all(db)
        .await
}

/// Always exactly one row, even over an empty store.
pub async fn grand_totals<C: ConnectionTrait>(db: &C) -> Result<GrandTotals, DbErr> {
    advertiser::Entity::find()
        .select_only()
        .column_as(advertiser_id_distinct(), "total_advertisers")
        .column_as(campaign_id_distinct(), "total_campaigns")
        .column_as(daily_metric::Column::Impressions.sum(), "total_impressions")
        .column_as(daily_metric::Column::Clicks.sum(), "total_clicks")
        .column_as(daily_metric::Column::Spend.sum(), "total_spend")
        .column_as(daily_metric::Column::Conversions.sum(), "total_conversions")
        .column_as(daily_metric::Column::Revenue.sum(), "total_revenue")
        .join(JoinType::InnerJoin, advertiser::Relation::Campaign.def())
        .join(JoinType::InnerJoin, campaign::Relation::DailyMetric.def())
        .into_model::<GrandTotals>()
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("grand totals aggregate returned no row".to_string()))
}
