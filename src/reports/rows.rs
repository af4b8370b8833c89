//! Report row types and the pure transforms that build them from aggregates.
//!
//! Field declaration order is the column order of the emitted document.
//! Every function here is deterministic over its input and touches no store.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::aggregates::{
    BudgetTotals, CampaignTotals, CampaignTypeTotals, DailyTotals, GrandTotals, IndustryTotals,
};
use super::metrics::{
    self, PROJECTION_DAYS, PacingStatus, WeekPeriod, asc_nulls_first, desc_nulls_last, round2,
    safe_div,
};
use crate::models::CampaignType;

/// Rows kept in each top/bottom performer slice.
pub const PERFORMER_SLICE_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPerformanceRow {
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
    pub roas: Option<f64>,
    pub ctr_percent: Option<f64>,
    pub cpc: Option<f64>,
    pub conversion_rate_percent: Option<f64>,
    pub profit: f64,
    pub roi_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTrendRow {
    pub date: NaiveDate,
    pub daily_impressions: i64,
    pub daily_clicks: i64,
    pub daily_spend: f64,
    pub daily_conversions: i64,
    pub daily_revenue: f64,
    pub daily_roas: Option<f64>,
    pub daily_ctr: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUtilizationRow {
    pub advertiser_name: String,
    pub monthly_budget: f64,
    pub actual_spend_mtd: f64,
    pub budget_utilization_percent: Option<f64>,
    pub remaining_budget: f64,
    pub active_campaigns: i64,
    pub avg_daily_spend: Option<f64>,
    pub projected_monthly_spend: Option<f64>,
    pub pacing_status: PacingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignTypePerformanceRow {
    pub campaign_type: CampaignType,
    pub num_campaigns: i64,
    pub total_spend: f64,
    pub total_revenue: f64,
    pub avg_roas: Option<f64>,
    pub avg_cpc: Option<f64>,
    pub avg_ctr: Option<f64>,
    pub avg_conversion_rate: Option<f64>,
    pub roi_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryPerformanceRow {
    pub industry: String,
    pub num_advertisers: i64,
    pub num_campaigns: i64,
    pub total_spend: f64,
    pub total_revenue: f64,
    pub avg_roas: Option<f64>,
    pub total_profit: f64,
    pub avg_spend_per_advertiser: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPerformanceRow {
    pub week_period: WeekPeriod,
    pub weekly_spend: f64,
    pub weekly_revenue: f64,
    pub weekly_conversions: i64,
    pub weekly_roas: Option<f64>,
    pub weekly_profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformerCategory {
    #[serde(rename = "Top Performer")]
    Top,
    #[serde(rename = "Bottom Performer")]
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformerRow {
    pub category: PerformerCategory,
    pub campaign_name: String,
    pub advertiser_name: String,
    pub total_spend: f64,
    pub total_revenue: f64,
    pub roas: Option<f64>,
    pub conversions: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetricsRow {
    pub total_advertisers: i64,
    pub total_campaigns: i64,
    pub total_impressions: Option<i64>,
    pub total_clicks: Option<i64>,
    pub total_spend: Option<f64>,
    pub total_conversions: Option<i64>,
    pub total_revenue: Option<f64>,
    pub overall_roas: Option<f64>,
    pub overall_ctr: Option<f64>,
    pub overall_cpc: Option<f64>,
    pub total_profit: Option<f64>,
}

impl From<CampaignTotals> for CampaignPerformanceRow {
    fn from(t: CampaignTotals) -> Self {
        Self {
            roas: metrics::roas(t.total_revenue, t.total_spend),
            ctr_percent: metrics::ctr_percent(t.total_clicks, t.total_impressions),
            cpc: metrics::cpc(t.total_spend, t.total_clicks),
            conversion_rate_percent: metrics::conversion_rate_percent(
                t.total_conversions,
                t.total_clicks,
            ),
            profit: metrics::profit(t.total_revenue, t.total_spend),
            roi_percent: metrics::roi_percent(t.total_revenue, t.total_spend),
            campaign_id: t.campaign_id,
            campaign_name: t.campaign_name,
            campaign_type: t.campaign_type,
            advertiser_name: t.advertiser_name,
            industry: t.industry,
            total_impressions: t.total_impressions,
            total_clicks: t.total_clicks,
            total_spend: t.total_spend,
            total_conversions: t.total_conversions,
            total_revenue: t.total_revenue,
        }
    }
}

/// ROAS descending, zero-spend campaigns last, ties by campaign id.
pub fn campaign_performance(totals: Vec<CampaignTotals>) -> Vec<CampaignPerformanceRow> {
    let mut rows: Vec<CampaignPerformanceRow> = totals.into_iter().map(Into::into).collect();
    rows.sort_by(|a, b| desc_nulls_last(a.roas, b.roas).then(a.campaign_id.cmp(&b.campaign_id)));
    rows
}

impl From<DailyTotals> for DailyTrendRow {
    fn from(t: DailyTotals) -> Self {
        Self {
            date: t.date,
            daily_impressions: t.impressions,
            daily_clicks: t.clicks,
            daily_spend: t.spend,
            daily_conversions: t.conversions,
            daily_revenue: t.revenue,
            daily_roas: metrics::roas(t.revenue, t.spend),
            daily_ctr: metrics::ctr_percent(t.clicks, t.impressions),
        }
    }
}

/// Date ascending.
pub fn daily_trends(totals: Vec<DailyTotals>) -> Vec<DailyTrendRow> {
    let mut rows: Vec<DailyTrendRow> = totals.into_iter().map(Into::into).collect();
    rows.sort_by_key(|row| row.date);
    rows
}

impl From<BudgetTotals> for BudgetUtilizationRow {
    fn from(t: BudgetTotals) -> Self {
        let average = safe_div(t.actual_spend, t.metric_rows as f64);
        let pacing_status = match average {
            Some(avg) => PacingStatus::from_daily_average(avg, t.monthly_budget),
            None => PacingStatus::classify(0.0, t.monthly_budget),
        };

        Self {
            advertiser_name: t.advertiser_name,
            monthly_budget: t.monthly_budget,
            actual_spend_mtd: t.actual_spend,
            budget_utilization_percent: safe_div(t.actual_spend * 100.0, t.monthly_budget)
                .map(round2),
            remaining_budget: round2(t.monthly_budget - t.actual_spend),
            active_campaigns: t.active_campaigns,
            avg_daily_spend: average.map(round2),
            projected_monthly_spend: average.map(|avg| round2(avg * PROJECTION_DAYS)),
            pacing_status,
        }
    }
}

/// Utilization percent descending, zero budgets last, ties by advertiser id.
pub fn budget_utilization(totals: Vec<BudgetTotals>) -> Vec<BudgetUtilizationRow> {
    let mut keyed: Vec<(i32, BudgetUtilizationRow)> = totals
        .into_iter()
        .map(|t| (t.advertiser_id, t.into()))
        .collect();
    keyed.sort_by(|(id_a, a), (id_b, b)| {
        desc_nulls_last(a.budget_utilization_percent, b.budget_utilization_percent)
            .then(id_a.cmp(id_b))
    });
    keyed.into_iter().map(|(_, row)| row).collect()
}

impl From<CampaignTypeTotals> for CampaignTypePerformanceRow {
    fn from(t: CampaignTypeTotals) -> Self {
        Self {
            campaign_type: t.campaign_type,
            num_campaigns: t.num_campaigns,
            total_spend: t.spend,
            total_revenue: t.revenue,
            avg_roas: metrics::roas(t.revenue, t.spend),
            avg_cpc: metrics::cpc(t.spend, t.clicks),
            avg_ctr: metrics::ctr_percent(t.clicks, t.impressions),
            avg_conversion_rate: metrics::conversion_rate_percent(t.conversions, t.clicks),
            roi_percent: metrics::roi_percent(t.revenue, t.spend),
        }
    }
}

/// Average ROAS descending, nulls last.
pub fn campaign_type_performance(
    totals: Vec<CampaignTypeTotals>,
) -> Vec<CampaignTypePerformanceRow> {
    let mut rows: Vec<CampaignTypePerformanceRow> = totals.into_iter().map(Into::into).collect();
    rows.sort_by(|a, b| desc_nulls_last(a.avg_roas, b.avg_roas));
    rows
}

impl From<IndustryTotals> for IndustryPerformanceRow {
    fn from(t: IndustryTotals) -> Self {
        Self {
            avg_roas: metrics::roas(t.revenue, t.spend),
            total_profit: metrics::profit(t.revenue, t.spend),
            avg_spend_per_advertiser: safe_div(t.spend, t.num_advertisers as f64).map(round2),
            industry: t.industry,
            num_advertisers: t.num_advertisers,
            num_campaigns: t.num_campaigns,
            total_spend: t.spend,
            total_revenue: t.revenue,
        }
    }
}

/// Total profit descending.
pub fn industry_performance(totals: Vec<IndustryTotals>) -> Vec<IndustryPerformanceRow> {
    let mut rows: Vec<IndustryPerformanceRow> = totals.into_iter().map(Into::into).collect();
    rows.sort_by(|a, b| b.total_profit.total_cmp(&a.total_profit));
    rows
}

#[derive(Default)]
struct WeekAccumulator {
    spend: f64,
    revenue: f64,
    conversions: i64,
}

/// Buckets daily totals by day of month. Only buckets with data are emitted,
/// always in Week 1 → Week 4+ order.
pub fn weekly_performance(days: &[DailyTotals]) -> Vec<WeeklyPerformanceRow> {
    let mut buckets: BTreeMap<WeekPeriod, WeekAccumulator> = BTreeMap::new();
    for day in days {
        let bucket = buckets
            .entry(WeekPeriod::from_day_of_month(day.date.day()))
            .or_default();
        bucket.spend += day.spend;
        bucket.revenue += day.revenue;
        bucket.conversions += day.conversions;
    }

    buckets
        .into_iter()
        .map(|(week_period, acc)| WeeklyPerformanceRow {
            week_period,
            weekly_spend: acc.spend,
            weekly_revenue: acc.revenue,
            weekly_conversions: acc.conversions,
            weekly_roas: metrics::roas(acc.revenue, acc.spend),
            weekly_profit: metrics::profit(acc.revenue, acc.spend),
        })
        .collect()
}

fn performer(category: PerformerCategory, t: CampaignTotals) -> PerformerRow {
    PerformerRow {
        category,
        roas: metrics::roas(t.total_revenue, t.total_spend),
        campaign_name: t.campaign_name,
        advertiser_name: t.advertiser_name,
        total_spend: t.total_spend,
        total_revenue: t.total_revenue,
        conversions: t.total_conversions,
    }
}

fn performer_slice(
    category: PerformerCategory,
    totals: Vec<CampaignTotals>,
) -> Vec<PerformerRow> {
    let mut keyed: Vec<(i32, PerformerRow)> = totals
        .into_iter()
        .map(|t| (t.campaign_id, performer(category, t)))
        .collect();
    keyed.sort_by(|(id_a, a), (id_b, b)| {
        let by_roas = match category {
            PerformerCategory::Top => desc_nulls_last(a.roas, b.roas),
            PerformerCategory::Bottom => asc_nulls_first(a.roas, b.roas),
        };
        by_roas.then(id_a.cmp(id_b))
    });
    keyed
        .into_iter()
        .take(PERFORMER_SLICE_LEN)
        .map(|(_, row)| row)
        .collect()
}

/// Highest ROAS first, at most five campaigns.
pub fn top_performers(totals: Vec<CampaignTotals>) -> Vec<PerformerRow> {
    performer_slice(PerformerCategory::Top, totals)
}

/// Lowest ROAS first, at most five campaigns. Zero-spend campaigns have no
/// ROAS and head the slice.
pub fn bottom_performers(totals: Vec<CampaignTotals>) -> Vec<PerformerRow> {
    performer_slice(PerformerCategory::Bottom, totals)
}

impl From<GrandTotals> for SummaryMetricsRow {
    fn from(t: GrandTotals) -> Self {
        let spend = t.total_spend;
        let revenue = t.total_revenue;

        Self {
            total_advertisers: t.total_advertisers,
            total_campaigns: t.total_campaigns,
            total_impressions: t.total_impressions,
            total_clicks: t.total_clicks,
            total_spend: spend,
            total_conversions: t.total_conversions,
            total_revenue: revenue,
            overall_roas: revenue.zip(spend).and_then(|(r, s)| metrics::roas(r, s)),
            overall_ctr: t
                .total_clicks
                .zip(t.total_impressions)
                .and_then(|(c, i)| metrics::ctr_percent(c, i)),
            overall_cpc: spend
                .zip(t.total_clicks)
                .and_then(|(s, c)| metrics::cpc(s, c)),
            total_profit: revenue.zip(spend).map(|(r, s)| metrics::profit(r, s)),
        }
    }
}

/// The single summary row.
pub fn summary_metrics(totals: GrandTotals) -> Vec<SummaryMetricsRow> {
    vec![totals.into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(id: i32, spend: f64, revenue: f64) -> CampaignTotals {
        CampaignTotals {
            campaign_id: id,
            campaign_name: format!("Campaign {id}"),
            campaign_type: CampaignType::SponsoredProducts,
            advertiser_name: "Acme".to_string(),
            industry: "Electronics".to_string(),
            total_impressions: 1000,
            total_clicks: 50,
            total_spend: spend,
            total_conversions: 5,
            total_revenue: revenue,
        }
    }

    fn day(d: u32, spend: f64, revenue: f64, conversions: i64) -> DailyTotals {
        DailyTotals {
            date: NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
            impressions: 1000,
            clicks: 10,
            spend,
            conversions,
            revenue,
        }
    }

    #[test]
    fn test_campaign_performance_orders_by_roas_with_nulls_last() {
        let rows = campaign_performance(vec![
            totals(1, 100.0, 200.0),
            totals(2, 0.0, 50.0),
            totals(3, 100.0, 500.0),
            totals(4, 100.0, 200.0),
        ]);
        let ids: Vec<i32> = rows.iter().map(|r| r.campaign_id).collect();
        assert_eq!(ids, [3, 1, 4, 2]);

        let zero_spend = &rows[3];
        assert_eq!(zero_spend.roas, None);
        assert_eq!(zero_spend.cpc, Some(0.0));
        assert_eq!(zero_spend.roi_percent, None);
        assert_eq!(zero_spend.profit, 50.0);
    }

    #[test]
    fn test_campaign_performance_zero_clicks_and_impressions() {
        let mut t = totals(1, 10.0, 20.0);
        t.total_impressions = 0;
        t.total_clicks = 0;
        let row = CampaignPerformanceRow::from(t);
        assert_eq!(row.ctr_percent, None);
        assert_eq!(row.cpc, None);
        assert_eq!(row.conversion_rate_percent, None);
        assert_eq!(row.roas, Some(2.0));
    }

    #[test]
    fn test_budget_row_pacing_and_rounding() {
        // 31 rows averaging 40/day against 1000 → projected 1240
        let row = BudgetUtilizationRow::from(BudgetTotals {
            advertiser_id: 1,
            advertiser_name: "Acme".to_string(),
            monthly_budget: 1000.0,
            actual_spend: 1240.0,
            active_campaigns: 1,
            metric_rows: 31,
        });
        assert_eq!(row.avg_daily_spend, Some(40.0));
        assert_eq!(row.projected_monthly_spend, Some(1240.0));
        assert_eq!(row.pacing_status, PacingStatus::OverPace);
        assert_eq!(row.budget_utilization_percent, Some(124.0));
        assert_eq!(row.remaining_budget, -240.0);
    }

    #[test]
    fn test_budget_rows_order_by_utilization() {
        let budget = |id: i32, spend: f64, monthly_budget: f64| BudgetTotals {
            advertiser_id: id,
            advertiser_name: format!("Advertiser {id}"),
            monthly_budget,
            actual_spend: spend,
            active_campaigns: 1,
            metric_rows: 10,
        };
        let rows = budget_utilization(vec![
            budget(1, 100.0, 1000.0),
            budget(2, 100.0, 0.0),
            budget(3, 900.0, 1000.0),
        ]);
        let names: Vec<&str> = rows.iter().map(|r| r.advertiser_name.as_str()).collect();
        assert_eq!(names, ["Advertiser 3", "Advertiser 1", "Advertiser 2"]);
        assert_eq!(rows[2].budget_utilization_percent, None);
    }

    #[test]
    fn test_weekly_buckets_follow_ordinal_order() {
        let days = vec![
            day(30, 10.0, 30.0, 1),
            day(2, 10.0, 20.0, 2),
            day(22, 5.0, 5.0, 1),
            day(9, 0.0, 0.0, 0),
        ];
        let rows = weekly_performance(&days);
        let periods: Vec<&str> = rows.iter().map(|r| r.week_period.label()).collect();
        assert_eq!(periods, ["Week 1", "Week 2", "Week 4+"]);

        assert_eq!(rows[0].weekly_roas, Some(2.0));
        assert_eq!(rows[1].weekly_roas, None);
        assert_eq!(rows[2].weekly_spend, 15.0);
        assert_eq!(rows[2].weekly_conversions, 2);
        assert_eq!(rows[2].weekly_profit, 20.0);
    }

    #[test]
    fn test_performer_slices() {
        let all: Vec<CampaignTotals> = (1..=7)
            .map(|id| totals(id, 100.0, 100.0 * id as f64))
            .chain(std::iter::once(totals(8, 0.0, 0.0)))
            .collect();

        let top = top_performers(all.clone());
        assert_eq!(top.len(), PERFORMER_SLICE_LEN);
        let top_roas: Vec<Option<f64>> = top.iter().map(|r| r.roas).collect();
        assert_eq!(
            top_roas,
            [Some(7.0), Some(6.0), Some(5.0), Some(4.0), Some(3.0)]
        );
        assert!(top.iter().all(|r| r.category == PerformerCategory::Top));

        let bottom = bottom_performers(all);
        let bottom_roas: Vec<Option<f64>> = bottom.iter().map(|r| r.roas).collect();
        assert_eq!(bottom_roas, [None, Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        assert_eq!(bottom[0].campaign_name, "Campaign 8");
        assert!(bottom.iter().all(|r| r.category == PerformerCategory::Bottom));
    }

    #[test]
    fn test_performer_slices_return_everything_when_short() {
        let few = vec![totals(1, 10.0, 5.0), totals(2, 10.0, 50.0)];
        assert_eq!(top_performers(few.clone()).len(), 2);
        let bottom = bottom_performers(few);
        assert_eq!(bottom[0].campaign_name, "Campaign 1");
    }

    #[test]
    fn test_summary_over_empty_store_is_null() {
        let rows = summary_metrics(GrandTotals {
            total_advertisers: 0,
            total_campaigns: 0,
            total_impressions: None,
            total_clicks: None,
            total_spend: None,
            total_conversions: None,
            total_revenue: None,
        });
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.overall_roas, None);
        assert_eq!(row.overall_ctr, None);
        assert_eq!(row.overall_cpc, None);
        assert_eq!(row.total_profit, None);
    }

    #[test]
    fn test_industry_orders_by_profit() {
        let rows = industry_performance(vec![
            IndustryTotals {
                industry: "Apparel".to_string(),
                num_advertisers: 1,
                num_campaigns: 2,
                spend: 100.0,
                revenue: 150.0,
            },
            IndustryTotals {
                industry: "Electronics".to_string(),
                num_advertisers: 2,
                num_campaigns: 3,
                spend: 300.0,
                revenue: 900.0,
            },
        ]);
        assert_eq!(rows[0].industry, "Electronics");
        assert_eq!(rows[0].total_profit, 600.0);
        assert_eq!(rows[0].avg_spend_per_advertiser, Some(150.0));
        assert_eq!(rows[1].avg_roas, Some(1.5));
    }
}
