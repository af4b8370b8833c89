//! Report engine: runs each report against a read-only store handle.

use sea_orm::DatabaseConnection;

use super::aggregates;
use super::document::{DashboardData, report_names};
use super::rows::{
    self, BudgetUtilizationRow, CampaignPerformanceRow, CampaignTypePerformanceRow,
    DailyTrendRow, IndustryPerformanceRow, PerformerRow, SummaryMetricsRow, WeeklyPerformanceRow,
};
use crate::error::{ReportError, query_failed};

/// Computes the dashboard reports. Every operation is read-only and
/// independent of the others.
pub struct ReportEngine<'a> {
    db: &'a DatabaseConnection,
}

fn computed<T>(report: &'static str, rows: Vec<T>) -> Vec<T> {
    tracing::info!(report, rows = rows.len(), "Report computed");
    rows
}

impl<'a> ReportEngine<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn campaign_performance(&self) -> Result<Vec<CampaignPerformanceRow>, ReportError> {
        let name = report_names::CAMPAIGN_PERFORMANCE;
        let totals = aggregates::campaign_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::campaign_performance(totals)))
    }

    pub async fn daily_trends(&self) -> Result<Vec<DailyTrendRow>, ReportError> {
        let name = report_names::DAILY_TRENDS;
        let totals = aggregates::daily_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::daily_trends(totals)))
    }

    /// Active campaigns only; paused and archived spend does not count
    /// towards pacing.
    pub async fn budget_utilization(&self) -> Result<Vec<BudgetUtilizationRow>, ReportError> {
        let name = report_names::BUDGET_UTILIZATION;
        let totals = aggregates::active_budget_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::budget_utilization(totals)))
    }

    pub async fn campaign_type_performance(
        &self,
    ) -> Result<Vec<CampaignTypePerformanceRow>, ReportError> {
        let name = report_names::CAMPAIGN_TYPE_PERFORMANCE;
        let totals = aggregates::campaign_type_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::campaign_type_performance(totals)))
    }

    pub async fn industry_performance(&self) -> Result<Vec<IndustryPerformanceRow>, ReportError> {
        let name = report_names::INDUSTRY_PERFORMANCE;
        let totals = aggregates::industry_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::industry_performance(totals)))
    }

    pub async fn weekly_performance(&self) -> Result<Vec<WeeklyPerformanceRow>, ReportError> {
        let name = report_names::WEEKLY_PERFORMANCE;
        let days = aggregates::daily_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::weekly_performance(&days)))
    }

    pub async fn top_performers(&self) -> Result<Vec<PerformerRow>, ReportError> {
        let name = report_names::TOP_PERFORMERS;
        let totals = aggregates::campaign_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::top_performers(totals)))
    }

    pub async fn bottom_performers(&self) -> Result<Vec<PerformerRow>, ReportError> {
        let name = report_names::BOTTOM_PERFORMERS;
        let totals = aggregates::campaign_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::bottom_performers(totals)))
    }

    pub async fn summary_metrics(&self) -> Result<Vec<SummaryMetricsRow>, ReportError> {
        let name = report_names::SUMMARY_METRICS;
        let totals = aggregates::grand_totals(self.db)
            .await
            .map_err(query_failed(name))?;
        Ok(computed(name, rows::summary_metrics(totals)))
    }

    /// Runs every report in document order. The first failure aborts the run.
    pub async fn run_all(&self) -> Result<DashboardData, ReportError> {
        Ok(DashboardData {
            campaign_performance: self.campaign_performance().await?,
            daily_trends: self.daily_trends().await?,
            budget_utilization: self.budget_utilization().await?,
            campaign_type_performance: self.campaign_type_performance().await?,
            industry_performance: self.industry_performance().await?,
            weekly_performance: self.weekly_performance().await?,
            top_performers: self.top_performers().await?,
            bottom_performers: self.bottom_performers().await?,
            summary_metrics: self.summary_metrics().await?,
        })
    }
}
