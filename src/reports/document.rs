//! The dashboard document: every report keyed by name, in a fixed order.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::rows::{
    BudgetUtilizationRow, CampaignPerformanceRow, CampaignTypePerformanceRow, DailyTrendRow,
    IndustryPerformanceRow, PerformerRow, SummaryMetricsRow, WeeklyPerformanceRow,
};
use crate::error::ReportError;

/// Top-level keys of the document, in emission order.
pub mod report_names {
    pub const CAMPAIGN_PERFORMANCE: &str = "campaign_performance";
    pub const DAILY_TRENDS: &str = "daily_trends";
    pub const BUDGET_UTILIZATION: &str = "budget_utilization";
    pub const CAMPAIGN_TYPE_PERFORMANCE: &str = "campaign_type_performance";
    pub const INDUSTRY_PERFORMANCE: &str = "industry_performance";
    pub const WEEKLY_PERFORMANCE: &str = "weekly_performance";
    pub const TOP_PERFORMERS: &str = "top_performers";
    pub const BOTTOM_PERFORMERS: &str = "bottom_performers";
    pub const SUMMARY_METRICS: &str = "summary_metrics";

    pub const ALL: [&str; 9] = [
        CAMPAIGN_PERFORMANCE,
        DAILY_TRENDS,
        BUDGET_UTILIZATION,
        CAMPAIGN_TYPE_PERFORMANCE,
        INDUSTRY_PERFORMANCE,
        WEEKLY_PERFORMANCE,
        TOP_PERFORMERS,
        BOTTOM_PERFORMERS,
        SUMMARY_METRICS,
    ];
}

/// All report results. Serialization follows field order, which matches
/// [`report_names::ALL`]; rows keep the order each report produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub campaign_performance: Vec<CampaignPerformanceRow>,
    pub daily_trends: Vec<DailyTrendRow>,
    pub budget_utilization: Vec<BudgetUtilizationRow>,
    pub campaign_type_performance: Vec<CampaignTypePerformanceRow>,
    pub industry_performance: Vec<IndustryPerformanceRow>,
    pub weekly_performance: Vec<WeeklyPerformanceRow>,
    pub top_performers: Vec<PerformerRow>,
    pub bottom_performers: Vec<PerformerRow>,
    pub summary_metrics: Vec<SummaryMetricsRow>,
}

impl DashboardData {
    /// Record count per dataset, in document order.
    pub fn dataset_counts(&self) -> [(&'static str, usize); 9] {
        [
            (report_names::CAMPAIGN_PERFORMANCE, self.campaign_performance.len()),
            (report_names::DAILY_TRENDS, self.daily_trends.len()),
            (report_names::BUDGET_UTILIZATION, self.budget_utilization.len()),
            (
                report_names::CAMPAIGN_TYPE_PERFORMANCE,
                self.campaign_type_performance.len(),
            ),
            (report_names::INDUSTRY_PERFORMANCE, self.industry_performance.len()),
            (report_names::WEEKLY_PERFORMANCE, self.weekly_performance.len()),
            (report_names::TOP_PERFORMERS, self.top_performers.len()),
            (report_names::BOTTOM_PERFORMERS, self.bottom_performers.len()),
            (report_names::SUMMARY_METRICS, self.summary_metrics.len()),
        ]
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, ReportError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Serializes the whole document, writes it to a sibling staging file and
    /// renames that over `path`. Readers see either the previous document or
    /// the complete new one. Returns the number of bytes written.
    pub async fn write_to(&self, path: &Path) -> Result<usize, ReportError> {
        let bytes = self.to_json_pretty()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ReportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let staging = staging_path(path);
        if let Err(source) = tokio::fs::write(&staging, &bytes).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(ReportError::Io {
                path: staging,
                source,
            });
        }
        if let Err(source) = tokio::fs::rename(&staging, path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(ReportError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        let destination = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        tracing::info!(
            path = %destination.display(),
            bytes = bytes.len(),
            datasets = report_names::ALL.len(),
            "Dashboard document written"
        );

        Ok(bytes.len())
    }
}

/// `dir/.name.tmp` next to the destination, so the rename stays on one
/// filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| "dashboard".as_ref()));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_a_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("out/dashboard_data.json")),
            PathBuf::from("out/.dashboard_data.json.tmp")
        );
        assert_eq!(
            staging_path(Path::new("dashboard_data.json")),
            PathBuf::from(".dashboard_data.json.tmp")
        );
    }
}
