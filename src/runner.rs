//! Run phases: bootstrap the store, then produce the dashboard document.

use std::path::Path;

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;

use crate::db;
use crate::reports::{DashboardData, ReportEngine};
use crate::seeds::{SeedSummary, seed_sample_data};

/// Creates the schema and loads the sample dataset.
///
/// Without `reset` the store must not already hold data; with it, every table
/// is dropped and recreated first.
pub async fn initialize_store(db: &DatabaseConnection, reset: bool) -> Result<SeedSummary> {
    db::prepare_schema(db, reset).await?;
    let summary = seed_sample_data(db)
        .await
        .context("Failed to seed sample dataset")?;
    Ok(summary)
}

/// Runs every report and writes the document to `output`.
pub async fn generate_dashboard(db: &DatabaseConnection, output: &Path) -> Result<DashboardData> {
    let data = ReportEngine::new(db)
        .run_all()
        .await
        .context("Failed to compute reports")?;

    data.write_to(output)
        .await
        .with_context(|| format!("Failed to export dashboard to {}", output.display()))?;

    for (dataset, records) in data.dataset_counts() {
        tracing::info!(dataset, records, "Dataset exported");
    }

    Ok(data)
}
