//! Tests for the emitted dashboard document.

use ads_analytics::error::ReportError;
use ads_analytics::reports::{ReportEngine, report_names};
use ads_analytics::runner;
use anyhow::Result;
use serde_json::Value;
use tempfile::TempDir;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{day, insert_advertiser, insert_campaign, insert_metric, setup_test_db};

use ads_analytics::models::{CampaignStatus, CampaignType};

#[tokio::test]
async fn document_keys_follow_report_order() -> Result<()> {
    let db = setup_test_db().await?;
    let data = ReportEngine::new(&db).run_all().await?;

    let text = String::from_utf8(data.to_json_pretty()?)?;
    let positions: Vec<usize> = report_names::ALL
        .iter()
        .map(|name| text.find(&format!("\"{name}\"")).expect("key present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let value: Value = serde_json::from_str(&text)?;
    assert_eq!(value.as_object().map(|o| o.len()), Some(9));
    // Two-space indentation
    assert!(text.starts_with("{\n  \"campaign_performance\""));
    Ok(())
}

#[tokio::test]
async fn undefined_ratios_serialize_as_null() -> Result<()> {
    let db = setup_test_db().await?;
    insert_advertiser(&db, 1, "Acme", "Electronics", 0.0).await?;
    insert_campaign(&db, 1, 1, CampaignType::SponsoredDisplay, CampaignStatus::Active).await?;
    insert_metric(&db, 1, day(9), (0, 0, 0.0, 0, 0.0)).await?;

    let data = ReportEngine::new(&db).run_all().await?;
    let value: Value = serde_json::from_slice(&data.to_json_pretty()?)?;

    let campaign = &value["campaign_performance"][0];
    assert_eq!(campaign["campaign_type"], "Sponsored Display");
    assert!(campaign["roas"].is_null());
    assert!(campaign["ctr_percent"].is_null());

    let budget = &value["budget_utilization"][0];
    assert!(budget["budget_utilization_percent"].is_null());
    assert_eq!(budget["pacing_status"], "On Pace");

    assert_eq!(value["weekly_performance"][0]["week_period"], "Week 2");
    assert_eq!(value["daily_trends"][0]["date"], "2025-01-09");
    Ok(())
}

#[tokio::test]
async fn write_to_creates_parent_directories() -> Result<()> {
    let db = setup_test_db().await?;
    let data = ReportEngine::new(&db).run_all().await?;

    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("dashboard_data.json");
    let bytes = data.write_to(&path).await?;

    let written = std::fs::read(&path)?;
    assert_eq!(written.len(), bytes);
    assert_eq!(written, data.to_json_pretty()?);
    Ok(())
}

fn entries(dir: &TempDir) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir.path())? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[tokio::test]
async fn write_to_replaces_an_existing_document_whole() -> Result<()> {
    let db = setup_test_db().await?;
    let data = ReportEngine::new(&db).run_all().await?;

    let dir = TempDir::new()?;
    let path = dir.path().join("dashboard_data.json");
    std::fs::write(&path, "stale contents that are longer than nothing at all")?;

    data.write_to(&path).await?;

    assert_eq!(std::fs::read(&path)?, data.to_json_pretty()?);
    assert_eq!(entries(&dir)?, ["dashboard_data.json"]);
    Ok(())
}

#[tokio::test]
async fn failed_write_leaves_no_staging_file() -> Result<()> {
    let db = setup_test_db().await?;
    let data = ReportEngine::new(&db).run_all().await?;

    let dir = TempDir::new()?;
    // A directory already occupies the destination name
    let path = dir.path().join("dashboard_data.json");
    std::fs::create_dir(&path)?;

    let err = data.write_to(&path).await.unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
    assert_eq!(entries(&dir)?, ["dashboard_data.json"]);
    assert!(path.is_dir());
    Ok(())
}

#[tokio::test]
async fn full_run_seeds_and_exports() -> Result<()> {
    let db = setup_test_db().await?;
    let dir = TempDir::new()?;
    let path = dir.path().join("dashboard_data.json");

    let summary = runner::initialize_store(&db, false).await?;
    assert_eq!(summary.daily_metrics, 372);

    let data = runner::generate_dashboard(&db, &path).await?;
    let value: Value = serde_json::from_slice(&std::fs::read(&path)?)?;

    assert_eq!(value["campaign_performance"].as_array().map(Vec::len), Some(12));
    assert_eq!(
        value["summary_metrics"][0]["total_campaigns"],
        data.summary_metrics[0].total_campaigns
    );

    // Rerunning without a reset refuses to double-load
    assert!(runner::initialize_store(&db, false).await.is_err());
    // With a reset the store is rebuilt and reseeded
    let summary = runner::initialize_store(&db, true).await?;
    assert_eq!(summary.campaigns, 12);
    Ok(())
}
