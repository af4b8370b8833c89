//! # Ads Analytics Entry Point

use anyhow::{Context, Result};
use clap::Parser;

use ads_analytics::{
    cli::{Cli, Commands},
    config::ConfigLoader,
    db, runner, telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;
    if let Some(url) = cli.database_url.clone() {
        config.database_url = url;
    }

    telemetry::init_tracing(&config)?;
    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted_json) = config.redacted_json() {
        tracing::debug!(config = %redacted_json, "Effective configuration");
    }

    let db = db::init_pool(&config).await?;
    db::health_check(&db).await?;

    match cli.command() {
        Commands::Init { reset } => {
            runner::initialize_store(&db, reset).await?;
        }
        Commands::Report { output } => {
            let output = output.unwrap_or_else(|| config.output_path.clone());
            runner::generate_dashboard(&db, &output).await?;
        }
        Commands::Run { reset, output } => {
            let output = output.unwrap_or_else(|| config.output_path.clone());
            runner::initialize_store(&db, reset).await?;
            runner::generate_dashboard(&db, &output).await?;
        }
    }

    db.close().await.context("Failed to close database pool")?;
    Ok(())
}
