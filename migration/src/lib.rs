//! Database migrations for the ads analytics store.
//!
//! Creates the advertiser, campaign and daily metric tables using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_01_01_000001_create_advertisers;
mod m2025_01_01_000002_create_campaigns;
mod m2025_01_01_000003_create_campaign_daily_metrics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_01_01_000001_create_advertisers::Migration),
            Box::new(m2025_01_01_000002_create_campaigns::Migration),
            Box::new(m2025_01_01_000003_create_campaign_daily_metrics::Migration),
        ]
    }
}
