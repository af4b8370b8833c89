//! # Data Models
//!
//! SeaORM entities for the advertiser → campaign → daily metric chain.

pub mod advertiser;
pub mod campaign;
pub mod daily_metric;

pub use advertiser::Entity as Advertiser;
pub use campaign::{CampaignStatus, CampaignType, Entity as Campaign};
pub use daily_metric::Entity as DailyMetric;
