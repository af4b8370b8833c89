//! Campaign entity model
//!
//! SeaORM entity for the campaigns table together with the categorical
//! campaign type and status columns.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ad product a campaign runs on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CampaignType {
    #[sea_orm(string_value = "Sponsored Products")]
    #[serde(rename = "Sponsored Products")]
    SponsoredProducts,
    #[sea_orm(string_value = "Sponsored Brands")]
    #[serde(rename = "Sponsored Brands")]
    SponsoredBrands,
    #[sea_orm(string_value = "Sponsored Display")]
    #[serde(rename = "Sponsored Display")]
    SponsoredDisplay,
}

/// Delivery status of a campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CampaignStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Paused")]
    Paused,
    #[sea_orm(string_value = "Archived")]
    Archived,
}

/// Campaign belonging to a single advertiser
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub campaign_id: i32,

    pub campaign_name: String,

    pub campaign_type: CampaignType,

    pub status: CampaignStatus,

    /// Owning advertiser; must resolve to an existing advertiser row
    pub advertiser_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::advertiser::Entity",
        from = "Column::AdvertiserId",
        to = "super::advertiser::Column::AdvertiserId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Advertiser,
    #[sea_orm(has_many = "super::daily_metric::Entity")]
    DailyMetric,
}

impl Related<super::advertiser::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advertiser.def()
    }
}

impl Related<super::daily_metric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyMetric.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
