//! Daily metric entity model
//!
//! One row per campaign per calendar day. The `(campaign_id, date)` pair is
//! the primary key.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_daily_metrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub campaign_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub date: Date,

    pub impressions: i32,

    /// Not enforced to be <= impressions
    pub clicks: i32,

    pub spend: f64,

    pub conversions: i32,

    pub revenue: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign::Entity",
        from = "Column::CampaignId",
        to = "super::campaign::Column::CampaignId",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Campaign,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
