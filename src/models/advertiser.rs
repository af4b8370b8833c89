//! Advertiser entity model
//!
//! SeaORM entity for the advertisers table. Advertisers are written once at
//! seed time and never modified.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;

/// Advertiser owning zero or more campaigns
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "advertisers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub advertiser_id: i32,

    pub advertiser_name: String,

    /// Industry classification used by the industry rollup
    pub industry: String,

    /// Monthly budget in account currency
    pub monthly_budget: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign::Entity")]
    Campaign,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
