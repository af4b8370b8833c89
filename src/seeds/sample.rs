//! Built-in sample dataset.
//!
//! Five advertisers, twelve campaigns and one metric row per campaign per day
//! for January 2025. Daily values are derived from a per-campaign profile with
//! deterministic day-of-month and weekend variation, so every load produces
//! byte-identical rows.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{CampaignStatus, CampaignType, advertiser, campaign, daily_metric};

/// Days of metrics generated per campaign.
pub const SAMPLE_MONTH_DAYS: u32 = 31;

const SAMPLE_YEAR: i32 = 2025;
const SAMPLE_MONTH: u32 = 1;

/// Rows to load, in foreign-key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedDataset {
    pub advertisers: Vec<advertiser::Model>,
    pub campaigns: Vec<campaign::Model>,
    pub daily_metrics: Vec<daily_metric::Model>,
}

/// Baseline delivery and conversion behaviour of one campaign.
struct CampaignProfile {
    campaign_id: i32,
    name: &'static str,
    campaign_type: CampaignType,
    status: CampaignStatus,
    advertiser_id: i32,
    daily_impressions: f64,
    ctr: f64,
    cpc: f64,
    conversion_rate: f64,
    order_value: f64,
}

static ADVERTISERS: [(i32, &str, &str, f64); 5] = [
    (1, "TechGear Pro", "Electronics", 50_000.0),
    (2, "HomeEssentials Co", "Home & Kitchen", 30_000.0),
    (3, "FitLife Nutrition", "Health & Wellness", 25_000.0),
    (4, "StyleHub Fashion", "Apparel", 40_000.0),
    (5, "SmartHome Solutions", "Electronics", 35_000.0),
];

static CAMPAIGNS: [CampaignProfile; 12] = [
    CampaignProfile {
        campaign_id: 1,
        name: "TechGear - Wireless Earbuds",
        campaign_type: CampaignType::SponsoredProducts,
        status: CampaignStatus::Active,
        advertiser_id: 1,
        daily_impressions: 42_000.0,
        ctr: 0.0125,
        cpc: 0.92,
        conversion_rate: 0.105,
        order_value: 49.99,
    },
    CampaignProfile {
        campaign_id: 2,
        name: "TechGear - Brand Awareness",
        campaign_type: CampaignType::SponsoredBrands,
        status: CampaignStatus::Active,
        advertiser_id: 1,
        daily_impressions: 68_000.0,
        ctr: 0.0065,
        cpc: 1.35,
        conversion_rate: 0.04,
        order_value: 89.00,
    },
    CampaignProfile {
        campaign_id: 3,
        name: "TechGear - Retargeting Display",
        campaign_type: CampaignType::SponsoredDisplay,
        status: CampaignStatus::Paused,
        advertiser_id: 1,
        daily_impressions: 30_000.0,
        ctr: 0.0042,
        cpc: 0.78,
        conversion_rate: 0.06,
        order_value: 35.00,
    },
    CampaignProfile {
        campaign_id: 4,
        name: "HomeEssentials - Kitchen Gadgets",
        campaign_type: CampaignType::SponsoredProducts,
        status: CampaignStatus::Active,
        advertiser_id: 2,
        daily_impressions: 35_000.0,
        ctr: 0.0150,
        cpc: 0.68,
        conversion_rate: 0.12,
        order_value: 24.99,
    },
    CampaignProfile {
        campaign_id: 5,
        name: "HomeEssentials - Seasonal Brand",
        campaign_type: CampaignType::SponsoredBrands,
        status: CampaignStatus::Active,
        advertiser_id: 2,
        daily_impressions: 40_000.0,
        ctr: 0.0080,
        cpc: 1.10,
        conversion_rate: 0.05,
        order_value: 39.99,
    },
    CampaignProfile {
        campaign_id: 6,
        name: "FitLife - Protein Powder",
        campaign_type: CampaignType::SponsoredProducts,
        status: CampaignStatus::Active,
        advertiser_id: 3,
        daily_impressions: 28_000.0,
        ctr: 0.0140,
        cpc: 0.85,
        conversion_rate: 0.14,
        order_value: 34.99,
    },
    CampaignProfile {
        campaign_id: 7,
        name: "FitLife - New Customer Display",
        campaign_type: CampaignType::SponsoredDisplay,
        status: CampaignStatus::Active,
        advertiser_id: 3,
        daily_impressions: 52_000.0,
        ctr: 0.0035,
        cpc: 0.70,
        conversion_rate: 0.025,
        order_value: 29.99,
    },
    CampaignProfile {
        campaign_id: 8,
        name: "StyleHub - Summer Collection",
        campaign_type: CampaignType::SponsoredProducts,
        status: CampaignStatus::Active,
        advertiser_id: 4,
        daily_impressions: 38_000.0,
        ctr: 0.0110,
        cpc: 0.75,
        conversion_rate: 0.07,
        order_value: 45.00,
    },
    CampaignProfile {
        campaign_id: 9,
        name: "StyleHub - Brand Story",
        campaign_type: CampaignType::SponsoredBrands,
        status: CampaignStatus::Paused,
        advertiser_id: 4,
        daily_impressions: 45_000.0,
        ctr: 0.0060,
        cpc: 1.45,
        conversion_rate: 0.03,
        order_value: 60.00,
    },
    CampaignProfile {
        campaign_id: 10,
        name: "StyleHub - Lookalike Display",
        campaign_type: CampaignType::SponsoredDisplay,
        status: CampaignStatus::Active,
        advertiser_id: 4,
        daily_impressions: 60_000.0,
        ctr: 0.0030,
        cpc: 0.65,
        conversion_rate: 0.015,
        order_value: 38.00,
    },
    CampaignProfile {
        campaign_id: 11,
        name: "SmartHome - Smart Plugs",
        campaign_type: CampaignType::SponsoredProducts,
        status: CampaignStatus::Active,
        advertiser_id: 5,
        daily_impressions: 33_000.0,
        ctr: 0.0130,
        cpc: 1.05,
        conversion_rate: 0.10,
        order_value: 29.99,
    },
    CampaignProfile {
        campaign_id: 12,
        name: "SmartHome - Video Doorbell Launch",
        campaign_type: CampaignType::SponsoredBrands,
        status: CampaignStatus::Archived,
        advertiser_id: 5,
        daily_impressions: 36_000.0,
        ctr: 0.0075,
        cpc: 1.60,
        conversion_rate: 0.045,
        order_value: 129.99,
    },
];

impl SeedDataset {
    /// The fixed January 2025 dataset.
    pub fn sample() -> Self {
        let advertisers = ADVERTISERS
            .iter()
            .map(|&(advertiser_id, name, industry, budget)| advertiser::Model {
                advertiser_id,
                advertiser_name: name.to_string(),
                industry: industry.to_string(),
                monthly_budget: budget,
            })
            .collect();

        let campaigns = CAMPAIGNS
            .iter()
            .map(|p| campaign::Model {
                campaign_id: p.campaign_id,
                campaign_name: p.name.to_string(),
                campaign_type: p.campaign_type,
                status: p.status,
                advertiser_id: p.advertiser_id,
            })
            .collect();

        let daily_metrics = CAMPAIGNS
            .iter()
            .flat_map(|profile| {
                (1..=SAMPLE_MONTH_DAYS).filter_map(move |day| {
                    NaiveDate::from_ymd_opt(SAMPLE_YEAR, SAMPLE_MONTH, day)
                        .map(|date| profile.metrics_for(date))
                })
            })
            .collect();

        Self {
            advertisers,
            campaigns,
            daily_metrics,
        }
    }
}

impl CampaignProfile {
    fn metrics_for(&self, date: NaiveDate) -> daily_metric::Model {
        let day = date.day() as i32;
        let id = self.campaign_id;

        let weekend_lift = match date.weekday() {
            Weekday::Sat | Weekday::Sun => 0.15,
            _ => 0.0,
        };
        let delivery = 1.0 + weekend_lift + wobble(day * 7 + id * 13, 17, 0.08);
        let engagement = 1.0 + wobble(day * 3 + id * 5, 9, 0.04);
        let purchase = 1.0 + wobble(day * 11 + id * 7, 13, 0.20);

        let impressions = (self.daily_impressions * delivery).round();
        let clicks = (impressions * self.ctr * engagement).round();
        let conversions = (clicks * self.conversion_rate * purchase).round();

        daily_metric::Model {
            campaign_id: id,
            date,
            impressions: impressions as i32,
            clicks: clicks as i32,
            spend: cents(clicks * self.cpc),
            conversions: conversions as i32,
            revenue: cents(conversions * self.order_value),
        }
    }
}

/// Symmetric variation in `[-amplitude, +amplitude]` picked by `seed % modulus`.
fn wobble(seed: i32, modulus: i32, amplitude: f64) -> f64 {
    let step = seed.rem_euclid(modulus) as f64 / (modulus - 1) as f64;
    (step * 2.0 - 1.0) * amplitude
}

fn cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
