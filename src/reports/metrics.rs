//! Derived-metric formulas and classification rules shared by every report.
//!
//! All ratios go through [`safe_div`]: a zero (or missing) denominator yields
//! `None`, which serializes as `null`. Results are rounded to two decimals.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Days in the projection window for budget pacing.
pub const PROJECTION_DAYS: f64 = 31.0;

/// Projected spend below this share of the budget is under pace.
pub const UNDER_PACE_RATIO: f64 = 0.8;

/// Rounds half away from zero to two decimal places.
///
/// Rounding happens on the shortest decimal form of `value`, so `1.005`
/// becomes `1.01` even though its binary product with 100 falls just short
/// of the midpoint.
pub fn round2(value: f64) -> f64 {
    Decimal::from_str(&value.to_string())
        .ok()
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or_else(|| (value * 100.0).round() / 100.0)
}

/// `numerator / denominator`, or `None` when the denominator is zero or the
/// quotient is not finite.
pub fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let quotient = numerator / denominator;
    quotient.is_finite().then_some(quotient)
}

/// Revenue / spend.
pub fn roas(revenue: f64, spend: f64) -> Option<f64> {
    safe_div(revenue, spend).map(round2)
}

/// Clicks × 100 / impressions.
pub fn ctr_percent(clicks: i64, impressions: i64) -> Option<f64> {
    safe_div(clicks as f64 * 100.0, impressions as f64).map(round2)
}

/// Spend / clicks.
pub fn cpc(spend: f64, clicks: i64) -> Option<f64> {
    safe_div(spend, clicks as f64).map(round2)
}

/// Conversions × 100 / clicks.
pub fn conversion_rate_percent(conversions: i64, clicks: i64) -> Option<f64> {
    safe_div(conversions as f64 * 100.0, clicks as f64).map(round2)
}

/// Revenue − spend.
pub fn profit(revenue: f64, spend: f64) -> f64 {
    round2(revenue - spend)
}

/// (Revenue − spend) × 100 / spend.
pub fn roi_percent(revenue: f64, spend: f64) -> Option<f64> {
    safe_div((revenue - spend) * 100.0, spend).map(round2)
}

/// Budget pacing classification of a projected monthly spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PacingStatus {
    #[serde(rename = "Over Pace")]
    OverPace,
    #[serde(rename = "Under Pace")]
    UnderPace,
    #[serde(rename = "On Pace")]
    OnPace,
}

impl PacingStatus {
    /// Over when projected exceeds the budget, under when it falls short of
    /// 80% of it, on pace otherwise (both bounds inclusive).
    pub fn classify(projected_spend: f64, monthly_budget: f64) -> Self {
        if projected_spend > monthly_budget {
            PacingStatus::OverPace
        } else if projected_spend < monthly_budget * UNDER_PACE_RATIO {
            PacingStatus::UnderPace
        } else {
            PacingStatus::OnPace
        }
    }

    /// Classifies from an average daily spend projected over [`PROJECTION_DAYS`].
    pub fn from_daily_average(average_daily_spend: f64, monthly_budget: f64) -> Self {
        Self::classify(average_daily_spend * PROJECTION_DAYS, monthly_budget)
    }

    pub fn label(self) -> &'static str {
        match self {
            PacingStatus::OverPace => "Over Pace",
            PacingStatus::UnderPace => "Under Pace",
            PacingStatus::OnPace => "On Pace",
        }
    }
}

/// Day-of-month bucket used by the weekly report.
///
/// Ordering follows [`WeekPeriod::ordinal`], never the label: "Week 4+" must
/// come after "Week 3" whatever the collation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeekPeriod {
    #[serde(rename = "Week 1")]
    Week1,
    #[serde(rename = "Week 2")]
    Week2,
    #[serde(rename = "Week 3")]
    Week3,
    #[serde(rename = "Week 4+")]
    Week4Plus,
}

impl WeekPeriod {
    /// Days 1–7, 8–14, 15–21, then everything from the 22nd on.
    pub fn from_day_of_month(day: u32) -> Self {
        match day {
            0..=7 => WeekPeriod::Week1,
            8..=14 => WeekPeriod::Week2,
            15..=21 => WeekPeriod::Week3,
            _ => WeekPeriod::Week4Plus,
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            WeekPeriod::Week1 => 1,
            WeekPeriod::Week2 => 2,
            WeekPeriod::Week3 => 3,
            WeekPeriod::Week4Plus => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeekPeriod::Week1 => "Week 1",
            WeekPeriod::Week2 => "Week 2",
            WeekPeriod::Week3 => "Week 3",
            WeekPeriod::Week4Plus => "Week 4+",
        }
    }
}

impl Ord for WeekPeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for WeekPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Descending order with `None` after every value.
pub fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending order with `None` before every value, as SQL `ORDER BY .. ASC`
/// places NULL on SQLite.
pub fn asc_nulls_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
