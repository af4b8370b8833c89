//! # Reports
//!
//! Aggregate reporting over the seeded store. The store computes grouped sums
//! and distinct counts; derived metrics, rankings and week bucketing are pure
//! functions over those aggregates.

pub mod aggregates;
pub mod document;
pub mod engine;
pub mod metrics;
pub mod rows;

pub use document::{DashboardData, report_names};
pub use engine::ReportEngine;
pub use metrics::{PacingStatus, WeekPeriod};
pub use rows::PerformerCategory;
