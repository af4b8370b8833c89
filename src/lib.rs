//! # Ads Analytics Library
//!
//! Seeds a small advertiser/campaign/daily-metric store and computes the
//! dashboard reports over it.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod reports;
pub mod runner;
pub mod seeds;
pub mod telemetry;
pub use migration;
