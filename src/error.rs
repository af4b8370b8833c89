//! # Error Handling
//!
//! Error types for the two run phases: loading the sample dataset and
//! computing/writing reports. Both are fatal for a run; nothing is retried.

use std::path::PathBuf;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures while seeding the store.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seeding is not idempotent; the store must be empty or freshly reset.
    #[error("store is not empty: table '{table}' already holds {rows} rows (use --reset)")]
    StoreNotEmpty { table: &'static str, rows: u64 },
    #[error("constraint violation while seeding '{table}': {message}")]
    ConstraintViolation { table: &'static str, message: String },
    #[error("database error while seeding '{table}': {source}")]
    Database {
        table: &'static str,
        #[source]
        source: DbErr,
    },
}

impl SeedError {
    /// Classifies a database error raised while inserting into `table`.
    pub fn from_db(table: &'static str, error: DbErr) -> Self {
        match error.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                SeedError::ConstraintViolation { table, message }
            }
            _ => SeedError::Database {
                table,
                source: error,
            },
        }
    }

    /// Returns true when the failure came from a key constraint.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, SeedError::ConstraintViolation { .. })
    }
}

/// Failures while computing or emitting the dashboard document.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report '{report}' failed: {source}")]
    Query {
        report: &'static str,
        #[source]
        source: DbErr,
    },
    #[error("failed to serialize dashboard document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write dashboard document to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Name of the report that failed, if the failure came from a query.
    pub fn report(&self) -> Option<&'static str> {
        match self {
            ReportError::Query { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// Adapter for `map_err` that tags a store error with its report name.
pub(crate) fn query_failed(report: &'static str) -> impl FnOnce(DbErr) -> ReportError {
    move |source| ReportError::Query { report, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_constraint_errors_are_plain_database_errors() {
        let err = SeedError::from_db("advertisers", DbErr::Custom("boom".to_string()));
        assert!(!err.is_constraint_violation());
        assert!(err.to_string().contains("advertisers"));
    }

    #[test]
    fn test_query_error_carries_report_name() {
        let err = query_failed("daily_trends")(DbErr::Custom("no such table".to_string()));
        assert_eq!(err.report(), Some("daily_trends"));
        assert!(err.to_string().contains("daily_trends"));
    }
}
