//! Error types for query validation.
//!
//! Building and rendering are total; only the opt-in `Query::validate`
//! reports errors.

use thiserror::Error;

/// Semantic problems found by `Query::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The SELECT list is empty.
    #[error("Query selects no results")]
    EmptyProjection,

    /// An ORDER BY term references a table that is not in the FROM clause.
    #[error("ORDER BY references table '{table}' which is not in the FROM clause")]
    DanglingOrderTable { table: String },
}

impl QueryError {
    /// Create a dangling ORDER BY table error.
    pub fn dangling(table: impl Into<String>) -> Self {
        Self::DanglingOrderTable {
            table: table.into(),
        }
    }
}

/// Result type alias for query validation.
pub type QueryResult<T> = Result<T, QueryError>;
