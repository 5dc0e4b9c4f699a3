//! Database-layer error type
//!
//! Every failure below the console carries the statement kind that was
//! being attempted, so a propagated error always names the operation.
//! Absence of a row is never an error — gateways return `None`, an empty
//! `Vec` or a zero row count for that.

use std::fmt;

/// The statement kind a failed call was attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOp {
    Insert,
    Select,
    Update,
    Delete,
    Schema,
}

impl fmt::Display for DbOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DbOp::Insert => "insert",
            DbOp::Select => "select",
            DbOp::Update => "update",
            DbOp::Delete => "delete",
            DbOp::Schema => "schema",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// No usable connection could be opened (bad URL, missing file,
    /// handshake failure).
    #[error("failed to open database connection: {0}")]
    Connection(#[source] sqlx::Error),

    /// A bound statement failed during execution.
    #[error("{op} statement failed: {source}")]
    Execution {
        op: DbOp,
        #[source]
        source: sqlx::Error,
    },

    /// A fetched row could not be converted into a record.
    #[error("row mapping failed during {op}: {source}")]
    Mapping {
        op: DbOp,
        #[source]
        source: sqlx::Error,
    },

    /// Transaction control (begin/commit/rollback) failed.
    #[error("transaction {action} failed: {source}")]
    Transaction {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl DbError {
    /// Classify a failed statement: decode and column-shape errors are
    /// mapping failures, everything else is an execution failure.
    pub fn query(op: DbOp, source: sqlx::Error) -> Self {
        match source {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => DbError::Mapping { op, source },
            _ => DbError::Execution { op, source },
        }
    }
}
