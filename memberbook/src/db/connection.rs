//! Connection lifecycle helpers
//!
//! One connection per logical operation: the service acquires here, hands
//! the open handle to the gateway, finalizes the transaction and releases
//! before returning. No pooling, no reuse across calls.
//!
//! Release is consuming: ownership makes closing a handle twice (or a
//! handle that was never opened) unrepresentable, and `release` itself
//! never raises. Statement and row handles are scoped inside sqlx and are
//! dropped in reverse order of acquisition automatically.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, Sqlite, SqliteConnection, Transaction};

use crate::config::DatabaseConfig;
use crate::error::DbError;

/// Open a connection from the configured URL.
///
/// Returns either a usable connection or `DbError::Connection` — never a
/// dangling handle.
pub async fn acquire(config: &DatabaseConfig) -> Result<SqliteConnection, DbError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(DbError::Connection)?
        .create_if_missing(true);

    SqliteConnection::connect_with(&options)
        .await
        .map_err(DbError::Connection)
}

/// Close a connection. Failures are logged, not raised — there is nothing
/// useful a caller can do about a connection that would not shut down.
pub async fn release(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close database connection");
    }
}

/// Start a transaction for one mutating operation.
pub async fn begin(conn: &mut SqliteConnection) -> Result<Transaction<'_, Sqlite>, DbError> {
    conn.begin().await.map_err(|e| DbError::Transaction {
        action: "begin",
        source: e,
    })
}

pub async fn commit(tx: Transaction<'_, Sqlite>) -> Result<(), DbError> {
    tx.commit().await.map_err(|e| DbError::Transaction {
        action: "commit",
        source: e,
    })
}

pub async fn rollback(tx: Transaction<'_, Sqlite>) -> Result<(), DbError> {
    tx.rollback().await.map_err(|e| DbError::Transaction {
        action: "rollback",
        source: e,
    })
}
