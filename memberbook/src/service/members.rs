//! Member service
//!
//! Owns the connection and transaction lifecycle for one logical
//! operation: acquire, delegate to the gateway, commit when the mutation
//! touched a row and roll back otherwise, then release. Exactly one
//! acquire and one release per call, on every path.

use shared::models::{Member, MemberCreate, MemberUpdate};
use sqlx::{Sqlite, Transaction};

use crate::config::DatabaseConfig;
use crate::db::{connection, members};
use crate::error::DbError;

/// Register a new member. Returns the row count (0 when the id is taken).
pub async fn create(config: &DatabaseConfig, member: &MemberCreate) -> Result<u64, DbError> {
    let mut conn = connection::acquire(config).await?;
    let result = match connection::begin(&mut conn).await {
        Ok(mut tx) => {
            let rows = members::insert(&mut tx, member).await;
            settle(tx, rows).await
        }
        Err(e) => Err(e),
    };
    connection::release(conn).await;
    result
}

pub async fn list_all(config: &DatabaseConfig) -> Result<Vec<Member>, DbError> {
    let mut conn = connection::acquire(config).await?;
    let result = members::select_all(&mut conn).await;
    connection::release(conn).await;
    result
}

pub async fn find_by_id(
    config: &DatabaseConfig,
    user_id: &str,
) -> Result<Option<Member>, DbError> {
    let mut conn = connection::acquire(config).await?;
    let result = members::select_by_user_id(&mut conn, user_id).await;
    connection::release(conn).await;
    result
}

pub async fn find_by_name(
    config: &DatabaseConfig,
    keyword: &str,
) -> Result<Vec<Member>, DbError> {
    let mut conn = connection::acquire(config).await?;
    let result = members::select_by_user_name(&mut conn, keyword).await;
    connection::release(conn).await;
    result
}

/// Overwrite the mutable fields of one member. Returns 0 when no row
/// matches the id, which callers must treat as failure.
pub async fn update(config: &DatabaseConfig, member: &MemberUpdate) -> Result<u64, DbError> {
    let mut conn = connection::acquire(config).await?;
    let result = match connection::begin(&mut conn).await {
        Ok(mut tx) => {
            let rows = members::update(&mut tx, member).await;
            settle(tx, rows).await
        }
        Err(e) => Err(e),
    };
    connection::release(conn).await;
    result
}

/// Remove a member. Deletion requires proof of the current password.
pub async fn delete(
    config: &DatabaseConfig,
    user_id: &str,
    user_pwd: &str,
) -> Result<u64, DbError> {
    let mut conn = connection::acquire(config).await?;
    let result = match connection::begin(&mut conn).await {
        Ok(mut tx) => {
            let rows = members::delete(&mut tx, user_id, user_pwd).await;
            settle(tx, rows).await
        }
        Err(e) => Err(e),
    };
    connection::release(conn).await;
    result
}

/// The row-count policy: commit if and only if the mutation affected a
/// row; roll back on 0 rows and on gateway failure (where the transaction
/// state is indeterminate and the gateway's error takes precedence).
async fn settle(
    tx: Transaction<'_, Sqlite>,
    outcome: Result<u64, DbError>,
) -> Result<u64, DbError> {
    match outcome {
        Ok(rows) if rows > 0 => {
            connection::commit(tx).await?;
            Ok(rows)
        }
        Ok(rows) => {
            connection::rollback(tx).await?;
            Ok(rows)
        }
        Err(e) => {
            if let Err(rb) = connection::rollback(tx).await {
                tracing::warn!(error = %rb, "rollback after failed statement also failed");
            }
            Err(e)
        }
    }
}
