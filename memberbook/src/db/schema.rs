//! Schema bootstrap
//!
//! The member table and its generated columns. `user_no` plays the role
//! of the upstream sequence; `enroll_date` is populated by the store at
//! insert time and never supplied by a caller.

use sqlx::SqliteConnection;

use crate::error::{DbError, DbOp};

pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            user_no     INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT    NOT NULL UNIQUE,
            user_pwd    TEXT    NOT NULL,
            user_name   TEXT    NOT NULL,
            gender      TEXT    NOT NULL,
            age         INTEGER NOT NULL,
            email       TEXT    NOT NULL DEFAULT '',
            phone       TEXT    NOT NULL DEFAULT '',
            address     TEXT    NOT NULL DEFAULT '',
            hobby       TEXT    NOT NULL DEFAULT '',
            enroll_date TEXT    NOT NULL DEFAULT (date('now'))
        )
        "#,
    )
    .execute(conn)
    .await
    .map_err(|e| DbError::query(DbOp::Schema, e))?;

    Ok(())
}
