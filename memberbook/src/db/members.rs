//! Member table operations
//!
//! One parameterized statement per call, executed on a caller-supplied
//! open connection. This module never opens, commits or closes the
//! connection — transaction authority stays with the service layer.

use shared::models::{Member, MemberCreate, MemberUpdate};
use sqlx::SqliteConnection;

use crate::error::{DbError, DbOp};

const SELECT_COLUMNS: &str = "user_no, user_id, user_pwd, user_name, gender, age, \
                              email, phone, address, hobby, enroll_date";

/// Insert a new member. The key and enrollment date are generated by the
/// store. A duplicate `user_id` is reported as 0 rows affected, not as an
/// error — the store rejected the row, the statement itself did not fail.
pub async fn insert(conn: &mut SqliteConnection, member: &MemberCreate) -> Result<u64, DbError> {
    let result = sqlx::query(
        r#"
        INSERT INTO members (
            user_id, user_pwd, user_name, gender, age,
            email, phone, address, hobby
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(&member.user_id)
    .bind(&member.user_pwd)
    .bind(&member.user_name)
    .bind(&member.gender)
    .bind(member.age)
    .bind(&member.email)
    .bind(&member.phone)
    .bind(&member.address)
    .bind(&member.hobby)
    .execute(conn)
    .await;

    match result {
        Ok(r) => Ok(r.rows_affected()),
        Err(e) if is_unique_violation(&e) => Ok(0),
        Err(e) => Err(DbError::query(DbOp::Insert, e)),
    }
}

/// All members, in store order. Empty table yields an empty list.
pub async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<Member>, DbError> {
    sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM members"))
        .fetch_all(conn)
        .await
        .map_err(|e| DbError::query(DbOp::Select, e))
}

/// Exact-match lookup by id. Absence is `None`, not an error.
pub async fn select_by_user_id(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<Member>, DbError> {
    sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM members WHERE user_id = ?1"
    ))
    .bind(user_id)
    .fetch_optional(conn)
    .await
    .map_err(|e| DbError::query(DbOp::Select, e))
}

/// Case-sensitive substring search on the member name. The keyword is
/// matched with `instr`, so `%` and `_` in the keyword stay literal and
/// the caller never supplies wildcard syntax.
pub async fn select_by_user_name(
    conn: &mut SqliteConnection,
    keyword: &str,
) -> Result<Vec<Member>, DbError> {
    sqlx::query_as(&format!(
        "SELECT {SELECT_COLUMNS} FROM members WHERE instr(user_name, ?1) > 0"
    ))
    .bind(keyword)
    .fetch_all(conn)
    .await
    .map_err(|e| DbError::query(DbOp::Select, e))
}

/// Overwrite the four mutable fields of the row matching `user_id`.
/// Returns 0 when no row matches.
pub async fn update(conn: &mut SqliteConnection, member: &MemberUpdate) -> Result<u64, DbError> {
    let result = sqlx::query(
        r#"
        UPDATE members
        SET user_pwd = ?1, email = ?2, phone = ?3, address = ?4
        WHERE user_id = ?5
        "#,
    )
    .bind(&member.user_pwd)
    .bind(&member.email)
    .bind(&member.phone)
    .bind(&member.address)
    .bind(&member.user_id)
    .execute(conn)
    .await
    .map_err(|e| DbError::query(DbOp::Update, e))?;

    Ok(result.rows_affected())
}

/// Delete the row matching both id and password. A wrong password and a
/// missing id are indistinguishable by design: both report 0 rows.
pub async fn delete(
    conn: &mut SqliteConnection,
    user_id: &str,
    user_pwd: &str,
) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM members WHERE user_id = ?1 AND user_pwd = ?2")
        .bind(user_id)
        .bind(user_pwd)
        .execute(conn)
        .await
        .map_err(|e| DbError::query(DbOp::Delete, e))?;

    Ok(result.rows_affected())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
