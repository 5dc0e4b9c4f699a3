//! Member Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Member entity — one row of the `members` table.
///
/// `user_no` and `enroll_date` are store-generated; `user_pwd`, `email`,
/// `phone` and `address` are the only fields the update path may touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub user_no: i64,
    pub user_id: String,
    pub user_pwd: String,
    pub user_name: String,
    /// Single-character code ("M" / "F")
    pub gender: String,
    pub age: i64,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Comma-separated tags
    pub hobby: String,
    pub enroll_date: NaiveDate,
}

/// Create member payload — everything the caller supplies at registration.
/// The key and enrollment date come from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub user_id: String,
    pub user_pwd: String,
    pub user_name: String,
    pub gender: String,
    pub age: i64,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub hobby: String,
}

/// Update member payload — the row is located by `user_id`; only the four
/// mutable fields are overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub user_id: String,
    pub user_pwd: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}
