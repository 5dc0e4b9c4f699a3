//! End-to-end member lifecycle through the service layer.
//!
//! Every service call opens and closes its own connection, so these tests
//! run against a file-backed database in a temp directory — consecutive
//! calls must see each other's committed state.

use memberbook::db::{connection, schema};
use memberbook::service::members;
use memberbook::DatabaseConfig;
use shared::models::{MemberCreate, MemberUpdate};
use tempfile::TempDir;

async fn setup() -> (TempDir, DatabaseConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        database_url: format!("sqlite:{}", dir.path().join("members.db").display()),
    };
    let mut conn = connection::acquire(&config).await.unwrap();
    schema::ensure_schema(&mut conn).await.unwrap();
    connection::release(conn).await;
    (dir, config)
}

fn member(user_id: &str, user_name: &str) -> MemberCreate {
    MemberCreate {
        user_id: user_id.into(),
        user_pwd: "pw1".into(),
        user_name: user_name.into(),
        gender: "F".into(),
        age: 30,
        email: "alice@example.com".into(),
        phone: "010-1111-2222".into(),
        address: "Seoul".into(),
        hobby: "reading,climbing".into(),
    }
}

#[tokio::test]
async fn round_trip_insert_then_find() {
    let (_dir, config) = setup().await;

    assert_eq!(members::create(&config, &member("alice", "Alice")).await.unwrap(), 1);

    let m = members::find_by_id(&config, "alice").await.unwrap().unwrap();
    assert!(m.user_no >= 1);
    assert_eq!(m.user_id, "alice");
    assert_eq!(m.user_pwd, "pw1");
    assert_eq!(m.user_name, "Alice");
    assert_eq!(m.gender, "F");
    assert_eq!(m.age, 30);
    // generated at insert time, never caller-supplied
    assert!(m.enroll_date >= chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
}

#[tokio::test]
async fn duplicate_id_reports_zero_rows() {
    let (_dir, config) = setup().await;

    assert_eq!(members::create(&config, &member("alice", "Alice")).await.unwrap(), 1);
    assert_eq!(members::create(&config, &member("alice", "Impostor")).await.unwrap(), 0);

    // the rejected row was rolled back, the original is untouched
    let all = members::list_all(&config).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user_name, "Alice");
}

#[tokio::test]
async fn update_changes_only_mutable_fields() {
    let (_dir, config) = setup().await;
    members::create(&config, &member("alice", "Alice")).await.unwrap();
    let before = members::find_by_id(&config, "alice").await.unwrap().unwrap();

    let rows = members::update(
        &config,
        &MemberUpdate {
            user_id: "alice".into(),
            user_pwd: "pw2".into(),
            email: "new@example.com".into(),
            phone: "010-9999-0000".into(),
            address: "Busan".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(rows, 1);

    let after = members::find_by_id(&config, "alice").await.unwrap().unwrap();
    assert_eq!(after.user_pwd, "pw2");
    assert_eq!(after.email, "new@example.com");
    assert_eq!(after.phone, "010-9999-0000");
    assert_eq!(after.address, "Busan");
    // immutable fields survive the overwrite
    assert_eq!(after.user_no, before.user_no);
    assert_eq!(after.user_name, before.user_name);
    assert_eq!(after.gender, before.gender);
    assert_eq!(after.age, before.age);
    assert_eq!(after.hobby, before.hobby);
    assert_eq!(after.enroll_date, before.enroll_date);
}

#[tokio::test]
async fn update_unknown_id_returns_zero() {
    let (_dir, config) = setup().await;

    let rows = members::update(
        &config,
        &MemberUpdate {
            user_id: "bob".into(),
            user_pwd: "pw2".into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        },
    )
    .await
    .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn delete_requires_matching_password() {
    let (_dir, config) = setup().await;
    members::create(&config, &member("alice", "Alice")).await.unwrap();

    assert_eq!(members::delete(&config, "alice", "wrong").await.unwrap(), 0);
    assert!(members::find_by_id(&config, "alice").await.unwrap().is_some());

    assert_eq!(members::delete(&config, "alice", "pw1").await.unwrap(), 1);
    assert!(members::find_by_id(&config, "alice").await.unwrap().is_none());
}

#[tokio::test]
async fn name_search_is_case_sensitive_substring() {
    let (_dir, config) = setup().await;
    members::create(&config, &member("a1", "Alice")).await.unwrap();
    members::create(&config, &member("a2", "Alicia")).await.unwrap();
    members::create(&config, &member("b1", "Bob")).await.unwrap();

    let hits = members::find_by_name(&config, "Ali").await.unwrap();
    let names: Vec<_> = hits.iter().map(|m| m.user_name.as_str()).collect();
    assert_eq!(names, ["Alice", "Alicia"]);

    assert!(members::find_by_name(&config, "zzz").await.unwrap().is_empty());
    // lowercase keyword must not match — the search is case-sensitive
    assert!(members::find_by_name(&config, "ali").await.unwrap().is_empty());
}

#[tokio::test]
async fn absence_is_a_normal_result() {
    let (_dir, config) = setup().await;

    assert!(members::list_all(&config).await.unwrap().is_empty());
    assert!(members::find_by_id(&config, "ghost").await.unwrap().is_none());
    assert!(members::find_by_name(&config, "ghost").await.unwrap().is_empty());
}

#[tokio::test]
async fn id_can_be_reused_after_delete() {
    let (_dir, config) = setup().await;
    members::create(&config, &member("alice", "Alice")).await.unwrap();
    members::delete(&config, "alice", "pw1").await.unwrap();

    assert_eq!(members::create(&config, &member("alice", "Alice II")).await.unwrap(), 1);
    let m = members::find_by_id(&config, "alice").await.unwrap().unwrap();
    assert_eq!(m.user_name, "Alice II");
}
