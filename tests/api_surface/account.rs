//! Account and team routes.

use serde_json::json;

use crate::db;

#[test]
fn test_get_account_returns_seed_record() {
    let db = db();
    let body = db.get("/api/account").unwrap();

    assert_eq!(body["name"], json!("Tema"));
    assert_eq!(body["email"], json!("tema@wsl.ru"));
    assert_eq!(body["plan"], json!("Pro Plan"));

    let team = body["team"].as_array().unwrap();
    assert_eq!(team.len(), 3);
    assert_eq!(team[0]["role"], json!("Owner"));
    assert_eq!(team[2]["role"], json!("Read-only"));
    // Seed members predate the invitation flow: no status key at all.
    assert!(team[0].get("status").is_none());
}

#[test]
fn test_invite_member_applies_defaults() {
    let db = db();
    let body = db
        .post("/api/account/team", json!({"name": "Kim", "email": "kim@example.com"}))
        .unwrap();

    assert_eq!(body["name"], json!("Kim"));
    assert_eq!(body["role"], json!("Operator"));
    assert_eq!(body["status"], json!("invited"));
    assert!(body["id"].is_number());

    let account = db.get("/api/account").unwrap();
    assert_eq!(account["team"].as_array().unwrap().len(), 4);
}

#[test]
fn test_invite_member_payload_overrides() {
    let db = db();
    let body = db
        .post(
            "/api/account/team",
            json!({"name": "Ro", "role": "Read-only", "status": "active"}),
        )
        .unwrap();

    assert_eq!(body["role"], json!("Read-only"));
    assert_eq!(body["status"], json!("active"));
}

#[test]
fn test_owner_role_is_immutable() {
    let db = db();
    let body = db
        .patch(
            "/api/account/team/1",
            json!({"role": "Operator", "name": "Renamed Owner"}),
        )
        .unwrap();

    // The role patch is dropped; the rest of the patch still applies.
    assert_eq!(body["role"], json!("Owner"));
    assert_eq!(body["name"], json!("Renamed Owner"));

    let account = db.get("/api/account").unwrap();
    assert_eq!(account["team"][0]["role"], json!("Owner"));
    assert_eq!(account["team"][0]["name"], json!("Renamed Owner"));
}

#[test]
fn test_non_owner_role_can_change() {
    let db = db();
    let body = db
        .patch("/api/account/team/2", json!({"role": "Read-only"}))
        .unwrap();
    assert_eq!(body["role"], json!("Read-only"));
}

#[test]
fn test_patch_unknown_member_is_not_found() {
    let db = db();
    let error = db
        .patch("/api/account/team/99", json!({"name": "Ghost"}))
        .unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn test_remove_member_shrinks_roster_and_is_idempotent() {
    let db = db();

    let body = db.delete("/api/account/team/3").unwrap();
    assert!(body.is_null());
    let account = db.get("/api/account").unwrap();
    assert_eq!(account["team"].as_array().unwrap().len(), 2);

    // Repeating the delete still succeeds as a no-op.
    assert!(db.delete("/api/account/team/3").unwrap().is_null());
    let account = db.get("/api/account").unwrap();
    assert_eq!(account["team"].as_array().unwrap().len(), 2);
}

#[test]
fn test_delete_account_leaves_empty_shell() {
    let db = db();
    assert!(db.delete("/api/account").unwrap().is_null());

    let body = db.get("/api/account").unwrap();
    assert_eq!(body["name"], json!(""));
    assert_eq!(body["email"], json!(""));
    assert_eq!(body["plan"], json!(""));
    assert_eq!(body["team"], json!([]));
}
