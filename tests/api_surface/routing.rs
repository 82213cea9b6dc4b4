//! Path normalization and unknown-route behavior across the surface.

use mimicdb::Error;
use serde_json::json;

use crate::db;

#[test]
fn test_full_urls_are_accepted() {
    let db = db();
    let body = db.get("http://localhost:3000/api/chats").unwrap();
    assert_eq!(body.as_array().unwrap().len(), 20);
}

#[test]
fn test_api_prefix_is_optional() {
    let db = db();
    let with = db.get("/api/agents").unwrap();
    let without = db.get("/agents").unwrap();
    let bare = db.get("agents").unwrap();
    assert_eq!(with, without);
    assert_eq!(with, bare);
}

#[test]
fn test_query_and_fragment_are_ignored() {
    let db = db();
    let body = db.get("/api/chats/3?expand=messages#top").unwrap();
    assert_eq!(body["clientName"], json!("Grace Hopper"));
}

#[test]
fn test_unknown_collection_is_not_found() {
    let db = db();
    let error = db.get("/api/unknown_things").unwrap_err();
    match error {
        Error::NotFound { target } => assert_eq!(target, "GET /unknown_things"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_supported_path_with_wrong_verb_is_not_found() {
    let db = db();
    // The chat row exists but nothing answers DELETE there.
    assert!(db.delete("/api/chats/3").unwrap_err().is_not_found());
    assert!(db
        .patch("/api/account", json!({"name": "x"}))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_deletes_return_null_bodies() {
    let db = db();
    assert!(db.delete("/api/account/team/2").unwrap().is_null());
    assert!(db.delete("/api/knowledge_groups/30").unwrap().is_null());
    assert!(db.delete("/api/agents/1").unwrap().is_null());
}

#[test]
fn test_post_without_required_fields_still_routes() {
    let db = db();
    // An empty payload is a valid request; defaults fill the gaps.
    let body = db.post("/api/agents", json!({})).unwrap();
    assert_eq!(body["isPublished"], json!(false));
    assert_eq!(body["name"], json!(""));
}

#[test]
fn test_type_breaking_payload_is_a_serialization_error() {
    let db = db();
    let error = db
        .patch("/api/agents/1", json!({"channels": "not-a-list"}))
        .unwrap_err();
    assert!(matches!(error, Error::Serialization { .. }));
}
