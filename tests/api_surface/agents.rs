//! Agent roster routes.

use serde_json::json;

use crate::db;

#[test]
fn test_list_agents_returns_seed_roster() {
    let db = db();
    let body = db.get("/api/agents").unwrap();
    let agents = body.as_array().unwrap();

    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0]["name"], json!("GuzziBot"));
    assert_eq!(agents[0]["model"], json!("GPT-4o"));
    assert_eq!(agents[0]["knowledgeIds"], json!([10]));
    assert_eq!(agents[0]["isPublished"], json!(true));
    assert_eq!(agents[1]["name"], json!("ClientSupport"));
}

#[test]
fn test_get_single_agent() {
    let db = db();
    let body = db.get("/api/agents/2").unwrap();
    assert_eq!(body["name"], json!("ClientSupport"));
    assert_eq!(body["model"], json!("Claude 3 Opus"));
}

#[test]
fn test_get_unknown_agent_is_not_found() {
    let db = db();
    let error = db.get("/api/agents/999").unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn test_create_agent_defaults_to_unpublished() {
    let db = db();
    let body = db
        .post("/api/agents", json!({"name": "Draft Bot", "model": "gpt-4o"}))
        .unwrap();

    assert_eq!(body["name"], json!("Draft Bot"));
    assert_eq!(body["isPublished"], json!(false));
    assert_eq!(body["channels"], json!([]));
    assert_eq!(body["knowledgeIds"], json!([]));
    assert!(body["id"].is_number());

    let roster = db.get("/api/agents").unwrap();
    assert_eq!(roster.as_array().unwrap().len(), 3);
}

#[test]
fn test_create_agent_payload_overrides_defaults() {
    let db = db();
    let body = db
        .post(
            "/api/agents",
            json!({"name": "Live Bot", "isPublished": true, "channels": ["web", "telegram"]}),
        )
        .unwrap();

    assert_eq!(body["isPublished"], json!(true));
    assert_eq!(body["channels"], json!(["web", "telegram"]));
}

#[test]
fn test_patch_agent_merges_shallow() {
    let db = db();
    let body = db
        .patch("/api/agents/1", json!({"personality": "Playful"}))
        .unwrap();

    assert_eq!(body["personality"], json!("Playful"));
    // Untouched fields survive.
    assert_eq!(body["name"], json!("GuzziBot"));
    assert_eq!(body["isPublished"], json!(true));
}

#[test]
fn test_patch_unknown_agent_is_not_found() {
    let db = db();
    let error = db
        .patch("/api/agents/999", json!({"name": "Ghost"}))
        .unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn test_delete_agent_is_strict() {
    let db = db();

    assert!(db.delete("/api/agents/2").unwrap().is_null());
    assert!(db.get("/api/agents/2").unwrap_err().is_not_found());

    // Unlike team members, deleting an absent agent is an error.
    assert!(db.delete("/api/agents/2").unwrap_err().is_not_found());

    let roster = db.get("/api/agents").unwrap();
    assert_eq!(roster.as_array().unwrap().len(), 1);
}
