//! Model catalogue routes.

use serde_json::json;

use crate::db;

#[test]
fn test_list_models_returns_catalogue() {
    let db = db();
    let body = db.get("/api/llm_models").unwrap();
    let models = body.as_array().unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["id"], json!("gpt-4o"));
    assert_eq!(models[0]["name"], json!("GPT-4o"));
    assert_eq!(models[0]["tags"], json!(["Top Choice"]));
    assert_eq!(models[1]["id"], json!("claude-3-opus"));
    assert_eq!(models[1]["tags"], json!([]));
}

#[test]
fn test_catalogue_has_no_item_route() {
    let db = db();
    assert!(db.get("/api/llm_models/gpt-4o").unwrap_err().is_not_found());
}

#[test]
fn test_catalogue_rejects_writes() {
    let db = db();
    assert!(db
        .post("/api/llm_models", json!({"id": "new-model"}))
        .unwrap_err()
        .is_not_found());
    assert!(db.delete("/api/llm_models").unwrap_err().is_not_found());
}
