//! Knowledge group and nested file routes.

use serde_json::json;

use crate::db;

#[test]
fn test_list_groups_carries_file_counts() {
    let db = db();
    let body = db.get("/api/knowledge_groups").unwrap();
    let groups = body.as_array().unwrap();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["name"], json!("Product Manuals"));
    assert_eq!(groups[0]["fileCount"], json!(2));
    assert_eq!(groups[1]["fileCount"], json!(1));
    assert_eq!(groups[2]["name"], json!("Sales Scripts"));
    assert_eq!(groups[2]["fileCount"], json!(0));
}

#[test]
fn test_get_group_is_the_plain_record() {
    let db = db();
    let body = db.get("/api/knowledge_groups/10").unwrap();

    assert_eq!(body["name"], json!("Product Manuals"));
    assert_eq!(body["files"].as_array().unwrap().len(), 2);
    assert_eq!(body["files"][0]["type"], json!("pdf"));
    assert_eq!(body["files"][0]["name"], json!("Pricing_FAQ.pdf"));
    // The computed count only exists on the list view.
    assert!(body.get("fileCount").is_none());
}

#[test]
fn test_get_unknown_group_is_not_found() {
    let db = db();
    assert!(db.get("/api/knowledge_groups/999").unwrap_err().is_not_found());
}

#[test]
fn test_create_group_defaults_to_empty_files() {
    let db = db();
    let body = db
        .post(
            "/api/knowledge_groups",
            json!({"name": "Onboarding", "description": "New client flows."}),
        )
        .unwrap();

    assert_eq!(body["name"], json!("Onboarding"));
    assert_eq!(body["files"], json!([]));
    assert!(body["id"].is_number());

    let list = db.get("/api/knowledge_groups").unwrap();
    assert_eq!(list.as_array().unwrap().len(), 4);
}

#[test]
fn test_add_file_to_group() {
    let db = db();
    let body = db
        .post(
            "/api/knowledge_groups/30/files",
            json!({"type": "text", "name": "Objection handling", "details": "0.8 KB"}),
        )
        .unwrap();

    assert_eq!(body["type"], json!("text"));
    assert_eq!(body["name"], json!("Objection handling"));
    assert!(body["id"].is_number());

    let group = db.get("/api/knowledge_groups/30").unwrap();
    assert_eq!(group["files"].as_array().unwrap().len(), 1);

    let list = db.get("/api/knowledge_groups").unwrap();
    let row = list
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["id"] == json!(30))
        .unwrap()
        .clone();
    assert_eq!(row["fileCount"], json!(1));
}

#[test]
fn test_add_file_to_unknown_group_is_not_found() {
    let db = db();
    let error = db
        .post(
            "/api/knowledge_groups/999/files",
            json!({"type": "pdf", "name": "x.pdf", "details": "1 KB"}),
        )
        .unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn test_delete_file_empties_group() {
    let db = db();
    assert!(db
        .delete("/api/knowledge_groups/20/files/201")
        .unwrap()
        .is_null());

    let group = db.get("/api/knowledge_groups/20").unwrap();
    assert_eq!(group["files"], json!([]));

    let list = db.get("/api/knowledge_groups").unwrap();
    let row = list
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["id"] == json!(20))
        .unwrap()
        .clone();
    assert_eq!(row["fileCount"], json!(0));
}

#[test]
fn test_delete_missing_file_is_silent() {
    let db = db();
    assert!(db
        .delete("/api/knowledge_groups/20/files/9999")
        .unwrap()
        .is_null());
    let group = db.get("/api/knowledge_groups/20").unwrap();
    assert_eq!(group["files"].as_array().unwrap().len(), 1);
}

#[test]
fn test_delete_file_in_unknown_group_is_not_found() {
    let db = db();
    assert!(db
        .delete("/api/knowledge_groups/999/files/201")
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_delete_group_takes_files_with_it() {
    let db = db();
    assert!(db.delete("/api/knowledge_groups/10").unwrap().is_null());
    assert!(db.get("/api/knowledge_groups/10").unwrap_err().is_not_found());

    let list = db.get("/api/knowledge_groups").unwrap();
    assert_eq!(list.as_array().unwrap().len(), 2);

    // The group id is dead: file routes under it now miss too.
    assert!(db
        .post(
            "/api/knowledge_groups/10/files",
            json!({"type": "pdf", "name": "late.pdf", "details": "1 KB"}),
        )
        .unwrap_err()
        .is_not_found());
    assert!(db
        .delete("/api/knowledge_groups/10/files/101")
        .unwrap_err()
        .is_not_found());

    // Deleting an unknown group is a quiet no-op.
    assert!(db.delete("/api/knowledge_groups/10").unwrap().is_null());
}
