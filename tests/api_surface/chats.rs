//! Chat routes: the dual-view list/transcript model and the operator
//! workflow actions.

use serde_json::json;

use crate::db;

#[test]
fn test_list_chats_returns_all_summaries() {
    let db = db();
    let body = db.get("/api/chats").unwrap();
    let chats = body.as_array().unwrap();

    assert_eq!(chats.len(), 20);
    assert_eq!(chats[0]["clientName"], json!("Alice Johnson"));
    assert_eq!(chats[0]["status"], json!("attention"));
    assert_eq!(chats[0]["time"], json!("2m ago"));
    // Summaries carry no transcript.
    assert!(chats[0].get("messages").is_none());
}

#[test]
fn test_get_chat_joins_transcript_and_summary() {
    let db = db();
    let body = db.get("/api/chats/3").unwrap();

    assert_eq!(body["clientName"], json!("Grace Hopper"));
    assert!(body["messages"].is_array());
    // Joined from the summary row.
    assert_eq!(body["status"], json!("attention"));
    assert_eq!(
        body["lastMessage"],
        json!("This is unacceptable, I want a refund now.")
    );
    assert_eq!(body["time"], json!("10m ago"));
}

#[test]
fn test_chat_ids_match_loosely() {
    let db = db();
    // "05" addresses the same chat as "5", like the numeric coercion in
    // the API this store mimics.
    let body = db.get("/api/chats/05").unwrap();
    assert_eq!(body["id"], json!(5));
}

#[test]
fn test_get_unknown_chat_is_not_found() {
    let db = db();
    assert!(db.get("/api/chats/404").unwrap_err().is_not_found());
}

#[test]
fn test_append_message_updates_both_views() {
    let db = db();
    let before = db.get("/api/chats/3").unwrap();
    let count = before["messages"].as_array().unwrap().len();

    let message = db
        .post(
            "/api/chats/3/messages",
            json!({"sender": "operator", "text": "Refund issued."}),
        )
        .unwrap();
    assert_eq!(message["sender"], json!("operator"));
    assert_eq!(message["text"], json!("Refund issued."));
    // No time given, so the store stamped the wall clock.
    assert!(message["time"].is_string());

    let after = db.get("/api/chats/3").unwrap();
    let messages = after["messages"].as_array().unwrap();
    assert_eq!(messages.len(), count + 1);
    assert_eq!(messages.last().unwrap()["text"], json!("Refund issued."));
    // The summary cache moved with it.
    assert_eq!(after["lastMessage"], json!("Refund issued."));
    assert_eq!(after["time"], json!("now"));

    let list = db.get("/api/chats").unwrap();
    let row = list
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == json!(3))
        .unwrap()
        .clone();
    assert_eq!(row["lastMessage"], json!("Refund issued."));
    assert_eq!(row["time"], json!("now"));
}

#[test]
fn test_append_message_keeps_explicit_time() {
    let db = db();
    let message = db
        .post(
            "/api/chats/7/messages",
            json!({"sender": "client", "text": "ping", "time": "11:30:00 AM"}),
        )
        .unwrap();
    assert_eq!(message["time"], json!("11:30:00 AM"));
}

#[test]
fn test_append_to_unknown_chat_is_not_found() {
    let db = db();
    let error = db
        .post("/api/chats/404/messages", json!({"sender": "client", "text": "hi"}))
        .unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn test_interfere_goes_live_with_system_notice() {
    let db = db();
    let before = db.get("/api/chats/3").unwrap();

    let body = db.post("/api/chats/3/interfere", json!({})).unwrap();
    assert_eq!(body, json!({"status": "live"}));

    let after = db.get("/api/chats/3").unwrap();
    assert_eq!(after["status"], json!("live"));

    let messages = after["messages"].as_array().unwrap();
    let last = messages.last().unwrap();
    assert_eq!(last["sender"], json!("system"));
    assert_eq!(last["text"], json!("Operator joined the conversation."));

    // Workflow actions do not touch the cached last message.
    assert_eq!(after["lastMessage"], before["lastMessage"]);
}

#[test]
fn test_resolve_marks_resolved() {
    let db = db();
    let body = db.post("/api/chats/9/resolve", json!({})).unwrap();
    assert_eq!(body, json!({"status": "resolved"}));

    let after = db.get("/api/chats/9").unwrap();
    assert_eq!(after["status"], json!("resolved"));
    let last = after["messages"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["text"], json!("The issue has been resolved."));
}

#[test]
fn test_end_marks_ended() {
    let db = db();
    let body = db.post("/api/chats/13/end", json!({})).unwrap();
    assert_eq!(body, json!({"status": "ended"}));

    let after = db.get("/api/chats/13").unwrap();
    assert_eq!(after["status"], json!("ended"));
    let last = after["messages"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["text"], json!("Chat ended by operator."));
    assert_eq!(last["sender"], json!("system"));
}

#[test]
fn test_workflow_action_on_unknown_chat_is_not_found() {
    let db = db();
    assert!(db
        .post("/api/chats/404/interfere", json!({}))
        .unwrap_err()
        .is_not_found());
    assert!(db
        .post("/api/chats/404/end", json!({}))
        .unwrap_err()
        .is_not_found());
}
