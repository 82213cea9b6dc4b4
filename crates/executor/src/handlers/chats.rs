//! Chat handlers.
//!
//! Chats live in two views: the `chats` summary list and the
//! `chatDetails` transcript map. Every mutation here touches both views
//! inside one store cycle so they cannot drift apart.

use mimic_core::time;
use mimic_core::{ChatStatus, ChatTranscript, Document, Error, Message, Result, Sender};
use serde::Deserialize;
use serde_json::Value;

use crate::Output;

/// Incoming payload for `MessageAppend`.
#[derive(Debug, Deserialize)]
struct MessageDraft {
    sender: Sender,
    #[serde(default)]
    text: String,
    #[serde(default)]
    time: Option<String>,
}

fn chat_not_found(id: &str) -> Error {
    Error::not_found(format!("chat {}", id))
}

/// Handle `ChatList`.
pub fn list(doc: &Document) -> Result<Output> {
    Ok(Output::ChatSummaries(doc.chats.clone()))
}

/// Handle `ChatGet`: the stored transcript joined with the summary's
/// cached `status`, `lastMessage` and `time`.
pub fn get(doc: &Document, id: &str) -> Result<Output> {
    let summary = doc.chat_summary(id).ok_or_else(|| chat_not_found(id))?;
    let detail = doc.chat_detail(id).ok_or_else(|| chat_not_found(id))?;
    Ok(Output::Chat(ChatTranscript {
        detail: detail.clone(),
        status: summary.status,
        last_message: summary.last_message.clone(),
        time: summary.time.clone(),
    }))
}

/// Handle `MessageAppend`.
///
/// The message lands in the transcript with a wall-clock `time` when the
/// payload gives none. The summary cache is refreshed alongside:
/// `lastMessage` takes the new text and `time` becomes the literal
/// `"now"`.
pub fn append_message(doc: &mut Document, id: &str, payload: Value) -> Result<Output> {
    let draft: MessageDraft = serde_json::from_value(payload)?;
    let message = Message {
        sender: draft.sender,
        text: draft.text,
        time: Some(draft.time.unwrap_or_else(time::local_time_string)),
    };

    let detail = doc.chat_detail_mut(id).ok_or_else(|| chat_not_found(id))?;
    detail.messages.push(message.clone());

    // A failed cycle is never persisted, so a chat with a transcript but
    // no summary row still reads as untouched after the NotFound below.
    let summary = doc.chat_summary_mut(id).ok_or_else(|| chat_not_found(id))?;
    summary.last_message = message.text.clone();
    summary.time = "now".to_string();

    Ok(Output::Message(message))
}

/// Handle `ChatInterfere`: an operator joins and the chat goes live.
pub fn interfere(doc: &mut Document, id: &str) -> Result<Output> {
    transition(doc, id, "Operator joined the conversation.", ChatStatus::Live)
}

/// Handle `ChatResolve`.
pub fn resolve(doc: &mut Document, id: &str) -> Result<Output> {
    transition(doc, id, "The issue has been resolved.", ChatStatus::Resolved)
}

/// Handle `ChatEnd`.
pub fn end(doc: &mut Document, id: &str) -> Result<Output> {
    transition(doc, id, "Chat ended by operator.", ChatStatus::Ended)
}

/// Shared shape of the three workflow actions: a system notice lands in
/// the transcript and the summary moves to `status`. The summary's
/// `lastMessage` cache is deliberately left alone; only real messages
/// refresh it.
fn transition(doc: &mut Document, id: &str, notice: &str, status: ChatStatus) -> Result<Output> {
    let message = Message {
        sender: Sender::System,
        text: notice.to_string(),
        time: Some(time::local_time_string()),
    };

    let detail = doc.chat_detail_mut(id).ok_or_else(|| chat_not_found(id))?;
    detail.messages.push(message);

    let summary = doc.chat_summary_mut(id).ok_or_else(|| chat_not_found(id))?;
    summary.status = status;

    Ok(Output::ChatState { status })
}
