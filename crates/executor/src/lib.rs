//! # Mimic Executor
//!
//! The public API for MimicDB - an embedded JSON document store that
//! answers REST-shaped requests against a single document tree.
//!
//! This is the only crate users need to import. It provides:
//! - [`Mimic`] - the store behind axios-style verb methods and typed reads
//! - [`Command`]/[`Output`] - the low-level command interface
//! - [`Executor`] - the stateless dispatcher tying commands to the store
//!
//! ## Quick Start
//!
//! ```text
//! use mimic_executor::Mimic;
//! use serde_json::json;
//!
//! // Open a store (seeds itself on first open)
//! let db = Mimic::open("/path/to/data")?;
//!
//! // Issue requests; full URLs and bare paths both work
//! let chats = db.get("/api/chats")?;
//! db.post("/api/chats/3/messages", json!({"sender": "operator", "text": "Hi"}))?;
//! db.delete("/api/agents/2")?;
//! ```
//!
//! ## Resources
//!
//! | Path | Operations |
//! |------|------------|
//! | `account`, `account/team` | read, wipe, invite, update, remove |
//! | `agents` | list, read, create, update, delete |
//! | `chats`, `chats/{id}/...` | list, joined read, append, interfere/resolve/end |
//! | `knowledge_groups`, nested `files` | list, read, create, delete |
//! | `llm_models` | list |
//!
//! Requests outside this table fail with `Error::NotFound`. All mutations
//! run as whole-document cycles, so a failed request never persists a
//! partial change.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod executor;
mod output;
mod path;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Mimic;
pub use command::{Command, Verb};
pub use executor::Executor;
pub use output::Output;
pub use path::split_segments;

// Re-export the core model and error types so users don't need mimic-core
pub use mimic_core::{
    Account, Agent, ChatDetail, ChatStatus, ChatSummary, ChatTranscript, Document, Error,
    KnowledgeFile, KnowledgeGroup, KnowledgeGroupSummary, LlmModel, MemberStatus, Message,
    ResourceId, Result, Sender, TeamMember, TeamRole,
};

// Re-export store handles so embedders can tune persistence directly
pub use mimic_storage::{DocumentStore, Durability, StoreConfig};
