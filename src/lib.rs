//! MimicDB - embedded JSON document store with REST-verb semantics
//!
//! MimicDB keeps a small multi-resource API's entire state in one JSON
//! document tree and answers GET/POST/PATCH/DELETE requests against it,
//! standing in for the HTTP backend it mimics.
//!
//! # Quick Start
//!
//! ```ignore
//! use mimicdb::Mimic;
//! use serde_json::json;
//!
//! // Create an in-memory store, pre-seeded with fixture data
//! let db = Mimic::ephemeral();
//!
//! // Read a collection
//! let chats = db.get("/api/chats")?;
//!
//! // Mutate through the same paths the real API used
//! db.post("/api/chats/3/messages", json!({"sender": "operator", "text": "On it."}))?;
//! let agent = db.create_agent(json!({"name": "Draft Bot", "model": "gpt-4o"}))?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which resolves paths into
//! [`Command`]s and runs them as whole-document cycles against the store.
//! The [`Mimic`] struct provides the convenient high-level interface.
//!
//! Internal implementation details (document model, persistence) are
//! reachable through the re-exports; most callers only need [`Mimic`].

// Re-export the public API from mimic-executor
pub use mimic_executor::*;
