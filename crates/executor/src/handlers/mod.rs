//! Command handlers organized by resource.
//!
//! Each submodule owns one top-level collection of the document:
//!
//! | Module | Collection(s) | Commands |
//! |--------|---------------|----------|
//! | `account` | `account`, `account.team` | 5 |
//! | `agents` | `agents` | 5 |
//! | `chats` | `chats` + `chatDetails` | 6 |
//! | `knowledge` | `knowledgeGroups` | 6 |
//! | `models` | `llm_models` | 1 |
//!
//! Handlers are free functions over a borrowed [`Document`]. Read
//! handlers take `&Document`; mutation handlers take `&mut Document` and
//! rely on the store to persist only when they return `Ok`. A handler
//! that fails mid-mutation therefore never leaks a half-applied change.
//!
//! [`Document`]: mimic_core::Document

pub mod account;
pub mod agents;
pub mod chats;
pub mod knowledge;
pub mod models;
