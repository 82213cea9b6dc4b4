//! Core types for MimicDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Document: the single JSON tree backing every resource
//! - ResourceId / IdGenerator: untagged ids and strictly monotonic issue
//! - Error: the error taxonomy (NotFound plus the internal-failure family)
//! - json: assign-style shallow merging over typed values
//! - time: epoch millis and display-clock strings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod json;
pub mod model;
pub mod time;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use id::{IdGenerator, ResourceId};
pub use model::{
    Account, Agent, ChatDetail, ChatStatus, ChatSummary, ChatTranscript, Document, KnowledgeFile,
    KnowledgeGroup, KnowledgeGroupSummary, LlmModel, MemberStatus, Message, Sender, TeamMember,
    TeamRole,
};
