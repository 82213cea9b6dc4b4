//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant; the mapping is
//! listed on each [`Command`](crate::Command) variant's doc. `Output`
//! serializes untagged, so its JSON form is the response body itself
//! with no wrapper object around it.

use mimic_core::{
    Account, Agent, ChatStatus, ChatSummary, ChatTranscript, KnowledgeFile, KnowledgeGroup,
    KnowledgeGroupSummary, LlmModel, Message, Result, TeamMember,
};
use serde::Serialize;
use serde_json::Value;

/// The result of executing a single command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// No return value (deletes and wipes). Serializes as `null`.
    Empty,

    // ==================== Account ====================
    /// The account record.
    Account(Account),
    /// A created or updated team member.
    Member(TeamMember),

    // ==================== Agents ====================
    /// The agent roster.
    Agents(Vec<Agent>),
    /// A single agent.
    Agent(Agent),

    // ==================== Chats ====================
    /// Chat list-view records.
    ChatSummaries(Vec<ChatSummary>),
    /// A transcript joined with its summary's cached fields.
    Chat(ChatTranscript),
    /// A message as stored in the transcript.
    Message(Message),
    /// Acknowledgement for a chat workflow action.
    ChatState {
        /// The status the chat was moved to.
        status: ChatStatus,
    },

    // ==================== Knowledge ====================
    /// Knowledge groups with computed file counts.
    Groups(Vec<KnowledgeGroupSummary>),
    /// A single knowledge group.
    Group(KnowledgeGroup),
    /// A file as stored in its group.
    File(KnowledgeFile),

    // ==================== Models ====================
    /// The model catalogue.
    Models(Vec<LlmModel>),
}

impl Output {
    /// The JSON response body for this output.
    pub fn into_value(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
