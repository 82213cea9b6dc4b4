//! The document tree.
//!
//! One JSON document backs the whole interface: an account with its team,
//! the agent roster, chat summaries plus their transcripts, knowledge
//! groups with nested files, and the static model catalogue. Rust fields
//! are snake_case with serde renames so the persisted layout keeps its
//! original names (`clientName`, `chatDetails`, `knowledgeGroups`, ...).
//!
//! Chats are stored twice by design: `chats` holds the list-view summary
//! and `chatDetails` the transcript, keyed by the same id. The summary's
//! `lastMessage`/`time` fields cache the latest transcript entry and are
//! refreshed by every append.

use crate::id::ResourceId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Root
// =============================================================================

/// Root of the document tree. The store owns exactly one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    /// The account record and its team roster.
    #[serde(default)]
    pub account: Account,
    /// Agent roster, unique ids.
    #[serde(default)]
    pub agents: Vec<Agent>,
    /// Chat list-view records, unique ids.
    #[serde(default)]
    pub chats: Vec<ChatSummary>,
    /// Chat transcripts, keyed by the id shared with `chats`.
    #[serde(default, rename = "chatDetails")]
    pub chat_details: BTreeMap<String, ChatDetail>,
    /// Knowledge groups with their nested files.
    #[serde(default, rename = "knowledgeGroups")]
    pub knowledge_groups: Vec<KnowledgeGroup>,
    /// Static model catalogue; read-only reference data.
    #[serde(default)]
    pub llm_models: Vec<LlmModel>,
}

// =============================================================================
// Account
// =============================================================================

/// The single account record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Account {
    /// Account holder name.
    #[serde(default)]
    pub name: String,
    /// Account holder email.
    #[serde(default)]
    pub email: String,
    /// Subscription plan label.
    #[serde(default)]
    pub plan: String,
    /// Team roster; exactly one member holds the Owner role at genesis.
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

/// Team membership roles as persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    /// Account owner; the role itself is immutable via update.
    Owner,
    /// Regular operator seat.
    Operator,
    /// Read-only seat.
    #[serde(rename = "Read-only")]
    ReadOnly,
}

/// Invitation lifecycle of a team member.
///
/// Seed members predate the invitation flow and carry no status at all,
/// so the field is optional on [`TeamMember`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Invited but not yet active.
    Invited,
    /// Active seat.
    Active,
}

/// One row of the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member id.
    pub id: ResourceId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Membership role.
    pub role: TeamRole,
    /// Invitation status; absent on seed members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

// =============================================================================
// Agents
// =============================================================================

/// A configured support agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent id.
    pub id: ResourceId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Backing model id from the catalogue.
    #[serde(default)]
    pub model: String,
    /// Tone preset.
    #[serde(default)]
    pub personality: String,
    /// Ids of attached knowledge groups.
    #[serde(default, rename = "knowledgeIds")]
    pub knowledge_ids: Vec<ResourceId>,
    /// Whether the agent is live; creates default to false.
    #[serde(default, rename = "isPublished")]
    pub is_published: bool,
    /// Deployment channels.
    #[serde(default)]
    pub channels: Vec<String>,
}

// =============================================================================
// Chats
// =============================================================================

/// Workflow state of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    /// Needs operator attention.
    Attention,
    /// Operator is in the conversation.
    Live,
    /// Parked.
    Paused,
    /// No recent activity.
    Idle,
    /// Issue resolved.
    Resolved,
    /// Closed by an operator.
    Ended,
}

/// List-view record of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Chat id, shared with the transcript entry.
    pub id: ResourceId,
    /// Client display name.
    #[serde(default, rename = "clientName")]
    pub client_name: String,
    /// Cached text of the latest transcript message.
    #[serde(default, rename = "lastMessage")]
    pub last_message: String,
    /// Cached display time of the latest activity.
    #[serde(default)]
    pub time: String,
    /// Workflow status.
    pub status: ChatStatus,
    /// Channels the conversation runs on.
    #[serde(default)]
    pub channels: Vec<String>,
}

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The agent.
    Bot,
    /// The end customer.
    Client,
    /// A human operator.
    Operator,
    /// Workflow notices injected by the system.
    System,
}

/// One transcript entry. Seeded system notices may carry no time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message author.
    pub sender: Sender,
    /// Message body.
    #[serde(default)]
    pub text: String,
    /// Display time; omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Transcript record of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatDetail {
    /// Chat id, shared with the summary entry.
    pub id: ResourceId,
    /// Client display name.
    #[serde(default, rename = "clientName")]
    pub client_name: String,
    /// Channels the conversation runs on.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Ordered transcript.
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// A transcript joined with its summary's cached fields; the shape served
/// for a single-chat read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTranscript {
    /// The transcript record.
    #[serde(flatten)]
    pub detail: ChatDetail,
    /// Status taken from the summary.
    pub status: ChatStatus,
    /// Cached last message taken from the summary.
    #[serde(rename = "lastMessage")]
    pub last_message: String,
    /// Cached activity time taken from the summary.
    pub time: String,
}

// =============================================================================
// Knowledge
// =============================================================================

/// A knowledge source attached to a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeFile {
    /// File id.
    pub id: ResourceId,
    /// Source kind ("pdf", "url", "text", ...); persisted as `type`.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Size, sync note, or other short descriptor.
    #[serde(default)]
    pub details: String,
}

/// A group of knowledge sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGroup {
    /// Group id.
    pub id: ResourceId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Nested files; removed with the group.
    #[serde(default)]
    pub files: Vec<KnowledgeFile>,
}

/// Listing shape for knowledge groups: the group plus a computed file
/// count. The count is derived at read time and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeGroupSummary {
    /// The group itself.
    #[serde(flatten)]
    pub group: KnowledgeGroup,
    /// `files.len()` at the time of the listing.
    #[serde(rename = "fileCount")]
    pub file_count: usize,
}

// =============================================================================
// Models
// =============================================================================

/// Catalogue entry for a selectable model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmModel {
    /// Model id, a string slug like "gpt-4o".
    pub id: ResourceId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Marketing blurb.
    #[serde(default)]
    pub description: String,
    /// Badge labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// Lookups
// =============================================================================

impl Document {
    /// Find an agent by raw path segment.
    pub fn agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id.matches(id))
    }

    /// Find an agent by raw path segment, mutably.
    pub fn agent_mut(&mut self, id: &str) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id.matches(id))
    }

    /// Remove an agent; returns whether anything was removed.
    pub fn remove_agent(&mut self, id: &str) -> bool {
        let before = self.agents.len();
        self.agents.retain(|a| !a.id.matches(id));
        self.agents.len() != before
    }

    /// Find a team member by raw path segment.
    pub fn team_member(&self, id: &str) -> Option<&TeamMember> {
        self.account.team.iter().find(|m| m.id.matches(id))
    }

    /// Find a team member by raw path segment, mutably.
    pub fn team_member_mut(&mut self, id: &str) -> Option<&mut TeamMember> {
        self.account.team.iter_mut().find(|m| m.id.matches(id))
    }

    /// Remove a team member unconditionally; absent ids are a no-op.
    pub fn remove_team_member(&mut self, id: &str) {
        self.account.team.retain(|m| !m.id.matches(id));
    }

    /// Find a chat summary by raw path segment.
    pub fn chat_summary(&self, id: &str) -> Option<&ChatSummary> {
        self.chats.iter().find(|c| c.id.matches(id))
    }

    /// Find a chat summary by raw path segment, mutably.
    pub fn chat_summary_mut(&mut self, id: &str) -> Option<&mut ChatSummary> {
        self.chats.iter_mut().find(|c| c.id.matches(id))
    }

    /// Find a chat transcript by raw path segment.
    pub fn chat_detail(&self, id: &str) -> Option<&ChatDetail> {
        let key = self.detail_key(id)?;
        self.chat_details.get(&key)
    }

    /// Find a chat transcript by raw path segment, mutably.
    pub fn chat_detail_mut(&mut self, id: &str) -> Option<&mut ChatDetail> {
        let key = self.detail_key(id)?;
        self.chat_details.get_mut(&key)
    }

    // Transcript keys are stored as strings; fall back to the canonical
    // numeric form so "05" finds the entry keyed "5".
    fn detail_key(&self, id: &str) -> Option<String> {
        if self.chat_details.contains_key(id) {
            return Some(id.to_string());
        }
        let canonical = id.parse::<i64>().ok()?.to_string();
        if self.chat_details.contains_key(&canonical) {
            Some(canonical)
        } else {
            None
        }
    }

    /// Find a knowledge group by raw path segment.
    pub fn knowledge_group(&self, id: &str) -> Option<&KnowledgeGroup> {
        self.knowledge_groups.iter().find(|g| g.id.matches(id))
    }

    /// Find a knowledge group by raw path segment, mutably.
    pub fn knowledge_group_mut(&mut self, id: &str) -> Option<&mut KnowledgeGroup> {
        self.knowledge_groups.iter_mut().find(|g| g.id.matches(id))
    }

    /// Remove a knowledge group and its nested files; absent ids are a
    /// no-op.
    pub fn remove_knowledge_group(&mut self, id: &str) {
        self.knowledge_groups.retain(|g| !g.id.matches(id));
    }
}
