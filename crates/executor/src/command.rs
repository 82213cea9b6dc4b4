//! Command enum defining every operation the store accepts.
//!
//! Commands are the instruction set of the store. Each supported
//! (verb, path shape) pair maps to exactly one variant; resolution of
//! anything else fails with `NotFound`, which keeps the route table
//! closed with no generic fallback.
//!
//! Commands are:
//! - **Self-contained**: all parameters needed for execution live in the variant
//! - **Serializable**: they round-trip through JSON for logging and replay
//! - **Path-derived**: [`Command::resolve`] is the only way requests become commands

use std::fmt;
use std::str::FromStr;

use mimic_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::split_segments;

/// Request verbs understood by the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// Read a resource or collection.
    Get,
    /// Create a resource or trigger a workflow action.
    Post,
    /// Shallow-merge fields over an existing resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PATCH" => Ok(Verb::Patch),
            "DELETE" => Ok(Verb::Delete),
            other => Err(Error::internal(format!("unknown verb '{}'", other))),
        }
    }
}

/// A fully resolved store operation.
///
/// Ids are carried as raw path segments (strings); handlers compare them
/// loosely against numeric and string ids alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Account ====================
    /// Read the account record, team included.
    /// Returns: `Output::Account`
    AccountGet,
    /// Reset the account to an empty shell. The record itself survives.
    /// Returns: `Output::Empty`
    AccountDelete,
    /// Add a team member from a partial payload.
    /// Returns: `Output::Member`
    TeamInvite {
        /// Member fields; missing ones take invite defaults.
        payload: Value,
    },
    /// Shallow-merge fields over an existing team member.
    /// Returns: `Output::Member`
    TeamUpdate {
        /// Path segment identifying the member.
        member_id: String,
        /// Fields to merge.
        payload: Value,
    },
    /// Remove a team member. Unknown ids are a no-op.
    /// Returns: `Output::Empty`
    TeamRemove {
        /// Path segment identifying the member.
        member_id: String,
    },

    // ==================== Agents ====================
    /// List the agent roster.
    /// Returns: `Output::Agents`
    AgentList,
    /// Read a single agent.
    /// Returns: `Output::Agent`
    AgentGet {
        /// Path segment identifying the agent.
        id: String,
    },
    /// Create an agent from a partial payload.
    /// Returns: `Output::Agent`
    AgentCreate {
        /// Agent fields; missing ones take creation defaults.
        payload: Value,
    },
    /// Shallow-merge fields over an existing agent.
    /// Returns: `Output::Agent`
    AgentUpdate {
        /// Path segment identifying the agent.
        id: String,
        /// Fields to merge.
        payload: Value,
    },
    /// Delete an agent. Unknown ids fail with `NotFound`.
    /// Returns: `Output::Empty`
    AgentDelete {
        /// Path segment identifying the agent.
        id: String,
    },

    // ==================== Chats ====================
    /// List chat summaries.
    /// Returns: `Output::ChatSummaries`
    ChatList,
    /// Read a transcript joined with its summary's cached fields.
    /// Returns: `Output::Chat`
    ChatGet {
        /// Path segment identifying the chat.
        id: String,
    },
    /// Append a message to a transcript and refresh the summary cache.
    /// Returns: `Output::Message`
    MessageAppend {
        /// Path segment identifying the chat.
        id: String,
        /// Message fields (`sender`, `text`, optional `time`).
        payload: Value,
    },
    /// Operator joins the conversation; the chat goes live.
    /// Returns: `Output::ChatState`
    ChatInterfere {
        /// Path segment identifying the chat.
        id: String,
    },
    /// Mark the conversation resolved.
    /// Returns: `Output::ChatState`
    ChatResolve {
        /// Path segment identifying the chat.
        id: String,
    },
    /// End the conversation.
    /// Returns: `Output::ChatState`
    ChatEnd {
        /// Path segment identifying the chat.
        id: String,
    },

    // ==================== Knowledge ====================
    /// List knowledge groups with computed file counts.
    /// Returns: `Output::Groups`
    GroupList,
    /// Read a single knowledge group.
    /// Returns: `Output::Group`
    GroupGet {
        /// Path segment identifying the group.
        id: String,
    },
    /// Create a knowledge group from a partial payload.
    /// Returns: `Output::Group`
    GroupCreate {
        /// Group fields; missing ones take creation defaults.
        payload: Value,
    },
    /// Delete a group and every file in it. Unknown ids are a no-op.
    /// Returns: `Output::Empty`
    GroupDelete {
        /// Path segment identifying the group.
        id: String,
    },
    /// Add a file to a knowledge group.
    /// Returns: `Output::File`
    FileCreate {
        /// Path segment identifying the owning group.
        group_id: String,
        /// File fields (`type`, `name`, `details`).
        payload: Value,
    },
    /// Remove a file from a knowledge group. A missing file is a no-op;
    /// a missing group fails with `NotFound`.
    /// Returns: `Output::Empty`
    FileDelete {
        /// Path segment identifying the owning group.
        group_id: String,
        /// Path segment identifying the file.
        file_id: String,
    },

    // ==================== Models ====================
    /// List the model catalogue.
    /// Returns: `Output::Models`
    ModelList,
}

impl Command {
    /// Resolve a verb and raw path into a command.
    ///
    /// The path may be a bare resource path or a full URL; see
    /// [`split_segments`] for normalization. A missing payload on routes
    /// that take one behaves as an empty object, so partial-payload
    /// defaults still apply.
    ///
    /// Any (verb, segments) pair outside the table resolves to
    /// `Error::NotFound` carrying the request shape as its target.
    pub fn resolve(verb: Verb, path: &str, payload: Option<Value>) -> Result<Command> {
        let segments = split_segments(path);
        let payload = payload.unwrap_or_else(|| Value::Object(Default::default()));

        let command = match (verb, segments.as_slice()) {
            // Account
            (Verb::Get, ["account"]) => Command::AccountGet,
            (Verb::Delete, ["account"]) => Command::AccountDelete,
            (Verb::Post, ["account", "team"]) => Command::TeamInvite { payload },
            (Verb::Patch, ["account", "team", member]) => Command::TeamUpdate {
                member_id: member.to_string(),
                payload,
            },
            (Verb::Delete, ["account", "team", member]) => Command::TeamRemove {
                member_id: member.to_string(),
            },

            // Agents
            (Verb::Get, ["agents"]) => Command::AgentList,
            (Verb::Get, ["agents", id]) => Command::AgentGet { id: id.to_string() },
            (Verb::Post, ["agents"]) => Command::AgentCreate { payload },
            (Verb::Patch, ["agents", id]) => Command::AgentUpdate {
                id: id.to_string(),
                payload,
            },
            (Verb::Delete, ["agents", id]) => Command::AgentDelete { id: id.to_string() },

            // Chats
            (Verb::Get, ["chats"]) => Command::ChatList,
            (Verb::Get, ["chats", id]) => Command::ChatGet { id: id.to_string() },
            (Verb::Post, ["chats", id, "messages"]) => Command::MessageAppend {
                id: id.to_string(),
                payload,
            },
            (Verb::Post, ["chats", id, "interfere"]) => {
                Command::ChatInterfere { id: id.to_string() }
            }
            (Verb::Post, ["chats", id, "resolve"]) => Command::ChatResolve { id: id.to_string() },
            (Verb::Post, ["chats", id, "end"]) => Command::ChatEnd { id: id.to_string() },

            // Knowledge
            (Verb::Get, ["knowledge_groups"]) => Command::GroupList,
            (Verb::Get, ["knowledge_groups", id]) => Command::GroupGet { id: id.to_string() },
            (Verb::Post, ["knowledge_groups"]) => Command::GroupCreate { payload },
            (Verb::Delete, ["knowledge_groups", id]) => {
                Command::GroupDelete { id: id.to_string() }
            }
            (Verb::Post, ["knowledge_groups", group, "files"]) => Command::FileCreate {
                group_id: group.to_string(),
                payload,
            },
            (Verb::Delete, ["knowledge_groups", group, "files", file]) => Command::FileDelete {
                group_id: group.to_string(),
                file_id: file.to_string(),
            },

            // Models
            (Verb::Get, ["llm_models"]) => Command::ModelList,

            _ => {
                return Err(Error::not_found(format!(
                    "{} /{}",
                    verb,
                    segments.join("/")
                )))
            }
        };

        Ok(command)
    }
}
