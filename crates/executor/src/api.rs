//! High-level typed interface over the [`Executor`].
//!
//! [`Mimic`] mirrors the HTTP client it stands in for: the four verb
//! methods take a path (bare or full URL) and return the raw JSON body.
//! On top of those sit typed conveniences for the common calls; each one
//! executes a command and extracts the single output variant that
//! command produces.

use std::path::Path;
use std::sync::Arc;

use mimic_core::{
    Account, Agent, ChatStatus, ChatSummary, ChatTranscript, Error, KnowledgeGroup,
    KnowledgeGroupSummary, LlmModel, Message, Result, TeamMember,
};
use mimic_storage::{DocumentStore, StoreConfig};
use serde_json::Value;

use crate::{Command, Executor, Output, Verb};

/// The embedded store behind a familiar request-shaped API.
pub struct Mimic {
    executor: Executor,
}

impl Mimic {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Open (or create and seed) a disk-backed store in `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_store(DocumentStore::open(dir)?))
    }

    /// Open a disk-backed store with explicit configuration, ignoring any
    /// `mimic.toml` in the directory.
    pub fn open_with(dir: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        Ok(Self::from_store(DocumentStore::open_with(dir, config)?))
    }

    /// An in-memory instance pre-seeded with the fixture dataset. Nothing
    /// touches disk; state is gone when the value drops.
    pub fn ephemeral() -> Self {
        Self::from_store(DocumentStore::ephemeral())
    }

    /// Wrap an already opened store.
    pub fn from_store(store: DocumentStore) -> Self {
        Self {
            executor: Executor::new(Arc::new(store)),
        }
    }

    /// The underlying executor, for raw [`Command`] access.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    // =========================================================================
    // Verb methods - raw JSON bodies
    // =========================================================================

    /// Execute a GET against a resource path.
    pub fn get(&self, path: &str) -> Result<Value> {
        self.executor.handle(Verb::Get, path, None)?.into_value()
    }

    /// Execute a POST with a JSON payload.
    pub fn post(&self, path: &str, payload: Value) -> Result<Value> {
        self.executor
            .handle(Verb::Post, path, Some(payload))?
            .into_value()
    }

    /// Execute a PATCH with a JSON payload.
    pub fn patch(&self, path: &str, payload: Value) -> Result<Value> {
        self.executor
            .handle(Verb::Patch, path, Some(payload))?
            .into_value()
    }

    /// Execute a DELETE against a resource path.
    pub fn delete(&self, path: &str) -> Result<Value> {
        self.executor.handle(Verb::Delete, path, None)?.into_value()
    }

    // =========================================================================
    // Typed conveniences
    // =========================================================================

    /// Read the account record.
    pub fn account(&self) -> Result<Account> {
        match self.executor.execute(Command::AccountGet)? {
            Output::Account(account) => Ok(account),
            _ => Err(unexpected("AccountGet")),
        }
    }

    /// Invite a team member from a partial payload.
    pub fn invite_member(&self, payload: Value) -> Result<TeamMember> {
        match self.executor.execute(Command::TeamInvite { payload })? {
            Output::Member(member) => Ok(member),
            _ => Err(unexpected("TeamInvite")),
        }
    }

    /// Shallow-merge fields over a team member.
    pub fn update_member(&self, member_id: &str, payload: Value) -> Result<TeamMember> {
        let command = Command::TeamUpdate {
            member_id: member_id.to_string(),
            payload,
        };
        match self.executor.execute(command)? {
            Output::Member(member) => Ok(member),
            _ => Err(unexpected("TeamUpdate")),
        }
    }

    /// List the agent roster.
    pub fn agents(&self) -> Result<Vec<Agent>> {
        match self.executor.execute(Command::AgentList)? {
            Output::Agents(agents) => Ok(agents),
            _ => Err(unexpected("AgentList")),
        }
    }

    /// Read a single agent.
    pub fn agent(&self, id: &str) -> Result<Agent> {
        let command = Command::AgentGet { id: id.to_string() };
        match self.executor.execute(command)? {
            Output::Agent(agent) => Ok(agent),
            _ => Err(unexpected("AgentGet")),
        }
    }

    /// Create an agent from a partial payload.
    pub fn create_agent(&self, payload: Value) -> Result<Agent> {
        match self.executor.execute(Command::AgentCreate { payload })? {
            Output::Agent(agent) => Ok(agent),
            _ => Err(unexpected("AgentCreate")),
        }
    }

    /// List chat summaries.
    pub fn chats(&self) -> Result<Vec<ChatSummary>> {
        match self.executor.execute(Command::ChatList)? {
            Output::ChatSummaries(chats) => Ok(chats),
            _ => Err(unexpected("ChatList")),
        }
    }

    /// Read a transcript joined with its summary's cached fields.
    pub fn chat(&self, id: &str) -> Result<ChatTranscript> {
        let command = Command::ChatGet { id: id.to_string() };
        match self.executor.execute(command)? {
            Output::Chat(chat) => Ok(chat),
            _ => Err(unexpected("ChatGet")),
        }
    }

    /// Append a message to a chat.
    pub fn append_message(&self, id: &str, payload: Value) -> Result<Message> {
        let command = Command::MessageAppend {
            id: id.to_string(),
            payload,
        };
        match self.executor.execute(command)? {
            Output::Message(message) => Ok(message),
            _ => Err(unexpected("MessageAppend")),
        }
    }

    /// Join a chat as an operator; returns the new status.
    pub fn interfere(&self, id: &str) -> Result<ChatStatus> {
        let command = Command::ChatInterfere { id: id.to_string() };
        match self.executor.execute(command)? {
            Output::ChatState { status } => Ok(status),
            _ => Err(unexpected("ChatInterfere")),
        }
    }

    /// Mark a chat resolved; returns the new status.
    pub fn resolve_chat(&self, id: &str) -> Result<ChatStatus> {
        let command = Command::ChatResolve { id: id.to_string() };
        match self.executor.execute(command)? {
            Output::ChatState { status } => Ok(status),
            _ => Err(unexpected("ChatResolve")),
        }
    }

    /// End a chat; returns the new status.
    pub fn end_chat(&self, id: &str) -> Result<ChatStatus> {
        let command = Command::ChatEnd { id: id.to_string() };
        match self.executor.execute(command)? {
            Output::ChatState { status } => Ok(status),
            _ => Err(unexpected("ChatEnd")),
        }
    }

    /// List knowledge groups with computed file counts.
    pub fn knowledge_groups(&self) -> Result<Vec<KnowledgeGroupSummary>> {
        match self.executor.execute(Command::GroupList)? {
            Output::Groups(groups) => Ok(groups),
            _ => Err(unexpected("GroupList")),
        }
    }

    /// Read a single knowledge group.
    pub fn knowledge_group(&self, id: &str) -> Result<KnowledgeGroup> {
        let command = Command::GroupGet { id: id.to_string() };
        match self.executor.execute(command)? {
            Output::Group(group) => Ok(group),
            _ => Err(unexpected("GroupGet")),
        }
    }

    /// List the model catalogue.
    pub fn models(&self) -> Result<Vec<LlmModel>> {
        match self.executor.execute(Command::ModelList)? {
            Output::Models(models) => Ok(models),
            _ => Err(unexpected("ModelList")),
        }
    }
}

/// A command produced an output variant outside its documented mapping.
/// Reaching this is a dispatch bug, not a caller mistake.
fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", command),
    }
}
