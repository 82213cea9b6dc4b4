//! The Executor - single entry point for command execution.
//!
//! The Executor is a stateless dispatcher: it resolves raw requests into
//! [`Command`]s, routes each command to its handler, and runs the handler
//! inside the right store cycle. Read commands run under
//! [`DocumentStore::read`]; everything else runs under
//! [`DocumentStore::update`], which persists only when the handler
//! returns `Ok`.
//!
//! The only piece of state beyond the store handle is the id generator,
//! shared across all creating commands so ids stay unique process-wide.

use std::sync::Arc;

use mimic_core::{IdGenerator, Result};
use mimic_storage::DocumentStore;
use serde_json::Value;
use tracing::debug;

use crate::{handlers, Command, Output, Verb};

/// Stateless command dispatcher over a shared [`DocumentStore`].
pub struct Executor {
    store: Arc<DocumentStore>,
    ids: IdGenerator,
}

impl Executor {
    /// Create an executor over the given store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            ids: IdGenerator::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Resolve and execute a raw request in one step.
    pub fn handle(&self, verb: Verb, path: &str, payload: Option<Value>) -> Result<Output> {
        debug!(%verb, path, "dispatching request");
        self.execute(Command::resolve(verb, path, payload)?)
    }

    /// Execute a single command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        match command {
            // Account
            Command::AccountGet => self.store.read(handlers::account::get),
            Command::AccountDelete => self.store.update(handlers::account::delete),
            Command::TeamInvite { payload } => self
                .store
                .update(|doc| handlers::account::invite(doc, &self.ids, payload)),
            Command::TeamUpdate { member_id, payload } => self
                .store
                .update(|doc| handlers::account::update_member(doc, &member_id, payload)),
            Command::TeamRemove { member_id } => self
                .store
                .update(|doc| handlers::account::remove_member(doc, &member_id)),

            // Agents
            Command::AgentList => self.store.read(handlers::agents::list),
            Command::AgentGet { id } => self.store.read(|doc| handlers::agents::get(doc, &id)),
            Command::AgentCreate { payload } => self
                .store
                .update(|doc| handlers::agents::create(doc, &self.ids, payload)),
            Command::AgentUpdate { id, payload } => self
                .store
                .update(|doc| handlers::agents::update(doc, &id, payload)),
            Command::AgentDelete { id } => {
                self.store.update(|doc| handlers::agents::delete(doc, &id))
            }

            // Chats
            Command::ChatList => self.store.read(handlers::chats::list),
            Command::ChatGet { id } => self.store.read(|doc| handlers::chats::get(doc, &id)),
            Command::MessageAppend { id, payload } => self
                .store
                .update(|doc| handlers::chats::append_message(doc, &id, payload)),
            Command::ChatInterfere { id } => self
                .store
                .update(|doc| handlers::chats::interfere(doc, &id)),
            Command::ChatResolve { id } => {
                self.store.update(|doc| handlers::chats::resolve(doc, &id))
            }
            Command::ChatEnd { id } => self.store.update(|doc| handlers::chats::end(doc, &id)),

            // Knowledge
            Command::GroupList => self.store.read(handlers::knowledge::list),
            Command::GroupGet { id } => self.store.read(|doc| handlers::knowledge::get(doc, &id)),
            Command::GroupCreate { payload } => self
                .store
                .update(|doc| handlers::knowledge::create(doc, &self.ids, payload)),
            Command::GroupDelete { id } => self
                .store
                .update(|doc| handlers::knowledge::delete(doc, &id)),
            Command::FileCreate { group_id, payload } => self.store.update(|doc| {
                handlers::knowledge::create_file(doc, &self.ids, &group_id, payload)
            }),
            Command::FileDelete { group_id, file_id } => self
                .store
                .update(|doc| handlers::knowledge::delete_file(doc, &group_id, &file_id)),

            // Models
            Command::ModelList => self.store.read(handlers::models::list),
        }
    }
}
