//! Agent handlers.

use mimic_core::json;
use mimic_core::{Agent, Document, Error, IdGenerator, Result};
use serde_json::Value;

use crate::Output;

fn agent_not_found(id: &str) -> Error {
    Error::not_found(format!("agent {}", id))
}

/// Handle `AgentList`.
pub fn list(doc: &Document) -> Result<Output> {
    Ok(Output::Agents(doc.agents.clone()))
}

/// Handle `AgentGet`.
pub fn get(doc: &Document, id: &str) -> Result<Output> {
    doc.agent(id)
        .cloned()
        .map(Output::Agent)
        .ok_or_else(|| agent_not_found(id))
}

/// Handle `AgentCreate`.
///
/// Creation defaults (fresh id, unpublished, empty channel and knowledge
/// lists) sit under the payload, so the payload may override any of them.
pub fn create(doc: &mut Document, ids: &IdGenerator, payload: Value) -> Result<Output> {
    let mut draft = serde_json::json!({
        "id": ids.next_id(),
        "isPublished": false,
        "channels": [],
        "knowledgeIds": [],
    });
    json::shallow_merge(&mut draft, &payload);
    let agent: Agent = serde_json::from_value(draft)?;
    doc.agents.push(agent.clone());
    Ok(Output::Agent(agent))
}

/// Handle `AgentUpdate`: shallow-merge the payload over the stored agent.
pub fn update(doc: &mut Document, id: &str, payload: Value) -> Result<Output> {
    let index = doc
        .agents
        .iter()
        .position(|a| a.id.matches(id))
        .ok_or_else(|| agent_not_found(id))?;
    let updated: Agent = json::merge_into(&doc.agents[index], &payload)?;
    doc.agents[index] = updated.clone();
    Ok(Output::Agent(updated))
}

/// Handle `AgentDelete`. Unlike the collection deletes elsewhere, a
/// missing agent is reported, not ignored.
pub fn delete(doc: &mut Document, id: &str) -> Result<Output> {
    if doc.remove_agent(id) {
        Ok(Output::Empty)
    } else {
        Err(agent_not_found(id))
    }
}
