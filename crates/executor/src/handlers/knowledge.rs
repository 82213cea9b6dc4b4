//! Knowledge group and file handlers.

use mimic_core::json;
use mimic_core::{
    Document, Error, IdGenerator, KnowledgeFile, KnowledgeGroup, KnowledgeGroupSummary, Result,
};
use serde_json::Value;

use crate::Output;

fn group_not_found(id: &str) -> Error {
    Error::not_found(format!("knowledge group {}", id))
}

/// Handle `GroupList`: every group with its computed `fileCount`.
pub fn list(doc: &Document) -> Result<Output> {
    let groups = doc
        .knowledge_groups
        .iter()
        .map(|group| KnowledgeGroupSummary {
            file_count: group.files.len(),
            group: group.clone(),
        })
        .collect();
    Ok(Output::Groups(groups))
}

/// Handle `GroupGet`: the stored group, without the computed count.
pub fn get(doc: &Document, id: &str) -> Result<Output> {
    doc.knowledge_group(id)
        .cloned()
        .map(Output::Group)
        .ok_or_else(|| group_not_found(id))
}

/// Handle `GroupCreate`. A fresh id and an empty file list sit under the
/// payload, so the payload may override either.
pub fn create(doc: &mut Document, ids: &IdGenerator, payload: Value) -> Result<Output> {
    let mut draft = serde_json::json!({
        "id": ids.next_id(),
        "files": [],
    });
    json::shallow_merge(&mut draft, &payload);
    let group: KnowledgeGroup = serde_json::from_value(draft)?;
    doc.knowledge_groups.push(group.clone());
    Ok(Output::Group(group))
}

/// Handle `GroupDelete`: the group and its files go together. An unknown
/// id leaves the collection as it was.
pub fn delete(doc: &mut Document, id: &str) -> Result<Output> {
    doc.remove_knowledge_group(id);
    Ok(Output::Empty)
}

/// Handle `FileCreate`.
pub fn create_file(
    doc: &mut Document,
    ids: &IdGenerator,
    group_id: &str,
    payload: Value,
) -> Result<Output> {
    let group = doc
        .knowledge_group_mut(group_id)
        .ok_or_else(|| group_not_found(group_id))?;
    let mut draft = serde_json::json!({ "id": ids.next_id() });
    json::shallow_merge(&mut draft, &payload);
    let file: KnowledgeFile = serde_json::from_value(draft)?;
    group.files.push(file.clone());
    Ok(Output::File(file))
}

/// Handle `FileDelete`: `NotFound` for a missing group, a silent no-op
/// for a missing file inside an existing group.
pub fn delete_file(doc: &mut Document, group_id: &str, file_id: &str) -> Result<Output> {
    let group = doc
        .knowledge_group_mut(group_id)
        .ok_or_else(|| group_not_found(group_id))?;
    group.files.retain(|f| !f.id.matches(file_id));
    Ok(Output::Empty)
}
