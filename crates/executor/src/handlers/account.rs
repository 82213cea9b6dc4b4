//! Account and team handlers.

use mimic_core::json;
use mimic_core::{
    Account, Document, Error, IdGenerator, MemberStatus, Result, TeamMember, TeamRole,
};
use serde_json::Value;

use crate::Output;

fn member_not_found(member_id: &str) -> Error {
    Error::not_found(format!("team member {}", member_id))
}

/// Handle `AccountGet`.
pub fn get(doc: &Document) -> Result<Output> {
    Ok(Output::Account(doc.account.clone()))
}

/// Handle `AccountDelete`: reset the account to an empty shell. The
/// record survives so a later `AccountGet` still succeeds.
pub fn delete(doc: &mut Document) -> Result<Output> {
    doc.account = Account::default();
    Ok(Output::Empty)
}

/// Handle `TeamInvite`.
///
/// Invite defaults (fresh id, `operator` role, `invited` status) sit
/// under the payload, so the payload may override any of them.
pub fn invite(doc: &mut Document, ids: &IdGenerator, payload: Value) -> Result<Output> {
    let mut draft = serde_json::json!({
        "id": ids.next_id(),
        "role": TeamRole::Operator,
        "status": MemberStatus::Invited,
    });
    json::shallow_merge(&mut draft, &payload);
    let member: TeamMember = serde_json::from_value(draft)?;
    doc.account.team.push(member.clone());
    Ok(Output::Member(member))
}

/// Handle `TeamUpdate`.
///
/// When the target currently holds the `owner` role, the `role` key is
/// dropped from the patch before merging. Every other field still
/// applies, so an owner can be renamed but never demoted.
pub fn update_member(doc: &mut Document, member_id: &str, payload: Value) -> Result<Output> {
    let index = doc
        .account
        .team
        .iter()
        .position(|m| m.id.matches(member_id))
        .ok_or_else(|| member_not_found(member_id))?;

    let mut patch = payload;
    if doc.account.team[index].role == TeamRole::Owner {
        if let Some(fields) = patch.as_object_mut() {
            fields.remove("role");
        }
    }

    let updated: TeamMember = json::merge_into(&doc.account.team[index], &patch)?;
    doc.account.team[index] = updated.clone();
    Ok(Output::Member(updated))
}

/// Handle `TeamRemove`. Removal is unconditional; an unknown id leaves
/// the team as it was.
pub fn remove_member(doc: &mut Document, member_id: &str) -> Result<Output> {
    doc.remove_team_member(member_id);
    Ok(Output::Empty)
}
