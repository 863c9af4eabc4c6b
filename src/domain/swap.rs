//! Swap entity and its denormalized read model.

use chrono::{DateTime, Utc};

use super::ids::{SkillId, SwapId, UserId};
use super::status::SwapStatus;

/// A swap proposal as stored.
///
/// `created_at` is set once at insert; `updated_at` moves on every status
/// change. Immediately after creation the two are equal.
#[derive(Debug, Clone)]
pub struct SwapRecord {
    /// Swap identifier.
    pub id: SwapId,
    /// User who opened the proposal.
    pub requester_id: UserId,
    /// User who must accept or reject.
    pub responder_id: UserId,
    /// Skill offered by the requester.
    pub requester_skill_id: SkillId,
    /// Skill requested from the responder, if any.
    pub responder_skill_id: Option<SkillId>,
    /// Free-text note from the requester.
    pub description: Option<String>,
    /// Current lifecycle state.
    pub status: SwapStatus,
    /// Insert timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status mutation.
    pub updated_at: DateTime<Utc>,
}

/// Field set for inserting a new proposal.
///
/// Status is implied: every new proposal starts `pending`.
#[derive(Debug, Clone)]
pub struct NewSwap {
    /// User who opens the proposal.
    pub requester_id: UserId,
    /// User who must accept or reject.
    pub responder_id: UserId,
    /// Skill offered by the requester.
    pub requester_skill_id: SkillId,
    /// Skill requested from the responder, if any.
    pub responder_skill_id: Option<SkillId>,
    /// Free-text note from the requester.
    pub description: Option<String>,
}

/// A user as projected into swap read models.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

/// A skill and its owner.
#[derive(Debug, Clone)]
pub struct SkillRecord {
    /// Skill identifier.
    pub id: SkillId,
    /// Owning user.
    pub user_id: UserId,
    /// Skill name, e.g. `"Guitar"`.
    pub name: String,
}

/// A swap with participants and skills resolved.
///
/// This is the shape every read operation returns: the client renders
/// swap lists and detail screens from it without further lookups.
#[derive(Debug, Clone)]
pub struct SwapDetail {
    /// The underlying swap row.
    pub swap: SwapRecord,
    /// Resolved requester.
    pub requester: UserRecord,
    /// Resolved responder.
    pub responder: UserRecord,
    /// Resolved offered skill.
    pub requester_skill: SkillRecord,
    /// Resolved requested skill, when one was named.
    pub responder_skill: Option<SkillRecord>,
}
