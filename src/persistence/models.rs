//! Row shapes and row-to-record conversion for the swap tables.
//!
//! Queries fetch plain tuples and convert here, keeping SQL column order
//! in one place per shape.

use chrono::{DateTime, Utc};

use crate::domain::{SkillId, SkillRecord, SwapDetail, SwapId, SwapRecord, SwapStatus, UserId, UserRecord};
use crate::error::GatewayError;

/// A `swaps` row: id, requester_id, responder_id, requester_skill_id,
/// responder_skill_id, description, status, created_at, updated_at.
pub type SwapRow = (
    i64,
    i64,
    i64,
    i64,
    Option<i64>,
    Option<String>,
    String,
    DateTime<Utc>,
    DateTime<Utc>,
);

/// A [`SwapRow`] extended with joined relation columns: requester name,
/// responder name, offered skill owner and name, requested skill owner
/// and name (the last two `NULL` when no skill was requested).
pub type SwapDetailRow = (
    i64,
    i64,
    i64,
    i64,
    Option<i64>,
    Option<String>,
    String,
    DateTime<Utc>,
    DateTime<Utc>,
    String,
    String,
    i64,
    String,
    Option<i64>,
    Option<String>,
);

/// A `skills` row: id, user_id, name.
pub type SkillRow = (i64, i64, String);

/// Converts a raw status string into [`SwapStatus`].
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] for values outside the
/// known state set; those can only come from out-of-band writes.
pub fn parse_status(raw: &str) -> Result<SwapStatus, GatewayError> {
    SwapStatus::parse(raw)
        .ok_or_else(|| GatewayError::PersistenceError(format!("unknown swap status: {raw}")))
}

/// Converts a [`SwapRow`] into a [`SwapRecord`].
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] on an unknown status value.
pub fn swap_from_row(row: SwapRow) -> Result<SwapRecord, GatewayError> {
    let (
        id,
        requester_id,
        responder_id,
        requester_skill_id,
        responder_skill_id,
        description,
        status,
        created_at,
        updated_at,
    ) = row;
    Ok(SwapRecord {
        id: SwapId::new(id),
        requester_id: UserId::new(requester_id),
        responder_id: UserId::new(responder_id),
        requester_skill_id: SkillId::new(requester_skill_id),
        responder_skill_id: responder_skill_id.map(SkillId::new),
        description,
        status: parse_status(&status)?,
        created_at,
        updated_at,
    })
}

/// Converts a [`SkillRow`] into a [`SkillRecord`].
pub fn skill_from_row(row: SkillRow) -> SkillRecord {
    let (id, user_id, name) = row;
    SkillRecord {
        id: SkillId::new(id),
        user_id: UserId::new(user_id),
        name,
    }
}

/// Converts a joined [`SwapDetailRow`] into a [`SwapDetail`].
///
/// # Errors
///
/// Returns [`GatewayError::PersistenceError`] on an unknown status value.
pub fn detail_from_row(row: SwapDetailRow) -> Result<SwapDetail, GatewayError> {
    let (
        id,
        requester_id,
        responder_id,
        requester_skill_id,
        responder_skill_id,
        description,
        status,
        created_at,
        updated_at,
        requester_name,
        responder_name,
        requester_skill_owner,
        requester_skill_name,
        responder_skill_owner,
        responder_skill_name,
    ) = row;

    let responder_skill = match (responder_skill_id, responder_skill_owner, responder_skill_name)
    {
        (Some(skill_id), Some(owner), Some(name)) => Some(SkillRecord {
            id: SkillId::new(skill_id),
            user_id: UserId::new(owner),
            name,
        }),
        _ => None,
    };

    Ok(SwapDetail {
        swap: SwapRecord {
            id: SwapId::new(id),
            requester_id: UserId::new(requester_id),
            responder_id: UserId::new(responder_id),
            requester_skill_id: SkillId::new(requester_skill_id),
            responder_skill_id: responder_skill_id.map(SkillId::new),
            description,
            status: parse_status(&status)?,
            created_at,
            updated_at,
        },
        requester: UserRecord {
            id: UserId::new(requester_id),
            name: requester_name,
        },
        responder: UserRecord {
            id: UserId::new(responder_id),
            name: responder_name,
        },
        requester_skill: SkillRecord {
            id: SkillId::new(requester_skill_id),
            user_id: UserId::new(requester_skill_owner),
            name: requester_skill_name,
        },
        responder_skill,
    })
}
