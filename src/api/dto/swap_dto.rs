//! Swap request and response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common_dto::{PaginationMeta, SkillDto, UserDto};
use crate::domain::{SkillIdParam, SwapDetail, SwapStatus, UserId};
use crate::error::GatewayError;
use crate::service::NewProposal;

/// Request body for `POST /swaps`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSwapRequest {
    /// User who must accept or reject the proposal. Also accepted under
    /// the legacy client name `target_user_id`.
    #[serde(alias = "target_user_id")]
    pub responder_id: i64,
    /// Skill offered by the caller. Accepts a numeric id or a
    /// `skill_<n>` string.
    pub requester_skill_id: SkillIdParam,
    /// Skill requested from the responder, if any. Same formats as
    /// `requester_skill_id`.
    #[serde(default)]
    pub responder_skill_id: Option<SkillIdParam>,
    /// Free-text note to the responder (max 1000 characters).
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateSwapRequest {
    /// Parses the wire-format skill references into a canonical proposal.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidSkillId`] when a string-form skill
    /// reference does not match `skill_<digits>`.
    pub fn into_proposal(self) -> Result<NewProposal, GatewayError> {
        let requester_skill_id = self.requester_skill_id.resolve()?;
        let responder_skill_id = self
            .responder_skill_id
            .as_ref()
            .map(SkillIdParam::resolve)
            .transpose()?;
        Ok(NewProposal {
            responder_id: UserId::new(self.responder_id),
            requester_skill_id,
            responder_skill_id,
            description: self.description,
        })
    }
}

/// Query parameters for `GET /swaps`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListSwapsParams {
    /// Restrict to swaps where this user is requester or responder.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// A swap with resolved participants and skills.
#[derive(Debug, Serialize, ToSchema)]
pub struct SwapDto {
    /// Swap identifier.
    pub id: i64,
    /// Proposal initiator.
    pub requester: UserDto,
    /// User who must respond.
    pub responder: UserDto,
    /// Skill offered by the requester.
    pub requester_skill: SkillDto,
    /// Skill requested from the responder, `null` when none was named.
    pub responder_skill: Option<SkillDto>,
    /// Free-text note from the requester.
    pub description: Option<String>,
    /// Current lifecycle state.
    pub status: SwapStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last status change.
    pub updated_at: DateTime<Utc>,
}

impl From<SwapDetail> for SwapDto {
    fn from(detail: SwapDetail) -> Self {
        Self {
            id: detail.swap.id.get(),
            requester: detail.requester.into(),
            responder: detail.responder.into(),
            requester_skill: detail.requester_skill.into(),
            responder_skill: detail.responder_skill.map(SkillDto::from),
            description: detail.swap.description,
            status: detail.swap.status,
            created_at: detail.swap.created_at,
            updated_at: detail.swap.updated_at,
        }
    }
}

/// Response body for `GET /swaps`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SwapListResponse {
    /// Swaps on this page, newest first.
    pub data: Vec<SwapDto>,
    /// Pagination counters.
    pub pagination: PaginationMeta,
}
