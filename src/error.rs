//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ids::{SkillId, SwapId, UserId};
use crate::domain::status::SwapStatus;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1101,
///     "message": "cannot swap with yourself",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges below).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category               | HTTP Status                |
/// |-----------|------------------------|----------------------------|
/// | 1000–1099 | Validation             | 400 Bad Request            |
/// | 1100–1199 | Ownership              | 400 Bad Request            |
/// | 2000–2099 | Not Found              | 404 Not Found              |
/// | 2100–2199 | Auth / State Guard     | 401 / 403 / 400            |
/// | 3000–3999 | Server                 | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Skill reference string did not match `skill_<digits>`.
    #[error("invalid skill id: {0}")]
    InvalidSkillId(String),

    /// Referenced user does not exist in the user directory.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Referenced skill does not exist in the skill directory.
    #[error("skill not found: {0}")]
    SkillNotFound(SkillId),

    /// A user proposed a swap with themselves as responder.
    #[error("cannot swap with yourself")]
    SelfSwap,

    /// The offered skill is not owned by the requester.
    #[error("you do not own the offered skill ({0})")]
    OfferedSkillNotOwned(SkillId),

    /// The requested skill is not owned by the responder.
    #[error("target user does not have the requested skill ({0})")]
    RequestedSkillNotOwned(SkillId),

    /// Swap with the given ID was not found.
    #[error("swap not found: {0}")]
    SwapNotFound(SwapId),

    /// The request carried no usable caller identity.
    #[error("missing or invalid user identity")]
    Unauthorized,

    /// The acting user is not the swap's responder.
    ///
    /// The ids involved are carried for logging and, when `verbose` is
    /// set, surfaced in the response `details` field. The message itself
    /// never includes them.
    #[error("only the responder may act on this swap")]
    Forbidden {
        /// Swap the action targeted.
        swap_id: SwapId,
        /// User who attempted the action.
        acting_user_id: UserId,
        /// User actually authorized to respond.
        responder_id: UserId,
        /// Whether the ids may appear in the response body.
        verbose: bool,
    },

    /// Accept or reject was attempted outside the `pending` state.
    #[error("swap is not pending: current status is {current}")]
    InvalidState {
        /// Status the swap holds now.
        current: SwapStatus,
    },

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidSkillId(_) => 1002,
            Self::UserNotFound(_) => 1003,
            Self::SkillNotFound(_) => 1004,
            Self::SelfSwap => 1101,
            Self::OfferedSkillNotOwned(_) => 1102,
            Self::RequestedSkillNotOwned(_) => 1103,
            Self::SwapNotFound(_) => 2001,
            Self::Unauthorized => 2100,
            Self::Forbidden { .. } => 2101,
            Self::InvalidState { .. } => 2102,
            Self::PersistenceError(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::InvalidSkillId(_)
            | Self::UserNotFound(_)
            | Self::SkillNotFound(_)
            | Self::SelfSwap
            | Self::OfferedSkillNotOwned(_)
            | Self::RequestedSkillNotOwned(_)
            | Self::InvalidState { .. } => StatusCode::BAD_REQUEST,
            Self::SwapNotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the diagnostic detail string, when this variant carries one
    /// and is allowed to expose it.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::Forbidden {
                swap_id,
                acting_user_id,
                responder_id,
                verbose: true,
            } => Some(format!(
                "swap_id={swap_id} acting_user_id={acting_user_id} responder_id={responder_id}"
            )),
            _ => None,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
