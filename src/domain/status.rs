//! Swap lifecycle states and legal transitions.
//!
//! ```text
//!         create            accept
//!  (none) ------> pending -----------> accepted (terminal)
//!                    |
//!                    | reject
//!                    v
//!                rejected (terminal)
//! ```
//!
//! The responder is the only party that may drive a transition, and only
//! out of `pending`. Accepting records intent, nothing more: the skills
//! referenced by the swap stay available for further proposals.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a swap proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    /// Created, awaiting the responder's decision.
    Pending,
    /// Accepted by the responder. Terminal.
    Accepted,
    /// Rejected by the responder. Terminal.
    Rejected,
}

impl SwapStatus {
    /// Returns the lowercase string stored in the database.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parses the stored string form. Returns `None` for unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns `true` once no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Returns `true` if moving from `self` to `next` is a legal transition.
    ///
    /// Only `pending → accepted` and `pending → rejected` exist.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Rejected)
        )
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
