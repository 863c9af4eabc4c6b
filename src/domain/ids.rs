//! Type-safe entity identifiers.
//!
//! Users, skills, and swaps are identified by database-assigned integer
//! ids. Each id space gets its own newtype so the three cannot be mixed
//! up at compile time. [`SkillIdParam`] is the input-boundary form of a
//! skill id: the mobile client sometimes sends the numeric id and
//! sometimes a prefixed string such as `"skill_001"`; both forms are
//! parsed into a canonical [`SkillId`] before any business logic runs.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GatewayError;

/// Unique identifier for a user.
///
/// Assigned by the user directory; the gateway never generates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw user id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer id.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(i64);

impl SkillId {
    /// Wraps a raw skill id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer id.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SkillId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a swap proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwapId(i64);

impl SwapId {
    /// Wraps a raw swap id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer id.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SwapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SwapId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A skill id as it arrives on the wire.
///
/// Compatibility shim for clients that send skill references as prefixed
/// strings (`"skill_001"`) instead of plain numbers. Both forms resolve
/// to the same canonical [`SkillId`]; nothing past the DTO layer ever
/// sees the string form.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SkillIdParam {
    /// Canonical numeric id.
    Numeric(i64),
    /// Prefixed string form, e.g. `"skill_001"`.
    Prefixed(String),
}

impl SkillIdParam {
    /// Resolves the wire form into a canonical [`SkillId`].
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidSkillId`] when the string form does
    /// not match `skill_<digits>`.
    pub fn resolve(&self) -> Result<SkillId, GatewayError> {
        match self {
            Self::Numeric(id) => Ok(SkillId::new(*id)),
            Self::Prefixed(raw) => {
                let digits = raw
                    .strip_prefix("skill_")
                    .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
                    .ok_or_else(|| GatewayError::InvalidSkillId(raw.clone()))?;
                let id: i64 = digits
                    .parse()
                    .map_err(|_| GatewayError::InvalidSkillId(raw.clone()))?;
                Ok(SkillId::new(id))
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_raw_integers() {
        assert_eq!(format!("{}", UserId::new(7)), "7");
        assert_eq!(format!("{}", SkillId::new(10)), "10");
        assert_eq!(format!("{}", SwapId::new(42)), "42");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&UserId::new(3)).ok();
        assert_eq!(json.as_deref(), Some("3"));

        let id: Option<SwapId> = serde_json::from_str("42").ok();
        assert_eq!(id, Some(SwapId::new(42)));
    }

    #[test]
    fn numeric_param_resolves_directly() {
        let param = SkillIdParam::Numeric(10);
        assert_eq!(param.resolve().ok(), Some(SkillId::new(10)));
    }

    #[test]
    fn prefixed_param_resolves_with_leading_zeros() {
        let param = SkillIdParam::Prefixed("skill_001".to_string());
        assert_eq!(param.resolve().ok(), Some(SkillId::new(1)));
    }

    #[test]
    fn unprefixed_string_is_rejected() {
        let param = SkillIdParam::Prefixed("guitar".to_string());
        assert!(matches!(
            param.resolve(),
            Err(GatewayError::InvalidSkillId(_))
        ));
    }

    #[test]
    fn prefix_without_digits_is_rejected() {
        for raw in ["skill_", "skill_x1", "skill_1x", "course_5"] {
            let param = SkillIdParam::Prefixed(raw.to_string());
            assert!(param.resolve().is_err(), "{raw} should not resolve");
        }
    }

    #[test]
    fn untagged_deserialization_accepts_both_forms() {
        let numeric: Option<SkillIdParam> = serde_json::from_str("10").ok();
        let Some(numeric) = numeric else {
            panic!("number should deserialize");
        };
        assert_eq!(numeric.resolve().ok(), Some(SkillId::new(10)));

        let prefixed: Option<SkillIdParam> = serde_json::from_str("\"skill_010\"").ok();
        let Some(prefixed) = prefixed else {
            panic!("string should deserialize");
        };
        assert_eq!(prefixed.resolve().ok(), Some(SkillId::new(10)));
    }
}
