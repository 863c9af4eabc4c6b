//! Shared DTO types used across multiple endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{SkillRecord, UserRecord};

/// A user as rendered in swap responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    /// User identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl From<UserRecord> for UserDto {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.get(),
            name: user.name,
        }
    }
}

/// A skill as rendered in swap responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkillDto {
    /// Skill identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Skill name (e.g. `"Guitar"`).
    pub name: String,
}

impl From<SkillRecord> for SkillDto {
    fn from(skill: SkillRecord) -> Self {
        Self {
            id: skill.id.get(),
            user_id: skill.user_id.get(),
            name: skill.name,
        }
    }
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}
