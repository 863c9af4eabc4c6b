//! PostgreSQL implementation of the persistence layer.

use sqlx::PgPool;

use super::models::{
    SkillRow, SwapDetailRow, SwapRow, detail_from_row, skill_from_row, swap_from_row,
};
use super::SwapStore;
use crate::domain::{NewSwap, SkillId, SkillRecord, SwapDetail, SwapId, SwapRecord, SwapStatus, UserId};
use crate::error::GatewayError;

/// Columns returned by every query that yields a full swap row.
const SWAP_COLUMNS: &str = "id, requester_id, responder_id, requester_skill_id, \
     responder_skill_id, description, status, created_at, updated_at";

/// Joined select yielding a [`SwapDetailRow`]. The `LEFT JOIN` keeps swaps
/// without a requested skill.
const DETAIL_SELECT: &str = "SELECT s.id, s.requester_id, s.responder_id, s.requester_skill_id, \
            s.responder_skill_id, s.description, s.status, s.created_at, s.updated_at, \
            ru.name, pu.name, rs.user_id, rs.name, ps.user_id, ps.name \
     FROM swaps s \
     JOIN users ru ON ru.id = s.requester_id \
     JOIN users pu ON pu.id = s.responder_id \
     JOIN skills rs ON rs.id = s.requester_skill_id \
     LEFT JOIN skills ps ON ps.id = s.responder_skill_id";

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SwapStore for PostgresStore {
    async fn user_exists(&self, id: UserId) -> Result<bool, GatewayError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }

    async fn find_skill(&self, id: SkillId) -> Result<Option<SkillRecord>, GatewayError> {
        let row = sqlx::query_as::<_, SkillRow>("SELECT id, user_id, name FROM skills WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        Ok(row.map(skill_from_row))
    }

    async fn insert_swap(&self, swap: &NewSwap) -> Result<SwapRecord, GatewayError> {
        let sql = format!(
            "INSERT INTO swaps (requester_id, responder_id, requester_skill_id, \
             responder_skill_id, description, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {SWAP_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SwapRow>(&sql)
            .bind(swap.requester_id.get())
            .bind(swap.responder_id.get())
            .bind(swap.requester_skill_id.get())
            .bind(swap.responder_skill_id.map(|id| id.get()))
            .bind(swap.description.as_deref())
            .bind(SwapStatus::Pending.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        swap_from_row(row)
    }

    async fn find_swap(&self, id: SwapId) -> Result<Option<SwapRecord>, GatewayError> {
        let sql = format!("SELECT {SWAP_COLUMNS} FROM swaps WHERE id = $1");
        let row = sqlx::query_as::<_, SwapRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        row.map(swap_from_row).transpose()
    }

    async fn transition_swap(
        &self,
        id: SwapId,
        expected: SwapStatus,
        next: SwapStatus,
    ) -> Result<Option<SwapRecord>, GatewayError> {
        // Single conditional update: the status comparison and the write
        // happen in one statement, so two concurrent responses cannot
        // both pass the guard.
        let sql = format!(
            "UPDATE swaps SET status = $1, updated_at = NOW() \
             WHERE id = $2 AND status = $3 RETURNING {SWAP_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SwapRow>(&sql)
            .bind(next.as_str())
            .bind(id.get())
            .bind(expected.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        row.map(swap_from_row).transpose()
    }

    async fn load_detail(&self, id: SwapId) -> Result<Option<SwapDetail>, GatewayError> {
        let sql = format!("{DETAIL_SELECT} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SwapDetailRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

        row.map(detail_from_row).transpose()
    }

    async fn list_swaps(
        &self,
        user: Option<UserId>,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<SwapDetail>, u32), GatewayError> {
        let limit = i64::from(per_page);
        let offset = i64::from(page.saturating_sub(1)) * limit;

        let (total, rows) = if let Some(user) = user {
            let total = sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM swaps WHERE requester_id = $1 OR responder_id = $1",
            )
            .bind(user.get())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

            let sql = format!(
                "{DETAIL_SELECT} WHERE s.requester_id = $1 OR s.responder_id = $1 \
                 ORDER BY s.created_at DESC, s.id DESC LIMIT $2 OFFSET $3"
            );
            let rows = sqlx::query_as::<_, SwapDetailRow>(&sql)
                .bind(user.get())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
            (total, rows)
        } else {
            let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM swaps")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;

            let sql = format!(
                "{DETAIL_SELECT} ORDER BY s.created_at DESC, s.id DESC LIMIT $1 OFFSET $2"
            );
            let rows = sqlx::query_as::<_, SwapDetailRow>(&sql)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
            (total, rows)
        };

        let details = rows
            .into_iter()
            .map(detail_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let total = u32::try_from(total).unwrap_or(u32::MAX);
        Ok((details, total))
    }
}
