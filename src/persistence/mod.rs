//! Persistence layer: durable swap storage and directory lookups.
//!
//! [`SwapStore`] is the seam between the negotiation service and the
//! relational store. [`PostgresStore`] is the production implementation;
//! service tests run against an in-memory implementation with the same
//! conditional-transition semantics.

pub mod models;
pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PostgresStore;

use std::future::Future;

use crate::domain::{NewSwap, SkillId, SkillRecord, SwapDetail, SwapId, SwapRecord, SwapStatus, UserId};
use crate::error::GatewayError;

/// Storage operations the negotiation service depends on.
///
/// The user and skill directories are external collaborators consumed
/// read-only; the swap table is the only thing this gateway mutates.
/// `transition_swap` is the sole concurrency-correctness mechanism: it
/// must compare the expected prior status and update in one atomic step,
/// never read-then-write.
pub trait SwapStore: Send + Sync {
    /// Returns `true` when a user with the given id exists.
    fn user_exists(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<bool, GatewayError>> + Send;

    /// Looks up a skill and its owner.
    fn find_skill(
        &self,
        id: SkillId,
    ) -> impl Future<Output = Result<Option<SkillRecord>, GatewayError>> + Send;

    /// Inserts a new proposal with status `pending` and returns the row.
    ///
    /// Both timestamps are set from the same clock reading, so a freshly
    /// created swap has `created_at == updated_at`.
    fn insert_swap(
        &self,
        swap: &NewSwap,
    ) -> impl Future<Output = Result<SwapRecord, GatewayError>> + Send;

    /// Fetches a swap row by id.
    fn find_swap(
        &self,
        id: SwapId,
    ) -> impl Future<Output = Result<Option<SwapRecord>, GatewayError>> + Send;

    /// Atomically moves a swap from `expected` to `next`, bumping
    /// `updated_at`.
    ///
    /// Returns the updated row, or `None` when the guard lost — the row
    /// is missing or its status is no longer `expected`. Callers decide
    /// which of the two happened by re-reading.
    fn transition_swap(
        &self,
        id: SwapId,
        expected: SwapStatus,
        next: SwapStatus,
    ) -> impl Future<Output = Result<Option<SwapRecord>, GatewayError>> + Send;

    /// Fetches a swap with participants and skills resolved.
    fn load_detail(
        &self,
        id: SwapId,
    ) -> impl Future<Output = Result<Option<SwapDetail>, GatewayError>> + Send;

    /// Returns one page of resolved swaps plus the total match count.
    ///
    /// When `user` is set, only swaps where that user is requester or
    /// responder are included. Ordered newest-first (creation time, id
    /// as tiebreaker). `page` is 1-indexed.
    fn list_swaps(
        &self,
        user: Option<UserId>,
        page: u32,
        per_page: u32,
    ) -> impl Future<Output = Result<(Vec<SwapDetail>, u32), GatewayError>> + Send;
}
