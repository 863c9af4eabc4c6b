//! Swap negotiation service: proposal validation, response authorization,
//! and state transitions.

use crate::domain::{NewSwap, SkillId, SwapDetail, SwapId, SwapStatus, UserId};
use crate::error::GatewayError;
use crate::persistence::SwapStore;

/// Fixed page size for swap listings.
pub const PAGE_SIZE: u32 = 20;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Validated input for a new proposal.
///
/// Skill ids are canonical by the time this exists; wire-format parsing
/// happens at the DTO boundary.
#[derive(Debug, Clone)]
pub struct NewProposal {
    /// User who must accept or reject.
    pub responder_id: UserId,
    /// Skill offered by the requester.
    pub requester_skill_id: SkillId,
    /// Skill requested from the responder, if any.
    pub responder_skill_id: Option<SkillId>,
    /// Free-text note to the responder.
    pub description: Option<String>,
}

/// One page of resolved swaps with pagination counters.
#[derive(Debug)]
pub struct SwapPage {
    /// Swaps on this page, newest first.
    pub items: Vec<SwapDetail>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Fixed page size.
    pub per_page: u32,
    /// Total number of matching swaps.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

/// Owns the lifecycle of skill-exchange proposals.
///
/// Every operation takes the acting user as an explicit parameter; there
/// is no ambient identity anywhere below the HTTP extractor. Correctness
/// under concurrent responses relies on the store's conditional
/// transition, not on anything held in process.
#[derive(Debug)]
pub struct SwapService<S> {
    store: S,
    debug_errors: bool,
}

impl<S: SwapStore> SwapService<S> {
    /// Creates a new service over the given store.
    ///
    /// `debug_errors` controls whether 403 responses expose the internal
    /// ids involved.
    #[must_use]
    pub fn new(store: S, debug_errors: bool) -> Self {
        Self {
            store,
            debug_errors,
        }
    }

    /// Returns a reference to the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a new swap proposal from `requester`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SelfSwap`] when the responder is the
    /// requester, [`GatewayError::UserNotFound`] /
    /// [`GatewayError::SkillNotFound`] for dangling references,
    /// [`GatewayError::OfferedSkillNotOwned`] /
    /// [`GatewayError::RequestedSkillNotOwned`] on ownership violations,
    /// and [`GatewayError::InvalidRequest`] for an overlong description.
    pub async fn create(
        &self,
        requester: UserId,
        proposal: NewProposal,
    ) -> Result<SwapDetail, GatewayError> {
        if proposal.responder_id == requester {
            return Err(GatewayError::SelfSwap);
        }
        if !self.store.user_exists(proposal.responder_id).await? {
            return Err(GatewayError::UserNotFound(proposal.responder_id));
        }

        let offered = self
            .store
            .find_skill(proposal.requester_skill_id)
            .await?
            .ok_or(GatewayError::SkillNotFound(proposal.requester_skill_id))?;
        if offered.user_id != requester {
            return Err(GatewayError::OfferedSkillNotOwned(offered.id));
        }

        if let Some(wanted_id) = proposal.responder_skill_id {
            let wanted = self
                .store
                .find_skill(wanted_id)
                .await?
                .ok_or(GatewayError::SkillNotFound(wanted_id))?;
            if wanted.user_id != proposal.responder_id {
                return Err(GatewayError::RequestedSkillNotOwned(wanted.id));
            }
        }

        if let Some(description) = &proposal.description
            && description.chars().count() > MAX_DESCRIPTION_CHARS
        {
            return Err(GatewayError::InvalidRequest(format!(
                "description exceeds {MAX_DESCRIPTION_CHARS} characters"
            )));
        }

        let record = self
            .store
            .insert_swap(&NewSwap {
                requester_id: requester,
                responder_id: proposal.responder_id,
                requester_skill_id: proposal.requester_skill_id,
                responder_skill_id: proposal.responder_skill_id,
                description: proposal.description,
            })
            .await?;

        tracing::info!(
            swap_id = %record.id,
            requester = %requester,
            responder = %record.responder_id,
            "swap proposed"
        );

        self.detail(record.id).await
    }

    /// Accepts a pending swap as `acting_user`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SwapNotFound`], [`GatewayError::Forbidden`]
    /// when the acting user is not the responder, or
    /// [`GatewayError::InvalidState`] outside `pending`.
    pub async fn accept(
        &self,
        id: SwapId,
        acting_user: UserId,
    ) -> Result<SwapDetail, GatewayError> {
        self.respond(id, acting_user, SwapStatus::Accepted).await
    }

    /// Rejects a pending swap as `acting_user`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SwapService::accept`].
    pub async fn reject(
        &self,
        id: SwapId,
        acting_user: UserId,
    ) -> Result<SwapDetail, GatewayError> {
        self.respond(id, acting_user, SwapStatus::Rejected).await
    }

    /// Returns one swap with resolved relations.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::SwapNotFound`] for an unknown id.
    pub async fn show(&self, id: SwapId) -> Result<SwapDetail, GatewayError> {
        self.detail(id).await
    }

    /// Returns one page of swaps, optionally restricted to those where
    /// `user` is requester or responder. Newest first, fixed page size.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on store failure.
    pub async fn list(
        &self,
        user: Option<UserId>,
        page: u32,
    ) -> Result<SwapPage, GatewayError> {
        let page = page.max(1);
        let (items, total) = self.store.list_swaps(user, page, PAGE_SIZE).await?;
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(PAGE_SIZE)
        };
        Ok(SwapPage {
            items,
            page,
            per_page: PAGE_SIZE,
            total,
            total_pages,
        })
    }

    async fn respond(
        &self,
        id: SwapId,
        acting_user: UserId,
        target: SwapStatus,
    ) -> Result<SwapDetail, GatewayError> {
        let swap = self
            .store
            .find_swap(id)
            .await?
            .ok_or(GatewayError::SwapNotFound(id))?;

        if swap.responder_id != acting_user {
            return Err(GatewayError::Forbidden {
                swap_id: id,
                acting_user_id: acting_user,
                responder_id: swap.responder_id,
                verbose: self.debug_errors,
            });
        }

        if !swap.status.can_transition_to(target) {
            return Err(GatewayError::InvalidState {
                current: swap.status,
            });
        }

        let updated = self
            .store
            .transition_swap(id, SwapStatus::Pending, target)
            .await?;
        let Some(updated) = updated else {
            // Guard lost: the row vanished or a concurrent response won.
            // Re-read to report which.
            let current = self
                .store
                .find_swap(id)
                .await?
                .ok_or(GatewayError::SwapNotFound(id))?;
            return Err(GatewayError::InvalidState {
                current: current.status,
            });
        };

        tracing::info!(
            swap_id = %id,
            responder = %acting_user,
            status = %updated.status,
            "swap transitioned"
        );

        self.detail(id).await
    }

    async fn detail(&self, id: SwapId) -> Result<SwapDetail, GatewayError> {
        self.store
            .load_detail(id)
            .await?
            .ok_or(GatewayError::SwapNotFound(id))
    }
}
