//! In-memory [`SwapStore`] for service-level tests.
//!
//! Mirrors the conditional-transition semantics of the Postgres store:
//! `transition_swap` compares the expected status and writes under one
//! lock acquisition.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;

use super::SwapStore;
use crate::domain::{
    NewSwap, SkillId, SkillRecord, SwapDetail, SwapId, SwapRecord, SwapStatus, UserId, UserRecord,
};
use crate::error::GatewayError;

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<i64, UserRecord>,
    skills: HashMap<i64, SkillRecord>,
    swaps: HashMap<i64, SwapRecord>,
    next_swap_id: i64,
}

/// Hash-map-backed store with the same guard semantics as Postgres.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a user into the directory.
    pub fn add_user(&self, id: i64, name: &str) -> UserId {
        let user_id = UserId::new(id);
        if let Ok(mut inner) = self.inner.lock() {
            inner.users.insert(
                id,
                UserRecord {
                    id: user_id,
                    name: name.to_string(),
                },
            );
        }
        user_id
    }

    /// Seeds a skill owned by `owner` into the directory.
    pub fn add_skill(&self, id: i64, owner: UserId, name: &str) -> SkillId {
        let skill_id = SkillId::new(id);
        if let Ok(mut inner) = self.inner.lock() {
            inner.skills.insert(
                id,
                SkillRecord {
                    id: skill_id,
                    user_id: owner,
                    name: name.to_string(),
                },
            );
        }
        skill_id
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, Inner>, GatewayError> {
        self.inner
            .lock()
            .map_err(|_| GatewayError::Internal("store lock poisoned".to_string()))
    }

    fn detail_of(inner: &Inner, swap: &SwapRecord) -> Result<SwapDetail, GatewayError> {
        let requester = inner
            .users
            .get(&swap.requester_id.get())
            .cloned()
            .ok_or_else(|| GatewayError::Internal("requester missing".to_string()))?;
        let responder = inner
            .users
            .get(&swap.responder_id.get())
            .cloned()
            .ok_or_else(|| GatewayError::Internal("responder missing".to_string()))?;
        let requester_skill = inner
            .skills
            .get(&swap.requester_skill_id.get())
            .cloned()
            .ok_or_else(|| GatewayError::Internal("offered skill missing".to_string()))?;
        let responder_skill = match swap.responder_skill_id {
            Some(id) => Some(
                inner
                    .skills
                    .get(&id.get())
                    .cloned()
                    .ok_or_else(|| GatewayError::Internal("requested skill missing".to_string()))?,
            ),
            None => None,
        };
        Ok(SwapDetail {
            swap: swap.clone(),
            requester,
            responder,
            requester_skill,
            responder_skill,
        })
    }
}

impl SwapStore for MemoryStore {
    async fn user_exists(&self, id: UserId) -> Result<bool, GatewayError> {
        Ok(self.locked()?.users.contains_key(&id.get()))
    }

    async fn find_skill(&self, id: SkillId) -> Result<Option<SkillRecord>, GatewayError> {
        Ok(self.locked()?.skills.get(&id.get()).cloned())
    }

    async fn insert_swap(&self, swap: &NewSwap) -> Result<SwapRecord, GatewayError> {
        let mut inner = self.locked()?;
        inner.next_swap_id += 1;
        let now = Utc::now();
        let record = SwapRecord {
            id: SwapId::new(inner.next_swap_id),
            requester_id: swap.requester_id,
            responder_id: swap.responder_id,
            requester_skill_id: swap.requester_skill_id,
            responder_skill_id: swap.responder_skill_id,
            description: swap.description.clone(),
            status: SwapStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        inner.swaps.insert(record.id.get(), record.clone());
        Ok(record)
    }

    async fn find_swap(&self, id: SwapId) -> Result<Option<SwapRecord>, GatewayError> {
        Ok(self.locked()?.swaps.get(&id.get()).cloned())
    }

    async fn transition_swap(
        &self,
        id: SwapId,
        expected: SwapStatus,
        next: SwapStatus,
    ) -> Result<Option<SwapRecord>, GatewayError> {
        let mut inner = self.locked()?;
        let Some(swap) = inner.swaps.get_mut(&id.get()) else {
            return Ok(None);
        };
        if swap.status != expected {
            return Ok(None);
        }
        swap.status = next;
        swap.updated_at = Utc::now();
        Ok(Some(swap.clone()))
    }

    async fn load_detail(&self, id: SwapId) -> Result<Option<SwapDetail>, GatewayError> {
        let inner = self.locked()?;
        match inner.swaps.get(&id.get()) {
            Some(swap) => Ok(Some(Self::detail_of(&inner, swap)?)),
            None => Ok(None),
        }
    }

    async fn list_swaps(
        &self,
        user: Option<UserId>,
        page: u32,
        per_page: u32,
    ) -> Result<(Vec<SwapDetail>, u32), GatewayError> {
        let inner = self.locked()?;
        let mut matching: Vec<&SwapRecord> = inner
            .swaps
            .values()
            .filter(|s| match user {
                Some(user) => s.requester_id == user || s.responder_id == user,
                None => true,
            })
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.id.get().cmp(&a.id.get()))
        });

        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let offset = (page.saturating_sub(1) as usize) * per_page as usize;
        let details = matching
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .map(|swap| Self::detail_of(&inner, swap))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((details, total))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transition_guard_fires_exactly_once() {
        let store = MemoryStore::new();
        let alice = store.add_user(1, "Alice");
        let bob = store.add_user(2, "Bob");
        let guitar = store.add_skill(10, alice, "Guitar");

        let Ok(swap) = store
            .insert_swap(&NewSwap {
                requester_id: alice,
                responder_id: bob,
                requester_skill_id: guitar,
                responder_skill_id: None,
                description: None,
            })
            .await
        else {
            panic!("insert should succeed");
        };

        let first = store
            .transition_swap(swap.id, SwapStatus::Pending, SwapStatus::Accepted)
            .await;
        assert!(matches!(first, Ok(Some(_))));

        // Second winner-takes-all attempt loses the guard.
        let second = store
            .transition_swap(swap.id, SwapStatus::Pending, SwapStatus::Rejected)
            .await;
        assert!(matches!(second, Ok(None)));
    }
}
