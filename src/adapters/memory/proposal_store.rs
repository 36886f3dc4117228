//! In-Memory Proposal Store
//!
//! Keeps proposals in a map behind a single lock. Status updates check and
//! write under the same write guard, so the compare-and-swap holds across
//! concurrent requests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ProposalId, Timestamp, UserId};
use crate::domain::proposal::{NewProposal, Proposal, ProposalStatus};
use crate::ports::{ProposalStore, StoreError};

/// In-memory storage for proposals
#[derive(Debug, Clone, Default)]
pub struct InMemoryProposalStore {
    proposals: Arc<RwLock<HashMap<ProposalId, Proposal>>>,
}

impl InMemoryProposalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, keeping their ids and timestamps.
    pub async fn seed(&self, proposals: impl IntoIterator<Item = Proposal>) {
        let mut map = self.proposals.write().await;
        for proposal in proposals {
            map.insert(proposal.id().clone(), proposal);
        }
    }

    /// Number of stored proposals
    pub async fn len(&self) -> usize {
        self.proposals.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.proposals.read().await.is_empty()
    }
}

#[async_trait]
impl ProposalStore for InMemoryProposalStore {
    async fn create(&self, proposal: NewProposal) -> Result<Proposal, StoreError> {
        let stored = proposal.into_proposal(ProposalId::generate(), Timestamp::now());
        self.proposals
            .write()
            .await
            .insert(stored.id().clone(), stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError> {
        Ok(self.proposals.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Proposal>, StoreError> {
        let proposals = self.proposals.read().await;
        Ok(proposals
            .values()
            .filter(|p| p.is_owner(owner_id))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: &ProposalId,
        expected: ProposalStatus,
        new_status: ProposalStatus,
    ) -> Result<(), StoreError> {
        let mut proposals = self.proposals.write().await;
        let current = proposals
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if current.status() != expected {
            return Err(StoreError::Conflict {
                current: current.status(),
                requested: new_status,
            });
        }

        let updated = Proposal::reconstitute(
            current.id().clone(),
            current.owner_id().clone(),
            current.details().clone(),
            new_status,
            current.created_at().copied(),
        );
        proposals.insert(id.clone(), updated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::test_support::{details, proposal};

    fn owner(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_time_and_draft_status() {
        let store = InMemoryProposalStore::new();

        let stored = store
            .create(NewProposal::new(owner("owner-1"), details("1000")))
            .await
            .unwrap();

        assert_eq!(stored.status(), ProposalStatus::Draft);
        assert!(stored.created_at().is_some());
        assert_eq!(
            store.get_by_id(stored.id()).await.unwrap(),
            Some(stored.clone())
        );
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let store = InMemoryProposalStore::new();
        let a = store
            .create(NewProposal::new(owner("owner-1"), details("1")))
            .await
            .unwrap();
        let b = store
            .create(NewProposal::new(owner("owner-1"), details("1")))
            .await
            .unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn list_by_owner_excludes_other_owners() {
        let store = InMemoryProposalStore::new();
        store
            .create(NewProposal::new(owner("owner-1"), details("1")))
            .await
            .unwrap();
        store
            .create(NewProposal::new(owner("owner-2"), details("2")))
            .await
            .unwrap();

        let listed = store.list_by_owner(&owner("owner-1")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_owner(&owner("owner-1")));
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let store = InMemoryProposalStore::new();
        let id = ProposalId::new("missing").unwrap();
        assert_eq!(store.get_by_id(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_status_applies_when_expected_matches() {
        let store = InMemoryProposalStore::new();
        store
            .seed([proposal("p-1", ProposalStatus::Draft, "1000")])
            .await;
        let id = ProposalId::new("p-1").unwrap();

        store
            .update_status(&id, ProposalStatus::Draft, ProposalStatus::Accepted)
            .await
            .unwrap();

        let stored = store.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ProposalStatus::Accepted);
    }

    #[tokio::test]
    async fn update_status_conflicts_when_status_moved_on() {
        let store = InMemoryProposalStore::new();
        store
            .seed([proposal("p-1", ProposalStatus::Rejected, "1000")])
            .await;
        let id = ProposalId::new("p-1").unwrap();

        let err = store
            .update_status(&id, ProposalStatus::Draft, ProposalStatus::Accepted)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::Conflict {
                current: ProposalStatus::Rejected,
                requested: ProposalStatus::Accepted,
            }
        );
        let stored = store.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.status(), ProposalStatus::Rejected);
    }

    #[tokio::test]
    async fn update_status_on_unknown_id_is_not_found() {
        let store = InMemoryProposalStore::new();
        let id = ProposalId::new("missing").unwrap();

        let err = store
            .update_status(&id, ProposalStatus::Draft, ProposalStatus::Accepted)
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn concurrent_decisions_only_one_wins() {
        let store = InMemoryProposalStore::new();
        store
            .seed([proposal("p-1", ProposalStatus::Draft, "1000")])
            .await;
        let id = ProposalId::new("p-1").unwrap();

        let accept = {
            let store = store.clone();
            let id = id.clone();
            tokio::spawn(async move {
                store
                    .update_status(&id, ProposalStatus::Draft, ProposalStatus::Accepted)
                    .await
            })
        };
        let reject = {
            let store = store.clone();
            let id = id.clone();
            tokio::spawn(async move {
                store
                    .update_status(&id, ProposalStatus::Draft, ProposalStatus::Rejected)
                    .await
            })
        };

        let results = [accept.await.unwrap(), reject.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);

        let stored = store.get_by_id(&id).await.unwrap().unwrap();
        assert_ne!(stored.status(), ProposalStatus::Draft);
    }
}
