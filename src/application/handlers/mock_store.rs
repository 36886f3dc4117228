//! Scriptable proposal store for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{ProposalId, Timestamp, UserId};
use crate::domain::proposal::{NewProposal, Proposal, ProposalStatus};
use crate::ports::{ProposalStore, StoreError};

pub struct MockProposalStore {
    proposals: Mutex<Vec<Proposal>>,
    fail_all: bool,
    /// Status reported by the next `update_status`, simulating a concurrent writer.
    conflicting_status: Option<ProposalStatus>,
}

impl MockProposalStore {
    pub fn new() -> Self {
        Self {
            proposals: Mutex::new(Vec::new()),
            fail_all: false,
            conflicting_status: None,
        }
    }

    pub fn with_proposals(proposals: Vec<Proposal>) -> Self {
        Self {
            proposals: Mutex::new(proposals),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn with_concurrent_decision(mut self, status: ProposalStatus) -> Self {
        self.conflicting_status = Some(status);
        self
    }

    pub fn stored(&self) -> Vec<Proposal> {
        self.proposals.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail_all {
            return Err(StoreError::Unavailable("Simulated store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProposalStore for MockProposalStore {
    async fn create(&self, proposal: NewProposal) -> Result<Proposal, StoreError> {
        self.check_available()?;
        let stored = proposal.into_proposal(ProposalId::generate(), Timestamp::now());
        self.proposals.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn get_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError> {
        self.check_available()?;
        Ok(self
            .proposals
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Proposal>, StoreError> {
        self.check_available()?;
        Ok(self
            .proposals
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: &ProposalId,
        expected: ProposalStatus,
        new_status: ProposalStatus,
    ) -> Result<(), StoreError> {
        self.check_available()?;
        if let Some(current) = self.conflicting_status {
            return Err(StoreError::Conflict {
                current,
                requested: new_status,
            });
        }

        let mut proposals = self.proposals.lock().unwrap();
        let pos = proposals
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let current = &proposals[pos];
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
        proposals[pos] = updated;
        Ok(())
    }
}
