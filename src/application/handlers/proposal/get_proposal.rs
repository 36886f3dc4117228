//! GetProposalHandler - Query handler for a single proposal.
//!
//! Any authenticated user holding the id may read the proposal: the client
//! reviewing it is not its owner.

use std::sync::Arc;

use crate::domain::foundation::ProposalId;
use crate::domain::proposal::{Proposal, ProposalError};
use crate::ports::ProposalStore;

/// Query to get a proposal by ID.
#[derive(Debug, Clone)]
pub struct GetProposalQuery {
    pub proposal_id: ProposalId,
}

/// Handler for retrieving proposal details.
pub struct GetProposalHandler {
    store: Arc<dyn ProposalStore>,
}

impl GetProposalHandler {
    pub fn new(store: Arc<dyn ProposalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetProposalQuery) -> Result<Proposal, ProposalError> {
        self.store
            .get_by_id(&query.proposal_id)
            .await?
            .ok_or_else(|| ProposalError::not_found(query.proposal_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mock_store::MockProposalStore;
    use crate::domain::proposal::test_support::proposal;
    use crate::domain::proposal::ProposalStatus;

    #[tokio::test]
    async fn returns_existing_proposal() {
        let stored = proposal("p-1", ProposalStatus::Draft, "1000");
        let handler = GetProposalHandler::new(Arc::new(MockProposalStore::with_proposals(vec![
            stored.clone(),
        ])));

        let found = handler
            .handle(GetProposalQuery {
                proposal_id: ProposalId::new("p-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn missing_proposal_is_not_found() {
        let handler = GetProposalHandler::new(Arc::new(MockProposalStore::new()));
        let id = ProposalId::new("missing").unwrap();

        let err = handler
            .handle(GetProposalQuery {
                proposal_id: id.clone(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ProposalError::NotFound(id));
    }

    #[tokio::test]
    async fn store_failure_is_unavailable() {
        let handler = GetProposalHandler::new(Arc::new(MockProposalStore::failing()));

        let err = handler
            .handle(GetProposalQuery {
                proposal_id: ProposalId::new("p-1").unwrap(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProposalError::StoreUnavailable(_)));
    }
}
