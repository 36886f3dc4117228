//! ListProposalsHandler - Query handler for the owner's proposal list.

use std::sync::Arc;

use crate::domain::dashboard::{count_by_status, filter_by_status, sort_by_recency, StatusCounts};
use crate::domain::foundation::UserId;
use crate::domain::proposal::{Proposal, ProposalError, ProposalStatus};
use crate::ports::ProposalStore;

/// Query for one owner's proposals, optionally narrowed to a status.
#[derive(Debug, Clone)]
pub struct ListProposalsQuery {
    pub owner_id: UserId,
    pub status: Option<ProposalStatus>,
}

/// Filtered proposals, newest first, plus counts over the unfiltered set.
#[derive(Debug, Clone)]
pub struct ProposalList {
    pub items: Vec<Proposal>,
    pub counts: StatusCounts,
}

/// Handler for listing proposals.
pub struct ListProposalsHandler {
    store: Arc<dyn ProposalStore>,
}

impl ListProposalsHandler {
    pub fn new(store: Arc<dyn ProposalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListProposalsQuery) -> Result<ProposalList, ProposalError> {
        let proposals = self.store.list_by_owner(&query.owner_id).await?;
        let counts = count_by_status(&proposals);
        let items = sort_by_recency(filter_by_status(proposals, query.status));

        Ok(ProposalList { items, counts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mock_store::MockProposalStore;
    use crate::domain::foundation::{ProposalId, Timestamp};
    use crate::domain::proposal::test_support::{details, proposal_on};

    fn owned_by(id: &str, owner: &str, status: ProposalStatus) -> Proposal {
        Proposal::reconstitute(
            ProposalId::new(id).unwrap(),
            UserId::new(owner).unwrap(),
            details("100"),
            status,
            Some(Timestamp::now()),
        )
    }

    #[tokio::test]
    async fn lists_only_the_owners_proposals() {
        let store = MockProposalStore::with_proposals(vec![
            owned_by("mine", "owner-1", ProposalStatus::Draft),
            owned_by("theirs", "owner-2", ProposalStatus::Draft),
        ]);
        let handler = ListProposalsHandler::new(Arc::new(store));

        let list = handler
            .handle(ListProposalsQuery {
                owner_id: UserId::new("owner-1").unwrap(),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id().as_str(), "mine");
        assert_eq!(list.counts.all, 1);
    }

    #[tokio::test]
    async fn returns_newest_first() {
        let store = MockProposalStore::with_proposals(vec![
            proposal_on("jan", 2024, 1, 1),
            proposal_on("mar", 2024, 3, 1),
            proposal_on("feb", 2024, 2, 1),
        ]);
        let handler = ListProposalsHandler::new(Arc::new(store));

        let list = handler
            .handle(ListProposalsQuery {
                owner_id: UserId::new("owner-1").unwrap(),
                status: None,
            })
            .await
            .unwrap();

        let ids: Vec<_> = list.items.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["mar", "feb", "jan"]);
    }

    #[tokio::test]
    async fn status_filter_does_not_change_counts() {
        let store = MockProposalStore::with_proposals(vec![
            owned_by("a", "owner-1", ProposalStatus::Draft),
            owned_by("b", "owner-1", ProposalStatus::Accepted),
            owned_by("c", "owner-1", ProposalStatus::Rejected),
        ]);
        let handler = ListProposalsHandler::new(Arc::new(store));

        let list = handler
            .handle(ListProposalsQuery {
                owner_id: UserId::new("owner-1").unwrap(),
                status: Some(ProposalStatus::Accepted),
            })
            .await
            .unwrap();

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].status(), ProposalStatus::Accepted);
        assert_eq!(
            list.counts,
            StatusCounts {
                all: 3,
                draft: 1,
                accepted: 1,
                rejected: 1
            }
        );
    }

    #[tokio::test]
    async fn store_failure_is_unavailable() {
        let handler = ListProposalsHandler::new(Arc::new(MockProposalStore::failing()));

        let result = handler
            .handle(ListProposalsQuery {
                owner_id: UserId::new("owner-1").unwrap(),
                status: None,
            })
            .await;

        assert!(matches!(result, Err(ProposalError::StoreUnavailable(_))));
    }
}
