//! GetDashboardHandler - Query handler for the contractor dashboard.
//!
//! Returns statistics over all of the owner's proposals together with the
//! most recent ones.

use std::sync::Arc;

use crate::domain::dashboard::{recent, summarize, ProposalStats, RECENT_LIMIT};
use crate::domain::foundation::UserId;
use crate::domain::proposal::{Proposal, ProposalError};
use crate::ports::ProposalStore;

/// Query to get the dashboard for one owner.
#[derive(Debug, Clone)]
pub struct GetDashboardQuery {
    pub owner_id: UserId,
}

/// Dashboard data.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: ProposalStats,
    pub recent: Vec<Proposal>,
}

/// Handler for retrieving the dashboard.
pub struct GetDashboardHandler {
    store: Arc<dyn ProposalStore>,
}

impl GetDashboardHandler {
    pub fn new(store: Arc<dyn ProposalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> Result<DashboardView, ProposalError> {
        let proposals = self.store.list_by_owner(&query.owner_id).await?;
        let stats = summarize(&proposals);
        if stats.invalid_amount_count > 0 {
            tracing::warn!(
                owner_id = %query.owner_id,
                invalid_amounts = stats.invalid_amount_count,
                "Dashboard totals exclude proposals with unparseable amounts"
            );
        }

        Ok(DashboardView {
            stats,
            recent: recent(proposals, RECENT_LIMIT),
        })
    }
}
