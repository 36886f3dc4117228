//! Response body for the dashboard endpoint.

use serde::Serialize;

use crate::adapters::http::proposal::ProposalResponse;
use crate::application::handlers::DashboardView;
use crate::domain::dashboard::ProposalStats;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub stats: ProposalStats,
    /// Latest proposals, newest first.
    pub recent: Vec<ProposalResponse>,
}

impl From<DashboardView> for DashboardResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            stats: view.stats,
            recent: view.recent.into_iter().map(ProposalResponse::from).collect(),
        }
    }
}
