//! Request and response bodies for proposal endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ProposalList, TransitionProposalResult};
use crate::domain::dashboard::StatusCounts;
use crate::domain::foundation::ValidationError;
use crate::domain::proposal::{PriceBreakdown, Proposal, ProposalStatus, TransitionNotice};

/// A proposal with its computed price.
///
/// `price` is `null` when the stored amount cannot be read as a number.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalResponse {
    #[serde(flatten)]
    pub proposal: Proposal,
    pub price: Option<PriceBreakdown>,
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        Self {
            price: proposal.price(),
            proposal,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProposalListResponse {
    pub items: Vec<ProposalResponse>,
    pub counts: StatusCounts,
}

impl From<ProposalList> for ProposalListResponse {
    fn from(list: ProposalList) -> Self {
        Self {
            items: list.items.into_iter().map(ProposalResponse::from).collect(),
            counts: list.counts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionResponse {
    pub proposal: ProposalResponse,
    pub notice: Option<TransitionNotice>,
}

impl From<TransitionProposalResult> for TransitionResponse {
    fn from(result: TransitionProposalResult) -> Self {
        Self {
            proposal: result.proposal.into(),
            notice: result.notice,
        }
    }
}

/// Query string for `GET /api/proposals`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProposalsParams {
    /// `draft`, `accepted`, `rejected`, or `all`/absent for no filter.
    pub status: Option<String>,
}

impl ListProposalsParams {
    pub fn status_filter(&self) -> Result<Option<ProposalStatus>, ValidationError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => raw.parse::<ProposalStatus>().map(Some),
        }
    }
}
