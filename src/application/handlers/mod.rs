//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod proposal;

#[cfg(test)]
pub(crate) mod mock_store;

pub use dashboard::{DashboardView, GetDashboardHandler, GetDashboardQuery};
pub use proposal::{
    CreateProposalCommand, CreateProposalHandler, GetProposalHandler, GetProposalQuery,
    ListProposalsHandler, ListProposalsQuery, ProposalList, TransitionProposalCommand,
    TransitionProposalHandler, TransitionProposalResult,
};
