//! Proposal command and query handlers.

mod create_proposal;
mod get_proposal;
mod list_proposals;
mod transition_proposal;

pub use create_proposal::{CreateProposalCommand, CreateProposalHandler};
pub use get_proposal::{GetProposalHandler, GetProposalQuery};
pub use list_proposals::{ListProposalsHandler, ListProposalsQuery, ProposalList};
pub use transition_proposal::{
    TransitionProposalCommand, TransitionProposalHandler, TransitionProposalResult,
};
