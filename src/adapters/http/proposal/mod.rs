//! HTTP adapter for proposal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListProposalsParams, ProposalListResponse, ProposalResponse, TransitionResponse};
pub use handlers::ProposalHandlers;
pub use routes::proposal_routes;
