//! HTTP routes for proposal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    accept_proposal, create_proposal, get_proposal, list_proposals, reject_proposal,
    ProposalHandlers,
};

/// Creates the proposal router, to be nested under `/api/proposals`.
pub fn proposal_routes(handlers: ProposalHandlers) -> Router {
    Router::new()
        .route("/", post(create_proposal).get(list_proposals))
        .route("/:id", get(get_proposal))
        .route("/:id/accept", post(accept_proposal))
        .route("/:id/reject", post(reject_proposal))
        .with_state(handlers)
}
