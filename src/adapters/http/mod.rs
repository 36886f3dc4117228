//! HTTP adapter - REST API over the application handlers.
//!
//! ```text
//! GET  /health
//! GET  /api/catalog
//! POST /api/proposals              create draft
//! GET  /api/proposals?status=      owner's list, newest first
//! GET  /api/proposals/:id          detail with price
//! POST /api/proposals/:id/accept
//! POST /api/proposals/:id/reject
//! GET  /api/dashboard              owner's totals and recent proposals
//! ```

pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod middleware;
pub mod proposal;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::json;

use crate::application::handlers::{
    CreateProposalHandler, GetDashboardHandler, GetProposalHandler, ListProposalsHandler,
    TransitionProposalHandler,
};
use crate::ports::ProposalStore;

pub use dashboard::DashboardHandlers;
pub use error::{ApiError, ErrorResponse};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use proposal::ProposalHandlers;

/// Builds the API router over `store`, authenticating with `auth`.
pub fn api_router(store: Arc<dyn ProposalStore>, auth: AuthState) -> Router {
    let proposals = ProposalHandlers::new(
        Arc::new(CreateProposalHandler::new(store.clone())),
        Arc::new(GetProposalHandler::new(store.clone())),
        Arc::new(ListProposalsHandler::new(store.clone())),
        Arc::new(TransitionProposalHandler::new(store.clone())),
    );
    let dashboard = DashboardHandlers::new(Arc::new(GetDashboardHandler::new(store)));

    let api = Router::new()
        .nest("/proposals", proposal::proposal_routes(proposals))
        .nest("/dashboard", dashboard::dashboard_routes(dashboard))
        .nest("/catalog", catalog::catalog_routes())
        .layer(from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
