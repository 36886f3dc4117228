//! HTTP handlers for proposal endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::{
    CreateProposalCommand, CreateProposalHandler, GetProposalHandler, GetProposalQuery,
    ListProposalsHandler, ListProposalsQuery, TransitionProposalCommand,
    TransitionProposalHandler,
};
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, DomainError, ProposalId};
use crate::domain::proposal::{ProposalInput, ProposalStatus};

use super::dto::{ListProposalsParams, ProposalListResponse, ProposalResponse, TransitionResponse};

const REQUEST_ID_HEADER: &str = "x-request-id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProposalHandlers {
    create_handler: Arc<CreateProposalHandler>,
    get_handler: Arc<GetProposalHandler>,
    list_handler: Arc<ListProposalsHandler>,
    transition_handler: Arc<TransitionProposalHandler>,
}

impl ProposalHandlers {
    pub fn new(
        create_handler: Arc<CreateProposalHandler>,
        get_handler: Arc<GetProposalHandler>,
        list_handler: Arc<ListProposalsHandler>,
        transition_handler: Arc<TransitionProposalHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            transition_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/proposals - Create a draft proposal
pub async fn create_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    body: Result<Json<ProposalInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let metadata = command_metadata(&user, &headers);
    match handlers
        .create_handler
        .handle(CreateProposalCommand { input }, metadata)
        .await
    {
        Ok(proposal) => {
            (StatusCode::CREATED, Json(ProposalResponse::from(proposal))).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// GET /api/proposals?status= - List the caller's proposals, newest first
pub async fn list_proposals(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListProposalsParams>,
) -> Response {
    let status = match params.status_filter() {
        Ok(status) => status,
        Err(e) => {
            let body = ErrorResponse::from(DomainError::from(e));
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let query = ListProposalsQuery {
        owner_id: user.id,
        status,
    };
    match handlers.list_handler.handle(query).await {
        Ok(list) => Json(ProposalListResponse::from(list)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// GET /api/proposals/:id - Proposal detail with price breakdown
pub async fn get_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(proposal_id): Path<String>,
) -> Response {
    let Ok(proposal_id) = proposal_id.parse::<ProposalId>() else {
        return bad_request("Invalid proposal ID");
    };

    match handlers.get_handler.handle(GetProposalQuery { proposal_id }).await {
        Ok(proposal) => Json(ProposalResponse::from(proposal)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

/// POST /api/proposals/:id/accept
pub async fn accept_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(proposal_id): Path<String>,
) -> Response {
    transition(handlers, user, headers, proposal_id, ProposalStatus::Accepted).await
}

/// POST /api/proposals/:id/reject
pub async fn reject_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(user): RequireAuth,
    headers: HeaderMap,
    Path(proposal_id): Path<String>,
) -> Response {
    transition(handlers, user, headers, proposal_id, ProposalStatus::Rejected).await
}

async fn transition(
    handlers: ProposalHandlers,
    user: AuthenticatedUser,
    headers: HeaderMap,
    proposal_id: String,
    target: ProposalStatus,
) -> Response {
    let Ok(proposal_id) = proposal_id.parse::<ProposalId>() else {
        return bad_request("Invalid proposal ID");
    };

    let metadata = command_metadata(&user, &headers);
    let cmd = TransitionProposalCommand {
        proposal_id,
        target,
    };
    match handlers.transition_handler.handle(cmd, metadata).await {
        Ok(result) => Json(TransitionResponse::from(result)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

/// Metadata for a command issued by `user`. The request id header becomes
/// the correlation id; one is generated when it is absent.
fn command_metadata(user: &AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let correlation_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    CommandMetadata::new(user.id.clone())
        .with_correlation_id(correlation_id)
        .with_source("http")
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
}
