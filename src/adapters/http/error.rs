//! JSON error bodies and the mapping from proposal errors to HTTP status.

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::DomainError;
use crate::domain::proposal::ProposalError;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Per-field messages for validation failures, ids and statuses otherwise.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            details: err.details,
        }
    }
}

/// Proposal error on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub ProposalError);

impl From<ProposalError> for ApiError {
    fn from(err: ProposalError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ProposalError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProposalError::NotFound(_) => StatusCode::NOT_FOUND,
            ProposalError::InvalidTransition { .. } => StatusCode::CONFLICT,
            ProposalError::StoreUnavailable(msg) => {
                tracing::error!(error = %msg, "Proposal store unavailable");
                let body = ErrorResponse::new(
                    self.0.code().to_string(),
                    "The service is temporarily unavailable, please try again",
                );
                return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
            }
        };

        let body = ErrorResponse::from(DomainError::from(self.0));
        (status, Json(body)).into_response()
    }
}
