//! Proposal-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ProposalId, ValidationError};
use crate::ports::StoreError;

use super::ProposalStatus;

/// Proposal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProposalError {
    /// No proposal with this id.
    NotFound(ProposalId),
    /// Status change not permitted from the current status.
    InvalidTransition {
        from: ProposalStatus,
        to: ProposalStatus,
    },
    /// Creation input failed one or more field rules.
    ValidationFailed(Vec<ValidationError>),
    /// The store could not be reached or failed; nothing was changed.
    StoreUnavailable(String),
}

impl ProposalError {
    pub fn not_found(id: ProposalId) -> Self {
        ProposalError::NotFound(id)
    }
    pub fn invalid_transition(from: ProposalStatus, to: ProposalStatus) -> Self {
        ProposalError::InvalidTransition { from, to }
    }
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        ProposalError::ValidationFailed(errors)
    }
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        ProposalError::StoreUnavailable(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ProposalError::NotFound(_) => ErrorCode::ProposalNotFound,
            ProposalError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            ProposalError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            ProposalError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ProposalError::NotFound(id) => format!("Proposal not found: {}", id),
            ProposalError::InvalidTransition { from, to } => {
                format!("Cannot change status from {} to {}", from, to)
            }
            ProposalError::ValidationFailed(errors) => match errors.len() {
                1 => errors[0].to_string(),
                n => format!("Validation failed for {} fields", n),
            },
            ProposalError::StoreUnavailable(msg) => format!("Store unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for ProposalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ProposalError {}

impl From<StoreError> for ProposalError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ProposalError::NotFound(id),
            StoreError::Conflict { current, requested } => {
                ProposalError::invalid_transition(current, requested)
            }
            StoreError::Unavailable(msg) => ProposalError::StoreUnavailable(msg),
        }
    }
}

impl From<ProposalError> for DomainError {
    fn from(err: ProposalError) -> Self {
        let base = DomainError::new(err.code(), err.message());
        match err {
            ProposalError::NotFound(id) => base.with_detail("id", id.to_string()),
            ProposalError::InvalidTransition { from, to } => base
                .with_detail("current_status", from.as_str())
                .with_detail("requested_status", to.as_str()),
            ProposalError::ValidationFailed(errors) => errors
                .into_iter()
                .fold(base, |acc, e| {
                    let field = e.field().to_string();
                    acc.with_detail(field, e.to_string())
                }),
            ProposalError::StoreUnavailable(_) => base,
        }
    }
}
