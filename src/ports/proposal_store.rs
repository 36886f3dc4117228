//! Proposal store port.
//!
//! Defines the contract for persisting and retrieving proposal records.
//! Implementations own id and creation-time assignment.
//!
//! # Design
//!
//! - **Owner-scoped listing**: list views only ever read one owner's records
//! - **Conditional status writes**: `update_status` is a compare-and-swap so
//!   two reviewers deciding at the same time cannot overwrite each other

use async_trait::async_trait;

use crate::domain::foundation::{ProposalId, UserId};
use crate::domain::proposal::{NewProposal, Proposal, ProposalStatus};

/// Repository port for proposal persistence.
#[async_trait]
pub trait ProposalStore: Send + Sync {
    /// Stores a new proposal as a draft.
    ///
    /// The store assigns the id and creation time and returns the stored
    /// record.
    ///
    /// # Errors
    ///
    /// - `Unavailable` on persistence failure
    async fn create(&self, proposal: NewProposal) -> Result<Proposal, StoreError>;

    /// Find a proposal by its ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError>;

    /// All proposals owned by `owner_id`, in no particular order.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Proposal>, StoreError>;

    /// Sets the status to `new_status` only if it is currently `expected`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no proposal has this id
    /// - `Conflict` if the stored status is no longer `expected`; nothing
    ///   is written
    /// - `Unavailable` on persistence failure
    async fn update_status(
        &self,
        id: &ProposalId,
        expected: ProposalStatus,
        new_status: ProposalStatus,
    ) -> Result<(), StoreError>;
}

/// Errors returned by proposal stores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Proposal not found: {0}")]
    NotFound(ProposalId),

    #[error("Proposal status is {current}, cannot set {requested}")]
    Conflict {
        current: ProposalStatus,
        requested: ProposalStatus,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unavailable(err.to_string())
    }
}
