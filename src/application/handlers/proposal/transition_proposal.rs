//! TransitionProposalHandler - Command handler for accepting or rejecting a draft.
//!
//! The status check runs twice: once against the record just read, and once
//! inside the store's conditional update. The second check catches a decision
//! made by someone else between the read and the write.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, ProposalId};
use crate::domain::proposal::{Proposal, ProposalError, ProposalStatus, TransitionNotice};
use crate::ports::ProposalStore;

/// Command to move a proposal to `target`.
#[derive(Debug, Clone)]
pub struct TransitionProposalCommand {
    pub proposal_id: ProposalId,
    pub target: ProposalStatus,
}

/// Result of a successful transition.
#[derive(Debug, Clone)]
pub struct TransitionProposalResult {
    pub proposal: Proposal,
    pub notice: Option<TransitionNotice>,
}

/// Handler for proposal status transitions.
pub struct TransitionProposalHandler {
    store: Arc<dyn ProposalStore>,
}

impl TransitionProposalHandler {
    pub fn new(store: Arc<dyn ProposalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: TransitionProposalCommand,
        metadata: CommandMetadata,
    ) -> Result<TransitionProposalResult, ProposalError> {
        let current = self
            .store
            .get_by_id(&cmd.proposal_id)
            .await?
            .ok_or_else(|| ProposalError::not_found(cmd.proposal_id.clone()))?;

        let updated = current.transition(cmd.target).map_err(|err| {
            tracing::warn!(
                correlation_id = %metadata.correlation_id(),
                proposal_id = %cmd.proposal_id,
                from = %current.status(),
                to = %cmd.target,
                "Rejected proposal status change"
            );
            err
        })?;

        self.store
            .update_status(&cmd.proposal_id, current.status(), updated.status())
            .await
            .map_err(|err| {
                tracing::warn!(
                    correlation_id = %metadata.correlation_id(),
                    proposal_id = %cmd.proposal_id,
                    error = %err,
                    "Conditional status update failed"
                );
                ProposalError::from(err)
            })?;

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            proposal_id = %cmd.proposal_id,
            user_id = %metadata.user_id,
            status = %updated.status(),
            "Proposal status changed"
        );

        Ok(TransitionProposalResult {
            notice: TransitionNotice::for_status(updated.status()),
            proposal: updated,
        })
    }
}
