//! CreateProposalHandler - Command handler for submitting new proposals.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, Timestamp};
use crate::domain::proposal::{
    validate_for_creation, NewProposal, Proposal, ProposalError, ProposalInput,
};
use crate::ports::ProposalStore;

/// Command to create a new proposal owned by the acting user.
#[derive(Debug, Clone)]
pub struct CreateProposalCommand {
    pub input: ProposalInput,
}

/// Handler for creating proposals.
pub struct CreateProposalHandler {
    store: Arc<dyn ProposalStore>,
}

impl CreateProposalHandler {
    pub fn new(store: Arc<dyn ProposalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateProposalCommand,
        metadata: CommandMetadata,
    ) -> Result<Proposal, ProposalError> {
        let today = Timestamp::now().date();
        let details = validate_for_creation(&cmd.input, today).map_err(|errors| {
            tracing::debug!(
                correlation_id = %metadata.correlation_id(),
                failed_fields = errors.len(),
                "Proposal input rejected"
            );
            ProposalError::validation(errors)
        })?;

        let proposal = self
            .store
            .create(NewProposal::new(metadata.user_id.clone(), details))
            .await?;

        tracing::info!(
            correlation_id = %metadata.correlation_id(),
            proposal_id = %proposal.id(),
            owner_id = %proposal.owner_id(),
            "Proposal created"
        );
        Ok(proposal)
    }
}
