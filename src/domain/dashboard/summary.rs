//! Dashboard statistics over one owner's proposals.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::foundation::ProposalId;
use crate::domain::proposal::{Proposal, ProposalStatus};

/// Totals shown on the contractor dashboard.
///
/// Rejected proposals only contribute to `total_count`. Proposals whose
/// stored amount cannot be parsed count as zero in the value buckets and
/// are tallied in `invalid_amount_count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalStats {
    pub accepted_value: Decimal,
    pub pending_value: Decimal,
    pub accepted_count: usize,
    pub pending_count: usize,
    /// Drafts still waiting for the client's decision.
    pub needs_attention_count: usize,
    pub total_count: usize,
    pub invalid_amount_count: usize,
}

/// Computes dashboard statistics in a single pass.
pub fn summarize(records: &[Proposal]) -> ProposalStats {
    records.iter().fold(ProposalStats::default(), |mut stats, proposal| {
        stats.total_count += 1;

        let amount = proposal.amount();
        if !amount.is_valid() {
            stats.invalid_amount_count += 1;
            tracing::warn!(
                proposal_id = %proposal.id(),
                stored_amount = %amount.as_stored(),
                "Proposal amount is not a valid number, counted as 0"
            );
        }
        let value = amount.value_or_zero();

        match proposal.status() {
            ProposalStatus::Accepted => {
                stats.accepted_value = add_value(stats.accepted_value, value, proposal.id());
                stats.accepted_count += 1;
            }
            status if status.is_pending() => {
                stats.pending_value = add_value(stats.pending_value, value, proposal.id());
                stats.pending_count += 1;
                stats.needs_attention_count += 1;
            }
            _ => {}
        }
        stats
    })
}

/// Adds `value` to a value bucket, saturating at `Decimal::MAX`.
///
/// Values are non-negative, so the saturated total is the same whatever
/// order the records arrive in.
fn add_value(total: Decimal, value: Decimal, proposal_id: &ProposalId) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        tracing::warn!(
            proposal_id = %proposal_id,
            "Dashboard value total overflowed, capped at maximum"
        );
        Decimal::MAX
    })
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
