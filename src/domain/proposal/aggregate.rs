//! Proposal record.
//!
//! A proposal is a contractor's quote to a client. It is created as a
//! draft, may be accepted or rejected once, and is never deleted.
//!
//! # Ownership
//!
//! Each proposal has exactly one owner, the contractor who created it.
//! The owner and creation time never change after the store assigns them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::foundation::{ProposalId, StateMachine, Timestamp, UserId};

use super::{compute_total, PriceBreakdown, PropertyType, ProposalError, ProposalStatus, StoredAmount};

/// Client, scope and price terms of a proposal.
///
/// Field names serialize in camelCase to match the persisted document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDetails {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub work_address: String,
    pub amount: StoredAmount,
    pub property_type: PropertyType,
    pub category: String,
    pub sub_category: String,
    pub include_materials: bool,
    #[serde(rename = "includeVAT")]
    pub include_vat: bool,
    pub general_info: String,
    pub start_date: Option<NaiveDate>,
    pub validity_period: String,
}

/// A validated proposal that has not been stored yet.
///
/// The store assigns the id and creation time; the status always starts
/// as draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProposal {
    pub owner_id: UserId,
    pub details: ProposalDetails,
}

impl NewProposal {
    pub fn new(owner_id: UserId, details: ProposalDetails) -> Self {
        Self { owner_id, details }
    }

    /// Builds the stored record once the store has assigned id and time.
    pub fn into_proposal(self, id: ProposalId, created_at: Timestamp) -> Proposal {
        Proposal::reconstitute(
            id,
            self.owner_id,
            self.details,
            ProposalStatus::Draft,
            Some(created_at),
        )
    }
}

/// Proposal record as persisted.
///
/// # Invariants
///
/// - `status` only moves draft -> accepted or draft -> rejected
/// - `owner_id` and `created_at` are never changed after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    id: ProposalId,
    owner_id: UserId,
    #[serde(flatten)]
    details: ProposalDetails,
    status: ProposalStatus,
    /// Missing on documents written before the store assigned timestamps.
    created_at: Option<Timestamp>,
}

impl Proposal {
    /// Reconstitute a proposal from persistence (no validation).
    pub fn reconstitute(
        id: ProposalId,
        owner_id: UserId,
        details: ProposalDetails,
        status: ProposalStatus,
        created_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            owner_id,
            details,
            status,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProposalId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn details(&self) -> &ProposalDetails {
        &self.details
    }

    pub fn amount(&self) -> &StoredAmount {
        &self.details.amount
    }

    pub fn status(&self) -> ProposalStatus {
        self.status
    }

    pub fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }

    /// Checks if the given user created this proposal.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Price breakdown for display, or `None` when the stored amount is unusable.
    pub fn price(&self) -> Option<PriceBreakdown> {
        self.details
            .amount
            .amount()
            .and_then(|a| compute_total(a, self.details.include_vat))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns a copy with `status` replaced by `target`.
    ///
    /// The result is not durable until written through the store's
    /// conditional status update.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the proposal is a draft and `target` is
    ///   accepted or rejected
    pub fn transition(&self, target: ProposalStatus) -> Result<Proposal, ProposalError> {
        let status = self
            .status
            .transition_to(target)
            .map_err(|_| ProposalError::invalid_transition(self.status, target))?;

        Ok(Proposal {
            status,
            ..self.clone()
        })
    }
}

/// Message shown to the reviewer after a successful status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl TransitionNotice {
    /// Notice for a proposal that just moved to `status`.
    pub fn for_status(status: ProposalStatus) -> Option<Self> {
        match status {
            ProposalStatus::Accepted => Some(Self {
                title: "Offert godkänd!",
                description:
                    "Du har godkänt offerten. Entreprenören kommer att kontakta dig snart.",
            }),
            ProposalStatus::Rejected => Some(Self {
                title: "Offert avböjd",
                description: "Du har avböjt offerten.",
            }),
            ProposalStatus::Draft => None,
        }
    }
}
