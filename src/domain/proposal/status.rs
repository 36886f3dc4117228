//! ProposalStatus enum for tracking the client's decision on a proposal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Lifecycle status of a proposal.
///
/// Stored and serialized as the literals `draft`, `accepted` and `rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    #[default]
    Draft,
    Accepted,
    Rejected,
}

impl ProposalStatus {
    /// All statuses in display order.
    pub const ALL: [ProposalStatus; 3] = [
        ProposalStatus::Draft,
        ProposalStatus::Accepted,
        ProposalStatus::Rejected,
    ];

    /// Returns the persisted literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
        }
    }

    /// Returns true while the client has not decided yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, ProposalStatus::Draft)
    }
}

impl StateMachine for ProposalStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ProposalStatus::*;
        matches!((self, target), (Draft, Accepted) | (Draft, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ProposalStatus::*;
        match self {
            Draft => vec![Accepted, Rejected],
            Accepted | Rejected => vec![],
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProposalStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProposalStatus::Draft),
            "accepted" => Ok(ProposalStatus::Accepted),
            "rejected" => Ok(ProposalStatus::Rejected),
            other => Err(ValidationError::not_allowed("status", other)),
        }
    }
}
