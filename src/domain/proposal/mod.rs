//! Proposal domain module.
//!
//! A proposal ("offert") is a contractor's quote to a client. This module
//! holds the record itself, its status lifecycle, pricing and the rules
//! applied when a new proposal is submitted.

mod aggregate;
mod amount;
mod category;
mod errors;
mod pricing;
mod property_type;
mod status;
mod validation;

pub use aggregate::{NewProposal, Proposal, ProposalDetails, TransitionNotice};
pub use amount::{Amount, StoredAmount};
pub use category::{is_known_category, CATEGORIES};
pub use errors::ProposalError;
pub use pricing::{compute_total, PriceBreakdown, VAT_RATE};
pub use property_type::PropertyType;
pub use status::ProposalStatus;
pub use validation::{validate_for_creation, ProposalInput};

#[cfg(test)]
pub(crate) use aggregate::test_support;
