//! Ports (interfaces) between the application core and infrastructure.
//!
//! - `ProposalStore` - proposal persistence with conditional status updates
//! - `SessionValidator` - bearer token validation

mod proposal_store;
mod session_validator;

pub use proposal_store::{ProposalStore, StoreError};
pub use session_validator::SessionValidator;
