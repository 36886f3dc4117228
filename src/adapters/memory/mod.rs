//! In-memory adapters for development and tests.

mod proposal_store;

pub use proposal_store::InMemoryProposalStore;
