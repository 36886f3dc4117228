//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, transition) write; query handlers read.

pub mod handlers;

pub use handlers::{
    CreateProposalCommand, CreateProposalHandler, DashboardView, GetDashboardHandler,
    GetDashboardQuery, GetProposalHandler, GetProposalQuery, ListProposalsHandler,
    ListProposalsQuery, ProposalList, TransitionProposalCommand, TransitionProposalHandler,
    TransitionProposalResult,
};
