//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - bearer token validators
//! - `http` - axum REST API
//! - `memory` - in-memory proposal store
//! - `postgres` - PostgreSQL proposal store and pool setup

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryProposalStore;
pub use postgres::PostgresProposalStore;
