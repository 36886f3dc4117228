//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, auth)
//! - `proposal` - Proposal record, status lifecycle, pricing and validation
//! - `dashboard` - Statistics, filtering and ordering over proposal sets

pub mod dashboard;
pub mod foundation;
pub mod proposal;
