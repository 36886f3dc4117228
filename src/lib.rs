//! Offerter - sales proposal backend.
//!
//! Contractors create proposals (quotes) for clients, track them on a
//! dashboard, and clients accept or reject them once.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
