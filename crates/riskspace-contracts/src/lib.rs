//! # riskspace-contracts
//!
//! Shared types, schemas, and contracts for the RISKSPACE risk engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod disease;
pub mod error;
pub mod profile;
pub mod risk;
