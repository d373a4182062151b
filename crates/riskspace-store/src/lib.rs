//! # riskspace-store
//!
//! The in-memory reference implementation of the engine's `DiseaseStore`
//! seam, with a TOML catalog loader. Production deployments back the same
//! trait with a real database; this crate exists so the engine can be
//! exercised end to end without one.

pub mod catalog;
pub mod memory;

pub use catalog::Catalog;
pub use memory::MemoryStore;
