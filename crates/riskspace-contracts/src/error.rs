//! Error types for the RISKSPACE risk calculation pipeline.
//!
//! All fallible operations across the workspace return `RiskResult<T>`.
//! Error variants carry enough context to produce actionable log entries
//! without leaking raw backend error text to callers.

use thiserror::Error;

/// The unified error type for the RISKSPACE crates.
#[derive(Debug, Error)]
pub enum RiskError {
    /// None of the submitted condition codes resolved to a known disease.
    ///
    /// This is the only failure that aborts a whole calculation: it
    /// distinguishes "nothing to analyze" from "analyzed but nothing is
    /// elevated". Surfaced to the caller as a client-correctable error.
    #[error("no valid conditions found for provided disease codes")]
    NoValidConditions,

    /// A user profile failed the basic range checks.
    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// A batch read against the disease store failed.
    ///
    /// The engine treats these as locally degradable — the stage that saw
    /// the failure logs it and proceeds with an empty or partial map.
    #[error("data store query failed: {reason}")]
    Store { reason: String },

    /// A disease catalog could not be loaded or is internally inconsistent.
    #[error("catalog error: {reason}")]
    Catalog { reason: String },

    /// An unexpected internal failure (e.g. a malformed disease record).
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

/// Convenience alias used throughout the RISKSPACE crates.
pub type RiskResult<T> = Result<T, RiskError>;
