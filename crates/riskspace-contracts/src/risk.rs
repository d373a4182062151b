//! Risk calculation output types.
//!
//! These are the wire-facing shapes the engine assembles at the end of a
//! calculation. All floats carried here are rounded to 4 decimals by the
//! engine before construction.

use serde::{Deserialize, Serialize};

/// Coarse classification of a risk score, in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Threshold at or above which a risk is classified `VeryHigh`.
    pub const VERY_HIGH: f64 = 0.75;
    /// Threshold at or above which a risk is classified `High`.
    pub const HIGH: f64 = 0.50;
    /// Threshold at or above which a risk is classified `Moderate`.
    pub const MODERATE: f64 = 0.25;

    /// Classify a risk value into a level.
    ///
    /// Thresholds are inclusive on their lower bound: exactly 0.25 is
    /// `Moderate`, exactly 0.75 is `VeryHigh`.
    pub fn classify(risk: f64) -> Self {
        if risk >= Self::VERY_HIGH {
            RiskLevel::VeryHigh
        } else if risk >= Self::HIGH {
            RiskLevel::High
        } else if risk >= Self::MODERATE {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// The calculated risk for a single disease the user does not already have.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    /// Disease code (e.g. "N18").
    pub disease_id: String,
    /// Display name, falling back to the code when unresolved.
    pub disease_name: String,
    /// Risk in [0, 1], rounded to 4 decimals.
    pub risk: f64,
    pub level: RiskLevel,
    /// Human-readable explanations for every adjustment that altered this
    /// risk, in application order. Never empty — a bare prevalence risk
    /// carries the baseline label.
    pub contributing_factors: Vec<String>,
}

/// The user's position in the 3D disease space.
///
/// A prevalence-weighted centroid of their existing conditions'
/// coordinates; each axis is within [-1, 1] and rounded to 4 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl UserPosition {
    pub const ORIGIN: UserPosition = UserPosition { x: 0.0, y: 0.0, z: 0.0 };
}

/// A directional vector from the user's position toward a high-risk disease,
/// scaled by that disease's risk. Used for visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullVector {
    pub disease_id: String,
    pub disease_name: String,
    /// The disease's post-adjustment risk, in [0, 1].
    pub risk: f64,
    pub vector_x: f64,
    pub vector_y: f64,
    pub vector_z: f64,
    /// Euclidean norm of the scaled vector, ≥ 0.
    pub magnitude: f64,
}

/// The full result of one engine invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskCalculationResult {
    /// Per-disease risks, sorted descending, at most 50 entries.
    pub risk_scores: Vec<RiskScore>,
    pub user_position: UserPosition,
    /// Vectors for diseases above the pull threshold, sorted by magnitude
    /// descending.
    pub pull_vectors: Vec<PullVector>,
    /// How many of the submitted condition codes resolved to known diseases.
    pub total_conditions_analyzed: usize,
    /// Calculation id, timestamp, counts, and demographics echoed back.
    pub analysis_metadata: serde_json::Value,
}
