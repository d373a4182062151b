//! Disease catalog types.
//!
//! These types are the read-only records the engine consumes from its
//! data-store collaborator. The store owns their lifecycle; the engine
//! never writes them back.

use serde::{Deserialize, Serialize};

/// The store's internal numeric identifier for a disease.
///
/// Association rows reference diseases by this id, not by code, so the
/// engine resolves codes to ids once per calculation and batches every
/// relationship query across the resolved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DiseaseId(pub u64);

/// Biological sex used for prevalence stratification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// A point in the 3D disease space.
///
/// Each axis is normally in [-1, 1], but the store does not guarantee it —
/// consumers must call `clamped()` before arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    /// The origin of the disease space.
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0, z: 0.0 };

    /// Return a copy with every axis clamped to [-1, 1].
    ///
    /// Clamping is idempotent: clamping twice equals clamping once.
    pub fn clamped(&self) -> Coordinate {
        Coordinate {
            x: self.x.clamp(-1.0, 1.0),
            y: self.y.clamp(-1.0, 1.0),
            z: self.z.clamp(-1.0, 1.0),
        }
    }
}

/// A full disease record as returned by batch code lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disease {
    /// The store's internal identifier.
    pub id: DiseaseId,
    /// Short alphanumeric classification code, unique (e.g. "E11").
    pub code: String,
    /// Display name.
    pub name: String,
    /// Fraction of the male population observed with this disease, in [0, 1].
    pub prevalence_male: Option<f64>,
    /// Fraction of the female population observed with this disease, in [0, 1].
    pub prevalence_female: Option<f64>,
    /// Fraction of the whole population observed with this disease, in [0, 1].
    pub prevalence_total: Option<f64>,
    /// Position in the 3D disease space, when one has been computed.
    pub coordinate: Option<Coordinate>,
}

impl Disease {
    /// The base risk for this disease given the user's sex.
    ///
    /// Uses the sex-stratified prevalence when present and positive, falls
    /// back to the total prevalence, and finally to 0.0. The result is
    /// clamped to [0, 1] since the store does not enforce the range.
    pub fn base_prevalence(&self, sex: Sex) -> f64 {
        let stratified = match sex {
            Sex::Male => self.prevalence_male,
            Sex::Female => self.prevalence_female,
        };
        stratified
            .filter(|p| *p > 0.0)
            .or(self.prevalence_total.filter(|p| *p > 0.0))
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}

/// One row of the full catalog scan used by the base-risk stage.
///
/// `prevalence_sex` is already stratified to the requested sex; the engine
/// never sees the opposite-sex column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrevalenceRow {
    pub code: String,
    pub name: String,
    pub prevalence_sex: Option<f64>,
    pub prevalence_total: Option<f64>,
}

impl PrevalenceRow {
    /// The base risk this row contributes: sex column, else total, else 0.0,
    /// clamped to [0, 1].
    pub fn base_risk(&self) -> f64 {
        self.prevalence_sex
            .filter(|p| *p > 0.0)
            .or(self.prevalence_total.filter(|p| *p > 0.0))
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}

/// A lightweight (id, code) pair identifying one side of an association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRef {
    pub id: DiseaseId,
    pub code: String,
}

/// One comorbidity association row.
///
/// The pair is unordered — either side may be the user's existing condition.
/// Multiple rows may exist between the same pair (different aggregation
/// strata); the engine applies each row independently and cumulatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationRow {
    pub disease_1: DiseaseRef,
    pub disease_2: DiseaseRef,
    /// Strength of co-occurrence; > 1 indicates positive association.
    /// Missing or non-positive values are skipped by the engine.
    pub odds_ratio: Option<f64>,
    pub p_value: Option<f64>,
    pub patient_count: Option<u64>,
}

/// One row of the batch coordinate lookup used by the pull-vector stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub name: String,
    pub coordinate: Coordinate,
}
