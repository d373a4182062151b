//! The five pipeline stages of a risk calculation.
//!
//! Data flows strictly forward: each stage consumes the prior stage's full
//! risk map and returns a new one, never mutating shared state. The
//! per-disease contributing-factor narrative travels alongside the map as
//! an explicit side channel, so stages stay composable and testable in
//! isolation.

use std::collections::BTreeMap;

pub mod assemble;
pub mod base;
pub mod comorbidity;
pub mod lifestyle;
pub mod position;

/// Disease code → current risk value in [0, 1] (uncapped between the
/// comorbidity and lifestyle stages).
///
/// Keyed on a `BTreeMap` so every stage iterates diseases in a
/// deterministic order.
pub type RiskMap = BTreeMap<String, f64>;

/// Disease code → ordered contributing-factor strings, appended by the
/// comorbidity and lifestyle stages and consumed by assembly.
pub type FactorMap = BTreeMap<String, Vec<String>>;

/// Round to 4 decimal places, the precision of every emitted float.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Append one contributing-factor line for a disease.
pub(crate) fn push_factor(factors: &mut FactorMap, code: &str, line: String) {
    factors.entry(code.to_string()).or_default().push(line);
}
