//! Result assembly: filter, name, classify, sort, and truncate the final
//! risk list.

use std::collections::HashSet;

use riskspace_contracts::risk::{RiskLevel, RiskScore};
use tracing::debug;

use crate::names::NameCache;
use crate::stages::{round4, FactorMap, RiskMap};
use crate::traits::DiseaseStore;

/// Maximum number of risk scores returned per calculation.
pub const MAX_RESULTS: usize = 50;

/// Label attached when no comorbidity or lifestyle factor touched a disease.
pub const BASELINE_FACTOR: &str = "Population prevalence baseline";

/// Build the final, ordered risk-score list.
///
/// Excludes every code present in `existing` and every risk ≤ 0, resolves
/// display names in one batch (cache first), attaches the accumulated
/// contributing factors (or the baseline label), rounds, classifies, sorts
/// descending by risk with code as the deterministic tie-break, and caps
/// the list at `MAX_RESULTS`.
pub fn assemble(
    store: &dyn DiseaseStore,
    risks: &RiskMap,
    existing: &[String],
    factors: &FactorMap,
    names: &NameCache,
) -> Vec<RiskScore> {
    let existing: HashSet<&str> = existing.iter().map(String::as_str).collect();

    let elevated: Vec<(&String, f64)> = risks
        .iter()
        .filter(|(code, risk)| !existing.contains(code.as_str()) && **risk > 0.0)
        .map(|(code, risk)| (code, *risk))
        .collect();

    let codes: Vec<String> = elevated.iter().map(|(code, _)| (*code).clone()).collect();
    let display_names = names.resolve(store, &codes);

    let mut scores: Vec<RiskScore> = elevated
        .into_iter()
        .map(|(code, risk)| {
            let risk = round4(risk);
            let contributing_factors = factors
                .get(code)
                .filter(|lines| !lines.is_empty())
                .cloned()
                .unwrap_or_else(|| vec![BASELINE_FACTOR.to_string()]);
            RiskScore {
                disease_id: code.clone(),
                disease_name: display_names.get(code).cloned().unwrap_or_else(|| code.clone()),
                risk,
                level: RiskLevel::classify(risk),
                contributing_factors,
            }
        })
        .collect();

    scores.sort_by(|a, b| {
        b.risk.total_cmp(&a.risk).then_with(|| a.disease_id.cmp(&b.disease_id))
    });
    scores.truncate(MAX_RESULTS);

    debug!(score_count = scores.len(), "risk scores assembled");
    scores
}
