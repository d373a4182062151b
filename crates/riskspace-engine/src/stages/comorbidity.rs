//! Comorbidity stage: multiply risks by the odds ratios of associations
//! touching the user's existing conditions.
//!
//! One batched store query covers every resolved condition id — an
//! OR-composed filter over the pair's two sides, never one query per
//! condition. Each returned row is applied independently: a disease linked
//! to two existing conditions receives two successive multiplications
//! (cumulative composition, not an average). No capping happens here; the
//! lifestyle stage clamps at the very end, preserving the original
//! multiply-first ordering.

use std::collections::HashSet;

use riskspace_contracts::disease::Disease;
use tracing::{debug, warn};

use crate::stages::{push_factor, FactorMap, RiskMap};
use crate::traits::DiseaseStore;

/// Apply comorbidity odds ratios onto a copy of `risks`.
///
/// Returns the updated map and the number of association rows actually
/// applied. Rows with a missing or non-positive odds ratio are skipped, as
/// are rows whose "other" disease is absent from the risk map. A store
/// failure degrades to the unmodified map.
pub fn apply_comorbidities(
    store: &dyn DiseaseStore,
    risks: &RiskMap,
    conditions: &[Disease],
    factors: &mut FactorMap,
) -> (RiskMap, usize) {
    let mut updated = risks.clone();

    let ids: Vec<_> = conditions.iter().map(|c| c.id).collect();
    let existing_ids: HashSet<_> = ids.iter().copied().collect();

    let rows = match store.associations_touching(&ids) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "association lookup failed, skipping comorbidity stage");
            return (updated, 0);
        }
    };

    let mut applied = 0;
    for row in &rows {
        let odds_ratio = match row.odds_ratio {
            Some(or) if or > 0.0 => or,
            _ => continue,
        };

        // The side not held by the user is the disease whose risk moves.
        // Rows where both sides are existing conditions move nothing.
        let (other, source) = if existing_ids.contains(&row.disease_1.id) {
            if existing_ids.contains(&row.disease_2.id) {
                continue;
            }
            (&row.disease_2, &row.disease_1)
        } else if existing_ids.contains(&row.disease_2.id) {
            (&row.disease_1, &row.disease_2)
        } else {
            continue;
        };

        if let Some(risk) = updated.get_mut(&other.code) {
            *risk *= odds_ratio;
            applied += 1;
            push_factor(
                factors,
                &other.code,
                format!("Comorbidity with {} (odds ratio {:.2})", source.code, odds_ratio),
            );
        }
    }

    debug!(
        rows_fetched = rows.len(),
        rows_applied = applied,
        "comorbidity odds ratios applied"
    );
    (updated, applied)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use riskspace_contracts::{
        disease::{
            AssociationRow, CoordinateRow, Disease, DiseaseId, DiseaseRef, PrevalenceRow, Sex,
        },
        error::{RiskError, RiskResult},
    };

    use super::apply_comorbidities;
    use crate::stages::{FactorMap, RiskMap};
    use crate::traits::DiseaseStore;

    struct AssocStore {
        rows: Vec<AssociationRow>,
        fail: bool,
    }

    impl DiseaseStore for AssocStore {
        fn diseases_by_codes(&self, _codes: &[String]) -> RiskResult<Vec<Disease>> {
            Ok(vec![])
        }

        fn all_diseases_with_prevalence(&self, _sex: Sex) -> RiskResult<Vec<PrevalenceRow>> {
            Ok(vec![])
        }

        fn associations_touching(&self, _ids: &[DiseaseId]) -> RiskResult<Vec<AssociationRow>> {
            if self.fail {
                Err(RiskError::Store { reason: "timeout".to_string() })
            } else {
                Ok(self.rows.clone())
            }
        }

        fn coordinates_by_codes(
            &self,
            _codes: &[String],
        ) -> RiskResult<HashMap<String, CoordinateRow>> {
            Ok(HashMap::new())
        }
    }

    fn condition(id: u64, code: &str) -> Disease {
        Disease {
            id: DiseaseId(id),
            code: code.to_string(),
            name: format!("{} name", code),
            prevalence_male: None,
            prevalence_female: None,
            prevalence_total: None,
            coordinate: None,
        }
    }

    fn assoc(id1: u64, code1: &str, id2: u64, code2: &str, or: Option<f64>) -> AssociationRow {
        AssociationRow {
            disease_1: DiseaseRef { id: DiseaseId(id1), code: code1.to_string() },
            disease_2: DiseaseRef { id: DiseaseId(id2), code: code2.to_string() },
            odds_ratio: or,
            p_value: None,
            patient_count: None,
        }
    }

    #[test]
    fn composition_is_multiplicative_and_cumulative() {
        // N18 linked to both conditions: 0.1 * 2.0 * 3.0 = 0.6.
        let store = AssocStore {
            rows: vec![
                assoc(1, "E11", 3, "N18", Some(2.0)),
                assoc(3, "N18", 2, "I10", Some(3.0)),
            ],
            fail: false,
        };
        let risks: RiskMap = [("N18".to_string(), 0.1)].into_iter().collect();
        let conditions = vec![condition(1, "E11"), condition(2, "I10")];
        let mut factors = FactorMap::new();

        let (updated, applied) = apply_comorbidities(&store, &risks, &conditions, &mut factors);

        assert!((updated["N18"] - 0.6).abs() < 1e-9);
        assert_eq!(applied, 2);
        assert_eq!(factors["N18"].len(), 2);
        assert!(factors["N18"][0].contains("E11"));
        assert!(factors["N18"][1].contains("I10"));
    }

    #[test]
    fn non_positive_and_missing_odds_ratios_are_skipped() {
        let store = AssocStore {
            rows: vec![
                assoc(1, "E11", 3, "N18", Some(0.0)),
                assoc(1, "E11", 3, "N18", Some(-1.5)),
                assoc(1, "E11", 3, "N18", None),
            ],
            fail: false,
        };
        let risks: RiskMap = [("N18".to_string(), 0.1)].into_iter().collect();
        let conditions = vec![condition(1, "E11")];
        let mut factors = FactorMap::new();

        let (updated, applied) = apply_comorbidities(&store, &risks, &conditions, &mut factors);

        assert_eq!(updated["N18"], 0.1);
        assert_eq!(applied, 0);
        assert!(factors.is_empty());
    }

    #[test]
    fn rows_between_two_existing_conditions_move_nothing() {
        let store = AssocStore { rows: vec![assoc(1, "E11", 2, "I10", Some(5.0))], fail: false };
        let risks: RiskMap =
            [("E11".to_string(), 0.05), ("I10".to_string(), 0.2)].into_iter().collect();
        let conditions = vec![condition(1, "E11"), condition(2, "I10")];
        let mut factors = FactorMap::new();

        let (updated, applied) = apply_comorbidities(&store, &risks, &conditions, &mut factors);

        assert_eq!(updated["E11"], 0.05);
        assert_eq!(updated["I10"], 0.2);
        assert_eq!(applied, 0);
    }

    #[test]
    fn other_disease_absent_from_risk_map_is_ignored() {
        let store = AssocStore { rows: vec![assoc(1, "E11", 9, "Z99", Some(4.0))], fail: false };
        let risks: RiskMap = [("N18".to_string(), 0.1)].into_iter().collect();
        let conditions = vec![condition(1, "E11")];
        let mut factors = FactorMap::new();

        let (updated, applied) = apply_comorbidities(&store, &risks, &conditions, &mut factors);

        assert_eq!(updated["N18"], 0.1);
        assert_eq!(applied, 0);
    }

    #[test]
    fn no_capping_happens_in_this_stage() {
        // Large intermediate odds are intentional; the lifestyle stage caps.
        let store = AssocStore {
            rows: vec![
                assoc(1, "E11", 3, "N18", Some(10.0)),
                assoc(1, "E11", 3, "N18", Some(10.0)),
            ],
            fail: false,
        };
        let risks: RiskMap = [("N18".to_string(), 0.5)].into_iter().collect();
        let conditions = vec![condition(1, "E11")];
        let mut factors = FactorMap::new();

        let (updated, _) = apply_comorbidities(&store, &risks, &conditions, &mut factors);
        assert!((updated["N18"] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn store_failure_degrades_to_unmodified_map() {
        let store = AssocStore { rows: vec![], fail: true };
        let risks: RiskMap = [("N18".to_string(), 0.1)].into_iter().collect();
        let conditions = vec![condition(1, "E11")];
        let mut factors = FactorMap::new();

        let (updated, applied) = apply_comorbidities(&store, &risks, &conditions, &mut factors);

        assert_eq!(updated["N18"], 0.1);
        assert_eq!(applied, 0);
    }
}
