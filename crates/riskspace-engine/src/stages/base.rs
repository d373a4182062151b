//! Base risk stage: seed every catalog disease with its population
//! prevalence for the user's sex.
//!
//! This is the only stage that scans the whole catalog. As a side effect it
//! warms the name cache with every catalog name, so assembly rarely needs a
//! second lookup.

use riskspace_contracts::disease::Sex;
use tracing::{debug, warn};

use crate::names::NameCache;
use crate::stages::RiskMap;
use crate::traits::DiseaseStore;

/// Build the initial risk map: disease code → sex-stratified prevalence,
/// falling back to total prevalence and then to 0.0.
///
/// A store failure here is logged and yields an empty map — the calculation
/// degrades to a very-low-risk result instead of aborting, so a flaky
/// catalog scan never takes the whole request down.
pub fn base_risks(store: &dyn DiseaseStore, sex: Sex, names: &NameCache) -> RiskMap {
    let rows = match store.all_diseases_with_prevalence(sex) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, sex = %sex, "catalog prevalence scan failed, starting from empty risk map");
            return RiskMap::new();
        }
    };

    let mut risks = RiskMap::new();
    for row in rows {
        names.insert(&row.code, &row.name);
        let risk = row.base_risk();
        risks.insert(row.code, risk);
    }

    debug!(disease_count = risks.len(), sex = %sex, "base risk map seeded from prevalence");
    risks
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use riskspace_contracts::{
        disease::{AssociationRow, CoordinateRow, Disease, DiseaseId, PrevalenceRow, Sex},
        error::{RiskError, RiskResult},
    };

    use super::base_risks;
    use crate::names::NameCache;
    use crate::traits::DiseaseStore;

    struct RowStore {
        rows: Vec<PrevalenceRow>,
        fail: bool,
    }

    impl DiseaseStore for RowStore {
        fn diseases_by_codes(&self, _codes: &[String]) -> RiskResult<Vec<Disease>> {
            Ok(vec![])
        }

        fn all_diseases_with_prevalence(&self, _sex: Sex) -> RiskResult<Vec<PrevalenceRow>> {
            if self.fail {
                Err(RiskError::Store { reason: "connection reset".to_string() })
            } else {
                Ok(self.rows.clone())
            }
        }

        fn associations_touching(&self, _ids: &[DiseaseId]) -> RiskResult<Vec<AssociationRow>> {
            Ok(vec![])
        }

        fn coordinates_by_codes(
            &self,
            _codes: &[String],
        ) -> RiskResult<HashMap<String, CoordinateRow>> {
            Ok(HashMap::new())
        }
    }

    fn row(code: &str, sex: Option<f64>, total: Option<f64>) -> PrevalenceRow {
        PrevalenceRow {
            code: code.to_string(),
            name: format!("{} name", code),
            prevalence_sex: sex,
            prevalence_total: total,
        }
    }

    #[test]
    fn seeds_every_disease_with_sex_prevalence() {
        let store = RowStore {
            rows: vec![row("E11", Some(0.06), Some(0.05)), row("I10", Some(0.2), None)],
            fail: false,
        };
        let names = NameCache::new();

        let risks = base_risks(&store, Sex::Male, &names);

        assert_eq!(risks["E11"], 0.06);
        assert_eq!(risks["I10"], 0.2);
    }

    #[test]
    fn falls_back_to_total_then_zero() {
        let store = RowStore {
            rows: vec![
                row("E11", Some(0.0), Some(0.05)),
                row("J45", None, Some(0.08)),
                row("N18", None, None),
            ],
            fail: false,
        };
        let names = NameCache::new();

        let risks = base_risks(&store, Sex::Female, &names);

        assert_eq!(risks["E11"], 0.05);
        assert_eq!(risks["J45"], 0.08);
        assert_eq!(risks["N18"], 0.0);
    }

    #[test]
    fn populates_the_name_cache() {
        let store = RowStore { rows: vec![row("E11", Some(0.06), None)], fail: false };
        let names = NameCache::new();

        base_risks(&store, Sex::Male, &names);

        assert_eq!(names.get("E11").as_deref(), Some("E11 name"));
    }

    #[test]
    fn store_failure_degrades_to_empty_map() {
        let store = RowStore { rows: vec![], fail: true };
        let names = NameCache::new();

        let risks = base_risks(&store, Sex::Male, &names);
        assert!(risks.is_empty());
    }
}
