//! Position & pull-vector stage.
//!
//! The user's position is the prevalence-weighted centroid of their
//! existing conditions' coordinates. Pull vectors point from that position
//! toward every disease above the fixed risk threshold, scaled by risk.

use riskspace_contracts::{
    disease::{Coordinate, Disease},
    risk::{PullVector, UserPosition},
};
use tracing::{debug, warn};

use crate::names::NameCache;
use crate::stages::{round4, RiskMap};
use crate::traits::DiseaseStore;

/// Post-adjustment risk above which a disease earns a pull vector.
pub const PULL_THRESHOLD: f64 = 0.3;

/// Compute the user's position in disease space.
///
/// Each condition's coordinate is clamped per axis before use and weighted
/// by `prevalence_total`, defaulting to 1.0 when absent or zero — the
/// default is logged because a missing weight is a data-quality signal, not
/// an expected state. With no conditions the position is the origin.
pub fn user_position(conditions: &[Disease]) -> UserPosition {
    if conditions.is_empty() {
        return UserPosition::ORIGIN;
    }

    let mut total_weight = 0.0;
    let mut sum = Coordinate::ORIGIN;

    for condition in conditions {
        let weight = match condition.prevalence_total.filter(|p| *p > 0.0) {
            Some(p) => p,
            None => {
                warn!(
                    code = %condition.code,
                    "condition has no usable total prevalence, defaulting position weight to 1.0"
                );
                1.0
            }
        };

        let coordinate = condition.coordinate.unwrap_or(Coordinate::ORIGIN).clamped();
        sum.x += coordinate.x * weight;
        sum.y += coordinate.y * weight;
        sum.z += coordinate.z * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return UserPosition::ORIGIN;
    }

    UserPosition {
        x: round4((sum.x / total_weight).clamp(-1.0, 1.0)),
        y: round4((sum.y / total_weight).clamp(-1.0, 1.0)),
        z: round4((sum.z / total_weight).clamp(-1.0, 1.0)),
    }
}

/// Compute directional vectors toward every disease whose risk exceeds
/// `PULL_THRESHOLD`.
///
/// One batch coordinate fetch covers exactly the filtered set. Diseases
/// whose coordinates cannot be resolved are dropped from the output (they
/// stay in the risk-score output). Vectors are sorted by magnitude
/// descending; a store failure degrades to an empty list.
pub fn pull_vectors(
    store: &dyn DiseaseStore,
    risks: &RiskMap,
    position: &UserPosition,
    names: &NameCache,
) -> Vec<PullVector> {
    let elevated: Vec<(String, f64)> = risks
        .iter()
        .filter(|(_, risk)| **risk > PULL_THRESHOLD)
        .map(|(code, risk)| (code.clone(), *risk))
        .collect();

    if elevated.is_empty() {
        return Vec::new();
    }

    let codes: Vec<String> = elevated.iter().map(|(code, _)| code.clone()).collect();
    let coordinates = match store.coordinates_by_codes(&codes) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "coordinate lookup failed, omitting pull vectors");
            return Vec::new();
        }
    };

    let mut vectors = Vec::with_capacity(elevated.len());
    for (code, risk) in elevated {
        let Some(row) = coordinates.get(&code) else {
            debug!(code = %code, "no resolvable coordinates, dropped from pull vectors");
            continue;
        };
        names.insert(&code, &row.name);

        let target = row.coordinate.clamped();
        let vx = (target.x - position.x) * risk;
        let vy = (target.y - position.y) * risk;
        let vz = (target.z - position.z) * risk;
        let magnitude = (vx * vx + vy * vy + vz * vz).sqrt();

        vectors.push(PullVector {
            disease_id: code,
            disease_name: row.name.clone(),
            risk: round4(risk),
            vector_x: round4(vx),
            vector_y: round4(vy),
            vector_z: round4(vz),
            magnitude: round4(magnitude),
        });
    }

    vectors.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    vectors
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use riskspace_contracts::{
        disease::{
            AssociationRow, Coordinate, CoordinateRow, Disease, DiseaseId, PrevalenceRow, Sex,
        },
        error::{RiskError, RiskResult},
        risk::UserPosition,
    };

    use super::{pull_vectors, user_position};
    use crate::names::NameCache;
    use crate::stages::RiskMap;
    use crate::traits::DiseaseStore;

    struct CoordStore {
        rows: HashMap<String, CoordinateRow>,
        fail: bool,
    }

    impl CoordStore {
        fn with(entries: &[(&str, f64, f64, f64)]) -> Self {
            let rows = entries
                .iter()
                .map(|(code, x, y, z)| {
                    (
                        code.to_string(),
                        CoordinateRow {
                            name: format!("{} name", code),
                            coordinate: Coordinate { x: *x, y: *y, z: *z },
                        },
                    )
                })
                .collect();
            Self { rows, fail: false }
        }
    }

    impl DiseaseStore for CoordStore {
        fn diseases_by_codes(&self, _codes: &[String]) -> RiskResult<Vec<Disease>> {
            Ok(vec![])
        }

        fn all_diseases_with_prevalence(&self, _sex: Sex) -> RiskResult<Vec<PrevalenceRow>> {
            Ok(vec![])
        }

        fn associations_touching(&self, _ids: &[DiseaseId]) -> RiskResult<Vec<AssociationRow>> {
            Ok(vec![])
        }

        fn coordinates_by_codes(
            &self,
            codes: &[String],
        ) -> RiskResult<HashMap<String, CoordinateRow>> {
            if self.fail {
                return Err(RiskError::Store { reason: "timeout".to_string() });
            }
            Ok(codes
                .iter()
                .filter_map(|c| self.rows.get(c).map(|row| (c.clone(), row.clone())))
                .collect())
        }
    }

    fn condition(code: &str, coordinate: Option<Coordinate>, total: Option<f64>) -> Disease {
        Disease {
            id: DiseaseId(1),
            code: code.to_string(),
            name: format!("{} name", code),
            prevalence_male: None,
            prevalence_female: None,
            prevalence_total: total,
            coordinate,
        }
    }

    fn risks(entries: &[(&str, f64)]) -> RiskMap {
        entries.iter().map(|(c, r)| (c.to_string(), *r)).collect()
    }

    // ── user_position ─────────────────────────────────────────────────────────

    #[test]
    fn empty_conditions_yield_the_origin() {
        assert_eq!(user_position(&[]), UserPosition::ORIGIN);
    }

    #[test]
    fn single_condition_sits_at_its_own_coordinate() {
        let conditions = vec![condition(
            "E11",
            Some(Coordinate { x: 0.7, y: -0.3, z: 0.5 }),
            Some(0.042),
        )];
        let position = user_position(&conditions);
        assert!((position.x - 0.7).abs() < 1e-9);
        assert!((position.y - (-0.3)).abs() < 1e-9);
        assert!((position.z - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_prevalence_defaults_weight_to_simple_average() {
        let conditions = vec![
            condition("E11", Some(Coordinate { x: 0.5, y: 0.3, z: -0.2 }), Some(0.0)),
            condition("I10", Some(Coordinate { x: -0.4, y: 0.1, z: 0.6 }), Some(0.0)),
        ];
        let position = user_position(&conditions);
        // Both weights default to 1.0: x = (0.5 - 0.4) / 2 = 0.05.
        assert!((position.x - 0.05).abs() < 1e-9);
    }

    #[test]
    fn missing_coordinates_count_as_origin() {
        let conditions = vec![
            condition("E11", None, Some(0.05)),
            condition("I10", Some(Coordinate { x: 0.4, y: 0.0, z: 0.0 }), Some(0.05)),
        ];
        let position = user_position(&conditions);
        assert!((position.x - 0.2).abs() < 1e-9);
        assert_eq!(position.y, 0.0);
    }

    #[test]
    fn out_of_range_coordinates_are_clamped_before_weighting() {
        let conditions =
            vec![condition("E11", Some(Coordinate { x: 5.0, y: -3.0, z: 2.5 }), Some(1.0))];
        let position = user_position(&conditions);
        assert_eq!(position.x, 1.0);
        assert_eq!(position.y, -1.0);
        assert_eq!(position.z, 1.0);
    }

    // ── pull_vectors ──────────────────────────────────────────────────────────

    #[test]
    fn nothing_above_threshold_yields_no_vectors() {
        let store = CoordStore::with(&[("E11", 0.5, 0.5, 0.5)]);
        let names = NameCache::new();
        let vectors = pull_vectors(
            &store,
            &risks(&[("E11", 0.2), ("I10", 0.1)]),
            &UserPosition::ORIGIN,
            &names,
        );
        assert!(vectors.is_empty());
    }

    #[test]
    fn vector_math_scales_displacement_by_risk() {
        let store = CoordStore::with(&[("E11", 0.5, 0.4, 0.3)]);
        let names = NameCache::new();

        let vectors =
            pull_vectors(&store, &risks(&[("E11", 0.5)]), &UserPosition::ORIGIN, &names);

        assert_eq!(vectors.len(), 1);
        let v = &vectors[0];
        assert!((v.vector_x - 0.25).abs() < 1e-9);
        assert!((v.vector_y - 0.2).abs() < 1e-9);
        assert!((v.vector_z - 0.15).abs() < 1e-9);
    }

    #[test]
    fn magnitude_is_the_euclidean_norm_of_the_scaled_vector() {
        // (0.6, 0.8, 0.0) * 0.5 = (0.3, 0.4, 0.0), a 3-4-5 triangle: norm 0.5.
        let store = CoordStore::with(&[("E11", 0.6, 0.8, 0.0)]);
        let names = NameCache::new();

        let vectors =
            pull_vectors(&store, &risks(&[("E11", 0.5)]), &UserPosition::ORIGIN, &names);

        assert!((vectors[0].magnitude - 0.5).abs() < 1e-9);
    }

    #[test]
    fn offset_position_shifts_the_displacement() {
        let store = CoordStore::with(&[("E11", 0.7, 0.5, 0.3)]);
        let names = NameCache::new();
        let position = UserPosition { x: 0.2, y: 0.1, z: 0.0 };

        let vectors = pull_vectors(&store, &risks(&[("E11", 1.0)]), &position, &names);

        let v = &vectors[0];
        assert!((v.vector_x - 0.5).abs() < 1e-9);
        assert!((v.vector_y - 0.4).abs() < 1e-9);
        assert!((v.vector_z - 0.3).abs() < 1e-9);
    }

    #[test]
    fn coincident_disease_has_exactly_zero_magnitude() {
        let store = CoordStore::with(&[("E11", 0.0, 0.0, 0.0)]);
        let names = NameCache::new();

        let vectors =
            pull_vectors(&store, &risks(&[("E11", 0.5)]), &UserPosition::ORIGIN, &names);

        assert_eq!(vectors[0].magnitude, 0.0);
        assert_eq!(vectors[0].vector_x, 0.0);
    }

    #[test]
    fn vectors_sorted_by_magnitude_descending() {
        let store = CoordStore::with(&[("E11", 0.1, 0.1, 0.1), ("I10", 0.5, 0.5, 0.5)]);
        let names = NameCache::new();

        let vectors = pull_vectors(
            &store,
            &risks(&[("E11", 0.5), ("I10", 0.5)]),
            &UserPosition::ORIGIN,
            &names,
        );

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].disease_id, "I10");
        assert!(vectors[0].magnitude >= vectors[1].magnitude);
    }

    #[test]
    fn unresolvable_coordinates_are_dropped_silently() {
        let store = CoordStore::with(&[("E11", 0.5, 0.5, 0.5)]);
        let names = NameCache::new();

        let vectors = pull_vectors(
            &store,
            &risks(&[("E11", 0.35), ("N18", 0.31)]),
            &UserPosition::ORIGIN,
            &names,
        );

        let ids: Vec<_> = vectors.iter().map(|v| v.disease_id.as_str()).collect();
        assert!(ids.contains(&"E11"));
        assert!(!ids.contains(&"N18"));
    }

    #[test]
    fn store_failure_degrades_to_no_vectors() {
        let mut store = CoordStore::with(&[("E11", 0.5, 0.5, 0.5)]);
        store.fail = true;
        let names = NameCache::new();

        let vectors =
            pull_vectors(&store, &risks(&[("E11", 0.9)]), &UserPosition::ORIGIN, &names);
        assert!(vectors.is_empty());
    }
}
