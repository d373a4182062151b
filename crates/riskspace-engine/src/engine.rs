//! The risk scoring engine: the five-stage pipeline orchestrator.
//!
//! Stages execute strictly in order — each consumes the previous stage's
//! full risk map, so none may start before the prior batch fetch completes:
//!
//!   validate → resolve conditions → base risk → comorbidity → lifestyle
//!            → position → pull vectors → assembly
//!
//! Concurrent calculations for different users are independent; the only
//! shared state is the append-only name cache.

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use riskspace_contracts::{
    error::{RiskError, RiskResult},
    profile::UserProfile,
    risk::RiskCalculationResult,
};

use crate::names::NameCache;
use crate::stages::{assemble, base, comorbidity, lifestyle, position, FactorMap};
use crate::traits::DiseaseStore;

/// One engine instance per store. Cheap to share: `calculate_risks` takes
/// `&self` and holds no state across calls beyond the name cache.
pub struct RiskEngine {
    store: Box<dyn DiseaseStore>,
    names: NameCache,
}

impl RiskEngine {
    /// Create an engine over the given store.
    pub fn new(store: Box<dyn DiseaseStore>) -> Self {
        Self { store, names: NameCache::new() }
    }

    /// Compute ranked risk scores, the user's 3D position, and pull vectors
    /// for one profile.
    ///
    /// # Errors
    ///
    /// - `RiskError::InvalidProfile` if a field is out of range.
    /// - `RiskError::NoValidConditions` if none of the submitted condition
    ///   codes resolve to known diseases — "nothing to analyze" is a client
    ///   error, not an empty result.
    ///
    /// Every other store failure degrades locally inside the stage that saw
    /// it; the calculation still completes.
    pub fn calculate_risks(&self, profile: &UserProfile) -> RiskResult<RiskCalculationResult> {
        profile.validate()?;

        let calculation_id = Uuid::new_v4();
        debug!(
            calculation_id = %calculation_id,
            condition_count = profile.existing_conditions.len(),
            age = profile.age,
            sex = %profile.sex,
            "risk calculation starting"
        );

        // Resolve existing condition codes to full records in one batch.
        // Unknown codes are tolerated; zero resolved conditions is fatal.
        let conditions = match self.store.diseases_by_codes(&profile.existing_conditions) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "condition resolution failed");
                Vec::new()
            }
        };
        if conditions.is_empty() {
            return Err(RiskError::NoValidConditions);
        }
        for condition in &conditions {
            self.names.insert(&condition.code, &condition.name);
        }

        let mut factors = FactorMap::new();

        // Stage 1: seed every catalog disease with its prevalence.
        let base_risks = base::base_risks(self.store.as_ref(), profile.sex, &self.names);
        let catalog_size = base_risks.len();

        // Stage 2: multiply by comorbidity odds ratios, uncapped.
        let (risks, associations_applied) = comorbidity::apply_comorbidities(
            self.store.as_ref(),
            &base_risks,
            &conditions,
            &mut factors,
        );

        // Stage 3: lifestyle and age multipliers, clamped to [0, 1].
        let risks = lifestyle::apply_lifestyle(&risks, profile, &mut factors);

        // Stage 4: position and pull vectors.
        let user_position = position::user_position(&conditions);
        let pull_vectors =
            position::pull_vectors(self.store.as_ref(), &risks, &user_position, &self.names);

        // Stage 5: final list.
        let risk_scores = assemble::assemble(
            self.store.as_ref(),
            &risks,
            &profile.existing_conditions,
            &factors,
            &self.names,
        );

        let conditions_processed: Vec<&str> =
            conditions.iter().map(|c| c.code.as_str()).collect();

        info!(
            calculation_id = %calculation_id,
            conditions_analyzed = conditions.len(),
            score_count = risk_scores.len(),
            pull_vector_count = pull_vectors.len(),
            associations_applied,
            "risk calculation complete"
        );

        Ok(RiskCalculationResult {
            risk_scores,
            user_position,
            pull_vectors,
            total_conditions_analyzed: conditions.len(),
            analysis_metadata: json!({
                "calculation_id": calculation_id,
                "calculated_at": Utc::now(),
                "conditions_processed": conditions_processed,
                "catalog_diseases": catalog_size,
                "associations_applied": associations_applied,
                "sex": profile.sex,
                "age": profile.age,
            }),
        })
    }
}
