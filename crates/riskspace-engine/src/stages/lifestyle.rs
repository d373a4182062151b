//! Lifestyle/age adjustment stage: category-specific multiplicative
//! modifiers for BMI, smoking, exercise level, and age group.
//!
//! Every disease in the map is adjusted, not only those the comorbidity
//! stage touched. All applicable multipliers compose multiplicatively and
//! the result is clamped to [0, 1] — the single cap of the whole pipeline.

use riskspace_contracts::profile::{ExerciseLevel, UserProfile};
use tracing::debug;

use crate::classify::{AgeGroup, DiseaseCategory};
use crate::stages::{push_factor, FactorMap, RiskMap};

/// BMI at or above which the obese multiplier applies.
pub const BMI_OBESE: f64 = 30.0;
/// BMI at or above which the overweight multiplier applies.
pub const BMI_OVERWEIGHT: f64 = 25.0;

const OBESE_METABOLIC: f64 = 1.5;
const OVERWEIGHT_METABOLIC: f64 = 1.2;
const SMOKING_CARDIOVASCULAR: f64 = 1.8;
const SMOKING_RESPIRATORY: f64 = 1.6;
const LOW_ACTIVITY_CARDIOVASCULAR: f64 = 1.3;
const ACTIVE_CARDIOVASCULAR: f64 = 0.7;

/// The fixed category × age-group multiplier table.
///
/// Exhaustive over both enums, so every combination structurally resolves
/// to a number — there is no runtime `else` branch to miss.
pub fn age_multiplier(category: DiseaseCategory, group: AgeGroup) -> f64 {
    use AgeGroup::*;
    use DiseaseCategory::*;
    match (category, group) {
        (Metabolic, Elderly) => 1.3,
        (Metabolic, Middle) => 1.15,
        (Metabolic, YoungAdult) => 1.0,
        (Metabolic, Young) => 0.8,

        (Cardiovascular, Elderly) => 1.5,
        (Cardiovascular, Middle) => 1.25,
        (Cardiovascular, YoungAdult) => 1.0,
        (Cardiovascular, Young) => 0.7,

        (Respiratory, Elderly) => 1.2,
        (Respiratory, Middle) => 1.1,
        (Respiratory, YoungAdult) => 1.0,
        (Respiratory, Young) => 0.9,

        (Other, Elderly) => 1.15,
        (Other, Middle) => 1.05,
        (Other, YoungAdult) => 1.0,
        (Other, Young) => 0.95,
    }
}

/// Apply lifestyle and age multipliers onto a copy of `risks`.
///
/// Pure apart from the factor side channel: the same profile and map always
/// produce the same output. Each applied multiplier appends one
/// human-readable line naming the factor and its direction.
pub fn apply_lifestyle(
    risks: &RiskMap,
    profile: &UserProfile,
    factors: &mut FactorMap,
) -> RiskMap {
    let age_group = AgeGroup::from_age(profile.age);
    let mut updated = RiskMap::new();

    for (code, risk) in risks {
        let category = DiseaseCategory::from_code(code);
        let mut multiplier = 1.0;

        if category == DiseaseCategory::Metabolic {
            if profile.bmi >= BMI_OBESE {
                multiplier *= OBESE_METABOLIC;
                push_factor(factors, code, "High BMI (obese) increases metabolic risk".to_string());
            } else if profile.bmi >= BMI_OVERWEIGHT {
                multiplier *= OVERWEIGHT_METABOLIC;
                push_factor(
                    factors,
                    code,
                    "Elevated BMI (overweight) increases metabolic risk".to_string(),
                );
            }
        }

        if profile.smoking {
            match category {
                DiseaseCategory::Cardiovascular => {
                    multiplier *= SMOKING_CARDIOVASCULAR;
                    push_factor(factors, code, "Smoking increases cardiovascular risk".to_string());
                }
                DiseaseCategory::Respiratory => {
                    multiplier *= SMOKING_RESPIRATORY;
                    push_factor(factors, code, "Smoking increases respiratory risk".to_string());
                }
                _ => {}
            }
        }

        if category == DiseaseCategory::Cardiovascular {
            match profile.exercise_level {
                ExerciseLevel::Sedentary | ExerciseLevel::Light => {
                    multiplier *= LOW_ACTIVITY_CARDIOVASCULAR;
                    push_factor(
                        factors,
                        code,
                        "Low activity level increases cardiovascular risk".to_string(),
                    );
                }
                ExerciseLevel::Active => {
                    multiplier *= ACTIVE_CARDIOVASCULAR;
                    push_factor(
                        factors,
                        code,
                        "Active lifestyle lowers cardiovascular risk".to_string(),
                    );
                }
                ExerciseLevel::Moderate => {}
            }
        }

        let age_mult = age_multiplier(category, age_group);
        multiplier *= age_mult;
        if age_mult > 1.0 {
            push_factor(
                factors,
                code,
                format!("Age group ({}) increases {} risk", age_group, category),
            );
        } else if age_mult < 1.0 {
            push_factor(
                factors,
                code,
                format!("Age group ({}) lowers {} risk", age_group, category),
            );
        }

        updated.insert(code.clone(), (risk * multiplier).clamp(0.0, 1.0));
    }

    debug!(disease_count = updated.len(), age_group = %age_group, "lifestyle adjustments applied");
    updated
}
