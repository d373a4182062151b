//! User profile types and basic range validation.
//!
//! The profile is validated by the calling layer before it reaches the
//! engine, but `validate()` is cheap and the engine calls it again on
//! entry so a misbehaving caller cannot push out-of-range numbers through
//! the pipeline.

use serde::{Deserialize, Serialize};

use crate::disease::Sex;
use crate::error::{RiskError, RiskResult};

/// Self-reported physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

/// Everything the engine knows about the individual being scored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years, 1–120.
    pub age: u8,
    /// Sex, used for prevalence stratification.
    pub sex: Sex,
    /// Body Mass Index, plausible human range 10–60.
    pub bmi: f64,
    /// Disease codes of already-diagnosed conditions, 1–50 entries,
    /// each 2–8 characters.
    pub existing_conditions: Vec<String>,
    /// Physical activity level.
    pub exercise_level: ExerciseLevel,
    /// Current smoking status.
    pub smoking: bool,
}

impl UserProfile {
    /// Range limits mirrored from the request schema of the serving layer.
    pub const AGE_MIN: u8 = 1;
    pub const AGE_MAX: u8 = 120;
    pub const BMI_MIN: f64 = 10.0;
    pub const BMI_MAX: f64 = 60.0;
    pub const MAX_CONDITIONS: usize = 50;

    /// Check that every field is within its documented range.
    ///
    /// Returns `RiskError::InvalidProfile` naming the first offending field.
    /// No medical plausibility checks are performed beyond these ranges.
    pub fn validate(&self) -> RiskResult<()> {
        if self.age < Self::AGE_MIN || self.age > Self::AGE_MAX {
            return Err(RiskError::InvalidProfile {
                reason: format!("age {} outside 1-120", self.age),
            });
        }
        if !(Self::BMI_MIN..=Self::BMI_MAX).contains(&self.bmi) {
            return Err(RiskError::InvalidProfile {
                reason: format!("bmi {} outside 10-60", self.bmi),
            });
        }
        if self.existing_conditions.is_empty() {
            return Err(RiskError::InvalidProfile {
                reason: "at least one existing condition is required".to_string(),
            });
        }
        if self.existing_conditions.len() > Self::MAX_CONDITIONS {
            return Err(RiskError::InvalidProfile {
                reason: format!(
                    "{} existing conditions exceeds maximum of {}",
                    self.existing_conditions.len(),
                    Self::MAX_CONDITIONS
                ),
            });
        }
        for code in &self.existing_conditions {
            if code.len() < 2 || code.len() > 8 {
                return Err(RiskError::InvalidProfile {
                    reason: format!("condition code '{}' must be 2-8 characters", code),
                });
            }
        }
        Ok(())
    }
}
