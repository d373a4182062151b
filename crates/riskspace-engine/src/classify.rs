//! Pure classifiers: disease category from code, age group from age.
//!
//! Both are leaves with no dependencies and no I/O. They feed the
//! lifestyle/age adjustment stage, where every (category, age group) pair
//! must resolve to a multiplier.

/// Coarse disease grouping derived from the leading letter of its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiseaseCategory {
    /// Codes starting with "E" (endocrine/metabolic chapter).
    Metabolic,
    /// Codes starting with "I" (circulatory chapter).
    Cardiovascular,
    /// Codes starting with "J" (respiratory chapter).
    Respiratory,
    /// Everything else, including empty or malformed codes.
    Other,
}

impl DiseaseCategory {
    /// Classify a disease code by its leading letter.
    ///
    /// Total over all inputs: empty or malformed codes map to `Other`
    /// rather than failing.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('E') => DiseaseCategory::Metabolic,
            Some('I') => DiseaseCategory::Cardiovascular,
            Some('J') => DiseaseCategory::Respiratory,
            _ => DiseaseCategory::Other,
        }
    }
}

impl std::fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseCategory::Metabolic => write!(f, "metabolic"),
            DiseaseCategory::Cardiovascular => write!(f, "cardiovascular"),
            DiseaseCategory::Respiratory => write!(f, "respiratory"),
            DiseaseCategory::Other => write!(f, "other"),
        }
    }
}

/// Age band used by the lifestyle/age adjustment stage.
///
/// Bands are inclusive on their lower bound and do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    /// Under 30.
    Young,
    /// 30–44.
    YoungAdult,
    /// 45–64.
    Middle,
    /// 65 and above.
    Elderly,
}

impl AgeGroup {
    /// Age at or above which a user is `Elderly`.
    pub const ELDERLY: u8 = 65;
    /// Age at or above which a user is `Middle`.
    pub const MIDDLE: u8 = 45;
    /// Age at or above which a user is `YoungAdult`.
    pub const YOUNG_ADULT: u8 = 30;

    /// Classify an age in years into its band.
    pub fn from_age(age: u8) -> Self {
        if age >= Self::ELDERLY {
            AgeGroup::Elderly
        } else if age >= Self::MIDDLE {
            AgeGroup::Middle
        } else if age >= Self::YOUNG_ADULT {
            AgeGroup::YoungAdult
        } else {
            AgeGroup::Young
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeGroup::Young => write!(f, "young"),
            AgeGroup::YoungAdult => write!(f, "young adult"),
            AgeGroup::Middle => write!(f, "middle-aged"),
            AgeGroup::Elderly => write!(f, "elderly"),
        }
    }
}
