//! Catalog document schema.
//!
//! A `Catalog` is deserialized from TOML and holds the full disease table
//! plus the comorbidity association rows. The document is purely
//! declarative; `MemoryStore::from_catalog` performs the referential
//! checks.
//!
//! Example:
//! ```toml
//! [[diseases]]
//! id = 1
//! code = "E11"
//! name = "Type 2 diabetes mellitus"
//! prevalence_male = 0.09
//! prevalence_female = 0.07
//! prevalence_total = 0.08
//! coordinate = { x = 0.5, y = -0.3, z = 0.8 }
//!
//! [[associations]]
//! disease_1 = 1
//! disease_2 = 2
//! odds_ratio = 3.5
//! p_value = 0.001
//! patient_count = 1200
//! ```

use serde::{Deserialize, Serialize};

use riskspace_contracts::disease::{Coordinate, Disease, DiseaseId};

/// One disease entry in the catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDisease {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub prevalence_male: Option<f64>,
    pub prevalence_female: Option<f64>,
    pub prevalence_total: Option<f64>,
    pub coordinate: Option<Coordinate>,
}

impl From<CatalogDisease> for Disease {
    fn from(entry: CatalogDisease) -> Self {
        Disease {
            id: DiseaseId(entry.id),
            code: entry.code,
            name: entry.name,
            prevalence_male: entry.prevalence_male,
            prevalence_female: entry.prevalence_female,
            prevalence_total: entry.prevalence_total,
            coordinate: entry.coordinate,
        }
    }
}

/// One comorbidity association entry, referencing diseases by id.
///
/// The pair is unordered. Multiple entries between the same pair are
/// legal — they come from different aggregation strata and the engine
/// composes them cumulatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogAssociation {
    pub disease_1: u64,
    pub disease_2: u64,
    pub odds_ratio: Option<f64>,
    pub p_value: Option<f64>,
    pub patient_count: Option<u64>,
}

/// The whole catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub diseases: Vec<CatalogDisease>,
    #[serde(default)]
    pub associations: Vec<CatalogAssociation>,
}
