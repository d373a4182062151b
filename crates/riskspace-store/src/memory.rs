//! In-memory implementation of `DiseaseStore`.
//!
//! `MemoryStore` is the reference implementation of the store seam. It
//! holds the whole catalog in two `Vec`s with code/id indexes, so every
//! trait operation is a linear scan or a hash lookup — adequate for the
//! catalog sizes the engine is designed around, and entirely read-only
//! after construction, so it is safe to share across threads without
//! locking.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use riskspace_contracts::{
    disease::{
        AssociationRow, Coordinate, CoordinateRow, Disease, DiseaseId, DiseaseRef, PrevalenceRow,
        Sex,
    },
    error::{RiskError, RiskResult},
};
use riskspace_engine::traits::DiseaseStore;

use crate::catalog::Catalog;

/// One stored association, referencing diseases by internal id.
#[derive(Debug, Clone)]
struct StoredAssociation {
    disease_1: DiseaseId,
    disease_2: DiseaseId,
    odds_ratio: Option<f64>,
    p_value: Option<f64>,
    patient_count: Option<u64>,
}

/// A read-only, in-memory disease store.
///
/// Construct via `from_catalog`, `from_toml_str`, or `from_file`.
pub struct MemoryStore {
    diseases: Vec<Disease>,
    by_code: HashMap<String, usize>,
    by_id: HashMap<DiseaseId, usize>,
    associations: Vec<StoredAssociation>,
}

impl MemoryStore {
    /// Build a store from a parsed catalog.
    ///
    /// Returns `RiskError::Catalog` when the document is internally
    /// inconsistent: duplicate disease ids or codes, or an association
    /// referencing an unknown disease id.
    pub fn from_catalog(catalog: Catalog) -> RiskResult<Self> {
        let mut diseases = Vec::with_capacity(catalog.diseases.len());
        let mut by_code = HashMap::new();
        let mut by_id = HashMap::new();

        for entry in catalog.diseases {
            let disease: Disease = entry.into();
            if by_code.insert(disease.code.clone(), diseases.len()).is_some() {
                return Err(RiskError::Catalog {
                    reason: format!("duplicate disease code '{}'", disease.code),
                });
            }
            if by_id.insert(disease.id, diseases.len()).is_some() {
                return Err(RiskError::Catalog {
                    reason: format!("duplicate disease id {}", disease.id.0),
                });
            }
            diseases.push(disease);
        }

        let mut associations = Vec::with_capacity(catalog.associations.len());
        for entry in catalog.associations {
            for id in [entry.disease_1, entry.disease_2] {
                if !by_id.contains_key(&DiseaseId(id)) {
                    return Err(RiskError::Catalog {
                        reason: format!("association references unknown disease id {}", id),
                    });
                }
            }
            associations.push(StoredAssociation {
                disease_1: DiseaseId(entry.disease_1),
                disease_2: DiseaseId(entry.disease_2),
                odds_ratio: entry.odds_ratio,
                p_value: entry.p_value,
                patient_count: entry.patient_count,
            });
        }

        debug!(
            disease_count = diseases.len(),
            association_count = associations.len(),
            "memory store built from catalog"
        );

        Ok(Self { diseases, by_code, by_id, associations })
    }

    /// Parse `s` as a TOML catalog and build a store.
    pub fn from_toml_str(s: &str) -> RiskResult<Self> {
        let catalog: Catalog = toml::from_str(s).map_err(|e| RiskError::Catalog {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;
        Self::from_catalog(catalog)
    }

    /// Read the file at `path` and parse it as a TOML catalog.
    pub fn from_file(path: &Path) -> RiskResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RiskError::Catalog {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    fn disease_ref(&self, id: DiseaseId) -> DiseaseRef {
        // Referential integrity is checked at construction, so the index
        // lookup cannot miss.
        let disease = &self.diseases[self.by_id[&id]];
        DiseaseRef { id, code: disease.code.clone() }
    }
}

impl DiseaseStore for MemoryStore {
    /// Batch code lookup; unknown codes are simply absent from the result.
    fn diseases_by_codes(&self, codes: &[String]) -> RiskResult<Vec<Disease>> {
        let mut found = Vec::with_capacity(codes.len());
        for code in codes {
            match self.by_code.get(code) {
                Some(&index) => found.push(self.diseases[index].clone()),
                None => warn!(code = %code, "unknown disease code in lookup"),
            }
        }
        Ok(found)
    }

    fn all_diseases_with_prevalence(&self, sex: Sex) -> RiskResult<Vec<PrevalenceRow>> {
        Ok(self
            .diseases
            .iter()
            .map(|d| PrevalenceRow {
                code: d.code.clone(),
                name: d.name.clone(),
                prevalence_sex: match sex {
                    Sex::Male => d.prevalence_male,
                    Sex::Female => d.prevalence_female,
                },
                prevalence_total: d.prevalence_total,
            })
            .collect())
    }

    /// One pass over the association table matching either side of the
    /// pair against the whole id set — the OR-composed batch filter.
    fn associations_touching(&self, ids: &[DiseaseId]) -> RiskResult<Vec<AssociationRow>> {
        Ok(self
            .associations
            .iter()
            .filter(|a| ids.contains(&a.disease_1) || ids.contains(&a.disease_2))
            .map(|a| AssociationRow {
                disease_1: self.disease_ref(a.disease_1),
                disease_2: self.disease_ref(a.disease_2),
                odds_ratio: a.odds_ratio,
                p_value: a.p_value,
                patient_count: a.patient_count,
            })
            .collect())
    }

    /// Missing codes and diseases without a stored coordinate are omitted;
    /// the engine drops them from pull vectors.
    fn coordinates_by_codes(
        &self,
        codes: &[String],
    ) -> RiskResult<HashMap<String, CoordinateRow>> {
        let mut rows = HashMap::with_capacity(codes.len());
        for code in codes {
            if let Some(&index) = self.by_code.get(code) {
                let disease = &self.diseases[index];
                let coordinate = disease.coordinate.unwrap_or(Coordinate::ORIGIN);
                rows.insert(
                    code.clone(),
                    CoordinateRow { name: disease.name.clone(), coordinate },
                );
            }
        }
        Ok(rows)
    }
}
