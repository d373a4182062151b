//! The data-access seam between the engine and its store collaborator.
//!
//! The engine consumes exactly four read operations. All of them are batch
//! operations by design: the cost of a calculation is bounded by a small
//! constant number of round trips, never by the number of existing
//! conditions. Implementations live outside this crate (see the
//! riskspace-store crate for the in-memory reference implementation).

use std::collections::HashMap;

use riskspace_contracts::{
    disease::{AssociationRow, CoordinateRow, Disease, DiseaseId, PrevalenceRow, Sex},
    error::RiskResult,
};

/// Read-only access to the disease catalog and comorbidity associations.
///
/// Implementations are expected to be cheap to query and safe to share
/// across concurrent calculations — the engine performs no writes and
/// holds no locks across store calls.
pub trait DiseaseStore: Send + Sync {
    /// Batch lookup of full disease records by code.
    ///
    /// Unknown codes are omitted from the result, never errored. Order of
    /// the returned records is unspecified.
    fn diseases_by_codes(&self, codes: &[String]) -> RiskResult<Vec<Disease>>;

    /// Full catalog scan returning one prevalence row per known disease,
    /// already stratified to the requested sex.
    fn all_diseases_with_prevalence(&self, sex: Sex) -> RiskResult<Vec<PrevalenceRow>>;

    /// Every association row where either side of the pair is one of the
    /// given ids — a single OR-composed filter across the whole set, not
    /// one query per id.
    fn associations_touching(&self, ids: &[DiseaseId]) -> RiskResult<Vec<AssociationRow>>;

    /// Batch coordinate lookup by code, tolerant of missing codes: a code
    /// absent from the returned map simply has no resolvable position.
    fn coordinates_by_codes(
        &self,
        codes: &[String],
    ) -> RiskResult<HashMap<String, CoordinateRow>>;
}
