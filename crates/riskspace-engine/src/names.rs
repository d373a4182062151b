//! Disease name resolution with an engine-scoped cache.
//!
//! The base-risk stage sees every catalog name once per calculation, so the
//! cache is usually fully warm before assembly runs. The cache is
//! append-only: entries are never invalidated, which makes it safe to reuse
//! across concurrent calculations behind the mutex.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::traits::DiseaseStore;

/// Append-only map from disease code to display name.
pub struct NameCache {
    inner: Mutex<HashMap<String, String>>,
}

impl NameCache {
    pub fn new() -> Self {
        Self { inner: Mutex::new(HashMap::new()) }
    }

    /// Record a (code, name) pair. Existing entries are kept — the first
    /// observed name wins, consistent with append-only semantics.
    pub fn insert(&self, code: &str, name: &str) {
        let mut inner = self.inner.lock().expect("name cache lock poisoned");
        inner.entry(code.to_string()).or_insert_with(|| name.to_string());
    }

    /// The cached name for a code, if any.
    pub fn get(&self, code: &str) -> Option<String> {
        let inner = self.inner.lock().expect("name cache lock poisoned");
        inner.get(code).cloned()
    }

    /// Resolve display names for every code, consulting the cache first and
    /// issuing one batch store lookup for the misses.
    ///
    /// Codes that remain unresolved fall back to the code itself, so every
    /// requested code is present in the returned map. A store failure on the
    /// miss lookup degrades to the code-as-name fallback.
    pub fn resolve(
        &self,
        store: &dyn DiseaseStore,
        codes: &[String],
    ) -> HashMap<String, String> {
        let mut resolved = HashMap::with_capacity(codes.len());
        let mut misses = Vec::new();

        for code in codes {
            match self.get(code) {
                Some(name) => {
                    resolved.insert(code.clone(), name);
                }
                None => misses.push(code.clone()),
            }
        }

        if !misses.is_empty() {
            debug!(miss_count = misses.len(), "resolving uncached disease names");
            match store.diseases_by_codes(&misses) {
                Ok(records) => {
                    for disease in records {
                        self.insert(&disease.code, &disease.name);
                        resolved.insert(disease.code.clone(), disease.name);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "name lookup failed, falling back to codes");
                }
            }
        }

        // Anything still unresolved keeps its code as the display name.
        for code in codes {
            resolved.entry(code.clone()).or_insert_with(|| code.clone());
        }

        resolved
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new()
    }
}
