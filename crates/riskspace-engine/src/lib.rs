//! # riskspace-engine
//!
//! The RISKSPACE risk scoring engine: a five-stage numeric pipeline that
//! turns (prevalence table, comorbidity-association table, user profile)
//! into (ranked risk scores, 3D position, pull vectors).
//!
//! This crate provides:
//! - The `DiseaseStore` trait — the four-operation data-access seam
//! - The pure classifiers (`DiseaseCategory`, `AgeGroup`)
//! - The pipeline stages as pure functions over risk maps
//! - The `RiskEngine` orchestrator
//!
//! ## Usage
//!
//! ```rust,ignore
//! use riskspace_engine::{RiskEngine, traits::DiseaseStore};
//!
//! let engine = RiskEngine::new(Box::new(store));
//! let result = engine.calculate_risks(&profile)?;
//! ```

pub mod classify;
pub mod engine;
pub mod names;
pub mod stages;
pub mod traits;

pub use engine::RiskEngine;
