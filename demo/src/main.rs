//! RISKSPACE — Risk Engine Demo CLI
//!
//! Builds a user profile from command-line flags, loads a disease catalog
//! (the built-in fictional sample or a TOML file), runs the risk engine,
//! and prints the full calculation result as JSON.
//!
//! Usage:
//!   cargo run -p demo -- --age 58 --sex male --bmi 31.5 \
//!       --conditions E11,I10 --exercise sedentary --smoking
//!   cargo run -p demo -- --age 34 --sex female --bmi 22 \
//!       --conditions J45 --exercise active --catalog data/catalog.toml

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use riskspace_contracts::{
    disease::Sex,
    error::RiskResult,
    profile::{ExerciseLevel, UserProfile},
};
use riskspace_engine::RiskEngine;
use riskspace_store::MemoryStore;

mod sample_catalog;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExerciseArg {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl From<ExerciseArg> for ExerciseLevel {
    fn from(arg: ExerciseArg) -> Self {
        match arg {
            ExerciseArg::Sedentary => ExerciseLevel::Sedentary,
            ExerciseArg::Light => ExerciseLevel::Light,
            ExerciseArg::Moderate => ExerciseLevel::Moderate,
            ExerciseArg::Active => ExerciseLevel::Active,
        }
    }
}

/// RISKSPACE — personalized disease-risk demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "RISKSPACE risk engine demo",
    long_about = "Computes personalized disease-risk estimates, a 3D disease-space\n\
                  position, and pull vectors from a disease catalog and a user profile."
)]
struct Cli {
    /// Age in years (1-120).
    #[arg(long)]
    age: u8,

    /// Sex, for prevalence stratification.
    #[arg(long, value_enum)]
    sex: SexArg,

    /// Body Mass Index (10-60).
    #[arg(long)]
    bmi: f64,

    /// Comma-separated disease codes of existing conditions (e.g. "E11,I10").
    #[arg(long, value_delimiter = ',')]
    conditions: Vec<String>,

    /// Physical activity level.
    #[arg(long, value_enum, default_value = "moderate")]
    exercise: ExerciseArg,

    /// Current smoking status.
    #[arg(long)]
    smoking: bool,

    /// Path to a TOML catalog file; omit to use the built-in sample.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Structured logging; set RUST_LOG=debug for per-stage output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> RiskResult<()> {
    let store = match &cli.catalog {
        Some(path) => MemoryStore::from_file(path)?,
        None => MemoryStore::from_toml_str(sample_catalog::SAMPLE_CATALOG)?,
    };

    let profile = UserProfile {
        age: cli.age,
        sex: cli.sex.into(),
        bmi: cli.bmi,
        existing_conditions: cli.conditions,
        exercise_level: cli.exercise.into(),
        smoking: cli.smoking,
    };

    let engine = RiskEngine::new(Box::new(store));
    let result = engine.calculate_risks(&profile)?;

    // Pretty JSON is the demo's whole output contract.
    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("result serialization cannot fail")
    );
    Ok(())
}
