//! CLI command implementations
//!
//! Each submodule implements one subcommand. Requests are read as JSON and
//! results printed to stdout as JSON.

pub mod check;
pub mod elasticity;
pub mod run;
pub mod shock;
pub mod tornado;

use std::io::Read;

use anyhow::Context;
use clap::Args;
use scenario_service::scenario_core::types::{Lever, LeverVector, SimulationConfig};
use scenario_service::scenario_risk::SensitivityOptions;
use scenario_service::{Engine, RequestSpec, SimulationRequest};
use serde::Serialize;

/// Arguments shared by the sensitivity commands.
#[derive(Args, Debug)]
pub struct AnalysisArgs {
    /// Request JSON file, or `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Lever points moved up and down
    #[arg(long)]
    pub perturbation_pct: Option<f64>,

    /// Trials per batch
    #[arg(long)]
    pub runs: Option<usize>,

    /// Levers to perturb, e.g. `demandStrength,costDiscipline`
    #[arg(long, value_delimiter = ',')]
    pub candidates: Vec<String>,
}

/// Inputs resolved for an analysis command.
pub struct AnalysisInput {
    pub request: SimulationRequest,
    pub levers: LeverVector,
    pub config: SimulationConfig,
}

/// Reads a request spec from a file or stdin.
pub fn read_spec(input: &str) -> anyhow::Result<RequestSpec> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read request file {}", input))?
    };
    Ok(RequestSpec::from_json(&json)?)
}

/// Loads a request for analysis, defaulting the mode to sensitivity.
pub fn load_analysis_input(engine: &Engine, input: &str) -> anyhow::Result<AnalysisInput> {
    let mut spec = read_spec(input)?;
    spec.engine_mode.get_or_insert_with(|| "sensitivity".to_string());

    let request = SimulationRequest::try_from(spec)?;
    let config = request.simulation_config(engine.settings().default_iterations)?;
    if config.seed().is_none() {
        anyhow::bail!("a seed is required for sensitivity analysis");
    }
    let levers = request.levers.unwrap_or_default();
    Ok(AnalysisInput {
        request,
        levers,
        config,
    })
}

/// Sensitivity options from settings, request and command-line overrides.
pub fn analysis_options(
    engine: &Engine,
    request: &SimulationRequest,
    args: &AnalysisArgs,
) -> anyhow::Result<SensitivityOptions> {
    let settings = engine.settings();
    let mut options = SensitivityOptions::default()
        .with_perturbation_pct(
            args.perturbation_pct
                .or(request.perturbation_pct)
                .unwrap_or(settings.perturbation_pct),
        )
        .with_runs(args.runs.or(request.runs).unwrap_or(settings.sensitivity_runs));

    if !args.candidates.is_empty() {
        let candidates = args
            .candidates
            .iter()
            .map(|name| name.parse::<Lever>())
            .collect::<Result<Vec<_>, _>>()?;
        options = options.with_candidates(candidates);
    }
    Ok(options)
}

/// Prints a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
