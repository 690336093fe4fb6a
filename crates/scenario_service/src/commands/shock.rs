//! Shock command implementation
//!
//! Sweeps macro shock intensities over the request's levers.

use tracing::info;

use super::{load_analysis_input, print_json};
use scenario_service::scenario_risk::{CancellationToken, ShockModel};
use scenario_service::Engine;

/// Run the shock command
pub fn run(
    engine: &Engine,
    input: &str,
    intensities: &[f64],
    runs: Option<usize>,
) -> anyhow::Result<()> {
    let input = load_analysis_input(engine, input)?;
    let runs = runs
        .or(input.request.runs)
        .unwrap_or(engine.settings().sensitivity_runs);
    info!(intensities = ?intensities, runs, "running shock sweep");

    let results = ShockModel::new(engine.settings().sampler()).sweep(
        &input.levers,
        &input.request.fundamentals,
        &input.config.with_iterations(runs),
        intensities,
        &CancellationToken::new(),
    )?;
    print_json(&results)
}
