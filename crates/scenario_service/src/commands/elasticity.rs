//! Elasticity command implementation

use tracing::info;

use super::{analysis_options, load_analysis_input, print_json, AnalysisArgs};
use scenario_service::scenario_risk::SensitivityEngine;
use scenario_service::Engine;

/// Run the elasticity command
pub fn run(engine: &Engine, args: &AnalysisArgs) -> anyhow::Result<()> {
    let input = load_analysis_input(engine, &args.input)?;
    let options = analysis_options(engine, &input.request, args)?;
    info!(
        candidates = options.candidates.len(),
        runs = options.runs,
        perturbation_pct = options.perturbation_pct,
        "ranking lever elasticity"
    );

    let entries = SensitivityEngine::new(engine.settings().sampler()).compute_elasticity(
        &input.levers,
        &input.request.fundamentals,
        &input.config,
        &options,
    )?;
    print_json(&entries)
}
