//! Tornado command implementation

use tracing::info;

use super::{analysis_options, load_analysis_input, print_json, AnalysisArgs};
use scenario_service::scenario_risk::SensitivityEngine;
use scenario_service::Engine;

/// Run the tornado command
pub fn run(engine: &Engine, args: &AnalysisArgs) -> anyhow::Result<()> {
    let input = load_analysis_input(engine, &args.input)?;
    let options = analysis_options(engine, &input.request, args)?;
    info!(
        candidates = options.candidates.len(),
        runs = options.runs,
        "building tornado"
    );

    let bars = SensitivityEngine::new(engine.settings().sampler()).compute_tornado(
        &input.levers,
        &input.request.fundamentals,
        &input.config,
        &options,
    )?;
    print_json(&bars)
}
