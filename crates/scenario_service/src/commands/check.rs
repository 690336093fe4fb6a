//! Check command implementation
//!
//! Prints the resolved settings and runs a one-shot smoke projection.

use tracing::info;

use super::print_json;
use scenario_service::scenario_core::types::Fundamentals;
use scenario_service::{Engine, EngineMode, SimulationRequest};

/// Run the check command
pub fn run(engine: &Engine) -> anyhow::Result<()> {
    info!("scenario engine v{}", scenario_service::VERSION);

    let fundamentals = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20)?;
    let response = engine.run(&SimulationRequest::new(EngineMode::Deterministic, fundamentals))?;
    info!(
        elapsed_ms = response.meta.execution_time_ms,
        "smoke projection ok"
    );

    print_json(engine.settings())
}
