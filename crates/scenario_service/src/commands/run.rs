//! Run command implementation
//!
//! Dispatches a request to the engine in its own mode.

use tracing::warn;

use super::{print_json, read_spec};
use scenario_service::Engine;

/// Run the run command
pub fn run(engine: &Engine, input: &str) -> anyhow::Result<()> {
    let spec = read_spec(input)?;
    let response = engine.run_spec(spec)?;

    for warning in &response.meta.warnings {
        warn!(warning = %warning.message(), "input warning");
    }
    print_json(&response)
}
