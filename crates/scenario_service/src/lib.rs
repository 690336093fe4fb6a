//! Engine facade, settings and CLI support for runway scenario simulation.
//!
//! This crate wires the lower layers into one entry point:
//!
//! - [`Engine::run`]: dispatches a [`SimulationRequest`] to deterministic,
//!   stress, Monte Carlo or sensitivity mode and attaches run metadata
//! - [`RequestSpec`]: JSON wire shape, validated into a request
//! - [`config::EngineSettings`]: TOML file, `SCENARIO_*` environment and CLI
//!   overrides
//!
//! The `scenario` binary exposes the same operations on the command line.

pub mod config;
pub mod error;
pub mod facade;
pub mod request;
pub mod response;

pub use config::{build_settings, CliArgs, ConfigError, EngineSettings, LogLevel};
pub use error::EngineError;
pub use facade::Engine;
pub use request::{EngineMode, RequestSpec, SimulationRequest};
pub use response::{EngineOutput, ResponseMeta, SensitivityBundle, SimulationResponse};

// Re-export scenario layers for integration
pub use scenario_core;
pub use scenario_engine;
pub use scenario_risk;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
