//! Engine settings
//!
//! Handles loading settings from TOML files, environment variables and CLI
//! arguments.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use scenario_core::projector::{
    ModelParams, DEFAULT_EV_MULTIPLE, DEFAULT_RUNWAY_CAP_MONTHS, DEFAULT_SENSITIVITY_EV_MULTIPLE,
    DEFAULT_SURVIVAL_FLOOR_MONTHS,
};
use scenario_engine::mc::{MonteCarloSampler, DEFAULT_PARALLEL_THRESHOLD};
use scenario_risk::sensitivity::{DEFAULT_PERTURBATION_PCT, DEFAULT_SENSITIVITY_RUNS};

/// Prefix of every settings environment variable.
pub const ENV_PREFIX: &str = "SCENARIO_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Opaque version tag echoed in response metadata
    pub model_version: String,
    /// Trials per Monte Carlo run when the request names none
    pub default_iterations: usize,
    /// Trials per sensitivity batch
    pub sensitivity_runs: usize,
    /// Lever points moved by sensitivity analysis
    pub perturbation_pct: f64,
    /// Runway (months) a trial must exceed to survive
    pub survival_floor_months: f64,
    /// Point-in-time ARR multiple
    pub ev_multiple: f64,
    /// ARR multiple for sensitivity and shock analysis
    pub sensitivity_ev_multiple: f64,
    /// Batch size from which trials run on Rayon
    pub parallel_threshold: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            model_version: format!("runway-terrain/{}", crate::VERSION),
            default_iterations: 500,
            sensitivity_runs: DEFAULT_SENSITIVITY_RUNS,
            perturbation_pct: DEFAULT_PERTURBATION_PCT,
            survival_floor_months: DEFAULT_SURVIVAL_FLOOR_MONTHS,
            ev_multiple: DEFAULT_EV_MULTIPLE,
            sensitivity_ev_multiple: DEFAULT_SENSITIVITY_EV_MULTIPLE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn parse_env<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("{}{}={}: {}", ENV_PREFIX, var, value, e)))
}

impl EngineSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: EngineSettings = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Override fields from `SCENARIO_*` variables returned by `lookup`.
    ///
    /// `lookup` receives the name without the prefix.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&v)?;
        }
        if let Some(v) = lookup("MODEL_VERSION") {
            self.model_version = v;
        }
        if let Some(v) = lookup("DEFAULT_ITERATIONS") {
            self.default_iterations = parse_env("DEFAULT_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("SENSITIVITY_RUNS") {
            self.sensitivity_runs = parse_env("SENSITIVITY_RUNS", &v)?;
        }
        if let Some(v) = lookup("PERTURBATION_PCT") {
            self.perturbation_pct = parse_env("PERTURBATION_PCT", &v)?;
        }
        if let Some(v) = lookup("SURVIVAL_FLOOR_MONTHS") {
            self.survival_floor_months = parse_env("SURVIVAL_FLOOR_MONTHS", &v)?;
        }
        if let Some(v) = lookup("EV_MULTIPLE") {
            self.ev_multiple = parse_env("EV_MULTIPLE", &v)?;
        }
        if let Some(v) = lookup("SENSITIVITY_EV_MULTIPLE") {
            self.sensitivity_ev_multiple = parse_env("SENSITIVITY_EV_MULTIPLE", &v)?;
        }
        if let Some(v) = lookup("PARALLEL_THRESHOLD") {
            self.parallel_threshold = parse_env("PARALLEL_THRESHOLD", &v)?;
        }
        Ok(())
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(format!("{}{}", ENV_PREFIX, name)).ok())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(model_version) = &cli.model_version {
            self.model_version = model_version.clone();
        }
        if let Some(iterations) = cli.iterations {
            self.default_iterations = iterations;
        }
        if let Some(threshold) = cli.parallel_threshold {
            self.parallel_threshold = threshold;
        }
        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "default_iterations",
                reason: "must be positive".to_string(),
            });
        }
        if self.sensitivity_runs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sensitivity_runs",
                reason: "must be positive".to_string(),
            });
        }
        if !(self.perturbation_pct > 0.0 && self.perturbation_pct <= 100.0) {
            return Err(ConfigError::InvalidValue {
                field: "perturbation_pct",
                reason: format!("must be in (0, 100], got {}", self.perturbation_pct),
            });
        }
        self.model_params()
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                field: "model",
                reason: e.to_string(),
            })
    }

    /// Model parameters derived from these settings
    pub fn model_params(&self) -> ModelParams {
        ModelParams {
            survival_floor_months: self.survival_floor_months,
            ev_multiple: self.ev_multiple,
            sensitivity_ev_multiple: self.sensitivity_ev_multiple,
            runway_cap_months: DEFAULT_RUNWAY_CAP_MONTHS,
        }
    }

    /// Monte Carlo sampler configured from these settings
    pub fn sampler(&self) -> MonteCarloSampler {
        MonteCarloSampler::new(self.model_params()).with_parallel_threshold(self.parallel_threshold)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Model version override
    pub model_version: Option<String>,
    /// Default iteration override
    pub iterations: Option<usize>,
    /// Parallel threshold override
    pub parallel_threshold: Option<usize>,
}

/// Build settings from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_settings(cli: &CliArgs) -> Result<EngineSettings, ConfigError> {
    let mut settings = if let Some(config_path) = &cli.config_file {
        EngineSettings::from_file(config_path)?
    } else {
        EngineSettings::default()
    };

    settings.apply_env()?;
    settings.merge_with_cli(cli)?;

    // Final validation
    settings.validate()?;

    Ok(settings)
}
