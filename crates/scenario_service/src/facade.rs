//! Engine facade: dispatches a request to one mode and wraps the result.

use std::time::Instant;

use scenario_core::types::SimulationConfig;
use scenario_engine::mc::MonteCarloSampler;
use scenario_engine::inspect_inputs;
use scenario_engine::modes::{run_deterministic, run_stress};
use scenario_risk::sensitivity::{SensitivityEngine, SensitivityOptions, CANCELLED_REASON};
use scenario_risk::{Analysis, CancellationToken, ShockModel};

use crate::config::EngineSettings;
use crate::error::EngineError;
use crate::request::{EngineMode, RequestSpec, SimulationRequest};
use crate::response::{EngineOutput, ResponseMeta, SensitivityBundle, SimulationResponse};

/// Engine facade.
///
/// Holds settings only; every run is a pure function of the request.
///
/// # Examples
///
/// ```
/// use scenario_core::prelude::*;
/// use scenario_service::{Engine, EngineMode, SimulationRequest};
///
/// let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
/// let request = SimulationRequest::new(EngineMode::Deterministic, f);
///
/// let response = Engine::default().run(&request).unwrap();
/// assert_eq!(response.scenario().unwrap().survival_probability, 0.9);
/// assert_eq!(response.meta.engine_mode, "deterministic");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    settings: EngineSettings,
}

impl Engine {
    /// Creates an engine with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    /// Settings in use.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Validates a wire request, then runs it.
    pub fn run_spec(&self, spec: RequestSpec) -> Result<SimulationResponse, EngineError> {
        let request = SimulationRequest::try_from(spec)?;
        self.run(&request)
    }

    /// Runs a request.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Configuration`] when Monte Carlo or sensitivity mode
    ///   has no seed
    /// - lower-layer errors for invalid inputs
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResponse, EngineError> {
        self.run_cancellable(request, &CancellationToken::new())
    }

    /// Runs a request, checking `cancel` between sensitivity batches.
    pub fn run_cancellable(
        &self,
        request: &SimulationRequest,
        cancel: &CancellationToken,
    ) -> Result<SimulationResponse, EngineError> {
        let started = Instant::now();
        request.fundamentals.validate()?;

        let sampler = self.settings.sampler();
        let config = request.simulation_config(self.settings.default_iterations)?;
        let projector = sampler.projector(&config);
        let levers = request.levers.unwrap_or_default();
        if request.mode.is_stochastic() && config.seed().is_none() {
            return Err(EngineError::configuration(format!(
                "Seed is required for {} mode",
                request.mode.name()
            )));
        }

        let (result, warnings) = match request.mode {
            EngineMode::Deterministic => {
                let warnings = inspect_inputs(&projector, &request.fundamentals, &levers);
                let result = run_deterministic(&projector, &request.fundamentals, &levers);
                (EngineOutput::Scenario(result), warnings)
            }
            EngineMode::Stress(preset) => {
                let stressed = preset.apply(&request.fundamentals);
                let warnings = inspect_inputs(&projector, &stressed, &levers);
                let result = run_stress(&projector, &request.fundamentals, &levers, preset);
                (EngineOutput::Scenario(result), warnings)
            }
            EngineMode::MonteCarlo => {
                let warnings = inspect_inputs(&projector, &request.fundamentals, &levers);
                let result = sampler.run_monte_carlo(&request.fundamentals, &levers, &config)?;
                (EngineOutput::Scenario(result), warnings)
            }
            EngineMode::Sensitivity => {
                let warnings = inspect_inputs(&projector, &request.fundamentals, &levers);
                let analysis = self.sensitivity(request, &sampler, &config, cancel)?;
                (EngineOutput::Sensitivity(analysis), warnings)
            }
        };

        let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
        let model_version = request
            .model_version
            .clone()
            .unwrap_or_else(|| self.settings.model_version.clone());
        tracing::info!(
            mode = request.mode.name(),
            model_version = %model_version,
            elapsed_ms,
            warnings = warnings.len(),
            "engine run complete"
        );

        Ok(SimulationResponse {
            result,
            meta: ResponseMeta {
                engine_mode: request.mode.name().to_string(),
                stress_preset: match request.mode {
                    EngineMode::Stress(preset) => Some(preset.name().to_string()),
                    _ => None,
                },
                model_version,
                seed: request.seed,
                execution_time_ms: elapsed_ms,
                timestamp: chrono::Utc::now().to_rfc3339(),
                warnings,
            },
        })
    }

    /// Sensitivity mode. Missing levers give `NotComputed`.
    fn sensitivity(
        &self,
        request: &SimulationRequest,
        sampler: &MonteCarloSampler,
        config: &SimulationConfig,
        cancel: &CancellationToken,
    ) -> Result<Analysis<SensitivityBundle>, EngineError> {
        let runs = request.runs.unwrap_or(self.settings.sensitivity_runs);
        let options = SensitivityOptions::default()
            .with_perturbation_pct(request.perturbation_pct.unwrap_or(self.settings.perturbation_pct))
            .with_runs(runs)
            .with_cancellation(cancel.clone());

        let profile = match SensitivityEngine::new(*sampler).compute_profile(
            request.levers.as_ref(),
            &request.fundamentals,
            Some(config),
            &options,
        )? {
            Analysis::Computed(profile) => profile,
            Analysis::NotComputed { reason } => return Ok(Analysis::NotComputed { reason }),
        };

        let shock = match (request.shock_intensity_pct, request.levers.as_ref()) {
            (Some(pct), Some(levers)) => {
                if cancel.is_cancelled() {
                    return Ok(Analysis::not_computed(CANCELLED_REASON));
                }
                let shock = ShockModel::new(*sampler).propagate(
                    levers,
                    &request.fundamentals,
                    &config.with_iterations(runs),
                    pct,
                )?;
                Some(shock)
            }
            _ => None,
        };

        Ok(Analysis::Computed(SensitivityBundle { profile, shock }))
    }
}
