//! Integration tests for the engine facade.

use approx::assert_relative_eq;
use scenario_service::scenario_core::prelude::*;
use scenario_service::scenario_engine::modes::StressPreset;
use scenario_service::scenario_engine::SimulationWarning;
use scenario_service::scenario_risk::Analysis;
use scenario_service::scenario_risk::CancellationToken;
use scenario_service::{
    Engine, EngineError, EngineMode, EngineOutput, EngineSettings, RequestSpec, SimulationRequest,
};

fn fundamentals() -> Fundamentals {
    Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap()
}

fn worked_example_levers() -> LeverVector {
    LeverVector {
        cost_discipline: 50.0,
        pricing_power: 50.0,
        ..LeverVector::default()
    }
}

#[test]
fn test_deterministic_worked_example() {
    let request = SimulationRequest::new(EngineMode::Deterministic, fundamentals())
        .with_levers(worked_example_levers());
    let response = Engine::default().run(&request).unwrap();
    let result = response.scenario().unwrap();

    assert_relative_eq!(result.projected_arr, 1_210_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.runway_months, 2_000_000.0 / 95_000.0, epsilon = 1e-9);
    assert_eq!(result.survival_probability, 0.9);
    assert_relative_eq!(result.risk_index, 0.1, epsilon = 1e-12);
    assert_relative_eq!(result.enterprise_value, 6_050_000.0, epsilon = 1e-6);
    assert!(response.meta.warnings.is_empty());
    assert_eq!(response.meta.seed, None);
}

#[test]
fn test_stress_mode_meta() {
    let request = SimulationRequest::new(EngineMode::Stress(StressPreset::CostSpike), fundamentals());
    let response = Engine::default().run(&request).unwrap();

    assert_eq!(response.meta.engine_mode, "stress");
    assert_eq!(response.meta.stress_preset.as_deref(), Some("costSpike"));
    let result = response.scenario().unwrap();
    // 21.05 / 1.3 ≈ 16.2 months: middle tier
    assert_eq!(result.survival_probability, 0.6);
}

#[test]
fn test_montecarlo_requires_seed() {
    let request = SimulationRequest::new(EngineMode::MonteCarlo, fundamentals());
    let err = Engine::default().run(&request).unwrap_err();
    assert!(matches!(err, EngineError::Configuration(_)));
    assert_eq!(
        err.to_string(),
        "Configuration error: Seed is required for montecarlo mode"
    );
}

#[test]
fn test_montecarlo_reproducible() {
    let request = SimulationRequest::new(EngineMode::MonteCarlo, fundamentals())
        .with_seed(7)
        .with_iterations(500);
    let engine = Engine::default();
    let a = engine.run(&request).unwrap();
    let b = engine.run(&request).unwrap();

    assert_eq!(a.result, b.result);
    assert_eq!(a.meta.seed, Some(7));
    assert_eq!(a.meta.engine_mode, "montecarlo");
}

#[test]
fn test_invalid_mode_from_spec() {
    let spec = RequestSpec {
        engine_mode: Some("quantum".to_string()),
        fundamentals: Some(fundamentals()),
        ..Default::default()
    };
    let err = Engine::default().run_spec(spec).unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: Invalid engine mode: quantum");
}

#[test]
fn test_sensitivity_bundle() {
    let mut request = SimulationRequest::new(EngineMode::Sensitivity, fundamentals())
        .with_levers(LeverVector::default())
        .with_seed(11);
    request.shock_intensity_pct = Some(100.0);
    request.runs = Some(150);

    let response = Engine::default().run(&request).unwrap();
    assert!(response.scenario().is_none());
    let bundle = response.sensitivity().unwrap().as_computed().unwrap();

    assert_eq!(bundle.profile.elasticity.len(), 5);
    assert_eq!(bundle.profile.elasticity[0].elasticity_score, 1.0);
    assert!(bundle.profile.tornado.len() <= 5);
    assert_eq!(bundle.shock.unwrap().shock_intensity_pct, 100.0);
}

#[test]
fn test_sensitivity_not_computed_without_levers() {
    let engine = Engine::default();

    let no_levers = SimulationRequest::new(EngineMode::Sensitivity, fundamentals()).with_seed(1);
    let response = engine.run(&no_levers).unwrap();
    assert!(response.sensitivity().unwrap().reason().unwrap().contains("levers"));
}

#[test]
fn test_sensitivity_requires_seed() {
    let request = SimulationRequest::new(EngineMode::Sensitivity, fundamentals())
        .with_levers(LeverVector::default());
    let err = Engine::default().run(&request).unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "Configuration error: Seed is required for sensitivity mode"
    );
}

#[test]
fn test_sensitivity_cancelled() {
    let token = CancellationToken::new();
    token.cancel();
    let request = SimulationRequest::new(EngineMode::Sensitivity, fundamentals())
        .with_levers(LeverVector::default())
        .with_seed(1);

    let response = Engine::default().run_cancellable(&request, &token).unwrap();
    assert_eq!(
        response.sensitivity().unwrap(),
        &Analysis::not_computed("cancelled")
    );
}

#[test]
fn test_zero_burn_reports_warning() {
    let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 0.0, 0.2).unwrap();
    let request = SimulationRequest::new(EngineMode::MonteCarlo, f)
        .with_seed(3)
        .with_iterations(200);
    let response = Engine::default().run(&request).unwrap();

    let result = response.scenario().unwrap();
    assert!(result.runway_months.is_finite());
    assert_eq!(result.survival_probability, 1.0);
    assert!(matches!(
        response.meta.warnings.as_slice(),
        [SimulationWarning::DegenerateBurn { .. }]
    ));
}

#[test]
fn test_settings_flow_into_run() {
    let settings = EngineSettings {
        survival_floor_months: 24.0,
        model_version: "test-model".to_string(),
        ..Default::default()
    };
    let request = SimulationRequest::new(EngineMode::MonteCarlo, fundamentals()).with_seed(2);
    let response = Engine::new(settings).run(&request).unwrap();

    // 21 months never clears a 24-month floor
    assert_eq!(response.scenario().unwrap().survival_probability, 0.0);
    assert_eq!(response.meta.model_version, "test-model");
}

#[test]
fn test_response_json_shape() {
    let request = SimulationRequest::new(EngineMode::Deterministic, fundamentals());
    let response = Engine::default().run(&request).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&response.to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["result"]["kind"], "scenario");
    assert!(json["result"]["value"]["projectedARR"].is_number());
    assert!(json["meta"]["executionTimeMs"].is_number());
    assert!(json["meta"]["timestamp"].is_string());
    assert!(matches!(response.result, EngineOutput::Scenario(_)));
}
