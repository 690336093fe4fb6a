//! End-to-end tests for sensitivity and shock analysis.

use scenario_core::prelude::*;
use scenario_risk::sensitivity::{
    compute_elasticity, compute_sensitivity_profile, compute_tornado, SensitivityOptions,
    TORNADO_MAX_BARS,
};
use scenario_risk::shock::{compute_shock_propagation, shocked_levers};
use scenario_risk::{Analysis, CancellationToken, ImpactDirection, RiskError};

fn fundamentals() -> Fundamentals {
    Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap()
}

fn config(seed: u64) -> SimulationConfig {
    SimulationConfig::builder()
        .iterations(1_000)
        .seed(seed)
        .perturbation(PerturbationModel::LeverCoupled)
        .build()
        .unwrap()
}

#[test]
fn test_default_candidates_normalised() {
    let entries = compute_elasticity(
        &LeverVector::default(),
        &fundamentals(),
        &config(7),
        &SensitivityOptions::default(),
    )
    .unwrap();

    assert_eq!(entries.len(), Lever::DEFAULT_CANDIDATES.len());
    let max = entries
        .iter()
        .map(|e| e.elasticity_score)
        .fold(f64::MIN, f64::max);
    assert_eq!(max, 1.0);
    assert!(entries
        .iter()
        .all(|e| (0.0..=1.0).contains(&e.elasticity_score)));
    assert!(entries
        .windows(2)
        .all(|w| w[0].elasticity_score >= w[1].elasticity_score));
}

#[test]
fn test_tornado_ordering_over_all_levers() {
    let options = SensitivityOptions::default().with_candidates(Lever::ALL.to_vec());
    let bars = compute_tornado(&LeverVector::default(), &fundamentals(), &config(3), &options).unwrap();

    assert_eq!(bars.len(), TORNADO_MAX_BARS);
    assert!(bars.windows(2).all(|w| w[0].spread >= w[1].spread));
    assert!(bars.iter().all(|b| b.spread == (b.high_ev - b.low_ev).abs()));
}

#[test]
fn test_analysis_is_reproducible() {
    let run = || {
        compute_sensitivity_profile(
            Some(&LeverVector::default()),
            &fundamentals(),
            Some(&config(99)),
            &SensitivityOptions::default(),
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_cancellation_paths() {
    let token = CancellationToken::new();
    token.cancel();
    let options = SensitivityOptions::default().with_cancellation(token);

    let err = compute_elasticity(&LeverVector::default(), &fundamentals(), &config(1), &options)
        .unwrap_err();
    assert_eq!(err, RiskError::Cancelled);

    let profile = compute_sensitivity_profile(
        Some(&LeverVector::default()),
        &fundamentals(),
        Some(&config(1)),
        &options,
    )
    .unwrap();
    assert!(matches!(profile, Analysis::NotComputed { ref reason } if reason == "cancelled"));
}

#[test]
fn test_shock_example_levers() {
    let base = LeverVector {
        market_volatility: 50.0,
        demand_strength: 50.0,
        funding_pressure: 50.0,
        ..LeverVector::default()
    };
    let shocked = shocked_levers(&base, 200.0);
    assert_eq!(shocked.market_volatility, 100.0);
    assert_eq!(shocked.demand_strength, 0.0);
    assert_eq!(shocked.funding_pressure, 90.0);

    let result = compute_shock_propagation(&base, &fundamentals(), &config(5), 200.0, None).unwrap();
    assert_eq!(result.shock_intensity_pct, 200.0);
    assert_eq!(result.failure_probability, 1.0 - result.survival_probability);
}

#[test]
fn test_zero_burn_analysis_stays_finite() {
    let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 0.0, 0.2).unwrap();
    let entries = compute_elasticity(&LeverVector::default(), &f, &config(2), &SensitivityOptions::default())
        .unwrap();
    assert!(entries.iter().all(|e| e.delta_runway.is_finite()));
    assert!(entries.iter().all(|e| e.elasticity_score.is_finite()));
}

fn plain_config() -> SimulationConfig {
    SimulationConfig::builder().iterations(500).seed(7).build().unwrap()
}

#[test]
fn test_shock_with_plain_config_moves_outcomes() {
    // 10.5 months of runway at neutral levers
    let tight = Fundamentals::new(1_000_000.0, 1_000_000.0, 100_000.0, 0.20).unwrap();
    let levers = LeverVector::default();

    let calm = compute_shock_propagation(&levers, &tight, &plain_config(), 0.0, None).unwrap();
    let full = compute_shock_propagation(&levers, &tight, &plain_config(), 200.0, None).unwrap();

    assert_ne!(calm, full);
    assert!(full.median_ev < calm.median_ev);
    assert!(full.median_runway < calm.median_runway);
}

#[test]
fn test_elasticity_with_plain_config_sees_macro_levers() {
    let entries = compute_elasticity(
        &LeverVector::default(),
        &fundamentals(),
        &plain_config(),
        &SensitivityOptions::default(),
    )
    .unwrap();
    let entry = |lever: Lever| {
        entries
            .iter()
            .find(|e| e.lever == lever)
            .unwrap()
            .clone()
    };

    let demand = entry(Lever::DemandStrength);
    assert!(demand.elasticity_score > 0.0);
    assert_eq!(demand.direction, ImpactDirection::Positive);

    let funding = entry(Lever::FundingPressure);
    assert!(funding.elasticity_score > 0.0);
    assert_eq!(funding.direction, ImpactDirection::Negative);
}

#[test]
fn test_explicit_growth_only_is_respected() {
    let config = SimulationConfig::builder()
        .iterations(200)
        .seed(7)
        .perturbation(PerturbationModel::GrowthOnly)
        .build()
        .unwrap();
    let calm = compute_shock_propagation(&LeverVector::default(), &fundamentals(), &config, 0.0, None).unwrap();
    let full = compute_shock_propagation(&LeverVector::default(), &fundamentals(), &config, 200.0, None).unwrap();

    // Macro levers never reach the projector under the growth-only model
    assert_eq!(calm.survival_probability, full.survival_probability);
    assert_eq!(calm.median_ev, full.median_ev);
}
