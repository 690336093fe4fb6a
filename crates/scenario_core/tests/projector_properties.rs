//! Property tests for the single-trial projector.
//!
//! The projector must never leak NaN or infinity into runway, whatever
//! finite fundamentals and lever settings it receives.

use proptest::prelude::*;
use scenario_core::prelude::*;

fn lever_value() -> impl Strategy<Value = f64> {
    -50.0..150.0f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Runway is finite and within `[0, cap]` for any finite input.
    #[test]
    fn prop_runway_finite_and_bounded(
        cash in -1e9..1e12f64,
        burn in -1e6..1e7f64,
        growth in -1.0..3.0f64,
        cost in lever_value(),
        pricing in lever_value(),
    ) {
        let fundamentals = Fundamentals::new(1_000_000.0, cash, burn, growth).unwrap();
        let levers = LeverVector::default()
            .with(Lever::CostDiscipline, cost)
            .with(Lever::PricingPower, pricing);
        let projector = Projector::default();
        let outcome = projector.project(&fundamentals, &levers, 1.0);

        prop_assert!(outcome.final_runway_months.is_finite());
        prop_assert!(outcome.final_runway_months >= 0.0);
        prop_assert!(outcome.final_runway_months <= projector.params().runway_cap_months);
    }

    /// More cash never shortens runway.
    #[test]
    fn prop_runway_monotonic_in_cash(
        cash in 0.0..1e8f64,
        extra in 0.0..1e8f64,
        burn in 1.0..1e6f64,
        cost in 0.0..100.0f64,
    ) {
        let levers = LeverVector::default().with(Lever::CostDiscipline, cost);
        let projector = Projector::default();
        let low = projector.project(&Fundamentals::new(1.0, cash, burn, 0.1).unwrap(), &levers, 1.0);
        let high = projector.project(&Fundamentals::new(1.0, cash + extra, burn, 0.1).unwrap(), &levers, 1.0);

        prop_assert!(high.final_runway_months >= low.final_runway_months);
    }

    /// Higher cost discipline never shortens runway when burn is positive.
    #[test]
    fn prop_cost_discipline_extends_runway(
        cost in 0.0..95.0f64,
        step in 0.0..5.0f64,
        burn in 1.0..1e6f64,
    ) {
        let fundamentals = Fundamentals::new(1.0, 5_000_000.0, burn, 0.1).unwrap();
        let projector = Projector::default();
        let low = projector.project(&fundamentals, &LeverVector::default().with(Lever::CostDiscipline, cost), 1.0);
        let high = projector.project(&fundamentals, &LeverVector::default().with(Lever::CostDiscipline, cost + step), 1.0);

        prop_assert!(high.final_runway_months >= low.final_runway_months);
    }
}

#[test]
fn test_prelude_exports() {
    let _config = SimulationConfig::builder().iterations(1).build().unwrap();
    let _params = ModelParams::default();
    let _model = PerturbationModel::default();
    let _result = SimulationResult::new(0.5, 1.0, 1.0, 1.0);
    let _err = ScenarioError::MissingSeed;
}
