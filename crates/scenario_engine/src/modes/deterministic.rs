//! Deterministic mode.

use scenario_core::projector::Projector;
use scenario_core::types::{Fundamentals, LeverVector, SimulationResult};

/// Runway above which survival is rated at the top tier.
pub const UPPER_TIER_MONTHS: f64 = 18.0;

const UPPER_TIER_SURVIVAL: f64 = 0.9;
const MIDDLE_TIER_SURVIVAL: f64 = 0.6;
const LOWER_TIER_SURVIVAL: f64 = 0.3;

/// Maps runway onto the three survival tiers.
///
/// `> 18` months rates 0.9, above the survival floor rates 0.6, anything
/// else 0.3.
#[inline]
pub fn tiered_survival(runway_months: f64, survival_floor_months: f64) -> f64 {
    if runway_months > UPPER_TIER_MONTHS {
        UPPER_TIER_SURVIVAL
    } else if runway_months > survival_floor_months {
        MIDDLE_TIER_SURVIVAL
    } else {
        LOWER_TIER_SURVIVAL
    }
}

/// Runs the projector once with no shock.
///
/// # Examples
///
/// ```
/// use scenario_core::prelude::*;
/// use scenario_engine::modes::run_deterministic;
///
/// let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
/// let result = run_deterministic(&Projector::default(), &f, &LeverVector::default());
///
/// assert_eq!(result.survival_probability, 0.9);
/// assert!((result.enterprise_value - 6_050_000.0).abs() < 1e-6);
/// ```
pub fn run_deterministic(
    projector: &Projector,
    fundamentals: &Fundamentals,
    levers: &LeverVector,
) -> SimulationResult {
    let outcome = projector.project(fundamentals, levers, 1.0);
    let survival = tiered_survival(
        outcome.final_runway_months,
        projector.params().survival_floor_months,
    );
    SimulationResult::new(
        survival,
        outcome.final_runway_months,
        outcome.final_arr,
        projector.enterprise_value(outcome.final_arr),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_example() {
        let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
        let levers = LeverVector {
            cost_discipline: 50.0,
            pricing_power: 50.0,
            ..LeverVector::default()
        };
        let result = run_deterministic(&Projector::default(), &f, &levers);

        assert_relative_eq!(result.projected_arr, 1_210_000.0, epsilon = 1e-6);
        assert_relative_eq!(result.runway_months, 21.052_631_578_947_37, epsilon = 1e-9);
        assert_eq!(result.survival_probability, 0.9);
        assert_relative_eq!(result.risk_index, 0.1, epsilon = 1e-12);
        assert_relative_eq!(result.enterprise_value, 6_050_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tier_boundaries_are_strict() {
        assert_eq!(tiered_survival(18.0, 9.0), 0.6);
        assert_eq!(tiered_survival(18.000_001, 9.0), 0.9);
        assert_eq!(tiered_survival(9.0, 9.0), 0.3);
        assert_eq!(tiered_survival(9.000_001, 9.0), 0.6);
        assert_eq!(tiered_survival(0.0, 9.0), 0.3);
    }

    #[test]
    fn test_risk_index_complements_tiers() {
        for (runway, expected) in [(3.0, 0.3), (12.0, 0.6), (40.0, 0.9)] {
            let survival = tiered_survival(runway, 9.0);
            let result = SimulationResult::new(survival, runway, 1.0, 5.0);
            assert_eq!(result.survival_probability, expected);
            assert_eq!(result.risk_index + result.survival_probability, 1.0);
        }
    }
}
