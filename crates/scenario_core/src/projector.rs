//! Single-trial runway projector.
//!
//! The projector is a pure function of fundamentals, levers and an injected
//! growth shock. It never draws randomness itself; callers pass the shock.
//!
//! ```text
//! adjusted_growth = base_growth × (1 + pricing_power/100 × 0.1) × shock
//! projected_arr   = starting_arr × (1 + adjusted_growth)^(horizon/12)
//! adjusted_burn   = monthly_burn × (1 − cost_discipline/100 × 0.1)
//! runway          = starting_cash / max(adjusted_burn, ε)
//! survived        = runway > survival_floor
//! ```

use crate::types::{
    Fundamentals, LeverVector, ScenarioError, TrialOutcome, DEFAULT_HORIZON_MONTHS,
};

/// Survival floor in months.
pub const DEFAULT_SURVIVAL_FLOOR_MONTHS: f64 = 9.0;

/// Multiple applied to ARR for point-in-time enterprise value.
pub const DEFAULT_EV_MULTIPLE: f64 = 5.0;

/// Conservative multiple applied to ARR in sensitivity batches.
pub const DEFAULT_SENSITIVITY_EV_MULTIPLE: f64 = 3.5;

/// Runway reported when burn is zero or negative (100 years).
pub const DEFAULT_RUNWAY_CAP_MONTHS: f64 = 1_200.0;

/// Floor applied to adjusted burn before division.
pub const BURN_EPSILON: f64 = 1e-6;

/// Weight of pricing power on growth (10% at full power).
const PRICING_GROWTH_WEIGHT: f64 = 0.1;

/// Weight of cost discipline on burn (10% at full discipline).
const COST_BURN_WEIGHT: f64 = 0.1;

/// Constants shared by every mode. Passed explicitly, never global.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ModelParams {
    /// Runway (months) a trial must exceed to count as surviving
    pub survival_floor_months: f64,
    /// ARR multiple for enterprise value
    pub ev_multiple: f64,
    /// ARR multiple used by sensitivity batches
    pub sensitivity_ev_multiple: f64,
    /// Sentinel cap on runway
    pub runway_cap_months: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            survival_floor_months: DEFAULT_SURVIVAL_FLOOR_MONTHS,
            ev_multiple: DEFAULT_EV_MULTIPLE,
            sensitivity_ev_multiple: DEFAULT_SENSITIVITY_EV_MULTIPLE,
            runway_cap_months: DEFAULT_RUNWAY_CAP_MONTHS,
        }
    }
}

impl ModelParams {
    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let positive = [
            ("survival_floor_months", self.survival_floor_months),
            ("runway_cap_months", self.runway_cap_months),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ScenarioError::InvalidParameter {
                    name,
                    reason: format!("must be positive and finite, got {}", value),
                });
            }
        }
        let non_negative = [
            ("ev_multiple", self.ev_multiple),
            ("sensitivity_ev_multiple", self.sensitivity_ev_multiple),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ScenarioError::InvalidParameter {
                    name,
                    reason: format!("must be non-negative and finite, got {}", value),
                });
            }
        }
        if self.runway_cap_months <= self.survival_floor_months {
            return Err(ScenarioError::InvalidParameter {
                name: "runway_cap_months",
                reason: "must exceed the survival floor".to_string(),
            });
        }
        Ok(())
    }
}

/// Single-trial projector.
///
/// # Examples
///
/// ```
/// use scenario_core::projector::Projector;
/// use scenario_core::types::{Fundamentals, LeverVector};
///
/// let fundamentals = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
/// let levers = LeverVector::default();
///
/// let outcome = Projector::default().project(&fundamentals, &levers, 1.0);
/// assert!((outcome.final_arr - 1_210_000.0).abs() < 1e-6);
/// assert!(outcome.did_survive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    params: ModelParams,
    horizon_months: u32,
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(ModelParams::default())
    }
}

impl Projector {
    /// Creates a projector over the default one-year horizon.
    pub fn new(params: ModelParams) -> Self {
        Self {
            params,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }

    /// Returns a copy projecting over `horizon_months`.
    #[must_use]
    pub fn with_horizon(self, horizon_months: u32) -> Self {
        Self {
            horizon_months: horizon_months.max(1),
            ..self
        }
    }

    /// Model parameters in use.
    #[inline]
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Growth after pricing power and the shock factor.
    #[inline]
    pub fn adjusted_growth(&self, fundamentals: &Fundamentals, levers: &LeverVector, shock: f64) -> f64 {
        fundamentals.base_growth_rate
            * (1.0 + levers.pricing_power / 100.0 * PRICING_GROWTH_WEIGHT)
            * shock
    }

    /// Burn after cost discipline, before the epsilon floor.
    #[inline]
    pub fn adjusted_burn(&self, fundamentals: &Fundamentals, levers: &LeverVector) -> f64 {
        fundamentals.monthly_burn * (1.0 - levers.cost_discipline / 100.0 * COST_BURN_WEIGHT)
    }

    /// Runs one trial.
    pub fn project(&self, fundamentals: &Fundamentals, levers: &LeverVector, shock: f64) -> TrialOutcome {
        let growth = self.adjusted_growth(fundamentals, levers, shock);
        let years = f64::from(self.horizon_months) / 12.0;
        let final_arr = fundamentals.starting_arr * (1.0 + growth).powf(years);

        let adjusted_burn = self.adjusted_burn(fundamentals, levers);
        let runway = fundamentals.starting_cash / adjusted_burn.max(BURN_EPSILON);
        let final_runway_months = if runway.is_nan() {
            0.0
        } else {
            runway.clamp(0.0, self.params.runway_cap_months)
        };

        TrialOutcome {
            final_arr: if final_arr.is_finite() { final_arr } else { 0.0 },
            final_runway_months,
            did_survive: final_runway_months > self.params.survival_floor_months,
            adjusted_burn,
        }
    }

    /// Enterprise value at the point-in-time multiple.
    #[inline]
    pub fn enterprise_value(&self, arr: f64) -> f64 {
        arr * self.params.ev_multiple
    }
}
