//! Per-trial outcomes and engine results.

/// Outcome of one projector call. Ephemeral; discarded after aggregation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrialOutcome {
    /// ARR at the end of the horizon
    #[cfg_attr(feature = "serde", serde(rename = "finalARR"))]
    pub final_arr: f64,
    /// Months of runway, finite and non-negative
    pub final_runway_months: f64,
    /// Whether runway exceeds the survival floor
    pub did_survive: bool,
    /// Burn after lever adjustment and before the epsilon floor
    pub adjusted_burn: f64,
}

impl TrialOutcome {
    /// Whether the adjusted burn was zero or negative (degenerate input).
    #[inline]
    pub fn burn_degenerate(&self) -> bool {
        self.adjusted_burn <= 0.0
    }
}

/// Engine output for a single scenario.
///
/// `risk_index` is always `1 - survival_probability`; construct through
/// [`SimulationResult::new`] to keep that invariant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationResult {
    /// Probability of survival in `[0, 1]`
    pub survival_probability: f64,
    /// Months of runway, capped at the runway sentinel
    pub runway_months: f64,
    /// Projected ARR at the horizon
    #[cfg_attr(feature = "serde", serde(rename = "projectedARR"))]
    pub projected_arr: f64,
    /// Enterprise value derived from projected ARR
    pub enterprise_value: f64,
    /// `1 - survival_probability`
    pub risk_index: f64,
}

impl SimulationResult {
    /// Builds a result, clamping into the documented ranges and deriving the
    /// risk index from survival.
    pub fn new(
        survival_probability: f64,
        runway_months: f64,
        projected_arr: f64,
        enterprise_value: f64,
    ) -> Self {
        let survival_probability = survival_probability.clamp(0.0, 1.0);
        Self {
            survival_probability,
            runway_months: runway_months.max(0.0),
            projected_arr: projected_arr.max(0.0),
            enterprise_value: enterprise_value.max(0.0),
            risk_index: 1.0 - survival_probability,
        }
    }
}
