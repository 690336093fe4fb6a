//! Non-fatal input diagnostics.
//!
//! Degenerate inputs never fail a run; they are reported alongside the
//! result and logged once per run rather than once per trial.

use scenario_core::projector::Projector;
use scenario_core::types::{Fundamentals, LeverVector};

/// Non-fatal condition observed while preparing a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum SimulationWarning {
    /// Burn after lever adjustment is zero or negative; runway is reported
    /// at the capped sentinel.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    DegenerateBurn {
        /// Burn after cost discipline
        adjusted_burn: f64,
        /// Runway sentinel reported instead of infinity
        runway_cap_months: f64,
    },
}

impl SimulationWarning {
    /// Short human-readable description.
    pub fn message(&self) -> String {
        match self {
            Self::DegenerateBurn {
                adjusted_burn,
                runway_cap_months,
            } => format!(
                "adjusted burn {} is not positive; runway capped at {} months",
                adjusted_burn, runway_cap_months
            ),
        }
    }
}

/// Inspects unperturbed inputs and logs any degenerate condition.
///
/// Perturbation models only ever scale burn by positive factors, so the sign
/// seen here holds for every trial of a batch.
pub fn inspect_inputs(
    projector: &Projector,
    fundamentals: &Fundamentals,
    levers: &LeverVector,
) -> Vec<SimulationWarning> {
    let adjusted_burn = projector.adjusted_burn(fundamentals, levers);
    if adjusted_burn > 0.0 {
        return Vec::new();
    }
    let warning = SimulationWarning::DegenerateBurn {
        adjusted_burn,
        runway_cap_months: projector.params().runway_cap_months,
    };
    tracing::warn!(adjusted_burn, "{}", warning.message());
    vec![warning]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_burn_is_clean() {
        let f = Fundamentals::new(1.0, 100.0, 10.0, 0.1).unwrap();
        assert!(inspect_inputs(&Projector::default(), &f, &LeverVector::default()).is_empty());
    }

    #[test]
    fn test_zero_burn_reported() {
        let f = Fundamentals::new(1.0, 100.0, 0.0, 0.1).unwrap();
        let warnings = inspect_inputs(&Projector::default(), &f, &LeverVector::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("not positive"));
    }
}
