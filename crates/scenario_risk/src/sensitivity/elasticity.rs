//! Elasticity: normalised per-lever impact.

use std::fmt;

use scenario_core::types::Lever;

use super::sweep::{LeverResponse, LeverSweep};

/// Weight of the relative EV delta in the raw magnitude.
pub const EV_WEIGHT: f64 = 0.5;

/// Weight of the relative runway delta in the raw magnitude.
pub const RUNWAY_WEIGHT: f64 = 0.3;

/// Smallest denominator used when relativising deltas.
pub const DENOMINATOR_FLOOR: f64 = 1.0;

/// Sign of a lever's effect when raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ImpactDirection {
    /// Raising the lever improves outcomes
    Positive,
    /// Raising the lever hurts outcomes
    Negative,
    /// No measurable effect
    Neutral,
}

impl ImpactDirection {
    /// Sign of the first non-zero delta, in survival, EV, runway order.
    pub fn from_deltas(delta_survival: f64, delta_ev: f64, delta_runway: f64) -> Self {
        [delta_survival, delta_ev, delta_runway]
            .into_iter()
            .find(|d| *d != 0.0 && !d.is_nan())
            .map_or(Self::Neutral, |d| {
                if d > 0.0 {
                    Self::Positive
                } else {
                    Self::Negative
                }
            })
    }

    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ImpactDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elasticity of one lever.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ElasticityEntry {
    /// Lever
    pub lever: Lever,
    /// Display label
    pub label: String,
    /// Up-batch survival minus down-batch survival
    pub delta_survival: f64,
    /// Up-batch EV minus down-batch EV
    #[cfg_attr(feature = "serde", serde(rename = "deltaEV"))]
    pub delta_ev: f64,
    /// Up-batch median runway minus down-batch median runway
    pub delta_runway: f64,
    /// Magnitude relative to the strongest lever, in `[0, 1]`
    pub elasticity_score: f64,
    /// Sign of the effect
    pub direction: ImpactDirection,
}

/// Unnormalised magnitude of a lever's effect.
///
/// `|dS| + 0.5·|dEV / baseEV| + 0.3·|dRunway / baseRunway|`, each
/// denominator floored at [`DENOMINATOR_FLOOR`].
pub fn raw_magnitude(
    delta_survival: f64,
    delta_ev: f64,
    delta_runway: f64,
    base_ev: f64,
    base_runway: f64,
) -> f64 {
    let ev_denominator = base_ev.abs().max(DENOMINATOR_FLOOR);
    let runway_denominator = base_runway.abs().max(DENOMINATOR_FLOOR);
    delta_survival.abs()
        + EV_WEIGHT * (delta_ev / ev_denominator).abs()
        + RUNWAY_WEIGHT * (delta_runway / runway_denominator).abs()
}

/// Divides each magnitude by the largest one.
///
/// The largest magnitude maps to exactly 1. When every magnitude is zero
/// (or none is finite) every score is 0.
pub fn normalise_scores(magnitudes: &[f64]) -> Vec<f64> {
    let max = magnitudes
        .iter()
        .copied()
        .filter(|m| m.is_finite())
        .fold(0.0_f64, f64::max);
    magnitudes
        .iter()
        .map(|&m| {
            if max > 0.0 && m.is_finite() {
                (m / max).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Sorts entries by descending score; ties keep their candidate order.
pub fn sort_by_score(entries: &mut [ElasticityEntry]) {
    entries.sort_by(|a, b| b.elasticity_score.total_cmp(&a.elasticity_score));
}

struct Deltas {
    survival: f64,
    ev: f64,
    runway: f64,
}

fn deltas(sweep: &LeverSweep, response: &LeverResponse) -> Deltas {
    Deltas {
        survival: response.up.survival_rate - response.down.survival_rate,
        ev: sweep.enterprise_value(&response.up) - sweep.enterprise_value(&response.down),
        runway: response.up.median_runway - response.down.median_runway,
    }
}

impl LeverSweep {
    /// Elasticity entries, strongest first.
    pub fn elasticity(&self) -> Vec<ElasticityEntry> {
        let base_ev = self.enterprise_value(&self.baseline);
        let base_runway = self.baseline.median_runway;

        let all: Vec<(Lever, Deltas)> = self
            .responses
            .iter()
            .map(|r| (r.lever, deltas(self, r)))
            .collect();
        let magnitudes: Vec<f64> = all
            .iter()
            .map(|(_, d)| raw_magnitude(d.survival, d.ev, d.runway, base_ev, base_runway))
            .collect();
        let scores = normalise_scores(&magnitudes);

        let mut entries: Vec<ElasticityEntry> = all
            .into_iter()
            .zip(scores)
            .map(|((lever, d), score)| ElasticityEntry {
                lever,
                label: lever.label().to_string(),
                delta_survival: d.survival,
                delta_ev: d.ev,
                delta_runway: d.runway,
                elasticity_score: score,
                direction: ImpactDirection::from_deltas(d.survival, d.ev, d.runway),
            })
            .collect();
        sort_by_score(&mut entries);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scenario_engine::mc::BatchSummary;

    fn summary(survival_rate: f64, median_arr: f64, median_runway: f64) -> BatchSummary {
        BatchSummary {
            survival_rate,
            median_arr,
            median_runway,
        }
    }

    #[test]
    fn test_raw_magnitude_weights() {
        // 0.1 + 0.5 × 0.2 + 0.3 × 0.5
        let m = raw_magnitude(-0.1, 200.0, 5.0, 1_000.0, 10.0);
        assert_relative_eq!(m, 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_raw_magnitude_floors_denominators() {
        let m = raw_magnitude(0.0, 2.0, 0.5, 0.0, 0.0);
        assert_relative_eq!(m, 0.5 * 2.0 + 0.3 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_normalise_scores() {
        let scores = normalise_scores(&[0.2, 0.8, 0.4, 0.0]);
        assert_eq!(scores[1], 1.0);
        assert_relative_eq!(scores[0], 0.25, epsilon = 1e-12);
        assert_eq!(scores[3], 0.0);
    }

    #[test]
    fn test_normalise_all_zero() {
        assert_eq!(normalise_scores(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(normalise_scores(&[]).is_empty());
    }

    #[test]
    fn test_direction() {
        assert_eq!(ImpactDirection::from_deltas(0.1, -5.0, 0.0), ImpactDirection::Positive);
        assert_eq!(ImpactDirection::from_deltas(0.0, -5.0, 1.0), ImpactDirection::Negative);
        assert_eq!(ImpactDirection::from_deltas(0.0, 0.0, 0.3), ImpactDirection::Positive);
        assert_eq!(ImpactDirection::from_deltas(0.0, 0.0, 0.0), ImpactDirection::Neutral);
    }

    #[test]
    fn test_elasticity_from_sweep() {
        let sweep = LeverSweep {
            baseline: summary(0.8, 1_000.0, 20.0),
            responses: vec![
                LeverResponse {
                    lever: Lever::DemandStrength,
                    up: summary(0.8, 1_100.0, 20.0),
                    down: summary(0.8, 900.0, 20.0),
                },
                LeverResponse {
                    lever: Lever::FundingPressure,
                    up: summary(0.6, 1_000.0, 16.0),
                    down: summary(0.9, 1_000.0, 24.0),
                },
                LeverResponse {
                    lever: Lever::MarketVolatility,
                    up: summary(0.8, 1_000.0, 20.0),
                    down: summary(0.8, 1_000.0, 20.0),
                },
            ],
            ev_multiple: 3.5,
        };

        let entries = sweep.elasticity();
        assert_eq!(entries[0].lever, Lever::FundingPressure);
        assert_eq!(entries[0].elasticity_score, 1.0);
        assert_eq!(entries[0].direction, ImpactDirection::Negative);
        assert_relative_eq!(entries[0].delta_survival, -0.3, epsilon = 1e-12);

        assert_eq!(entries[1].lever, Lever::DemandStrength);
        assert_relative_eq!(entries[1].delta_ev, 700.0, epsilon = 1e-9);
        assert_eq!(entries[1].direction, ImpactDirection::Positive);
        assert_eq!(entries[1].label, "Demand Strength");

        assert_eq!(entries[2].elasticity_score, 0.0);
        assert_eq!(entries[2].direction, ImpactDirection::Neutral);
    }
}
