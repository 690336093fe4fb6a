//! Per-trial input perturbation.
//!
//! Each model turns one trial's generator into a perturbed set of
//! fundamentals plus the growth shock handed to the projector.

use scenario_core::types::{Fundamentals, LeverVector, PerturbationModel};

use crate::rng::ScenarioRng;

/// Half-width of the uniform growth shock in the simple model.
pub const GROWTH_SHOCK_HALF_WIDTH: f64 = 0.1;

const BURN_SHOCK_HALF_WIDTH: f64 = 0.1;
const CASH_SHOCK_HALF_WIDTH: f64 = 0.05;

/// Perturbed inputs for one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerturbedTrial {
    /// Fundamentals after any cash/burn shock
    pub fundamentals: Fundamentals,
    /// Multiplicative growth shock
    pub growth_shock: f64,
}

/// Draws the perturbation for one trial.
pub fn perturb(
    model: PerturbationModel,
    fundamentals: &Fundamentals,
    levers: &LeverVector,
    rng: &mut ScenarioRng,
) -> PerturbedTrial {
    match model {
        PerturbationModel::GrowthOnly => PerturbedTrial {
            fundamentals: *fundamentals,
            growth_shock: uniform_shock(rng, GROWTH_SHOCK_HALF_WIDTH),
        },
        PerturbationModel::Fundamentals => {
            let growth_shock = uniform_shock(rng, GROWTH_SHOCK_HALF_WIDTH);
            let burn = uniform_shock(rng, BURN_SHOCK_HALF_WIDTH);
            let cash = uniform_shock(rng, CASH_SHOCK_HALF_WIDTH);
            PerturbedTrial {
                fundamentals: fundamentals.scale_burn(burn).scale_cash(cash),
                growth_shock,
            }
        }
        PerturbationModel::LeverCoupled => lever_coupled(fundamentals, levers, rng),
    }
}

#[inline]
fn uniform_shock(rng: &mut ScenarioRng, half_width: f64) -> f64 {
    rng.gen_range(1.0 - half_width, 1.0 + half_width)
}

/// Macro levers drive the trial:
///
/// - volatility widens the growth noise (5% to 20% standard deviation)
/// - demand and expansion tilt growth; execution risk randomly erodes it
/// - funding pressure randomly locks up part of the cash
/// - hiring, drag and expansion raise burn
fn lever_coupled(
    fundamentals: &Fundamentals,
    levers: &LeverVector,
    rng: &mut ScenarioRng,
) -> PerturbedTrial {
    let demand = levers.demand_strength / 100.0;
    let expansion = levers.expansion_velocity / 100.0;
    let volatility = levers.market_volatility / 100.0;
    let execution = levers.execution_risk / 100.0;
    let funding = levers.funding_pressure / 100.0;
    let hiring = levers.hiring_intensity / 100.0;
    let drag = levers.operating_drag / 100.0;

    let sigma = 0.05 + 0.15 * volatility;
    let z = rng.gen_normal().clamp(-3.0, 3.0);
    let noise = 1.0 + sigma * z;
    let tilt = (0.8 + 0.4 * demand) * (1.0 + 0.1 * expansion);
    let slippage = 1.0 - 0.3 * execution * rng.gen_uniform();
    let growth_shock = (noise * tilt * slippage).max(0.0);

    let cash = 1.0 - 0.3 * funding * rng.gen_uniform();
    let burn = 1.0 + 0.2 * hiring + 0.1 * drag + 0.05 * expansion;

    PerturbedTrial {
        fundamentals: fundamentals.scale_cash(cash).scale_burn(burn),
        growth_shock,
    }
}
