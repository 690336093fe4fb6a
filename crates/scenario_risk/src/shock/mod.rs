//! Shock propagation.
//!
//! A single intensity in `[0, 200]` percent drives a fixed macro shock:
//! market volatility and funding pressure rise, demand falls. The shocked
//! levers run through the Monte Carlo sampler and the resulting survival
//! rate is classified.
//!
//! | Survival | Class      |
//! |----------|------------|
//! | ≥ 0.75   | `Robust`   |
//! | ≥ 0.55   | `Stable`   |
//! | ≥ 0.35   | `Fragile`  |
//! | < 0.35   | `Critical` |

mod classify;
mod model;

pub use classify::{
    ShockClass, FRAGILE_THRESHOLD, ROBUST_THRESHOLD, STABLE_THRESHOLD,
};
pub use model::{
    analyse_shock, clamp_intensity, compute_shock_propagation, shock_sweep, shocked_levers,
    ShockModel, ShockResult, MAX_SHOCK_INTENSITY_PCT,
};
