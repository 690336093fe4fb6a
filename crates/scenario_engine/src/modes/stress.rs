//! Stress mode and its macro presets.

use std::fmt;
use std::str::FromStr;

use scenario_core::projector::Projector;
use scenario_core::types::{Fundamentals, LeverVector, SimulationResult};

use super::deterministic::run_deterministic;
use crate::error::SimulationError;

/// Named macro stress preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum StressPreset {
    /// Demand collapses: growth halved
    DemandShock,
    /// Capital markets freeze: 30% of cash unavailable
    CapitalFreeze,
    /// Costs jump: burn up 30%
    CostSpike,
}

impl StressPreset {
    /// All presets.
    pub fn all() -> Vec<Self> {
        vec![Self::DemandShock, Self::CapitalFreeze, Self::CostSpike]
    }

    /// Wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DemandShock => "demandShock",
            Self::CapitalFreeze => "capitalFreeze",
            Self::CostSpike => "costSpike",
        }
    }

    /// Description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DemandShock => "Base growth rate halved",
            Self::CapitalFreeze => "Starting cash reduced by 30%",
            Self::CostSpike => "Monthly burn increased by 30%",
        }
    }

    /// Applies the preset to fundamentals.
    pub fn apply(&self, fundamentals: &Fundamentals) -> Fundamentals {
        match self {
            Self::DemandShock => fundamentals.scale_growth(0.5),
            Self::CapitalFreeze => fundamentals.scale_cash(0.7),
            Self::CostSpike => fundamentals.scale_burn(1.3),
        }
    }
}

impl fmt::Display for StressPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StressPreset {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace(['_', '-'], "").to_lowercase().as_str() {
            "demandshock" => Ok(Self::DemandShock),
            "capitalfreeze" => Ok(Self::CapitalFreeze),
            "costspike" => Ok(Self::CostSpike),
            _ => Err(SimulationError::UnknownStressPreset(s.to_string())),
        }
    }
}

/// Applies `preset` and runs deterministic mode on the stressed inputs.
pub fn run_stress(
    projector: &Projector,
    fundamentals: &Fundamentals,
    levers: &LeverVector,
    preset: StressPreset,
) -> SimulationResult {
    let stressed = preset.apply(fundamentals);
    tracing::debug!(preset = %preset, "applying stress preset");
    run_deterministic(projector, &stressed, levers)
}
