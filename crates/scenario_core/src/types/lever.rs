//! Strategic levers and the canonical lever vector.
//!
//! A lever is a bounded dial on the `[0, 100]` scale. The canonical vector is
//! the superset of every lever any simulation path reads; each path uses the
//! subset it needs and ignores the rest.

use std::fmt;
use std::str::FromStr;

use super::error::ScenarioError;

/// Lower bound of the lever scale.
pub const LEVER_MIN: f64 = 0.0;

/// Upper bound of the lever scale.
pub const LEVER_MAX: f64 = 100.0;

/// Neutral setting used by [`LeverVector::default`].
pub const LEVER_NEUTRAL: f64 = 50.0;

/// Clamps a value onto the lever scale.
///
/// Non-finite values collapse to the neutral setting so they cannot leak into
/// downstream arithmetic.
#[inline]
pub fn clamp_lever(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(LEVER_MIN, LEVER_MAX)
    } else {
        LEVER_NEUTRAL
    }
}

/// Named strategic lever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Lever {
    /// Strength of market demand for the product
    DemandStrength,
    /// Ability to raise prices without losing customers
    PricingPower,
    /// Pace of expansion into new segments or regions
    ExpansionVelocity,
    /// Discipline applied to spending; reduces effective burn
    CostDiscipline,
    /// Hiring pace; increases burn
    HiringIntensity,
    /// Organisational friction; increases burn
    OperatingDrag,
    /// Volatility of the surrounding market
    MarketVolatility,
    /// Risk of failing to execute the plan
    ExecutionRisk,
    /// Pressure from investors or lenders on available capital
    FundingPressure,
}

impl Lever {
    /// Every lever in canonical order.
    pub const ALL: [Lever; 9] = [
        Lever::DemandStrength,
        Lever::PricingPower,
        Lever::ExpansionVelocity,
        Lever::CostDiscipline,
        Lever::HiringIntensity,
        Lever::OperatingDrag,
        Lever::MarketVolatility,
        Lever::ExecutionRisk,
        Lever::FundingPressure,
    ];

    /// Levers examined by sensitivity analysis when the caller names none.
    pub const DEFAULT_CANDIDATES: [Lever; 5] = [
        Lever::DemandStrength,
        Lever::MarketVolatility,
        Lever::FundingPressure,
        Lever::CostDiscipline,
        Lever::ExecutionRisk,
    ];

    /// Wire key (camelCase).
    pub fn key(&self) -> &'static str {
        match self {
            Self::DemandStrength => "demandStrength",
            Self::PricingPower => "pricingPower",
            Self::ExpansionVelocity => "expansionVelocity",
            Self::CostDiscipline => "costDiscipline",
            Self::HiringIntensity => "hiringIntensity",
            Self::OperatingDrag => "operatingDrag",
            Self::MarketVolatility => "marketVolatility",
            Self::ExecutionRisk => "executionRisk",
            Self::FundingPressure => "fundingPressure",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DemandStrength => "Demand Strength",
            Self::PricingPower => "Pricing Power",
            Self::ExpansionVelocity => "Expansion Velocity",
            Self::CostDiscipline => "Cost Discipline",
            Self::HiringIntensity => "Hiring Intensity",
            Self::OperatingDrag => "Operating Drag",
            Self::MarketVolatility => "Market Volatility",
            Self::ExecutionRisk => "Execution Risk",
            Self::FundingPressure => "Funding Pressure",
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Lever {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Lever::ALL
            .iter()
            .copied()
            .find(|lever| lever.key().to_lowercase() == normalised)
            .ok_or_else(|| ScenarioError::UnknownLever(s.to_string()))
    }
}

/// Canonical lever vector.
///
/// Values are expected on `[0, 100]`. Setters clamp; values deserialised from
/// untrusted input can be normalised with [`LeverVector::clamped`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LeverVector {
    /// Demand strength
    pub demand_strength: f64,
    /// Pricing power
    pub pricing_power: f64,
    /// Expansion velocity
    pub expansion_velocity: f64,
    /// Cost discipline
    pub cost_discipline: f64,
    /// Hiring intensity
    pub hiring_intensity: f64,
    /// Operating drag
    pub operating_drag: f64,
    /// Market volatility
    pub market_volatility: f64,
    /// Execution risk
    pub execution_risk: f64,
    /// Funding pressure
    pub funding_pressure: f64,
}

impl Default for LeverVector {
    fn default() -> Self {
        Self::uniform(LEVER_NEUTRAL)
    }
}

impl LeverVector {
    /// Creates a vector with every lever at the same setting.
    pub fn uniform(value: f64) -> Self {
        let v = clamp_lever(value);
        Self {
            demand_strength: v,
            pricing_power: v,
            expansion_velocity: v,
            cost_discipline: v,
            hiring_intensity: v,
            operating_drag: v,
            market_volatility: v,
            execution_risk: v,
            funding_pressure: v,
        }
    }

    /// Returns the value of a lever.
    #[inline]
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::DemandStrength => self.demand_strength,
            Lever::PricingPower => self.pricing_power,
            Lever::ExpansionVelocity => self.expansion_velocity,
            Lever::CostDiscipline => self.cost_discipline,
            Lever::HiringIntensity => self.hiring_intensity,
            Lever::OperatingDrag => self.operating_drag,
            Lever::MarketVolatility => self.market_volatility,
            Lever::ExecutionRisk => self.execution_risk,
            Lever::FundingPressure => self.funding_pressure,
        }
    }

    /// Sets a lever, clamping onto the lever scale.
    pub fn set(&mut self, lever: Lever, value: f64) {
        let v = clamp_lever(value);
        match lever {
            Lever::DemandStrength => self.demand_strength = v,
            Lever::PricingPower => self.pricing_power = v,
            Lever::ExpansionVelocity => self.expansion_velocity = v,
            Lever::CostDiscipline => self.cost_discipline = v,
            Lever::HiringIntensity => self.hiring_intensity = v,
            Lever::OperatingDrag => self.operating_drag = v,
            Lever::MarketVolatility => self.market_volatility = v,
            Lever::ExecutionRisk => self.execution_risk = v,
            Lever::FundingPressure => self.funding_pressure = v,
        }
    }

    /// Returns a copy with one lever replaced (clamped).
    #[must_use]
    pub fn with(mut self, lever: Lever, value: f64) -> Self {
        self.set(lever, value);
        self
    }

    /// Returns a copy with one lever moved by `delta` points (clamped).
    #[must_use]
    pub fn nudged(self, lever: Lever, delta: f64) -> Self {
        let current = self.get(lever);
        self.with(lever, current + delta)
    }

    /// Returns a copy with every lever clamped onto the lever scale.
    #[must_use]
    pub fn clamped(self) -> Self {
        Lever::ALL
            .iter()
            .fold(self, |acc, &lever| acc.with(lever, acc.get(lever)))
    }

    /// Iterates over `(lever, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Lever, f64)> + '_ {
        Lever::ALL.iter().map(move |&lever| (lever, self.get(lever)))
    }
}
