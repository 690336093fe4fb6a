//! Robustness classes.

use std::fmt;

/// Lowest survival classed as robust.
pub const ROBUST_THRESHOLD: f64 = 0.75;
/// Lowest survival classed as stable.
pub const STABLE_THRESHOLD: f64 = 0.55;
/// Lowest survival classed as fragile.
pub const FRAGILE_THRESHOLD: f64 = 0.35;

/// Robustness of a company under shock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShockClass {
    /// Survival at least 0.75
    Robust,
    /// Survival at least 0.55
    Stable,
    /// Survival at least 0.35
    Fragile,
    /// Survival below 0.35
    Critical,
}

impl ShockClass {
    /// Classifies a survival probability.
    ///
    /// NaN classifies as [`ShockClass::Critical`].
    pub fn classify(survival_probability: f64) -> Self {
        if survival_probability >= ROBUST_THRESHOLD {
            Self::Robust
        } else if survival_probability >= STABLE_THRESHOLD {
            Self::Stable
        } else if survival_probability >= FRAGILE_THRESHOLD {
            Self::Fragile
        } else {
            Self::Critical
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Robust => "Robust",
            Self::Stable => "Stable",
            Self::Fragile => "Fragile",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for ShockClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
