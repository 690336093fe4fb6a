//! Starting financial facts for a projection.

use super::error::ScenarioError;

/// Company fundamentals, immutable for the duration of a run.
///
/// # Examples
///
/// ```
/// use scenario_core::types::Fundamentals;
///
/// let f = Fundamentals::new(1_000_000.0, 2_000_000.0, 100_000.0, 0.20).unwrap();
/// assert_eq!(f.monthly_burn, 100_000.0);
/// assert!(Fundamentals::new(f64::NAN, 0.0, 0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Fundamentals {
    /// Annualised recurring revenue today
    #[cfg_attr(feature = "serde", serde(rename = "startingARR", alias = "startingArr"))]
    pub starting_arr: f64,
    /// Cash on hand today
    pub starting_cash: f64,
    /// Net monthly cash burn; zero or negative means no burn
    pub monthly_burn: f64,
    /// Base growth rate over the projection horizon (0.20 = 20%)
    pub base_growth_rate: f64,
}

impl Fundamentals {
    /// Creates validated fundamentals.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::NonFiniteFundamental`] if any field is NaN or
    /// infinite.
    pub fn new(
        starting_arr: f64,
        starting_cash: f64,
        monthly_burn: f64,
        base_growth_rate: f64,
    ) -> Result<Self, ScenarioError> {
        let fundamentals = Self {
            starting_arr,
            starting_cash,
            monthly_burn,
            base_growth_rate,
        };
        fundamentals.validate()?;
        Ok(fundamentals)
    }

    /// Checks that every field is finite.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let fields = [
            ("startingARR", self.starting_arr),
            ("startingCash", self.starting_cash),
            ("monthlyBurn", self.monthly_burn),
            ("baseGrowthRate", self.base_growth_rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ScenarioError::NonFiniteFundamental { name, value });
            }
        }
        Ok(())
    }

    /// Returns a copy with the growth rate multiplied by `factor`.
    #[must_use]
    pub fn scale_growth(self, factor: f64) -> Self {
        Self {
            base_growth_rate: self.base_growth_rate * factor,
            ..self
        }
    }

    /// Returns a copy with starting cash multiplied by `factor`.
    #[must_use]
    pub fn scale_cash(self, factor: f64) -> Self {
        Self {
            starting_cash: self.starting_cash * factor,
            ..self
        }
    }

    /// Returns a copy with monthly burn multiplied by `factor`.
    #[must_use]
    pub fn scale_burn(self, factor: f64) -> Self {
        Self {
            monthly_burn: self.monthly_burn * factor,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_infinite_burn() {
        let err = Fundamentals::new(1.0, 1.0, f64::INFINITY, 0.1).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::NonFiniteFundamental {
                name: "monthlyBurn",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_burn_is_valid() {
        assert!(Fundamentals::new(1.0, 1.0, 0.0, 0.1).is_ok());
    }

    #[test]
    fn test_scaling_touches_one_field() {
        let base = Fundamentals::new(100.0, 200.0, 10.0, 0.2).unwrap();
        let scaled = base.scale_cash(0.5);
        assert_eq!(scaled.starting_cash, 100.0);
        assert_eq!(scaled.starting_arr, base.starting_arr);
        assert_eq!(scaled.monthly_burn, base.monthly_burn);
        assert_eq!(scaled.base_growth_rate, base.base_growth_rate);
    }
}
