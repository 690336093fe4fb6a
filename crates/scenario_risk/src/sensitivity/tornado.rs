//! Tornado ranking: levers ordered by outcome spread.

use scenario_core::types::Lever;

use super::sweep::LeverSweep;

/// Bars kept in a tornado.
pub const TORNADO_MAX_BARS: usize = 5;

/// One tornado bar.
///
/// `low` is the batch with the lever lowered, `high` the batch with it
/// raised. `spread` is the absolute EV gap between them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TornadoBar {
    /// Lever
    pub lever: Lever,
    /// Display label
    pub label: String,
    /// Survival with the lever lowered
    pub low_survival: f64,
    /// Survival with the lever raised
    pub high_survival: f64,
    /// EV with the lever lowered
    #[cfg_attr(feature = "serde", serde(rename = "lowEV"))]
    pub low_ev: f64,
    /// EV with the lever raised
    #[cfg_attr(feature = "serde", serde(rename = "highEV"))]
    pub high_ev: f64,
    /// `|highEV − lowEV|`
    pub spread: f64,
}

impl TornadoBar {
    /// Builds a bar, deriving the spread.
    pub fn new(lever: Lever, low_survival: f64, high_survival: f64, low_ev: f64, high_ev: f64) -> Self {
        Self {
            lever,
            label: lever.label().to_string(),
            low_survival,
            high_survival,
            low_ev,
            high_ev,
            spread: (high_ev - low_ev).abs(),
        }
    }
}

/// Sorts bars by descending spread and keeps the widest [`TORNADO_MAX_BARS`].
///
/// Ties keep their input order.
pub fn rank_tornado(mut bars: Vec<TornadoBar>) -> Vec<TornadoBar> {
    bars.sort_by(|a, b| b.spread.total_cmp(&a.spread));
    bars.truncate(TORNADO_MAX_BARS);
    bars
}

impl LeverSweep {
    /// Tornado bars, widest first.
    pub fn tornado(&self) -> Vec<TornadoBar> {
        let bars = self
            .responses
            .iter()
            .map(|r| {
                TornadoBar::new(
                    r.lever,
                    r.down.survival_rate,
                    r.up.survival_rate,
                    self.enterprise_value(&r.down),
                    self.enterprise_value(&r.up),
                )
            })
            .collect();
        rank_tornado(bars)
    }
}
