//! Order statistics over trial outcomes.

/// Percentile levels reported for every distribution.
pub const PERCENTILE_LEVELS: [f64; 5] = [0.10, 0.25, 0.50, 0.75, 0.90];

/// Reads percentile `p` from an ascending slice.
///
/// Uses `index = floor(p × n)` clamped to `[0, n − 1]`. Returns 0 for an
/// empty slice.
#[inline]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let n = sorted.len();
    let index = (p * n as f64).floor().max(0.0) as usize;
    sorted[index.min(n - 1)]
}

/// Sorts values ascending with a total order.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

/// Fixed percentile summary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentiles {
    /// 10th percentile
    pub p10: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub p50: f64,
    /// 75th percentile
    pub p75: f64,
    /// 90th percentile
    pub p90: f64,
}

impl Percentiles {
    /// Builds the summary from an ascending slice.
    pub fn from_sorted(sorted: &[f64]) -> Self {
        Self {
            p10: percentile(sorted, 0.10),
            p25: percentile(sorted, 0.25),
            p50: percentile(sorted, 0.50),
            p75: percentile(sorted, 0.75),
            p90: percentile(sorted, 0.90),
        }
    }

    /// Sorts `values` in place and builds the summary.
    pub fn from_unsorted(values: &mut [f64]) -> Self {
        sort_ascending(values);
        Self::from_sorted(values)
    }

    /// Values in ascending percentile order.
    pub fn as_array(&self) -> [f64; 5] {
        [self.p10, self.p25, self.p50, self.p75, self.p90]
    }
}
