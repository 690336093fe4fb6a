//! Two-branch result for analysis that may lack the context to run.

/// Outcome of an on-demand analysis.
///
/// `NotComputed` is not an error: it tells the caller the analysis was
/// skipped (missing levers or config, or a cancelled request) and why.
///
/// # Examples
///
/// ```
/// use scenario_risk::Analysis;
///
/// let done: Analysis<u32> = Analysis::Computed(3);
/// assert_eq!(done.as_computed(), Some(&3));
///
/// let skipped: Analysis<u32> = Analysis::not_computed("no config");
/// assert_eq!(skipped.reason(), Some("no config"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "status", content = "value", rename_all = "camelCase")
)]
pub enum Analysis<T> {
    /// The analysis ran.
    Computed(T),
    /// The analysis was skipped.
    NotComputed {
        /// Human-readable reason
        reason: String,
    },
}

impl<T> Analysis<T> {
    /// Skipped analysis with the given reason.
    pub fn not_computed(reason: impl Into<String>) -> Self {
        Self::NotComputed {
            reason: reason.into(),
        }
    }

    /// Whether the analysis ran.
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Borrowed value if computed.
    pub fn as_computed(&self) -> Option<&T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::NotComputed { .. } => None,
        }
    }

    /// Reason if skipped.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::NotComputed { reason } => Some(reason),
        }
    }

    /// Maps the computed value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Analysis<U> {
        match self {
            Self::Computed(value) => Analysis::Computed(f(value)),
            Self::NotComputed { reason } => Analysis::NotComputed { reason },
        }
    }

    /// Converts into an `Option`, dropping the reason.
    pub fn into_computed(self) -> Option<T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::NotComputed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_reason() {
        let skipped: Analysis<i32> = Analysis::not_computed("cancelled");
        let mapped = skipped.map(|v| v * 2);
        assert_eq!(mapped.reason(), Some("cancelled"));
        assert!(!mapped.is_computed());
    }

    #[test]
    fn test_map_computed() {
        let done = Analysis::Computed(21).map(|v| v * 2);
        assert_eq!(done.into_computed(), Some(42));
    }
}
