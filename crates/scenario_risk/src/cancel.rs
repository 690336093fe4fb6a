//! Cooperative cancellation for multi-batch analysis.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::RiskError;

/// Shared cancellation flag.
///
/// Clones share one flag. Analysis checks it between Monte Carlo batches,
/// never inside one, so a cancelled request never yields a partial aggregate.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        tracing::info!("analysis cancellation requested");
    }

    /// Whether the token has fired.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns [`RiskError::Cancelled`] once the token has fired.
    #[inline]
    pub fn check(&self) -> Result<(), RiskError> {
        if self.is_cancelled() {
            Err(RiskError::Cancelled)
        } else {
            Ok(())
        }
    }
}
