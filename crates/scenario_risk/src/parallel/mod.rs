//! Rayon-based fan-out over independent batches.
//!
//! Sensitivity sweeps and shock sweeps run one Monte Carlo batch per item.
//! Items are independent, so they fan out over Rayon once there are enough
//! of them; results always come back in input order.

use rayon::prelude::*;

/// Minimum item count before fanning out.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2;

/// Fallible map that stops at the first error.
///
/// Runs in parallel when `config` says so, sequentially otherwise. Either way
/// the output order matches `items`.
pub fn try_map<T, R, E, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items.par_iter().map(mapper).collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Configuration that never fans out.
    pub fn sequential() -> Self {
        Self::new(usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_map_preserves_order() {
        let items: Vec<i32> = (0..64).collect();
        let parallel: Result<Vec<i32>, ()> = try_map(&items, &ParallelConfig::new(1), |&x| Ok(x + 1));
        let sequential: Result<Vec<i32>, ()> =
            try_map(&items, &ParallelConfig::sequential(), |&x| Ok(x + 1));
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.unwrap()[63], 64);
    }

    #[test]
    fn test_try_map_propagates_error() {
        let items: Vec<i32> = (0..10).collect();
        let result: Result<Vec<i32>, String> = try_map(&items, &ParallelConfig::new(1), |&x| {
            if x == 7 {
                Err("seven".to_string())
            } else {
                Ok(x)
            }
        });
        assert_eq!(result, Err("seven".to_string()));
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::default();
        assert!(!config.should_parallelize(1));
        assert!(config.should_parallelize(2));
        assert!(!ParallelConfig::sequential().should_parallelize(1_000));
    }
}
