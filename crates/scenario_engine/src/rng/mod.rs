//! # Random Number Generation
//!
//! Seeded generators for Monte Carlo trials.
//!
//! ## Design
//!
//! - **Reproducibility**: every generator is seeded explicitly; there is no
//!   process-wide generator.
//! - **Per-trial streams**: [`ScenarioRng::for_trial`] derives an independent
//!   stream from `(seed, trial_index)`, so trials can run in any order or in
//!   parallel and still produce the same draws.
//!
//! ## Usage Example
//!
//! ```rust
//! use scenario_engine::rng::ScenarioRng;
//!
//! let mut a = ScenarioRng::for_trial(7, 3);
//! let mut b = ScenarioRng::for_trial(7, 3);
//! assert_eq!(a.gen_range(0.9, 1.1), b.gen_range(0.9, 1.1));
//! ```

mod prng;

pub use prng::{derive_trial_seed, ScenarioRng};
