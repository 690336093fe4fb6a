//! Pseudo-random number generator wrapper for Monte Carlo trials.
//!
//! [`ScenarioRng`] wraps `rand::StdRng` and adds per-trial seed derivation so
//! that each trial owns its stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Mixes a 64-bit value (SplitMix64 finaliser).
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives the seed of trial `trial_index` in a batch seeded with `seed`.
///
/// Neighbouring indices map to unrelated seeds, and the mapping depends on
/// nothing but its two arguments.
#[inline]
pub fn derive_trial_seed(seed: u64, trial_index: u64) -> u64 {
    splitmix64(seed ^ splitmix64(trial_index))
}

/// Monte Carlo trial random number generator.
///
/// # Examples
///
/// ```rust
/// use scenario_engine::rng::ScenarioRng;
///
/// let mut rng = ScenarioRng::from_seed(42);
/// let u = rng.gen_uniform();
/// assert!((0.0..1.0).contains(&u));
///
/// let shock = rng.gen_range(0.9, 1.1);
/// assert!((0.9..=1.1).contains(&shock));
/// ```
pub struct ScenarioRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl ScenarioRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates the generator for one trial of a seeded batch.
    #[inline]
    pub fn for_trial(seed: u64, trial_index: usize) -> Self {
        Self::from_seed(derive_trial_seed(seed, trial_index as u64))
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Uniform value in `[low, high]`.
    ///
    /// Returns `low` when the range is empty or inverted.
    #[inline]
    pub fn gen_range(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            low + (high - low) * self.gen_uniform()
        } else {
            low
        }
    }

    /// Standard normal variate (mean 0, standard deviation 1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}
