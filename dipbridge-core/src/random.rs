use std::sync::Mutex;

use log::debug;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Pseudo-random generator used by the noise and sampling operations.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn from_entropy() -> Self {
        Random {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A value drawn uniformly from `[lower, upper)`. Returns `lower` for an
    /// empty interval or when either bound is not finite.
    pub fn uniform(&mut self, lower: f64, upper: f64) -> f64 {
        if !(upper > lower) || !lower.is_finite() || !upper.is_finite() {
            return lower;
        }
        if (upper - lower).is_finite() {
            return self.rng.gen_range(lower..upper);
        }
        // Span overflows; interpolate between the bounds instead.
        let t: f64 = self.rng.gen();
        let value = lower * (1.0 - t) + upper * t;
        if value < upper {
            value
        } else {
            lower
        }
    }

    /// A value drawn from a normal distribution. A non-positive or non-finite
    /// `sigma` yields `mean`.
    pub fn gaussian(&mut self, mean: f64, sigma: f64) -> f64 {
        match Normal::new(mean, sigma) {
            Ok(normal) if sigma > 0.0 => normal.sample(&mut self.rng),
            _ => mean,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }
}

// Created on first use and lives until the process exits.
static RANDOM_NUMBER_GENERATOR: Lazy<Mutex<Random>> = Lazy::new(|| {
    debug!("Initializing process-wide random number generator");
    Mutex::new(Random::from_entropy())
});

/// Runs `f` with the process-wide generator.
///
/// A poisoned lock is recovered: the generator holds no invariant a panic
/// could break.
pub fn with_random_number_generator<R>(f: impl FnOnce(&mut Random) -> R) -> R {
    let mut guard = match RANDOM_NUMBER_GENERATOR.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("Random number generator lock was poisoned. Recovering.");
            poisoned.into_inner()
        }
    };
    f(&mut *guard)
}

/// Replaces the process-wide generator's state with one derived from `seed`.
pub fn seed_random_number_generator(seed: u64) {
    debug!("Seeding process-wide random number generator with {}", seed);
    with_random_number_generator(|rng| *rng = Random::from_seed(seed));
}
