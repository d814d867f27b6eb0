//! Injected random stream
//!
//! Target respawns and resets draw from a `RandomStream` so a driver can swap
//! in its own source. `SimRng` is the default seeded stream.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws the simulation needs
pub trait RandomStream {
    /// Uniform integer in [0, bound]
    fn int_inclusive(&mut self, bound: u32) -> u32;
    /// Uniform real in [0, bound)
    fn uniform(&mut self, bound: f64) -> f64;
}

/// Seeded PCG stream; the same seed always yields the same draws
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the stream from `seed`
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl RandomStream for SimRng {
    fn int_inclusive(&mut self, bound: u32) -> u32 {
        self.rng.random_range(0..=bound)
    }

    fn uniform(&mut self, bound: f64) -> f64 {
        self.rng.random::<f64>() * bound
    }
}
