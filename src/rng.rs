// src/rng.rs
//! Standard-normal draws for the integrators
//!
//! The integrators never sample anything themselves: they consume a matrix of
//! `N(0, 1)` draws, one row per time interval. This module is the caller-side
//! source of those matrices.
//!
//! # Reproducibility
//!
//! [`IncrementFactory`] derives one `StdRng` per path from `base_seed + path_id`,
//! so a given path always sees the same draws regardless of how many other
//! paths are generated or in which order.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Per-path increment source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementFactory {
    base_seed: u64,
}

impl IncrementFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create a standard RNG for a specific path
    pub fn create_std_rng(&self, path_id: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(path_id))
    }

    /// `steps × noise_dim` standard-normal draws for `path_id`
    pub fn increments(&self, path_id: u64, steps: usize, noise_dim: usize) -> Array2<f64> {
        let mut rng = self.create_std_rng(path_id);
        standard_normal_increments(&mut rng, steps, noise_dim)
    }
}

pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Fill a `steps × noise_dim` matrix row by row with `N(0, 1)` draws
pub fn standard_normal_increments<R: Rng + ?Sized>(
    rng: &mut R,
    steps: usize,
    noise_dim: usize,
) -> Array2<f64> {
    Array2::from_shape_simple_fn((steps, noise_dim), || get_normal_draw(rng))
}
