// src/grid.rs
//! Validated time grids
//!
//! Every integrator in this crate walks a strictly increasing grid
//! `t₀ < t₁ < … < t_{n-1}` with `n ≥ 2`. Building a [`TimeGrid`] performs that
//! check once, so a zero or negative `Δt` can never reach the `√Δt` scaling of
//! the Wiener increments.

use crate::error::{validation::*, SdeResult};

/// A strictly increasing sequence of at least two time points
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Validate and wrap an arbitrary (possibly non-uniform) grid
    pub fn new(times: Vec<f64>) -> SdeResult<Self> {
        validate_time_grid(&times)?;
        Ok(TimeGrid { times })
    }

    /// Validate a borrowed grid, copying it
    pub fn from_slice(times: &[f64]) -> SdeResult<Self> {
        Self::new(times.to_vec())
    }

    /// `steps + 1` equally spaced points from `t0` to `t_end`
    ///
    /// The last point is set to `t_end` exactly rather than accumulated.
    pub fn uniform(t0: f64, t_end: f64, steps: usize) -> SdeResult<Self> {
        validate_finite("t0", t0)?;
        validate_finite("t_end", t_end)?;
        validate_steps(steps)?;
        validate_positive("t_end - t0", t_end - t0)?;

        let dt = (t_end - t0) / steps as f64;
        let mut times: Vec<f64> = (0..steps).map(|i| t0 + i as f64 * dt).collect();
        times.push(t_end);
        Self::new(times)
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of time points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false: a grid holds at least two points
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of intervals, `len() - 1`
    pub fn steps(&self) -> usize {
        self.times.len() - 1
    }

    pub fn start(&self) -> f64 {
        self.times[0]
    }

    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Width of interval `i`, `ts[i+1] - ts[i]`
    pub fn dt(&self, i: usize) -> f64 {
        self.times[i + 1] - self.times[i]
    }

    /// All interval widths in order
    pub fn dts(&self) -> Vec<f64> {
        self.times.windows(2).map(|w| w[1] - w[0]).collect()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.times
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = crate::error::SdeError;

    fn try_from(times: Vec<f64>) -> SdeResult<Self> {
        TimeGrid::new(times)
    }
}
