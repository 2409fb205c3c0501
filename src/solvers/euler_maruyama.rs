// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! It takes exactly the same inputs as [`Milstein`](super::Milstein) and never
//! evaluates the diffusion derivative, which makes it the baseline for
//! measuring what the Milstein correction buys on a given set of draws.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size

use super::{check_coefficient, check_noise_width, march};
use crate::error::SdeResult;
use crate::grid::TimeGrid;
use crate::models::model::SdeSystem;
use crate::trajectory::Trajectory;
use ndarray::{Array1, Array2, ArrayView1, Zip};
use tracing::{debug, warn};

/// Euler-Maruyama numerical scheme for SDE integration
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerMaruyama;

impl EulerMaruyama {
    pub fn new() -> Self {
        EulerMaruyama
    }

    /// Single Euler-Maruyama step
    ///
    /// # Parameters
    /// - `model`: SDE model providing drift and diffusion functions
    /// - `x`: Current state
    /// - `t`: Current time
    /// - `dt`: Time step size
    /// - `dw`: Wiener increment, already scaled by `√dt`
    pub fn step<M: SdeSystem + ?Sized>(
        model: &M,
        x: &Array1<f64>,
        t: f64,
        dt: f64,
        dw: ArrayView1<'_, f64>,
    ) -> SdeResult<Array1<f64>> {
        let dim = x.len();
        check_noise_width("dw", dim, dw.len())?;
        let drift_val = model.drift(x, t);
        check_coefficient("drift output", dim, &drift_val)?;
        let diffusion_val = model.diffusion(x, t);
        check_coefficient("diffusion output", dim, &diffusion_val)?;

        let mut next = x.clone();
        Zip::from(&mut next)
            .and(&drift_val)
            .and(&diffusion_val)
            .and_broadcast(dw)
            .for_each(|xn, &a, &b, &dwi| {
                *xn += a * dt + b * dwi;
            });
        Ok(next)
    }

    pub fn integrate<M: SdeSystem + ?Sized>(
        model: &M,
        x0: &Array1<f64>,
        grid: &TimeGrid,
        dws: &Array2<f64>,
    ) -> SdeResult<Trajectory> {
        debug!(
            steps = grid.steps(),
            dim = x0.len(),
            "euler-maruyama integration"
        );
        let trajectory = march(x0, grid, dws, |x, t, dt, dw| Self::step(model, x, t, dt, dw))?;
        if !trajectory.is_finite() {
            warn!(
                steps = grid.steps(),
                "euler-maruyama trajectory contains non-finite values"
            );
        }
        Ok(trajectory)
    }
}
