// src/solvers/milstein.rs
//! Milstein Scheme for SDE Systems with Diagonal Noise
//!
//! # Mathematical Framework
//!
//! For an SDE
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! the Milstein scheme adds an Itô correction to Euler-Maruyama:
//! ```text
//! X_{n+1} = X_n + a Δt_n + b (ΔW_n + ½ b' [(ΔW_n)² - Δt_n])
//! ```
//!
//! Where:
//! - `ΔW_n = Z_n √Δt_n` with `Z_n` the caller's standard-normal draw
//! - `b' = ∂b/∂x` for a scalar equation, the divergence term for a system
//! - all products are componentwise
//!
//! Only the diagonal / single-noise-source correction is formed. Systems whose
//! noise couples components need the full double sum over noise sources,
//! which this scheme does not attempt.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 1.0 (vs 0.5 for Euler-Maruyama)
//! - **Weak convergence**: Order 1.0
//! - **Cost**: One extra coefficient evaluation per step
//!
//! # Non-finite values
//!
//! NaN or infinite coefficients propagate through the recurrence unchanged.
//! The integrator logs a warning but still returns the trajectory.

use super::{check_coefficient, check_noise_width, march};
use crate::error::SdeResult;
use crate::grid::TimeGrid;
use crate::models::model::{FnSde, SdeSystem};
use crate::trajectory::Trajectory;
use ndarray::{Array1, Array2, ArrayView1, Zip};
use tracing::{debug, warn};

/// Milstein numerical scheme for SDE integration
#[derive(Debug, Clone, Copy, Default)]
pub struct Milstein;

impl Milstein {
    pub fn new() -> Self {
        Milstein
    }

    /// Single Milstein step with an already scaled Wiener increment
    ///
    /// # Algorithm
    ///
    /// 1. Evaluate drift: a(X_n, t_n)
    /// 2. Evaluate diffusion: b(X_n, t_n) and b'(X_n, t_n)
    /// 3. Check every coefficient has the state's length
    /// 4. Apply the Milstein formula componentwise
    ///
    /// `dw` has either one entry per component or a single entry shared by
    /// all components.
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
        let diffusion_derivative_val = model.diffusion_derivative(x, t);
        check_coefficient("diffusion derivative output", dim, &diffusion_derivative_val)?;

        let mut next = x.clone();
        Zip::from(&mut next)
            .and(&drift_val)
            .and(&diffusion_val)
            .and(&diffusion_derivative_val)
            .and_broadcast(dw)
            .for_each(|xn, &a, &b, &b_prime, &dwi| {
                *xn += a * dt + b * (dwi + 0.5 * b_prime * (dwi * dwi - dt));
            });
        Ok(next)
    }

    /// Integrate `model` from `x0` over `grid` using the raw draws `dws`
    ///
    /// `dws` has `grid.steps()` rows and either `x0.len()` columns or one.
    /// Row 0 of the result is `x0` itself.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `x0` is empty, `dws` has the wrong number of rows
    ///   or columns, or a coefficient returns a vector of the wrong length
    pub fn integrate<M: SdeSystem + ?Sized>(
        model: &M,
        x0: &Array1<f64>,
        grid: &TimeGrid,
        dws: &Array2<f64>,
    ) -> SdeResult<Trajectory> {
        debug!(
            steps = grid.steps(),
            dim = x0.len(),
            t0 = grid.start(),
            t_end = grid.end(),
            "milstein integration"
        );
        let trajectory = march(x0, grid, dws, |x, t, dt, dw| Self::step(model, x, t, dt, dw))?;
        if !trajectory.is_finite() {
            warn!(
                steps = grid.steps(),
                "milstein trajectory contains non-finite values"
            );
        }
        Ok(trajectory)
    }
}

/// Integrate `dX = a dt + b dW` with the Milstein scheme from closures
///
/// `ts` must be strictly increasing with at least two points and `dws` must
/// have `ts.len() - 1` rows of standard-normal draws. The raw draws are scaled
/// by `√Δt` internally, so non-uniform grids are handled correctly.
pub fn milstein<A, B, D>(
    drift: A,
    diffusion: B,
    diffusion_prime: D,
    x0: &Array1<f64>,
    ts: &[f64],
    dws: &Array2<f64>,
) -> SdeResult<Trajectory>
where
    A: Fn(&Array1<f64>, f64) -> Array1<f64>,
    B: Fn(&Array1<f64>, f64) -> Array1<f64>,
    D: Fn(&Array1<f64>, f64) -> Array1<f64>,
{
    let grid = TimeGrid::from_slice(ts)?;
    let model = FnSde::new(drift, diffusion, diffusion_prime);
    Milstein::integrate(&model, x0, &grid, dws)
}

/// Scalar convenience wrapper around [`milstein`]
///
/// Returns one value per entry of `ts`, starting with `x0`.
pub fn milstein_scalar<A, B, D>(
    drift: A,
    diffusion: B,
    diffusion_prime: D,
    x0: f64,
    ts: &[f64],
    dws: &[f64],
) -> SdeResult<Vec<f64>>
where
    A: Fn(f64, f64) -> f64,
    B: Fn(f64, f64) -> f64,
    D: Fn(f64, f64) -> f64,
{
    let dws = Array2::from_shape_fn((dws.len(), 1), |(i, _)| dws[i]);
    let trajectory = milstein(
        |x: &Array1<f64>, t: f64| x.mapv(|v| drift(v, t)),
        |x: &Array1<f64>, t: f64| x.mapv(|v| diffusion(v, t)),
        |x: &Array1<f64>, t: f64| x.mapv(|v| diffusion_prime(v, t)),
        &Array1::from_elem(1, x0),
        ts,
        &dws,
    )?;
    Ok(trajectory.component(0).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdeError;
    use crate::models::gbm::Gbm;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_geometric_drift_single_step() {
        let gbm = Gbm::new(0.05, 0.2).unwrap();
        let next = Milstein::step(&gbm, &array![100.0], 0.0, 1.0, array![0.0].view()).unwrap();
        // 100 + 5 + 20 * (0.5 * 0.2 * (0 - 1))
        assert_relative_eq!(next[0], 103.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_rejects_mismatched_increment() {
        let gbm = Gbm::new(0.05, 0.2).unwrap();
        let err = Milstein::step(&gbm, &array![1.0, 2.0, 3.0], 0.0, 1.0, array![0.1, 0.2].view())
            .unwrap_err();
        match err {
            SdeError::ShapeMismatch { what, expected, found } => {
                assert_eq!(what, "dw");
                assert_eq!(expected, "1 or 3");
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(Milstein::step(&gbm, &array![1.0, 2.0, 3.0], 0.0, 1.0, array![0.1].view()).is_ok());
    }

    #[test]
    fn test_scalar_wrapper_scaling() {
        let c = 0.7;
        let xs = milstein_scalar(|_, _| 0.0, |_, _| c, |_, _| 0.0, 1.0, &[0.0, 4.0], &[1.0]).unwrap();
        assert_eq!(xs, vec![1.0, 1.0 + 2.0 * c]);
    }

    #[test]
    fn test_shared_noise_column_broadcasts() {
        let gbm = Gbm::new(0.0, 1.0).unwrap();
        let x0 = array![1.0, 2.0];
        let grid = TimeGrid::new(vec![0.0, 1.0]).unwrap();
        let shared = Milstein::integrate(&gbm, &x0, &grid, &array![[0.5]]).unwrap();
        let explicit = Milstein::integrate(&gbm, &x0, &grid, &array![[0.5, 0.5]]).unwrap();
        assert_eq!(shared, explicit);
    }

    #[test]
    fn test_wrong_coefficient_length_is_rejected() {
        let bad = FnSde::new(
            |x: &Array1<f64>, _t: f64| Array1::zeros(x.len()),
            |_x: &Array1<f64>, _t: f64| array![1.0, 1.0, 1.0],
            |x: &Array1<f64>, _t: f64| Array1::zeros(x.len()),
        );
        let grid = TimeGrid::new(vec![0.0, 1.0]).unwrap();
        let err = Milstein::integrate(&bad, &array![0.0, 0.0], &grid, &array![[0.0, 0.0]]).unwrap_err();
        match err {
            SdeError::ShapeMismatch { what, found, .. } => {
                assert_eq!(what, "diffusion output");
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_initial_state_is_rejected() {
        let gbm = Gbm::new(0.05, 0.2).unwrap();
        let grid = TimeGrid::new(vec![0.0, 1.0]).unwrap();
        let x0: Array1<f64> = Array1::zeros(0);
        assert!(Milstein::integrate(&gbm, &x0, &grid, &Array2::zeros((1, 1))).is_err());
    }
}
