//! Fixed-grid integrators driven by caller-supplied standard-normal draws
//!
//! Both schemes share the same input handling: the grid is validated, the
//! increment matrix must have one row per interval and either one column per
//! state component or a single column shared by every component, and each raw
//! draw is scaled by `√Δt` into a Wiener increment before stepping.

pub mod euler_maruyama;
pub mod milstein;

pub use euler_maruyama::EulerMaruyama;
pub use milstein::{milstein, milstein_scalar, Milstein};

use crate::error::{validation::validate_len, SdeError, SdeResult};
use crate::grid::TimeGrid;
use crate::trajectory::Trajectory;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Scale `dws[i, ..]` by `√(ts[i+1] - ts[i])`
pub fn wiener_increments(grid: &TimeGrid, dws: &Array2<f64>, dim: usize) -> SdeResult<Array2<f64>> {
    validate_len("dws rows (one per time interval)", grid.steps(), dws.nrows())?;
    check_noise_width("dws columns", dim, dws.ncols())?;

    let mut scaled = dws.to_owned();
    for (i, mut row) in scaled.axis_iter_mut(Axis(0)).enumerate() {
        let sqrt_dt = grid.dt(i).sqrt();
        row.mapv_inplace(|z| z * sqrt_dt);
    }
    Ok(scaled)
}

/// A noise vector is either one draw per component or one shared draw
pub(crate) fn check_noise_width(what: &str, dim: usize, width: usize) -> SdeResult<()> {
    if width == dim || width == 1 {
        Ok(())
    } else {
        Err(SdeError::ShapeMismatch {
            what: what.to_string(),
            expected: format!("1 or {}", dim),
            found: width,
        })
    }
}

/// Check a coefficient evaluation against the state dimension
pub(crate) fn check_coefficient(name: &str, dim: usize, value: &Array1<f64>) -> SdeResult<()> {
    validate_len(name, dim, value.len())
}

/// Run a one-step map over the grid, storing every state
///
/// Input shapes are checked before `step` is first called. Any error from
/// `step` aborts the walk and no trajectory is returned.
pub(crate) fn march<F>(
    x0: &Array1<f64>,
    grid: &TimeGrid,
    dws: &Array2<f64>,
    mut step: F,
) -> SdeResult<Trajectory>
where
    F: FnMut(&Array1<f64>, f64, f64, ArrayView1<'_, f64>) -> SdeResult<Array1<f64>>,
{
    let dim = x0.len();
    if dim == 0 {
        return Err(SdeError::ShapeMismatch {
            what: "initial state".to_string(),
            expected: "at least 1 component".to_string(),
            found: 0,
        });
    }
    let increments = wiener_increments(grid, dws, dim)?;

    let times = grid.times();
    let mut states = Array2::zeros((grid.len(), dim));
    states.row_mut(0).assign(x0);

    let mut current = x0.clone();
    for (i, dw) in increments.outer_iter().enumerate() {
        let next = step(&current, times[i], grid.dt(i), dw)?;
        states.row_mut(i + 1).assign(&next);
        current = next;
    }

    Ok(Trajectory::new(grid.clone(), states))
}
