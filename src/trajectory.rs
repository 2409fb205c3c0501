// src/trajectory.rs
use crate::grid::TimeGrid;
use ndarray::{Array2, ArrayView1};

/// Discretised solution: one row per time point, one column per state component
///
/// Row 0 is the initial condition exactly as supplied. Values are never
/// checked for finiteness; use [`Trajectory::is_finite`] when coefficients
/// may blow up.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    grid: TimeGrid,
    states: Array2<f64>,
}

impl Trajectory {
    pub(crate) fn new(grid: TimeGrid, states: Array2<f64>) -> Self {
        debug_assert_eq!(grid.len(), states.nrows());
        Trajectory { grid, states }
    }

    /// Number of time points (equals the grid length)
    pub fn len(&self) -> usize {
        self.states.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.states.nrows() == 0
    }

    /// State dimension
    pub fn dim(&self) -> usize {
        self.states.ncols()
    }

    pub fn times(&self) -> &[f64] {
        self.grid.times()
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// The full `len() × dim()` matrix
    pub fn states(&self) -> &Array2<f64> {
        &self.states
    }

    pub fn state(&self, i: usize) -> ArrayView1<'_, f64> {
        self.states.row(i)
    }

    pub fn initial_state(&self) -> ArrayView1<'_, f64> {
        self.states.row(0)
    }

    pub fn final_state(&self) -> ArrayView1<'_, f64> {
        self.states.row(self.states.nrows() - 1)
    }

    /// One component across all time points
    pub fn component(&self, k: usize) -> ArrayView1<'_, f64> {
        self.states.column(k)
    }

    pub fn is_finite(&self) -> bool {
        self.states.iter().all(|v| v.is_finite())
    }

    /// `(t_i, X_i)` pairs in time order
    pub fn iter(&self) -> impl Iterator<Item = (f64, ArrayView1<'_, f64>)> + '_ {
        self.grid
            .times()
            .iter()
            .copied()
            .zip(self.states.outer_iter())
    }

    pub fn into_states(self) -> Array2<f64> {
        self.states
    }
}
