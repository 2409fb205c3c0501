//! # milstein-sde: Milstein Integration of Stochastic Differential Equations
//!
//! A Rust library that integrates systems of SDEs
//!
//! ```text
//! dX = a(X, t) dt + b(X, t) dW
//! ```
//!
//! with the strong-order-1.0 Milstein scheme, given caller-supplied
//! standard-normal draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: The integrator never samples; the same draws always give the same path
//! - **Non-uniform grids**: Each draw is scaled by `√Δt` of its own interval
//! - **Fail fast**: Grid and increment shapes are validated before any coefficient is evaluated
//! - **Baseline scheme**: Euler-Maruyama over identical inputs for comparison
//!
//! ## Quick Start
//!
//! ```rust
//! use milstein_sde::solvers::milstein;
//! use ndarray::{array, Array1};
//!
//! // dX = 0.05 X dt + 0.2 X dW
//! let trajectory = milstein(
//!     |x: &Array1<f64>, _t: f64| x * 0.05,
//!     |x: &Array1<f64>, _t: f64| x * 0.2,
//!     |x: &Array1<f64>, _t: f64| Array1::from_elem(x.len(), 0.2),
//!     &array![100.0],
//!     &[0.0, 1.0],
//!     &array![[0.0]],
//! )
//! .expect("Valid inputs");
//!
//! assert_eq!(trajectory.len(), 2);
//! assert!((trajectory.final_state()[0] - 103.0).abs() < 1e-12);
//! ```
//!
//! ## Noise Structure
//!
//! Noise is diagonal: component `k` of the state is driven by column `k` of
//! the increment matrix, or every component by the single column when only
//! one is supplied. The diffusion derivative is `∂b/∂X` for scalar equations
//! and the per-component divergence term for systems.

// Module declarations
pub mod config;
pub mod error;
pub mod grid;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod rng;
pub mod solvers;
pub mod trajectory;

// Re-export commonly used types for convenience
pub use config::PathConfig;
pub use error::{SdeError, SdeResult};
pub use grid::TimeGrid;
pub use models::{FnSde, SdeSystem};
pub use solvers::{milstein, milstein_scalar, EulerMaruyama, Milstein};
pub use trajectory::Trajectory;
