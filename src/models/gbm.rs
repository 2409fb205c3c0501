// src/models/gbm.rs
use super::model::SdeSystem;
use crate::error::{validation::*, SdeError, SdeResult};
use ndarray::{Array1, Zip};

/// Geometric Brownian motion applied independently to every component
///
/// `dX = μ X dt + σ X dW`, so `b'(X) = σ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> SdeResult<Self> {
        validate_finite("mu", mu)?;
        validate_finite("sigma", sigma)?;
        validate_non_negative("sigma", sigma)?;
        Ok(Gbm { mu, sigma })
    }

    /// Closed-form update `X exp((μ - σ²/2) Δt + σ ΔW)` for an already scaled `dw`
    ///
    /// `dw` holds one increment per component or a single shared one; any
    /// other length is a `ShapeMismatch`.
    pub fn exact_step(&self, x: &Array1<f64>, dt: f64, dw: &Array1<f64>) -> SdeResult<Array1<f64>> {
        if dw.len() != x.len() && dw.len() != 1 {
            return Err(SdeError::ShapeMismatch {
                what: "dw".to_string(),
                expected: format!("1 or {}", x.len()),
                found: dw.len(),
            });
        }
        let log_drift = (self.mu - 0.5 * self.sigma * self.sigma) * dt;
        Ok(Zip::from(x)
            .and_broadcast(dw)
            .map_collect(|&xi, &dwi| xi * (log_drift + self.sigma * dwi).exp()))
    }
}

impl SdeSystem for Gbm {
    fn drift(&self, x: &Array1<f64>, _t: f64) -> Array1<f64> {
        x * self.mu
    }

    fn diffusion(&self, x: &Array1<f64>, _t: f64) -> Array1<f64> {
        x * self.sigma
    }

    fn diffusion_derivative(&self, x: &Array1<f64>, _t: f64) -> Array1<f64> {
        Array1::from_elem(x.len(), self.sigma)
    }
}
