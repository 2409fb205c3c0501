// src/models/ou_process.rs
use super::model::SdeSystem;
use crate::error::{validation::*, SdeResult};
use ndarray::Array1;

/// Ornstein-Uhlenbeck process `dX = θ (μ - X) dt + σ dW`, componentwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> SdeResult<Self> {
        validate_positive("theta", theta)?;
        validate_finite("theta", theta)?;
        validate_finite("mu", mu)?;
        validate_finite("sigma", sigma)?;
        validate_non_negative("sigma", sigma)?;
        Ok(OuProcess { theta, mu, sigma })
    }

    /// `E[X_t] = μ + (x0 - μ) e^{-θ t}`
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }
}

impl SdeSystem for OuProcess {
    fn drift(&self, x: &Array1<f64>, _t: f64) -> Array1<f64> {
        x.mapv(|xi| self.theta * (self.mu - xi))
    }

    fn diffusion(&self, x: &Array1<f64>, _t: f64) -> Array1<f64> {
        Array1::from_elem(x.len(), self.sigma)
    }

    fn diffusion_derivative(&self, x: &Array1<f64>, _t: f64) -> Array1<f64> {
        // constant diffusion
        Array1::zeros(x.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_coefficients() {
        let ou = OuProcess::new(0.5, 0.1, 0.2).unwrap();
        let x = array![1.1, 0.1];
        let a = ou.drift(&x, 0.0);
        assert!((a[0] + 0.5).abs() < 1e-12);
        assert_eq!(a[1], 0.0);
        assert_eq!(ou.diffusion(&x, 3.0), array![0.2, 0.2]);
        assert_eq!(ou.diffusion_derivative(&x, 3.0), array![0.0, 0.0]);
    }

    #[test]
    fn test_exact_mean() {
        let ou = OuProcess::new(0.5, 0.1, 0.2).unwrap();
        assert_eq!(ou.exact_mean(100.0, 0.0), 100.0);
        assert!((ou.exact_mean(100.0, 1e6) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_theta() {
        assert!(OuProcess::new(0.0, 0.1, 0.2).is_err());
        assert!(OuProcess::new(0.5, 0.1, -0.2).is_err());
    }
}
