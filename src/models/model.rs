// src/models/model.rs
use ndarray::Array1;

/// Coefficients of `dX = a(X,t) dt + b(X,t) dW` under diagonal noise
///
/// Every method returns a vector with the same length as `x`.
/// `diffusion_derivative` is `∂b/∂X` for a scalar equation and the
/// per-component divergence term for a system.
pub trait SdeSystem {
    fn drift(&self, x: &Array1<f64>, t: f64) -> Array1<f64>;
    fn diffusion(&self, x: &Array1<f64>, t: f64) -> Array1<f64>;
    fn diffusion_derivative(&self, x: &Array1<f64>, t: f64) -> Array1<f64>;
}

impl<M: SdeSystem + ?Sized> SdeSystem for &M {
    fn drift(&self, x: &Array1<f64>, t: f64) -> Array1<f64> {
        (**self).drift(x, t)
    }

    fn diffusion(&self, x: &Array1<f64>, t: f64) -> Array1<f64> {
        (**self).diffusion(x, t)
    }

    fn diffusion_derivative(&self, x: &Array1<f64>, t: f64) -> Array1<f64> {
        (**self).diffusion_derivative(x, t)
    }
}

/// An [`SdeSystem`] assembled from three closures
pub struct FnSde<A, B, D> {
    pub drift: A,
    pub diffusion: B,
    pub diffusion_prime: D,
}

impl<A, B, D> FnSde<A, B, D>
where
    A: Fn(&Array1<f64>, f64) -> Array1<f64>,
    B: Fn(&Array1<f64>, f64) -> Array1<f64>,
    D: Fn(&Array1<f64>, f64) -> Array1<f64>,
{
    pub fn new(drift: A, diffusion: B, diffusion_prime: D) -> Self {
        FnSde {
            drift,
            diffusion,
            diffusion_prime,
        }
    }
}

impl<A, B, D> SdeSystem for FnSde<A, B, D>
where
    A: Fn(&Array1<f64>, f64) -> Array1<f64>,
    B: Fn(&Array1<f64>, f64) -> Array1<f64>,
    D: Fn(&Array1<f64>, f64) -> Array1<f64>,
{
    fn drift(&self, x: &Array1<f64>, t: f64) -> Array1<f64> {
        (self.drift)(x, t)
    }

    fn diffusion(&self, x: &Array1<f64>, t: f64) -> Array1<f64> {
        (self.diffusion)(x, t)
    }

    fn diffusion_derivative(&self, x: &Array1<f64>, t: f64) -> Array1<f64> {
        (self.diffusion_prime)(x, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fn_sde_dispatch() {
        let sde = FnSde::new(
            |x: &Array1<f64>, _t: f64| x * 2.0,
            |x: &Array1<f64>, t: f64| x.mapv(|v| v + t),
            |x: &Array1<f64>, _t: f64| Array1::zeros(x.len()),
        );
        let x = array![1.0, -3.0];

        assert_eq!(sde.drift(&x, 0.0), array![2.0, -6.0]);
        assert_eq!(sde.diffusion(&x, 0.5), array![1.5, -2.5]);
        assert_eq!(sde.diffusion_derivative(&x, 0.0), array![0.0, 0.0]);

        let by_ref: &dyn SdeSystem = &sde;
        assert_eq!(by_ref.drift(&x, 0.0), array![2.0, -6.0]);
    }
}
