// src/config.rs
use crate::error::{validation::*, SdeError, SdeResult};
use crate::grid::TimeGrid;
use crate::rng::IncrementFactory;
use ndarray::Array2;

/// Uniform grid plus seed: everything needed to build integrator inputs
/// for a reproducible sample path
#[derive(Debug, Clone, PartialEq)]
pub struct PathConfig {
    pub t0: f64,
    pub t_end: f64,
    pub steps: usize,
    pub seed: u64,
}

impl PathConfig {
    /// Validate the path configuration
    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("t0", self.t0)?;
        validate_finite("t_end", self.t_end)?;
        validate_steps(self.steps)?;

        if self.t_end <= self.t0 {
            return Err(SdeError::InvalidConfiguration {
                field: "t_end".to_string(),
                reason: format!("must be later than t0 ({})", self.t0),
            });
        }

        Ok(())
    }

    pub fn time_grid(&self) -> SdeResult<TimeGrid> {
        self.validate()?;
        TimeGrid::uniform(self.t0, self.t_end, self.steps)
    }

    /// Standard-normal draws for `path_id`, shaped `steps × noise_dim`
    pub fn increments(&self, path_id: u64, noise_dim: usize) -> SdeResult<Array2<f64>> {
        self.validate()?;
        if noise_dim == 0 {
            return Err(SdeError::InvalidConfiguration {
                field: "noise_dim".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(IncrementFactory::new(self.seed).increments(path_id, self.steps, noise_dim))
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            t0: 0.0,
            t_end: 1.0,
            steps: 100,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = PathConfig::default();
        assert!(cfg.validate().is_ok());
        let grid = cfg.time_grid().unwrap();
        assert_eq!(grid.len(), 101);
        assert_eq!(cfg.increments(0, 2).unwrap().dim(), (100, 2));
    }

    #[test]
    fn test_rejects_reversed_interval() {
        let cfg = PathConfig {
            t0: 1.0,
            t_end: 0.5,
            ..Default::default()
        };
        match cfg.validate() {
            Err(SdeError::InvalidConfiguration { field, .. }) => assert_eq!(field, "t_end"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_steps_and_noise_dim() {
        let cfg = PathConfig {
            steps: 0,
            ..Default::default()
        };
        assert!(cfg.time_grid().is_err());
        assert!(PathConfig::default().increments(0, 0).is_err());
    }
}
