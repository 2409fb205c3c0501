// src/error.rs
use std::fmt;

/// Errors raised by the integrators and their supporting types
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// An input or a coefficient output has the wrong shape
    ShapeMismatch {
        what: String,
        expected: String,
        found: usize,
    },

    /// Time grid is not strictly increasing at `index`
    NonMonotonicTime {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// Time grid has fewer than two points
    InsufficientTimePoints { found: usize },

    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Writing results failed
    Io { reason: String },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::ShapeMismatch {
                what,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch for {}: expected {}, found {}",
                    what, expected, found
                )
            }
            SdeError::NonMonotonicTime {
                index,
                previous,
                current,
            } => {
                write!(
                    f,
                    "Time grid must be strictly increasing: ts[{}] = {} does not exceed ts[{}] = {}",
                    index,
                    current,
                    index - 1,
                    previous
                )
            }
            SdeError::InsufficientTimePoints { found } => {
                write!(
                    f,
                    "Time grid needs at least 2 points, found {}",
                    found
                )
            }
            SdeError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::Io { reason } => write!(f, "I/O error: {}", reason),
        }
    }
}

impl std::error::Error for SdeError {}

impl From<std::io::Error> for SdeError {
    fn from(err: std::io::Error) -> Self {
        SdeError::Io {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for milstein-sde operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SdeResult<()> {
        if value >= 0.0 {
            Ok(())
        } else {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a time grid: at least two finite points, strictly increasing
    ///
    /// Non-finite points (NaN or ±∞) would make some `Δt` infinite or NaN and
    /// are rejected as invalid parameters before monotonicity is checked.
    pub fn validate_time_grid(ts: &[f64]) -> SdeResult<()> {
        if ts.len() < 2 {
            return Err(SdeError::InsufficientTimePoints { found: ts.len() });
        }
        for (index, &t) in ts.iter().enumerate() {
            validate_finite(&format!("ts[{}]", index), t)?;
        }
        for (index, pair) in ts.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            if !(current > previous) {
                return Err(SdeError::NonMonotonicTime {
                    index: index + 1,
                    previous,
                    current,
                });
            }
            validate_finite(&format!("ts[{}] - ts[{}]", index + 1, index), current - previous)?;
        }
        Ok(())
    }

    /// Validate that a length matches exactly
    pub fn validate_len(what: &str, expected: usize, found: usize) -> SdeResult<()> {
        if expected == found {
            Ok(())
        } else {
            Err(SdeError::ShapeMismatch {
                what: what.to_string(),
                expected: expected.to_string(),
                found,
            })
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SdeResult<()> {
        if steps == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > 10_000_000 {
            Err(SdeError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "exceeds maximum allowed (10,000,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
