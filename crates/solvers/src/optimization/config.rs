use thiserror::Error;

/// Configuration shared by the optimization solvers.
///
/// Every step moves the point by `alpha` times the curvature-scaled gradient.
/// A run converges once `|f(x)| < epsilon` and fails after `max_iters` steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    alpha: f64,
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating an optimization config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alpha must be finite and positive")]
    Alpha,

    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least one")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            epsilon: 1e-12,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step size, tolerance and cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha` or `epsilon` is non-positive or non-finite,
    /// or if `max_iters` is zero.
    pub fn new(alpha: f64, epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            alpha,
            epsilon,
            max_iters,
        })
    }

    /// Returns the step-size multiplier.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the convergence tolerance on the function value.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
