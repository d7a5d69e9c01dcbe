use nalgebra::DVector;
use thiserror::Error;

use crate::optimization::DimensionError;

/// Errors that can occur during quasi-Newton iteration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] DimensionError),

    #[error("reached the maximum of {iters} iterations without converging")]
    MaxIters {
        /// The point after the last applied step.
        x: DVector<f64>,

        /// Function value at `x`.
        value: f64,

        /// Number of steps applied.
        iters: usize,
    },
}

impl Error {
    /// Returns the point the solver stopped at, if the error carries one.
    ///
    /// Callers can pass it as a new `x0` to resume.
    #[must_use]
    pub fn last_point(&self) -> Option<&DVector<f64>> {
        match self {
            Self::MaxIters { x, .. } => Some(x),
            Self::DimensionMismatch(_) => None,
        }
    }
}
