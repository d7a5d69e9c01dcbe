//! Gradient descent as a quasi-Newton method.
//!
//! Gradient descent is [`quasi_newton`] with an identity inverse Hessian that
//! is never updated, so every step is `x ← x - alpha · ∇f(x)`. It needs no
//! curvature information but converges only linearly, and `alpha` must be
//! small enough for the steps not to overshoot.
//!
//! Events, errors and convergence behave exactly as in [`quasi_newton`].

use nalgebra::{DMatrix, DVector};
use numopt_core::{DifferentiableFunction, Observer};

use super::{
    Action, Config, Solution,
    quasi_newton::{self, Identity},
};

pub use super::quasi_newton::{Error, Event};

/// Minimizes `function` with gradient descent starting from `x0`.
///
/// # Errors
///
/// Returns an error if a gradient does not match the dimension of `x0`, or if
/// the iteration cap is reached.
pub fn minimize<F, Obs>(
    function: &F,
    x0: DVector<f64>,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let dim = x0.len();
    let h0 = DMatrix::identity(dim, dim);
    quasi_newton::minimize(function, &Identity, x0, h0, config, observer)
}

/// Minimizes `function` with gradient descent without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if a gradient does not match the dimension of `x0`, or if
/// the iteration cap is reached.
pub fn minimize_unobserved<F>(
    function: &F,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction + ?Sized,
{
    minimize(function, x0, config, ())
}
