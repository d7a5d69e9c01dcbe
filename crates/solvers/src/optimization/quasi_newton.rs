//! Quasi-Newton iteration with an approximate inverse Hessian.
//!
//! # Algorithm
//!
//! Starting from `x0` and an inverse Hessian estimate `h0`, each iteration:
//!
//! 1. Steps `x_next = x - alpha · H · g`, where `g` is the gradient at `x`.
//! 2. Stops with [`Status::Converged`] if `|f(x_next)| < epsilon`. The
//!    estimate is not updated on the converging step.
//! 3. Evaluates the gradient at `x_next` and forms `Δx = x_next - x` and
//!    `Δg = ∇f(x_next) - ∇f(x)`.
//! 4. Replaces `H` with [`HessianApproximation::update_hessian`]`(H, Δg, Δx)`.
//! 5. Moves to `x_next`, reusing its gradient for the next step.
//!
//! If `max_iters` steps pass without converging, the run fails with
//! [`Error::MaxIters`], which carries the last point.
//!
//! The gradient difference uses the gradient at the new point, which is the
//! standard secant recurrence. Rank-one and rank-two updates rely on it; with
//! a gradient taken at the old point, `Δg` would always be zero.
//!
//! # Approximations
//!
//! - [`Identity`] — always the identity, which gives gradient descent
//! - [`SymmetricRankOne`] — SR1 rank-one update
//! - [`Bfgs`] — BFGS rank-two update
//! - [`Dfp`] — DFP rank-two update
//!
//! Any `Fn(&DMatrix<f64>, &DVector<f64>, &DVector<f64>) -> DMatrix<f64>`
//! closure also works as an approximation.
//!
//! The solver does not require the estimate to stay symmetric positive
//! definite. Keeping it so is up to the approximation.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every applied step, before the
//! estimate is updated. Observers can return [`Action::StopEarly`] to halt
//! with [`Status::StoppedByObserver`]. A step that converges reports
//! [`Status::Converged`] regardless of the observer's action.

mod approximation;
mod error;
mod event;


pub use approximation::{Bfgs, Dfp, HessianApproximation, Identity, SymmetricRankOne};
pub use error::Error;
pub use event::Event;

use nalgebra::{DMatrix, DVector};
use numopt_core::{DifferentiableFunction, Observer};

use super::{
    Action, Config, Solution, Status, convergence::is_converged, dimension, direction::direction,
};

/// Minimizes `function` with quasi-Newton steps starting from `x0`.
///
/// `h0` is the initial inverse Hessian estimate and must be `d×d`, where `d`
/// is the length of `x0`. The observer receives an [`Event`] after each step.
/// See the [module docs](self) for details on the iteration.
///
/// # Errors
///
/// Returns an error if `h0`, a gradient, or an updated estimate does not match
/// the dimension of `x0`, or if the iteration cap is reached.
pub fn minimize<F, H, Obs>(
    function: &F,
    approximation: &H,
    x0: DVector<f64>,
    h0: DMatrix<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction + ?Sized,
    H: HessianApproximation + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let dim = dimension::check_point(&x0)?;
    dimension::check_inverse_hessian(dim, &h0)?;

    let mut x = x0;
    let mut inverse_hessian = h0;
    // Overwritten by the first step, since `max_iters >= 1`.
    let mut value = f64::NAN;
    let mut gradient = function.gradient_at(&x);
    dimension::check_gradient(dim, &gradient)?;

    for iter in 1..=config.max_iters() {
        let step = direction(&inverse_hessian, &gradient, config.alpha())?;
        let next_x = &x - &step;
        let next_value = function.value_at(&next_x);

        let action = observer.observe(&Event {
            iter,
            x: &next_x,
            value: next_value,
            gradient: &gradient,
            step: &step,
            inverse_hessian: &inverse_hessian,
        });

        if is_converged(next_value, config.epsilon()) {
            return Ok(Solution {
                status: Status::Converged,
                x: next_x,
                value: next_value,
                iters: iter,
            });
        }

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: next_x,
                value: next_value,
                iters: iter,
            });
        }

        let next_gradient = function.gradient_at(&next_x);
        dimension::check_gradient(dim, &next_gradient)?;

        let delta_x = &next_x - &x;
        let delta_gradient = &next_gradient - &gradient;
        let updated = approximation.update_hessian(&inverse_hessian, &delta_gradient, &delta_x);
        dimension::check_approximation(dim, &updated)?;

        inverse_hessian = updated;
        x = next_x;
        value = next_value;
        gradient = next_gradient;
    }

    Err(Error::MaxIters {
        x,
        value,
        iters: config.max_iters(),
    })
}

/// Minimizes `function` with quasi-Newton steps without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `h0`, a gradient, or an updated estimate does not match
/// the dimension of `x0`, or if the iteration cap is reached.
pub fn minimize_unobserved<F, H>(
    function: &F,
    approximation: &H,
    x0: DVector<f64>,
    h0: DMatrix<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: DifferentiableFunction + ?Sized,
    H: HessianApproximation + ?Sized,
{
    minimize(function, approximation, x0, h0, config, ())
}
