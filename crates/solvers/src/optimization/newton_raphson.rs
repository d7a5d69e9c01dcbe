//! Newton-Raphson iteration with the exact Hessian.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration:
//!
//! 1. Evaluates the gradient `g` and Hessian `H` at `x`.
//! 2. Inverts `H`, failing with [`Error::SingularHessian`] if it is singular.
//! 3. Steps `x ← x - alpha · H⁻¹ · g`.
//! 4. Stops with [`Status::Converged`] if `|f(x)| < epsilon`.
//!
//! If `max_iters` steps pass without converging, the run fails with
//! [`Error::MaxIters`], which carries the last point.
//!
//! # When to Use
//!
//! Near a minimum of a smooth function, Newton steps converge quadratically,
//! and an exact quadratic is solved in a single step with `alpha = 1`.
//! Each step costs one `d×d` inversion, so the method suits small to moderate
//! dimensions where the Hessian is available and well conditioned.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] after every applied step. Observers can
//! return [`Action::StopEarly`] to halt with [`Status::StoppedByObserver`].
//! A step that converges reports [`Status::Converged`] regardless of the
//! observer's action.

mod error;
mod event;


pub use error::Error;
pub use event::Event;

use nalgebra::DVector;
use numopt_core::{Observer, TwiceDifferentiableFunction};

use super::{
    Action, Config, Solution, Status, convergence::is_converged, dimension, direction::direction,
};

/// Minimizes `function` with Newton-Raphson steps starting from `x0`.
///
/// The observer receives an [`Event`] after each step.
/// See the [module docs](self) for details on the iteration.
///
/// # Errors
///
/// Returns an error if a gradient or Hessian does not match the dimension of
/// `x0`, if a Hessian cannot be inverted, or if the iteration cap is reached.
pub fn minimize<F, Obs>(
    function: &F,
    x0: DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: TwiceDifferentiableFunction + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let dim = dimension::check_point(&x0)?;

    let mut x = x0;
    // Overwritten by the first step, since `max_iters >= 1`.
    let mut value = f64::NAN;

    for iter in 1..=config.max_iters() {
        let gradient = function.gradient_at(&x);
        dimension::check_gradient(dim, &gradient)?;

        let hessian = function.hessian_at(&x);
        dimension::check_hessian(dim, &hessian)?;

        let Some(inverse_hessian) = hessian.try_inverse() else {
            return Err(Error::SingularHessian { x, iter });
        };

        let step = direction(&inverse_hessian, &gradient, config.alpha())?;
        x -= &step;
        value = function.value_at(&x);

        let action = observer.observe(&Event {
            iter,
            x: &x,
            value,
            gradient: &gradient,
            step: &step,
        });

        if is_converged(value, config.epsilon()) {
            return Ok(Solution {
                status: Status::Converged,
                x,
                value,
                iters: iter,
            });
        }

        if let Some(Action::StopEarly) = action {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x,
                value,
                iters: iter,
            });
        }
    }

    Err(Error::MaxIters {
        x,
        value,
        iters: config.max_iters(),
    })
}

/// Minimizes `function` with Newton-Raphson steps without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if a gradient or Hessian does not match the dimension of
/// `x0`, if a Hessian cannot be inverted, or if the iteration cap is reached.
pub fn minimize_unobserved<F>(
    function: &F,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution, Error>
where
    F: TwiceDifferentiableFunction + ?Sized,
{
    minimize(function, x0, config, ())
}
