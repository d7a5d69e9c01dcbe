//! Solvers for unconstrained optimization of differentiable functions.
//!
//! A [`DifferentiableFunction`] supplies values and gradients at a point.
//! Solvers in this module iterate `x ← x - alpha · H · ∇f(x)`, where `H` is a
//! curvature estimate, until the function value at the new point satisfies the
//! convergence test or the iteration cap is reached.
//!
//! # Solvers
//!
//! - [`newton_raphson`] — exact Hessian, inverted at every step
//! - [`quasi_newton`] — inverse Hessian estimate maintained by a pluggable
//!   [`HessianApproximation`](quasi_newton::HessianApproximation)
//! - [`gradient_descent`] — quasi-Newton with a fixed identity estimate
//!
//! # Convergence
//!
//! All solvers share one test: a step is accepted as the solution when the
//! magnitude of the function value at the new point is below `epsilon`, i.e.
//! `|f(x_next)| < epsilon`. This finds a point where `f` vanishes, so
//! problems should be stated with an objective whose target value is zero.
//!
//! [`DifferentiableFunction`]: numopt_core::DifferentiableFunction

mod action;
mod config;
mod convergence;
mod dimension;
mod direction;
mod solution;

#[cfg(test)]
mod test_functions;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use dimension::DimensionError;
pub use direction::direction;
pub use solution::{Solution, Status};

pub mod gradient_descent;
pub mod newton_raphson;
pub mod quasi_newton;
