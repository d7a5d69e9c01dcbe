//! Core traits for the numopt solvers.
//!
//! This crate defines the capabilities that callers supply and solvers consume:
//!
//! - [`DifferentiableFunction`] — a scalar function with a gradient
//! - [`TwiceDifferentiableFunction`] — additionally provides the Hessian
//! - [`Observer`] — receives solver events and optionally returns control actions
//!
//! Points, gradients, and Hessians are [`nalgebra`] dynamic vectors and matrices,
//! so the problem dimension is a runtime property checked by the solvers.

mod function;
mod observer;

pub use function::{DifferentiableFunction, TwiceDifferentiableFunction};
pub use observer::Observer;
