//! Iterative solvers for unconstrained optimization.
//!
//! See [`optimization`] for the available methods.

pub mod optimization;
