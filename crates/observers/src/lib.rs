//! Reusable observers for the numopt solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the Newton-Raphson, quasi-Newton and gradient descent solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasValue`], [`HasPoint`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`] — records the function value after every step
//! - [`StopWhenStalled`] — stops a run whose value stops changing
//!
//! [`Observer`]: numopt_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasValue`]: traits::HasValue
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stall;
mod trace;

pub use stall::StopWhenStalled;
pub use trace::Trace;
