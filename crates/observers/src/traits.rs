//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration number
//! - [`HasValue`] — events that carry the function value at the new point
//! - [`HasPoint`] — events that carry the new point
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numopt_core::Observer;
//! use numopt_observers::traits::{CanStopEarly, HasValue};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.value().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use nalgebra::DVector;

use numopt_solvers::optimization::{Action, newton_raphson, quasi_newton};

/// An event that carries a one-based iteration number.
pub trait HasIteration {
    /// Returns the iteration that produced this event.
    fn iter(&self) -> usize;
}

/// An event that carries the function value at the new point.
pub trait HasValue {
    /// Returns the function value for this event.
    fn value(&self) -> f64;
}

/// An event that carries the new point.
pub trait HasPoint {
    /// Returns the point reached by the step.
    fn point(&self) -> &DVector<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- newton_raphson::Event ---

impl HasIteration for newton_raphson::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasValue for newton_raphson::Event<'_> {
    fn value(&self) -> f64 {
        self.value
    }
}

impl HasPoint for newton_raphson::Event<'_> {
    fn point(&self) -> &DVector<f64> {
        self.x
    }
}

// --- quasi_newton::Event ---

impl HasIteration for quasi_newton::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasValue for quasi_newton::Event<'_> {
    fn value(&self) -> f64 {
        self.value
    }
}

impl HasPoint for quasi_newton::Event<'_> {
    fn point(&self) -> &DVector<f64> {
        self.x
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
