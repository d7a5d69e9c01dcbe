use numopt_core::Observer;

use crate::traits::{HasIteration, HasValue};

/// Records the function value after every step of a run.
///
/// Pass `&mut trace` to a solver to keep the trace after the run finishes.
///
/// ```rust
/// use nalgebra::DVector;
/// use numopt_core::DifferentiableFunction;
/// use numopt_observers::Trace;
/// use numopt_solvers::optimization::{Config, gradient_descent};
///
/// struct Square;
///
/// impl DifferentiableFunction for Square {
///     fn value_at(&self, x: &DVector<f64>) -> f64 {
///         x.dot(x)
///     }
///
///     fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
///         x * 2.0
///     }
/// }
///
/// let mut trace = Trace::new();
/// let config = Config::new(0.1, 1e-6, 200).unwrap();
/// let x0 = DVector::from_vec(vec![1.0, -1.0]);
///
/// let solution = gradient_descent::minimize(&Square, x0, &config, &mut trace).unwrap();
///
/// assert_eq!(trace.len(), solution.iters);
/// assert!(trace.is_non_increasing());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    values: Vec<f64>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded values, one per step, in iteration order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no step has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the most recent value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns true if no recorded value exceeds the one before it.
    #[must_use]
    pub fn is_non_increasing(&self) -> bool {
        self.values.windows(2).all(|pair| pair[1] <= pair[0])
    }

    fn record<E: HasIteration + HasValue>(&mut self, event: &E) {
        // A reused trace starts over when a new run begins.
        if event.iter() == 1 {
            self.values.clear();
        }
        self.values.push(event.value());
    }
}

impl<E: HasIteration + HasValue, A> Observer<E, A> for Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

impl<E: HasIteration + HasValue, A> Observer<E, A> for &mut Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}
