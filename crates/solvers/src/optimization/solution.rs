use nalgebra::DVector;

/// Indicates why a successful solver run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The function value at `x` satisfied the convergence test.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The final point.
    pub x: DVector<f64>,

    /// Function value at `x`.
    pub value: f64,

    /// Number of steps applied to reach `x`.
    pub iters: usize,
}
