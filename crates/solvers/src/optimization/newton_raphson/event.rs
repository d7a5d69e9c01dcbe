use nalgebra::DVector;

/// Emitted by the Newton-Raphson solver after each applied step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// One-based iteration number.
    pub iter: usize,

    /// The point after the step.
    pub x: &'a DVector<f64>,

    /// Function value at `x`.
    pub value: f64,

    /// Gradient at the point before the step.
    pub gradient: &'a DVector<f64>,

    /// The step that was subtracted, `alpha · H⁻¹ · gradient`.
    pub step: &'a DVector<f64>,
}
