use nalgebra::{DMatrix, DVector};

/// A scalar function of a vector argument with a known gradient.
///
/// Solvers treat implementations as pure: evaluating at the same point must
/// give the same result, and evaluation must not depend on solver state.
/// The gradient must have the same length as `x`; solvers check this and
/// report a dimension mismatch otherwise.
pub trait DifferentiableFunction {
    /// Returns the function value at `x`.
    fn value_at(&self, x: &DVector<f64>) -> f64;

    /// Returns the gradient at `x`.
    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64>;
}

/// A [`DifferentiableFunction`] that also provides its Hessian.
///
/// The Hessian must be a square matrix matching the length of `x`.
pub trait TwiceDifferentiableFunction: DifferentiableFunction {
    /// Returns the matrix of second partial derivatives at `x`.
    fn hessian_at(&self, x: &DVector<f64>) -> DMatrix<f64>;
}

impl<F: DifferentiableFunction + ?Sized> DifferentiableFunction for &F {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        (**self).value_at(x)
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        (**self).gradient_at(x)
    }
}

impl<F: TwiceDifferentiableFunction + ?Sized> TwiceDifferentiableFunction for &F {
    fn hessian_at(&self, x: &DVector<f64>) -> DMatrix<f64> {
        (**self).hessian_at(x)
    }
}
