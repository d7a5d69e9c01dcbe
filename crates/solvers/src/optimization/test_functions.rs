//! Differentiable functions shared by the solver tests.

use std::cell::Cell;

use nalgebra::{DMatrix, DVector};

use numopt_core::{DifferentiableFunction, TwiceDifferentiableFunction};

/// f(x) = xᵀx - offset, in any dimension.
pub(crate) struct Paraboloid {
    pub(crate) offset: f64,
}

impl Paraboloid {
    pub(crate) fn centered() -> Self {
        Self { offset: 0.0 }
    }
}

impl DifferentiableFunction for Paraboloid {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        x.dot(x) - self.offset
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        x * 2.0
    }
}

impl TwiceDifferentiableFunction for Paraboloid {
    fn hessian_at(&self, x: &DVector<f64>) -> DMatrix<f64> {
        DMatrix::identity(x.len(), x.len()) * 2.0
    }
}

/// f(x) = ½ xᵀAx with A = [[4, 1], [1, 3]], minimized at the origin.
pub(crate) struct Coupled;

impl Coupled {
    pub(crate) fn matrix() -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0])
    }
}

impl DifferentiableFunction for Coupled {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        0.5 * x.dot(&(Self::matrix() * x))
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        Self::matrix() * x
    }
}

impl TwiceDifferentiableFunction for Coupled {
    fn hessian_at(&self, _x: &DVector<f64>) -> DMatrix<f64> {
        Self::matrix()
    }
}

/// f(x, y) = x², whose Hessian is singular everywhere.
pub(crate) struct Trough;

impl DifferentiableFunction for Trough {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        x[0].powi(2)
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        DVector::from_vec(vec![2.0 * x[0], 0.0])
    }
}

impl TwiceDifferentiableFunction for Trough {
    fn hessian_at(&self, _x: &DVector<f64>) -> DMatrix<f64> {
        DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 0.0])
    }
}

/// A paraboloid whose gradient and Hessian have one extra component.
pub(crate) struct Oversized;

impl DifferentiableFunction for Oversized {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        x.dot(x)
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        DVector::from_fn(x.len() + 1, |i, _| if i < x.len() { 2.0 * x[i] } else { 0.0 })
    }
}

impl TwiceDifferentiableFunction for Oversized {
    fn hessian_at(&self, x: &DVector<f64>) -> DMatrix<f64> {
        DMatrix::identity(x.len() + 1, x.len() + 1) * 2.0
    }
}

/// A paraboloid with a correct gradient but an oversized Hessian.
pub(crate) struct OversizedHessian;

impl DifferentiableFunction for OversizedHessian {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        x.dot(x)
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        x * 2.0
    }
}

impl TwiceDifferentiableFunction for OversizedHessian {
    fn hessian_at(&self, x: &DVector<f64>) -> DMatrix<f64> {
        DMatrix::identity(x.len() + 1, x.len() + 1) * 2.0
    }
}

/// Wraps a function and counts how many times its value is evaluated.
pub(crate) struct Counted<F> {
    inner: F,
    values: Cell<usize>,
}

impl<F> Counted<F> {
    pub(crate) fn new(inner: F) -> Self {
        Self {
            inner,
            values: Cell::new(0),
        }
    }

    pub(crate) fn value_evaluations(&self) -> usize {
        self.values.get()
    }
}

impl<F: DifferentiableFunction> DifferentiableFunction for Counted<F> {
    fn value_at(&self, x: &DVector<f64>) -> f64 {
        self.values.set(self.values.get() + 1);
        self.inner.value_at(x)
    }

    fn gradient_at(&self, x: &DVector<f64>) -> DVector<f64> {
        self.inner.gradient_at(x)
    }
}

impl<F: TwiceDifferentiableFunction> TwiceDifferentiableFunction for Counted<F> {
    fn hessian_at(&self, x: &DVector<f64>) -> DMatrix<f64> {
        self.inner.hessian_at(x)
    }
}

/// Builds a point from a slice.
pub(crate) fn point(values: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(values)
}
