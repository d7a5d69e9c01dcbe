use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// A vector or matrix whose size does not match the problem dimension.
///
/// The problem dimension is the length of the initial point.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("initial point must have at least one component")]
    EmptyPoint,

    #[error("gradient has length {found}, expected {expected}")]
    Gradient { expected: usize, found: usize },

    #[error("hessian is {rows}x{cols}, expected {expected}x{expected}")]
    Hessian {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("inverse hessian estimate is {rows}x{cols}, expected {expected}x{expected}")]
    InverseHessian {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("hessian approximation returned {rows}x{cols}, expected {expected}x{expected}")]
    Approximation {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cannot scale a gradient of length {len} by a {rows}x{cols} matrix")]
    Direction { rows: usize, cols: usize, len: usize },
}

/// Returns the problem dimension defined by the initial point.
pub(crate) fn check_point(x: &DVector<f64>) -> Result<usize, DimensionError> {
    match x.len() {
        0 => Err(DimensionError::EmptyPoint),
        dim => Ok(dim),
    }
}

pub(crate) fn check_gradient(dim: usize, gradient: &DVector<f64>) -> Result<(), DimensionError> {
    if gradient.len() == dim {
        Ok(())
    } else {
        Err(DimensionError::Gradient {
            expected: dim,
            found: gradient.len(),
        })
    }
}

pub(crate) fn check_hessian(dim: usize, hessian: &DMatrix<f64>) -> Result<(), DimensionError> {
    check_square(dim, hessian, |expected, rows, cols| {
        DimensionError::Hessian {
            expected,
            rows,
            cols,
        }
    })
}

pub(crate) fn check_inverse_hessian(
    dim: usize,
    estimate: &DMatrix<f64>,
) -> Result<(), DimensionError> {
    check_square(dim, estimate, |expected, rows, cols| {
        DimensionError::InverseHessian {
            expected,
            rows,
            cols,
        }
    })
}

pub(crate) fn check_approximation(
    dim: usize,
    estimate: &DMatrix<f64>,
) -> Result<(), DimensionError> {
    check_square(dim, estimate, |expected, rows, cols| {
        DimensionError::Approximation {
            expected,
            rows,
            cols,
        }
    })
}

fn check_square<E>(dim: usize, matrix: &DMatrix<f64>, error: E) -> Result<(), DimensionError>
where
    E: FnOnce(usize, usize, usize) -> DimensionError,
{
    let (rows, cols) = matrix.shape();
    if rows == dim && cols == dim {
        Ok(())
    } else {
        Err(error(dim, rows, cols))
    }
}
