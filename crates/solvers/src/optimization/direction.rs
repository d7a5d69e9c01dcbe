use nalgebra::{DMatrix, DVector};

use super::DimensionError;

/// Computes the step `alpha · (inverted_curvature · gradient)`.
///
/// Every solver step is `x_next = x - direction(...)`, with the inverse of the
/// exact Hessian (Newton-Raphson) or an inverse Hessian estimate (quasi-Newton)
/// as `inverted_curvature`.
///
/// # Errors
///
/// Returns [`DimensionError::Direction`] if `inverted_curvature` is not square
/// or does not match the length of `gradient`.
pub fn direction(
    inverted_curvature: &DMatrix<f64>,
    gradient: &DVector<f64>,
    alpha: f64,
) -> Result<DVector<f64>, DimensionError> {
    let (rows, cols) = inverted_curvature.shape();
    if rows != cols || cols != gradient.len() {
        return Err(DimensionError::Direction {
            rows,
            cols,
            len: gradient.len(),
        });
    }

    Ok((inverted_curvature * gradient) * alpha)
}
