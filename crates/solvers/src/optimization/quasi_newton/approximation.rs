use nalgebra::{DMatrix, DVector};

/// Relative threshold below which the curvature `Δgᵀ Δx` is treated as zero.
const CURVATURE_TOL: f64 = 1e-10;

/// Relative threshold for skipping a symmetric rank-one update.
const SR1_TOL: f64 = 1e-8;

/// Updates an inverse Hessian estimate from one observed step.
///
/// Given the current estimate `H`, the gradient change `Δg`, and the position
/// change `Δx`, returns the estimate to use for the next step. Implementations
/// must return a `d×d` matrix; the solver rejects anything else.
///
/// Closures with the same signature implement this trait.
pub trait HessianApproximation {
    /// Returns the next inverse Hessian estimate.
    fn update_hessian(
        &self,
        current: &DMatrix<f64>,
        delta_gradient: &DVector<f64>,
        delta_x: &DVector<f64>,
    ) -> DMatrix<f64>;
}

/// Blanket implementation for update closures.
impl<F> HessianApproximation for F
where
    F: Fn(&DMatrix<f64>, &DVector<f64>, &DVector<f64>) -> DMatrix<f64>,
{
    fn update_hessian(
        &self,
        current: &DMatrix<f64>,
        delta_gradient: &DVector<f64>,
        delta_x: &DVector<f64>,
    ) -> DMatrix<f64> {
        self(current, delta_gradient, delta_x)
    }
}

/// Ignores the observed step and always returns the identity.
///
/// Combined with an identity `h0`, every step is `alpha · ∇f(x)`, which is
/// plain gradient descent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl HessianApproximation for Identity {
    fn update_hessian(
        &self,
        current: &DMatrix<f64>,
        _delta_gradient: &DVector<f64>,
        _delta_x: &DVector<f64>,
    ) -> DMatrix<f64> {
        DMatrix::identity(current.nrows(), current.nrows())
    }
}

/// Symmetric rank-one (SR1) update of the inverse Hessian.
///
/// With `r = Δx - HΔg`, the update is `H + r rᵀ / (rᵀΔg)`. It satisfies the
/// secant condition `H_next Δg = Δx` but does not preserve positive
/// definiteness. The update is skipped when `|rᵀΔg|` is small relative to
/// `‖Δg‖ ‖r‖`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymmetricRankOne;

impl HessianApproximation for SymmetricRankOne {
    fn update_hessian(
        &self,
        current: &DMatrix<f64>,
        delta_gradient: &DVector<f64>,
        delta_x: &DVector<f64>,
    ) -> DMatrix<f64> {
        let residual = delta_x - current * delta_gradient;
        let denominator = residual.dot(delta_gradient);

        if denominator.abs() <= SR1_TOL * delta_gradient.norm() * residual.norm() {
            return current.clone();
        }

        current + (&residual * residual.transpose()) / denominator
    }
}

/// Broyden-Fletcher-Goldfarb-Shanno (BFGS) update of the inverse Hessian.
///
/// With `ρ = 1 / (Δgᵀ Δx)`, the update is
/// `(I - ρ Δx Δgᵀ) H (I - ρ Δg Δxᵀ) + ρ Δx Δxᵀ`.
/// It preserves symmetric positive definiteness when the curvature
/// `Δgᵀ Δx` is positive, and is skipped otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfgs;

impl HessianApproximation for Bfgs {
    fn update_hessian(
        &self,
        current: &DMatrix<f64>,
        delta_gradient: &DVector<f64>,
        delta_x: &DVector<f64>,
    ) -> DMatrix<f64> {
        let curvature = delta_gradient.dot(delta_x);
        if curvature <= CURVATURE_TOL * delta_gradient.norm() * delta_x.norm() {
            return current.clone();
        }

        let rho = 1.0 / curvature;
        let dim = current.nrows();
        let identity = DMatrix::<f64>::identity(dim, dim);

        let left = &identity - (delta_x * delta_gradient.transpose()) * rho;
        let right = &identity - (delta_gradient * delta_x.transpose()) * rho;

        &left * current * &right + (delta_x * delta_x.transpose()) * rho
    }
}

/// Davidon-Fletcher-Powell (DFP) update of the inverse Hessian.
///
/// The update is `H + Δx Δxᵀ / (Δxᵀ Δg) - H Δg Δgᵀ H / (Δgᵀ H Δg)`.
/// It is skipped when either denominator is not safely positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dfp;

impl HessianApproximation for Dfp {
    fn update_hessian(
        &self,
        current: &DMatrix<f64>,
        delta_gradient: &DVector<f64>,
        delta_x: &DVector<f64>,
    ) -> DMatrix<f64> {
        let curvature = delta_x.dot(delta_gradient);
        let h_dg = current * delta_gradient;
        let dg_h = delta_gradient.transpose() * current;
        let dg_h_dg = delta_gradient.dot(&h_dg);

        let gradient_norm = delta_gradient.norm();
        if curvature <= CURVATURE_TOL * gradient_norm * delta_x.norm()
            || dg_h_dg <= CURVATURE_TOL * gradient_norm * h_dg.norm()
        {
            return current.clone();
        }

        current + (delta_x * delta_x.transpose()) / curvature - (&h_dg * &dg_h) / dg_h_dg
    }
}
