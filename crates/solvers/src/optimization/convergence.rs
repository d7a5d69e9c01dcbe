/// Returns true if the function value at a new point meets the tolerance.
///
/// The test is strict, so a value exactly at `epsilon` does not converge.
/// A NaN value never converges.
pub(crate) fn is_converged(value: f64, epsilon: f64) -> bool {
    value.abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_magnitude() {
        assert!(is_converged(0.005, 0.01));
        assert!(is_converged(-0.005, 0.01));
        assert!(!is_converged(-0.02, 0.01));
    }

    #[test]
    fn boundary_is_not_converged() {
        assert!(!is_converged(0.01, 0.01));
        assert!(!is_converged(-0.01, 0.01));
    }

    #[test]
    fn nan_is_not_converged() {
        assert!(!is_converged(f64::NAN, 0.01));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn ignores_the_sign_of_the_value(
                value in prop::num::f64::NORMAL,
                epsilon in prop::num::f64::POSITIVE,
            ) {
                prop_assert_eq!(is_converged(value, epsilon), is_converged(-value, epsilon));
            }

            #[test]
            fn converges_only_strictly_inside_the_tolerance(
                epsilon in 1e-12..1e3_f64,
                fraction in 0.0..0.999_f64,
                excess in 1.0..1e6_f64,
            ) {
                prop_assert!(is_converged(epsilon * fraction, epsilon));
                prop_assert!(!is_converged(epsilon * excess, epsilon));
                prop_assert!(!is_converged(-epsilon * excess, epsilon));
            }
        }
    }
}
