#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Normalizes an angle in degrees to the range [0, 360).
///
/// This function takes any angle value (positive or negative) and converts it
/// to an equivalent angle in the range [0, 360). Values outside this range
/// are wrapped around using modulo arithmetic.
///
/// # Arguments
///
/// * `degrees` - The angle in degrees to normalize
///
/// # Returns
///
/// The normalized angle in degrees, in the range [0, 360)
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let degrees = degrees / 360.0;
    let mut limited = 360.0 * (degrees - degrees.floor());
    if limited < 0.0 {
        limited += 360.0;
    }
    limited
}

/// Normalizes an angle in degrees to the range [-180, 180].
///
/// Used for hour angles, where the sign tells whether the sun is east or
/// west of the meridian.
pub(crate) fn normalize_degrees_180_signed(degrees: f64) -> f64 {
    let degrees = degrees / 360.0;
    let mut limited = 360.0 * (degrees - degrees.floor());
    if limited < -180.0 {
        limited += 360.0;
    } else if limited > 180.0 {
        limited -= 360.0;
    }
    limited
}

/// Normalizes an angle in degrees to the range [0, 180).
pub(crate) fn normalize_degrees_180(degrees: f64) -> f64 {
    let degrees = degrees / 180.0;
    let mut limited = 180.0 * (degrees - degrees.floor());
    if limited < 0.0 {
        limited += 180.0;
    }
    limited
}

/// Keeps only the fractional part of `value`, in the range [0, 1).
pub(crate) fn normalize_unit_interval(value: f64) -> f64 {
    let mut limited = value - value.floor();
    if limited < 0.0 {
        limited += 1.0;
    }
    limited
}

/// Evaluate a cubic polynomial at `x`.
///
/// Interprets the arguments as coefficients of:
///
/// \(`a_3` x^3 + `a_2` x^2 + `a_1` x + `a_0`\)
///
/// using Horner's method for numerical stability and efficiency.
///
/// # Arguments
///
/// * `a3` - Coefficient for \(x^3\)
/// * `a2` - Coefficient for \(x^2\)
/// * `a1` - Coefficient for \(x^1\)
/// * `a0` - Constant term
/// * `x`  - Point at which to evaluate the polynomial
pub(crate) fn eval_cubic(a3: f64, a2: f64, a1: f64, a0: f64, x: f64) -> f64 {
    ((a3 * x + a2) * x + a1) * x + a0
}

/// Computes a polynomial using Horner's method.
///
/// Coefficients are ordered [a₀, a₁, a₂, ...] for a₀ + a₁x + a₂x² + ...
pub(crate) fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    let Some(&last) = coeffs.last() else {
        return 0.0;
    };

    let mut result = last;
    for &coeff in coeffs.iter().rev().skip(1) {
        result = result * x + coeff;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn degrees_wrap_into_canonical_ranges() {
        assert!(close(normalize_degrees_360(370.0), 10.0));
        assert!(close(normalize_degrees_360(-10.0), 350.0));
        assert_eq!(normalize_degrees_360(0.0), 0.0);
        assert!(close(normalize_degrees_180_signed(190.0), -170.0));
        assert!(close(normalize_degrees_180_signed(-190.0), 170.0));
        assert!(close(normalize_degrees_180_signed(90.0), 90.0));
        assert!(close(normalize_degrees_180(200.0), 20.0));
        assert!(close(normalize_degrees_180(-20.0), 160.0));
    }

    #[test]
    fn unit_interval_keeps_fraction() {
        assert_eq!(normalize_unit_interval(1.25), 0.25);
        assert_eq!(normalize_unit_interval(-0.25), 0.75);
    }

    #[test]
    fn polynomial_matches_expanded_form() {
        let x = 1.5;
        assert_eq!(polynomial(&[1.0, 2.0, 3.0], x), 1.0 + 2.0 * x + 3.0 * x * x);
        assert_eq!(polynomial(&[], x), 0.0);
        assert_eq!(eval_cubic(1.0, 2.0, 3.0, 4.0, 2.0), 8.0 + 8.0 + 6.0 + 4.0);
    }
}
