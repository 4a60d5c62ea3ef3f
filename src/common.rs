// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations.
//!
//! Rounding and the classic triangle-solving rules. The solving helpers are
//! not used by the drill engine itself (finding the hidden values is the
//! learner's job); they exist for front ends that want to render worked
//! hints, and for tests.

/// Rounds `x` to `digits` decimal places.
///
/// # Examples
///
/// ```
/// use triangulo::common::round_dp;
///
/// assert_eq!(round_dp(1.23456789, 3), 1.235);
/// assert_eq!(round_dp(-0.5, 0), -1.0);
/// ```
#[inline]
pub fn round_dp(x: f64, digits: i32) -> f64 {
    let pow = 10f64.powi(digits);
    (x * pow).round() / pow
}

/// Law of Cosines: the side opposite `included` (degrees), given the two
/// adjacent sides (the SAS configuration).
pub fn side_from_sas(a: f64, b: f64, included: f64) -> f64 {
    let gamma = included.to_radians();
    (a * a + b * b - 2.0 * a * b * gamma.cos()).sqrt()
}

/// Law of Cosines: the angle opposite `c` in degrees, given all three
/// sides (the SSS configuration).
///
/// The cosine is clamped to `[-1, 1]`, so side triples that only just
/// violate the triangle inequality resolve to 0° or 180° instead of NaN.
/// Returns `None` when `a` or `b` is zero.
pub fn angle_from_sss(a: f64, b: f64, c: f64) -> Option<f64> {
    let den = 2.0 * a * b;
    if den == 0.0 {
        return None;
    }
    let cos = ((a * a + b * b - c * c) / den).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Law of Sines: the angle opposite `b` in degrees, given a known
/// side/angle pair `(a, alpha)` (the SSA configuration).
///
/// The sine ratio is clamped to `[-1, 1]`; an out-of-range ratio means no
/// such triangle exists and resolves to ±90°. Returns `None` when
/// `sin(alpha)` is zero. SSA is ambiguous: this returns the acute
/// solution, and `180° - result` is the other candidate.
pub fn angle_from_ssa(a: f64, alpha: f64, b: f64) -> Option<f64> {
    let sin_alpha = alpha.to_radians().sin();
    if sin_alpha == 0.0 {
        return None;
    }
    let ratio = (b * sin_alpha / a).clamp(-1.0, 1.0);
    Some(ratio.asin().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    #[test]
    fn rounding() {
        assert_eq!(round_dp(5.0000004, 6), 5.0);
        assert_eq!(round_dp(2.5, 0), 3.0);
        assert_eq!(round_dp(123.456, 1), 123.5);
        assert_eq!(round_dp(123.456, -1), 120.0);
    }

    #[test]
    fn sas_side() {
        // 90° included angle reduces to Pythagoras.
        assert_approx_eq(side_from_sas(3.0, 4.0, 90.0), 5.0);
        // 60° included angle on an equilateral triangle.
        assert_approx_eq(side_from_sas(1.0, 1.0, 60.0), 1.0);
    }

    #[test]
    fn sss_angle() {
        assert_approx_eq(angle_from_sss(3.0, 4.0, 5.0).unwrap(), 90.0);
        assert_approx_eq(angle_from_sss(1.0, 1.0, 1.0).unwrap(), 60.0);
        // Degenerate collinear sides clamp instead of producing NaN.
        assert_approx_eq(angle_from_sss(1.0, 2.0, 3.0).unwrap(), 180.0);
        assert_eq!(angle_from_sss(0.0, 2.0, 3.0), None);
    }

    #[test]
    fn ssa_angle() {
        // Isoceles: equal sides see equal angles.
        assert_approx_eq(angle_from_ssa(1.0, 40.0, 1.0).unwrap(), 40.0);
        // 30-60-90 sides 1 : sqrt(3) : 2.
        assert_approx_eq(angle_from_ssa(1.0, 30.0, 3f64.sqrt()).unwrap(), 60.0);
        assert_eq!(angle_from_ssa(1.0, 0.0, 1.0), None);
        // Impossible configuration clamps to 90°.
        assert_approx_eq(angle_from_ssa(1.0, 80.0, 5.0).unwrap(), 90.0);
    }
}
