// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random triangle generation.
//!
//! Angles are sampled first so the 180° sum can be enforced exactly, then
//! one side is drawn at random and the other two follow from the Law of
//! Sines. Shape classes that can produce invalid candidates are handled by
//! bounded rejection sampling with a fixed fallback, so generation always
//! terminates.

use rand::Rng;

use crate::common::round_dp;
use crate::{ShapeClass, Triangle};

/// How many candidate angle triples to draw before falling back.
const MAX_ATTEMPTS: u32 = 30;

/// Angles used when every sampling attempt was rejected.
const FALLBACK_ANGLES: (f64, f64, f64) = (50.0, 60.0, 70.0);

/// Decimal places kept on all six measurements.
const ROUND_DIGITS: i32 = 6;

/// Generate a random triangle of the given shape class.
///
/// `scale` multiplies the base side draw of 4–12 length units, so `1.0`
/// yields classroom-sized numbers. Uses the thread-local generator; see
/// [`generate_with`] for a caller-supplied one.
///
/// This never fails: if 30 candidate angle draws are all rejected, the
/// fixed triple 50°/60°/70° is used. That fallback is acute, so in the
/// (astronomically unlikely) event it triggers for a `Right` or `Obtuse`
/// request, the result silently misses the requested class. It is always a
/// valid triangle.
///
/// # Examples
///
/// ```
/// use triangulo::{generate, ShapeClass};
///
/// let tri = generate(ShapeClass::Obtuse, 1.0);
/// assert!(tri.is_valid());
/// assert!(tri.largest_angle() > 90.0);
/// ```
pub fn generate(shape: ShapeClass, scale: f64) -> Triangle {
    generate_with(&mut rand::rng(), shape, scale)
}

/// Generate a random triangle using the supplied generator.
///
/// Same semantics as [`generate`]; seed the [`Rng`] for reproducible
/// drills.
pub fn generate_with<R: Rng>(rng: &mut R, shape: ShapeClass, scale: f64) -> Triangle {
    loop {
        let (angle_a, angle_b, angle_c) = sample_angles(rng, shape);

        let a = rng.random_range(4.0..12.0) * scale;
        let sin_a = angle_a.to_radians().sin();
        if sin_a == 0.0 {
            // Degenerate draw; unreachable for the ranges above, but a zero
            // sine must not leak into the Law of Sines division.
            continue;
        }
        let k = a / sin_a;
        let b = k * angle_b.to_radians().sin();
        let c = k * angle_c.to_radians().sin();

        return Triangle::new(
            round_dp(a, ROUND_DIGITS),
            round_dp(b, ROUND_DIGITS),
            round_dp(c, ROUND_DIGITS),
            round_dp(angle_a, ROUND_DIGITS),
            round_dp(angle_b, ROUND_DIGITS),
            round_dp(angle_c, ROUND_DIGITS),
        );
    }
}

/// Draw an angle triple for `shape`, retrying rejected candidates up to
/// [`MAX_ATTEMPTS`] times before yielding [`FALLBACK_ANGLES`].
fn sample_angles<R: Rng>(rng: &mut R, shape: ShapeClass) -> (f64, f64, f64) {
    for _ in 0..MAX_ATTEMPTS {
        if let Some(angles) = draw_candidate(rng, shape) {
            return angles;
        }
    }
    FALLBACK_ANGLES
}

/// One candidate angle triple, or `None` if the draw violated the shape's
/// validity rule.
fn draw_candidate<R: Rng>(rng: &mut R, shape: ShapeClass) -> Option<(f64, f64, f64)> {
    match shape {
        ShapeClass::Right => {
            let a = rng.random_range(20.0..70.0);
            Some((a, 90.0, 90.0 - a))
        }
        ShapeClass::Acute => {
            let a = rng.random_range(20.0..70.0);
            let b = rng.random_range(20.0..80.0);
            let c = 180.0 - a - b;
            (c > 0.0 && c < 90.0).then_some((a, b, c))
        }
        ShapeClass::Obtuse => {
            let a = rng.random_range(91.0..140.0);
            let b = rng.random_range(10.0..60.0);
            let c = 180.0 - a - b;
            (c > 0.0).then_some((a, b, c))
        }
        ShapeClass::Any => {
            let a = rng.random_range(20.0..100.0);
            let b = rng.random_range(20.0..120.0);
            let c = 180.0 - a - b;
            (c > 5.0).then_some((a, b, c))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    const SAMPLES: usize = 10_000;

    // Rounding to six decimals leaves up to 5e-7 of absolute noise on each
    // stored value, so the Law of Sines is checked with 1e-6 relative
    // tolerance plus an absolute allowance for that quantization.
    fn law_of_sines_holds(tri: &Triangle) -> bool {
        let k = tri.a / tri.angle_a.to_radians().sin();
        [(tri.b, tri.angle_b), (tri.c, tri.angle_c)]
            .into_iter()
            .all(|(side, angle)| {
                let predicted = k * angle.to_radians().sin();
                (side - predicted).abs() < 1e-5 + 1e-6 * side
            })
    }

    #[test]
    fn invariants_hold_for_every_shape() {
        let mut rng = StdRng::seed_from_u64(0x7421);
        for shape in ShapeClass::ALL {
            for _ in 0..SAMPLES {
                let tri = generate_with(&mut rng, shape, 1.0);
                assert!(tri.is_valid(), "invalid {shape} triangle: {tri}");
                assert!(
                    (tri.angle_sum() - 180.0).abs() < 1e-3,
                    "angle sum for {tri}"
                );
                assert!(law_of_sines_holds(&tri), "sine ratios for {tri}");
                assert!(tri.a >= 4.0 && tri.a <= 12.0, "base side range for {tri}");
            }
        }
    }

    #[test]
    fn shape_conformance() {
        let mut rng = StdRng::seed_from_u64(0x7422);
        for _ in 0..SAMPLES {
            let tri = generate_with(&mut rng, ShapeClass::Right, 1.0);
            // The right angle is pinned, not sampled, so it survives
            // rounding exactly.
            assert_eq!(tri.angle_b, 90.0);

            let tri = generate_with(&mut rng, ShapeClass::Acute, 1.0);
            assert!(tri.angles().iter().all(|&angle| angle < 90.0), "{tri}");

            let tri = generate_with(&mut rng, ShapeClass::Obtuse, 1.0);
            let over: Vec<f64> = tri
                .angles()
                .into_iter()
                .filter(|&angle| angle > 90.0)
                .collect();
            assert_eq!(over.len(), 1, "{tri}");
        }
    }

    #[test]
    fn scale_multiplies_the_base_side() {
        let mut rng = StdRng::seed_from_u64(0x7423);
        for _ in 0..1000 {
            let tri = generate_with(&mut rng, ShapeClass::Any, 10.0);
            assert!(tri.a >= 40.0 && tri.a <= 120.0, "{tri}");
            assert!(tri.is_valid(), "{tri}");
        }
    }

    /// An rng that always yields the bottom of every requested range.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn fallback_after_exhausted_attempts() {
        // With every draw pinned low, an acute candidate is always
        // A=20, B=20, C=140, which the C < 90 rule rejects; after 30
        // attempts the fixed fallback triple is used.
        let tri = generate_with(&mut ZeroRng, ShapeClass::Acute, 1.0);
        assert_eq!(tri.angles(), [50.0, 60.0, 70.0]);
        assert_eq!(tri.a, 4.0);
        assert!(tri.is_valid());
    }

    #[test]
    fn rejection_rules_on_canned_draws() {
        // Right never rejects, even on the degenerate low draw.
        assert!(draw_candidate(&mut ZeroRng, ShapeClass::Right).is_some());
        assert!(draw_candidate(&mut ZeroRng, ShapeClass::Acute).is_none());
        // Obtuse low draw is A=91, B=10, C=79: valid.
        assert!(draw_candidate(&mut ZeroRng, ShapeClass::Obtuse).is_some());
        // Any low draw is A=20, B=20, C=140: valid.
        assert!(draw_candidate(&mut ZeroRng, ShapeClass::Any).is_some());
    }
}
