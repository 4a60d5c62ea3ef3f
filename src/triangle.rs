// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A triangle described by its six measurements.

use core::fmt;

use crate::{Measure, ShapeClass};

/// Tolerance for the `A + B + C == 180` invariant, in degrees.
const ANGLE_SUM_TOLERANCE: f64 = 1e-3;

/// How far an angle may be from 90° and still classify as right, in degrees.
const RIGHT_ANGLE_TOLERANCE: f64 = 1e-3;

/// Relative tolerance for the Law of Sines consistency check.
const SINE_RATIO_TOLERANCE: f64 = 1e-6;

/// Absolute slack for the Law of Sines check. Measurements are stored at
/// six decimal places, so each carries up to 5e-7 of quantization noise;
/// a small side would fail any purely relative comparison.
const SINE_RATIO_SLACK: f64 = 1e-5;

/// A triangle described by its three side lengths and three angles.
///
/// Side `a` is opposite angle `A` (stored as `angle_a`), and likewise for
/// the other two pairs. Angles are in degrees and sum to 180° within
/// floating tolerance; sides are consistent with the angles via the Law of
/// Sines, which is how [`generate`] derives them.
///
/// A `Triangle` is an immutable value: drills replace it wholesale rather
/// than mutating individual measurements.
///
/// [`generate`]: crate::generate
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// Side `a`, opposite `angle_a`.
    pub a: f64,
    /// Side `b`, opposite `angle_b`.
    pub b: f64,
    /// Side `c`, opposite `angle_c`.
    pub c: f64,
    /// Angle `A` in degrees.
    pub angle_a: f64,
    /// Angle `B` in degrees.
    pub angle_b: f64,
    /// Angle `C` in degrees.
    pub angle_c: f64,
}

impl Triangle {
    /// A new `Triangle` from three sides and three angles in degrees.
    ///
    /// The caller is responsible for the side/angle correspondence; use
    /// [`is_valid`](Self::is_valid) to verify a handcrafted triangle.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, angle_a: f64, angle_b: f64, angle_c: f64) -> Self {
        Triangle {
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c,
        }
    }

    /// The stored value of one measurement.
    #[inline]
    pub fn value(&self, measure: Measure) -> f64 {
        match measure {
            Measure::SideA => self.a,
            Measure::SideB => self.b,
            Measure::SideC => self.c,
            Measure::AngleA => self.angle_a,
            Measure::AngleB => self.angle_b,
            Measure::AngleC => self.angle_c,
        }
    }

    /// The three side lengths `[a, b, c]`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// The three angles `[A, B, C]` in degrees.
    #[inline]
    pub fn angles(&self) -> [f64; 3] {
        [self.angle_a, self.angle_b, self.angle_c]
    }

    /// The sum of the three angles, in degrees.
    #[inline]
    pub fn angle_sum(&self) -> f64 {
        self.angle_a + self.angle_b + self.angle_c
    }

    /// The sum of the three side lengths.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// The largest of the three angles, in degrees.
    #[inline]
    pub fn largest_angle(&self) -> f64 {
        self.angle_a.max(self.angle_b).max(self.angle_c)
    }

    /// Classify by the largest angle: right within 1e-3° of 90°, obtuse
    /// above, acute below.
    ///
    /// Never returns [`ShapeClass::Any`].
    pub fn classify(&self) -> ShapeClass {
        let largest = self.largest_angle();
        if (largest - 90.0).abs() < RIGHT_ANGLE_TOLERANCE {
            ShapeClass::Right
        } else if largest > 90.0 {
            ShapeClass::Obtuse
        } else {
            ShapeClass::Acute
        }
    }

    /// Whether the six measurements describe a consistent triangle.
    ///
    /// Checks positive sides, the triangle inequality, the 180° angle sum
    /// (within 1e-3°), and that `b` and `c` agree with the Law of Sines
    /// prediction from the `a / sin(A)` ratio, within 1e-6 relative plus a
    /// small absolute slack for the six-decimal storage precision.
    pub fn is_valid(&self) -> bool {
        let positive = self.sides().iter().all(|&side| side > 0.0);
        let inequality = self.a + self.b > self.c
            && self.b + self.c > self.a
            && self.c + self.a > self.b;
        let sums = (self.angle_sum() - 180.0).abs() < ANGLE_SUM_TOLERANCE;
        positive && inequality && sums && self.sine_ratios_agree()
    }

    fn sine_ratios_agree(&self) -> bool {
        let sin_a = self.angle_a.to_radians().sin();
        if sin_a == 0.0 {
            return false;
        }
        let k = self.a / sin_a;
        if !k.is_finite() || k <= 0.0 {
            return false;
        }
        [(self.b, self.angle_b), (self.c, self.angle_c)]
            .into_iter()
            .all(|(side, angle)| {
                let predicted = k * angle.to_radians().sin();
                (side - predicted).abs() < SINE_RATIO_SLACK + SINE_RATIO_TOLERANCE * side.abs()
            })
    }

    /// Is every measurement finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.sides().iter().all(|v| v.is_finite())
            && self.angles().iter().all(|v| v.is_finite())
    }

    /// Is any measurement NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.sides().iter().any(|v| v.is_nan()) || self.angles().iter().any(|v| v.is_nan())
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={} b={} c={} A={}° B={}° C={}°",
            self.a, self.b, self.c, self.angle_a, self.angle_b, self.angle_c
        )
    }
}
