// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys naming the six measurements of a triangle.

use core::fmt;

/// One of the six measurements of a triangle.
///
/// Sides are written in lower case and angles in upper case, with each side
/// opposite the angle of the same letter: side `a` faces angle `A`, and so
/// on. The drill machinery treats these as opaque keys; the numeric values
/// live on [`Triangle`].
///
/// [`Triangle`]: crate::Triangle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    /// Side `a`, opposite angle `A`.
    SideA,
    /// Side `b`, opposite angle `B`.
    SideB,
    /// Side `c`, opposite angle `C`.
    SideC,
    /// Angle `A`, in degrees.
    AngleA,
    /// Angle `B`, in degrees.
    AngleB,
    /// Angle `C`, in degrees.
    AngleC,
}

impl Measure {
    /// All six measurements, sides first.
    pub const ALL: [Measure; 6] = [
        Measure::SideA,
        Measure::SideB,
        Measure::SideC,
        Measure::AngleA,
        Measure::AngleB,
        Measure::AngleC,
    ];

    /// The conventional one-letter name: `a`, `b`, `c` for sides and
    /// `A`, `B`, `C` for angles.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Measure::SideA => "a",
            Measure::SideB => "b",
            Measure::SideC => "c",
            Measure::AngleA => "A",
            Measure::AngleB => "B",
            Measure::AngleC => "C",
        }
    }

    /// `true` if this measurement is a side length.
    #[inline]
    pub const fn is_side(self) -> bool {
        matches!(self, Measure::SideA | Measure::SideB | Measure::SideC)
    }

    /// `true` if this measurement is an angle.
    #[inline]
    pub const fn is_angle(self) -> bool {
        !self.is_side()
    }

    /// The measurement facing this one: a side maps to the angle it is
    /// opposite, and vice versa.
    #[inline]
    pub const fn opposite(self) -> Measure {
        match self {
            Measure::SideA => Measure::AngleA,
            Measure::SideB => Measure::AngleB,
            Measure::SideC => Measure::AngleC,
            Measure::AngleA => Measure::SideA,
            Measure::AngleB => Measure::SideB,
            Measure::AngleC => Measure::SideC,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let labels: Vec<_> = Measure::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["a", "b", "c", "A", "B", "C"]);
    }

    #[test]
    fn sides_and_angles() {
        for measure in Measure::ALL {
            assert_ne!(measure.is_side(), measure.is_angle());
            assert_ne!(measure.opposite(), measure);
            assert_eq!(measure.opposite().opposite(), measure);
            assert_eq!(measure.is_side(), measure.opposite().is_angle());
        }
    }
}
