// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape classes constraining triangle generation.

use core::fmt;

use crate::Triangle;

/// A constraint on the shape of a generated triangle, by its largest angle.
///
/// Passed to [`generate`] to steer sampling, and recoverable from a
/// finished triangle with [`Triangle::classify`].
///
/// [`generate`]: crate::generate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeClass {
    /// No constraint beyond being a valid triangle.
    #[default]
    Any,
    /// One angle is exactly 90°.
    Right,
    /// All three angles are below 90°.
    Acute,
    /// One angle is above 90°.
    Obtuse,
}

impl ShapeClass {
    /// All shape classes, unconstrained first.
    pub const ALL: [ShapeClass; 4] = [
        ShapeClass::Any,
        ShapeClass::Right,
        ShapeClass::Acute,
        ShapeClass::Obtuse,
    ];

    /// A short lower-case name, suitable for menus and CLI flags.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            ShapeClass::Any => "any",
            ShapeClass::Right => "right",
            ShapeClass::Acute => "acute",
            ShapeClass::Obtuse => "obtuse",
        }
    }

    /// Does `triangle` belong to this class?
    ///
    /// [`ShapeClass::Any`] matches every triangle; the other classes compare
    /// against [`Triangle::classify`].
    pub fn matches(self, triangle: &Triangle) -> bool {
        match self {
            ShapeClass::Any => true,
            _ => triangle.classify() == self,
        }
    }
}

impl fmt::Display for ShapeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching() {
        let right = Triangle::new(3.0, 4.0, 5.0, 36.87, 53.13, 90.0);
        let acute = Triangle::new(5.0, 6.0, 7.0, 50.0, 60.0, 70.0);
        let obtuse = Triangle::new(10.0, 4.0, 7.0, 120.0, 25.0, 35.0);

        for tri in [&right, &acute, &obtuse] {
            assert!(ShapeClass::Any.matches(tri));
        }
        assert!(ShapeClass::Right.matches(&right));
        assert!(!ShapeClass::Right.matches(&acute));
        assert!(ShapeClass::Acute.matches(&acute));
        assert!(!ShapeClass::Acute.matches(&obtuse));
        assert!(ShapeClass::Obtuse.matches(&obtuse));
        assert!(!ShapeClass::Obtuse.matches(&right));
    }

    #[test]
    fn labels() {
        assert_eq!(ShapeClass::Any.to_string(), "any");
        assert_eq!(ShapeClass::Obtuse.to_string(), "obtuse");
    }
}
