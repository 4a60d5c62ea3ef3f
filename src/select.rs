// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedagogical modes and the known/unknown measurement partition.

use core::fmt;

use arrayvec::ArrayVec;

use crate::{Measure, Triangle};

/// A preset choosing which measurements a drill reveals.
///
/// The catalog is ordered; [`index`](Self::index) and
/// [`from_index`](Self::from_index) convert to and from the stable
/// position, which UIs typically use for menu wiring.
///
/// Selection is a pure visibility filter: revealed values are echoed from
/// the triangle, and nothing is ever solved on the learner's behalf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Reveal sides `a` and `b` (the SAS drill; the included angle stays
    /// hidden along with the rest).
    TwoSides,
    /// Reveal sides `a`, `b` and angle `A` (the ASA/AAS drill).
    #[default]
    TwoSidesOneAngle,
    /// Reveal side `a` and angles `B`, `C` (the AAS drill, solved with the
    /// Law of Sines).
    OneSideTwoAngles,
    /// Reveal all three sides (the SSS drill).
    ThreeSides,
    /// Reveal everything, for quick self-checked practice.
    ShowAll,
}

impl Mode {
    /// The full catalog, in menu order.
    pub const ALL: [Mode; 5] = [
        Mode::TwoSides,
        Mode::TwoSidesOneAngle,
        Mode::OneSideTwoAngles,
        Mode::ThreeSides,
        Mode::ShowAll,
    ];

    /// The stable position of this mode in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Mode::TwoSides => 0,
            Mode::TwoSidesOneAngle => 1,
            Mode::OneSideTwoAngles => 2,
            Mode::ThreeSides => 3,
            Mode::ShowAll => 4,
        }
    }

    /// The mode at `index`, or `None` past the end of the catalog.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Mode> {
        match index {
            0 => Some(Mode::TwoSides),
            1 => Some(Mode::TwoSidesOneAngle),
            2 => Some(Mode::OneSideTwoAngles),
            3 => Some(Mode::ThreeSides),
            4 => Some(Mode::ShowAll),
            _ => None,
        }
    }

    /// The conventional congruence shorthand for the preset.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Mode::TwoSides => "SAS",
            Mode::TwoSidesOneAngle => "ASA/AAS",
            Mode::OneSideTwoAngles => "AAS",
            Mode::ThreeSides => "SSS",
            Mode::ShowAll => "reveal all",
        }
    }

    /// The measurements this mode reveals.
    #[inline]
    pub const fn known_keys(self) -> &'static [Measure] {
        match self {
            Mode::TwoSides => &[Measure::SideA, Measure::SideB],
            Mode::TwoSidesOneAngle => &[Measure::SideA, Measure::SideB, Measure::AngleA],
            Mode::OneSideTwoAngles => &[Measure::SideA, Measure::AngleB, Measure::AngleC],
            Mode::ThreeSides => &[Measure::SideA, Measure::SideB, Measure::SideC],
            Mode::ShowAll => &Measure::ALL,
        }
    }

    /// Does this mode reveal `measure`?
    #[inline]
    pub fn reveals(self, measure: Measure) -> bool {
        self.known_keys().contains(&measure)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The known/unknown split of a triangle's measurements under a [`Mode`].
///
/// The two sets are disjoint and together cover all six measurements.
/// Known entries carry the revealed value; unknown keys are what the
/// learner is asked to find.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Revealed measurements with their values, in canonical key order.
    pub known: ArrayVec<(Measure, f64), 6>,
    /// Hidden measurements, in canonical key order.
    pub unknown: ArrayVec<Measure, 6>,
}

impl Partition {
    /// The revealed value of `measure`, or `None` if it is hidden.
    pub fn known_value(&self, measure: Measure) -> Option<f64> {
        self.known
            .iter()
            .find(|(key, _)| *key == measure)
            .map(|(_, value)| *value)
    }

    /// Is `measure` revealed?
    #[inline]
    pub fn is_known(&self, measure: Measure) -> bool {
        self.known_value(measure).is_some()
    }
}

/// Split `triangle`'s measurements into known and unknown sets per `mode`.
///
/// Pure and deterministic: the same triangle and mode always produce the
/// same partition, and revealed values are the stored ones, never
/// recomputed.
///
/// # Examples
///
/// ```
/// use triangulo::{select, Measure, Mode, Triangle};
///
/// let tri = Triangle::new(5.0, 6.0, 7.0, 50.0, 60.0, 70.0);
/// let partition = select(&tri, Mode::TwoSides);
/// assert_eq!(partition.known_value(Measure::SideB), Some(6.0));
/// assert!(!partition.is_known(Measure::SideC));
/// assert_eq!(partition.unknown.len(), 4);
/// ```
pub fn select(triangle: &Triangle, mode: Mode) -> Partition {
    let mut known = ArrayVec::new();
    let mut unknown = ArrayVec::new();
    for measure in Measure::ALL {
        if mode.reveals(measure) {
            known.push((measure, triangle.value(measure)));
        } else {
            unknown.push(measure);
        }
    }
    Partition { known, unknown }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_triangle() -> Triangle {
        Triangle::new(5.0, 6.0, 7.0, 50.0, 60.0, 70.0)
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let tri = sample_triangle();
        for mode in Mode::ALL {
            let partition = select(&tri, mode);
            assert_eq!(
                partition.known.len() + partition.unknown.len(),
                6,
                "union for {mode}"
            );
            for measure in Measure::ALL {
                let known = partition.is_known(measure);
                let hidden = partition.unknown.contains(&measure);
                assert_ne!(known, hidden, "{measure} under {mode}");
            }
        }
    }

    #[test]
    fn known_values_echo_the_triangle() {
        let tri = sample_triangle();
        for mode in Mode::ALL {
            let partition = select(&tri, mode);
            for &(measure, value) in &partition.known {
                assert_eq!(value, tri.value(measure), "{measure} under {mode}");
            }
        }
    }

    #[test]
    fn catalog_table() {
        let tri = sample_triangle();

        let partition = select(&tri, Mode::TwoSides);
        let known: Vec<_> = partition.known.iter().map(|(m, _)| *m).collect();
        assert_eq!(known, [Measure::SideA, Measure::SideB]);
        assert_eq!(
            partition.unknown.as_slice(),
            [
                Measure::SideC,
                Measure::AngleA,
                Measure::AngleB,
                Measure::AngleC
            ]
        );

        let partition = select(&tri, Mode::TwoSidesOneAngle);
        assert_eq!(
            partition.unknown.as_slice(),
            [Measure::SideC, Measure::AngleB, Measure::AngleC]
        );

        let partition = select(&tri, Mode::OneSideTwoAngles);
        assert_eq!(
            partition.unknown.as_slice(),
            [Measure::SideB, Measure::SideC, Measure::AngleA]
        );

        let partition = select(&tri, Mode::ThreeSides);
        assert_eq!(
            partition.unknown.as_slice(),
            [Measure::AngleA, Measure::AngleB, Measure::AngleC]
        );

        let partition = select(&tri, Mode::ShowAll);
        assert!(partition.unknown.is_empty());
        assert_eq!(partition.known.len(), 6);
    }

    #[test]
    fn index_round_trip() {
        for (position, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(mode.index(), position);
            assert_eq!(Mode::from_index(position), Some(*mode));
        }
        assert_eq!(Mode::from_index(5), None);
    }
}
