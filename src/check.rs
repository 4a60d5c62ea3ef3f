// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grading learner-submitted values against the ground truth.

use arrayvec::ArrayVec;

use crate::{Measure, Triangle};

/// Absolute tolerance for a submission to count as correct.
///
/// Applied uniformly to side lengths and angle degrees, as the drills have
/// always done; whether differently scaled quantities deserve different
/// thresholds is deliberately not second-guessed here.
pub const TOLERANCE: f64 = 0.1;

/// The outcome of grading one submitted measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Nothing was submitted for this measurement.
    Missing,
    /// The submission did not parse as a real number.
    NotANumber,
    /// Within [`TOLERANCE`] of the stored value.
    Correct {
        /// Distance from the stored value.
        delta: f64,
    },
    /// Outside [`TOLERANCE`].
    Incorrect {
        /// Distance from the stored value.
        delta: f64,
        /// The stored value, for display alongside the failure.
        expected: f64,
    },
}

impl Verdict {
    /// Is this a passing verdict?
    #[inline]
    pub const fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}

/// Per-measurement verdicts for one grading pass.
///
/// Produced fresh by every [`check`] call and never retained by the
/// engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    entries: ArrayVec<(Measure, Verdict), 6>,
}

impl Report {
    /// The graded measurements in canonical key order.
    #[inline]
    pub fn entries(&self) -> &[(Measure, Verdict)] {
        &self.entries
    }

    /// The verdict for `measure`, or `None` if it was not graded.
    pub fn verdict(&self, measure: Measure) -> Option<Verdict> {
        self.entries
            .iter()
            .find(|(key, _)| *key == measure)
            .map(|(_, verdict)| *verdict)
    }

    /// How many measurements passed.
    pub fn correct_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, verdict)| verdict.is_correct())
            .count()
    }

    /// Did every graded measurement pass?
    ///
    /// Vacuously `true` when nothing was graded (a reveal-all drill has
    /// nothing to get wrong).
    pub fn all_correct(&self) -> bool {
        self.entries.iter().all(|(_, verdict)| verdict.is_correct())
    }
}

/// Grade submissions for the hidden measurements of `triangle`.
///
/// Every key in `unknown` receives a verdict: absent or blank submissions
/// are [`Verdict::Missing`], unparseable ones [`Verdict::NotANumber`], and
/// numeric ones compare against the stored value with the absolute
/// [`TOLERANCE`]. One bad field never aborts grading of the others.
/// Submissions are trimmed of surrounding whitespace before parsing;
/// duplicate keys in `unknown` are graded once, in canonical key order.
///
/// # Examples
///
/// ```
/// use triangulo::{check, Measure, Triangle, Verdict};
///
/// let tri = Triangle::new(5.0, 6.0, 7.0, 50.0, 60.0, 70.0);
/// let report = check(
///     &tri,
///     &[Measure::SideC, Measure::AngleA],
///     &[(Measure::SideC, "7.04"), (Measure::AngleA, "fifty")],
/// );
/// assert!(matches!(report.verdict(Measure::SideC), Some(Verdict::Correct { .. })));
/// assert_eq!(report.verdict(Measure::AngleA), Some(Verdict::NotANumber));
/// assert!(!report.all_correct());
/// ```
pub fn check(triangle: &Triangle, unknown: &[Measure], submissions: &[(Measure, &str)]) -> Report {
    let mut entries = ArrayVec::new();
    for measure in Measure::ALL {
        if !unknown.contains(&measure) {
            continue;
        }
        let text = submissions
            .iter()
            .find(|(key, _)| *key == measure)
            .map(|(_, text)| text.trim());
        entries.push((measure, grade(triangle.value(measure), text)));
    }
    Report { entries }
}

fn grade(truth: f64, text: Option<&str>) -> Verdict {
    let text = match text {
        None | Some("") => return Verdict::Missing,
        Some(text) => text,
    };
    match text.parse::<f64>() {
        Err(_) => Verdict::NotANumber,
        Ok(value) => {
            let delta = (value - truth).abs();
            if delta < TOLERANCE {
                Verdict::Correct { delta }
            } else {
                Verdict::Incorrect {
                    delta,
                    expected: truth,
                }
            }
        }
    }
}
