// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing a triangle's vertices in a drawing area.
//!
//! The placement is a pure function of the three side lengths and the
//! frame; stored angles are never consulted, so any side triple satisfying
//! the triangle inequality lays out the same way regardless of how it was
//! produced. Vertices `B` and `C` sit on a horizontal baseline near the
//! bottom of the frame and `A` is reconstructed above it by intersecting
//! the two circles of radii `c` (around `B`) and `b` (around `C`).

use crate::{Point, Triangle};

/// Fraction of the usable area actually occupied, leaving 10% headroom.
const FIT_HEADROOM: f64 = 0.9;

/// Minimum apex height of the fallback placement, in pixels.
const FALLBACK_MIN_HEIGHT: f64 = 40.0;

/// A rectangular drawing area with a uniform margin, in pixels.
///
/// `x` grows to the right and `y` grows downward, the usual canvas
/// convention; the layout baseline hugs the bottom margin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Margin applied on all four edges.
    pub margin: f64,
}

impl Frame {
    /// A new `Frame` from total extent and uniform margin.
    #[inline]
    pub const fn new(width: f64, height: f64, margin: f64) -> Self {
        Frame {
            width,
            height,
            margin,
        }
    }

    /// Width remaining inside the margins.
    #[inline]
    pub fn usable_width(self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height remaining inside the margins.
    #[inline]
    pub fn usable_height(self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

/// The three vertex positions of a laid-out triangle.
///
/// Vertex `a` faces side `a` (the baseline), so `b` and `c` are the
/// baseline endpoints: `|b - c|` is side `a` scaled, `|a - c|` side `b`,
/// and `|a - b|` side `c`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexLayout {
    /// Vertex `A`, the apex above the baseline.
    pub a: Point,
    /// Vertex `B`, the left end of the baseline.
    pub b: Point,
    /// Vertex `C`, the right end of the baseline.
    pub c: Point,
}

impl VertexLayout {
    /// The vertices in `A`, `B`, `C` order.
    #[inline]
    pub fn vertices(self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Are all three vertices finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// The uniform scale from length units to pixels that fits a triangle
/// with sides `a`, `b`, `c` inside `frame`.
///
/// The longest side is fitted against the usable extent with 10%
/// headroom. A degenerate zero-length triple maps to a scale of 1.0
/// rather than dividing by zero.
pub fn fit_scale(a: f64, b: f64, c: f64, frame: Frame) -> f64 {
    let max_side = a.max(b).max(c);
    if max_side == 0.0 {
        return 1.0;
    }
    (frame.usable_width() / max_side).min(frame.usable_height() / max_side) * FIT_HEADROOM
}

/// Place a triangle with sides `a`, `b`, `c` inside `frame`.
///
/// The baseline `BC` (side `a`) is centered horizontally and sits on the
/// bottom margin; `A` is found by circle-circle intersection, with the
/// discriminant clamped to zero so near-degenerate triples land on the
/// baseline instead of producing NaN. If the closed form still yields a
/// non-finite position, `A` falls back to a fixed spot above the baseline
/// midpoint, so the result is always drawable.
///
/// # Examples
///
/// ```
/// use triangulo::{layout, Frame};
///
/// let frame = Frame::new(520.0, 420.0, 40.0);
/// let placed = layout(5.0, 6.0, 7.0, frame);
/// let scale = triangulo::fit_scale(5.0, 6.0, 7.0, frame);
/// assert!((placed.b.distance(placed.c) - 5.0 * scale).abs() < 1.0);
/// ```
pub fn layout(a: f64, b: f64, c: f64, frame: Frame) -> VertexLayout {
    let scale = fit_scale(a, b, c, frame);
    let a_len = a * scale;
    let b_len = b * scale;
    let c_len = c * scale;

    let bx = (frame.width - a_len) / 2.0;
    let by = frame.height - frame.margin;
    let vertex_b = Point::new(bx, by);
    let vertex_c = Point::new(bx + a_len, by);

    // Distance between the circle centers; kept off zero so the projection
    // below stays defined for a collapsed baseline.
    let d = if a_len == 0.0 { 1e-6 } else { a_len };

    // Intersect the circle of radius c_len around B with the circle of
    // radius b_len around C. x_proj is the foot of A on the baseline,
    // measured from B.
    let x_proj = (c_len * c_len - b_len * b_len + d * d) / (2.0 * d);
    // Round-off can push the discriminant slightly negative for
    // near-degenerate triples.
    let height = (c_len * c_len - x_proj * x_proj).max(0.0).sqrt();

    let mut vertex_a = Point::new(bx + x_proj, by - height);
    if !vertex_a.is_finite() {
        vertex_a = Point::new(bx + d / 2.0, by - (b_len.max(c_len) / 2.0).max(FALLBACK_MIN_HEIGHT));
    }

    VertexLayout {
        a: vertex_a,
        b: vertex_b,
        c: vertex_c,
    }
}

/// [`layout`] for an existing [`Triangle`].
#[inline]
pub fn layout_triangle(triangle: &Triangle, frame: Frame) -> VertexLayout {
    layout(triangle.a, triangle.b, triangle.c, frame)
}
