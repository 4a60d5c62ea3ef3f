// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random triangle drills for trigonometry practice.
//!
//! The triangulo library generates geometrically valid random triangles,
//! hides a subset of their six measurements (three sides, three angles)
//! according to a pedagogical mode, places the triangle in a drawing area,
//! and grades a learner's guesses for the hidden values. It is the
//! computational core of a drill application: the UI shell that renders
//! triangles and collects input is expected to live elsewhere and consume
//! the plain values produced here.
//!
//! # Examples
//!
//! Generating a drill and partitioning its measurements:
//! ```
//! use triangulo::{generate, select, Measure, Mode, ShapeClass};
//!
//! let triangle = generate(ShapeClass::Right, 1.0);
//! assert!((triangle.angle_sum() - 180.0).abs() < 1e-3);
//! assert_eq!(triangle.angle_b, 90.0);
//!
//! let partition = select(&triangle, Mode::OneSideTwoAngles);
//! assert!(partition.is_known(Measure::SideA));
//! assert_eq!(partition.known.len() + partition.unknown.len(), 6);
//! ```
//!
//! Placing a triangle in a drawing area and grading answers:
//! ```
//! use triangulo::{check, layout, Frame, Measure, Triangle};
//!
//! let triangle = Triangle::new(5.0, 5.0, 5.0, 60.0, 60.0, 60.0);
//! let frame = Frame::new(520.0, 420.0, 40.0);
//!
//! let placed = layout(triangle.a, triangle.b, triangle.c, frame);
//! assert!(placed.is_finite());
//!
//! let report = check(
//!     &triangle,
//!     &[Measure::AngleA],
//!     &[(Measure::AngleA, "60.05")],
//! );
//! assert!(report.all_correct());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod check;
pub mod common;
mod layout;
mod measure;
mod point;
mod sample;
mod select;
mod shape;
mod triangle;

pub use crate::check::*;
pub use crate::layout::*;
pub use crate::measure::*;
pub use crate::point::*;
pub use crate::sample::*;
pub use crate::select::*;
pub use crate::shape::*;
pub use crate::triangle::*;
