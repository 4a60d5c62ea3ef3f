// Copyright 2025 the Triangulo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive terminal drill.
//!
//! Generates one triangle, shows the revealed measurements, reads guesses
//! for the hidden ones from stdin, and grades them. Pass a shape class
//! (`right`, `acute`, `obtuse`, `any`) and a mode index 0-4 as arguments.

use std::env;
use std::io::{self, BufRead, Write};

use triangulo::{check, generate, layout_triangle, select, Frame, Mode, ShapeClass, Verdict};

fn main() {
    let mut args = env::args().skip(1);
    let shape = match args.next().as_deref() {
        Some("right") => ShapeClass::Right,
        Some("acute") => ShapeClass::Acute,
        Some("obtuse") => ShapeClass::Obtuse,
        _ => ShapeClass::Any,
    };
    let mode = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .and_then(Mode::from_index)
        .unwrap_or_default();

    let triangle = generate(shape, 1.0);
    let partition = select(&triangle, mode);

    println!("{} drill ({} triangle)", mode, triangle.classify());
    println!("known:");
    for &(measure, value) in &partition.known {
        let unit = if measure.is_angle() { "°" } else { "" };
        println!("  {measure} = {value}{unit}");
    }

    let placed = layout_triangle(&triangle, Frame::new(520.0, 420.0, 40.0));
    println!(
        "vertices: A{} B{} C{}",
        placed.a.round(),
        placed.b.round(),
        placed.c.round()
    );

    if partition.unknown.is_empty() {
        println!("nothing hidden in this mode.");
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = Vec::new();
    for &measure in &partition.unknown {
        print!("{measure} = ");
        io::stdout().flush().expect("stdout");
        let line = lines.next().and_then(|line| line.ok()).unwrap_or_default();
        answers.push((measure, line));
    }
    let submissions: Vec<_> = answers
        .iter()
        .map(|(measure, text)| (*measure, text.as_str()))
        .collect();

    let report = check(&triangle, &partition.unknown, &submissions);
    for &(measure, verdict) in report.entries() {
        match verdict {
            Verdict::Missing => println!("{measure}: no answer"),
            Verdict::NotANumber => println!("{measure}: not a number"),
            Verdict::Correct { .. } => println!("{measure}: correct"),
            Verdict::Incorrect { expected, .. } => {
                println!("{measure}: incorrect, the value is {expected}");
            }
        }
    }
    if report.all_correct() {
        println!("perfect, every answer within tolerance.");
    }
}
