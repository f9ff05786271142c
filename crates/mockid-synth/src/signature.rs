// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Signature synthesis: one of two parametric curve templates with bounded
// jitter on the control points. Output is a vector path descriptor.

use mockid_core::types::{PathCommand, SignaturePath};
use rand::Rng;

/// Generate a signature curve.
///
/// Chooses uniformly between a flowing quadratic style and an angular
/// polyline style; stroke width is drawn from [1.0, 1.5) and opacity from
/// [0.8, 1.0).
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> SignaturePath {
    let commands = if rng.gen_range(0..2) == 0 {
        flowing_curve(rng)
    } else {
        angular_polyline(rng)
    };

    SignaturePath {
        commands,
        stroke_width: rng.gen_range(1.0..1.5),
        opacity: rng.gen_range(0.8..1.0),
    }
}

/// `M 10,40 Q j,j 40,30 T j,j T 130,40` with jittered control points.
fn flowing_curve<R: Rng + ?Sized>(rng: &mut R) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo { x: 10.0, y: 40.0 },
        PathCommand::QuadTo {
            cx: rng.gen_range(20.0..50.0),
            cy: rng.gen_range(20.0..50.0),
            x: 40.0,
            y: 30.0,
        },
        PathCommand::SmoothQuadTo {
            x: rng.gen_range(80.0..120.0),
            y: rng.gen_range(20.0..50.0),
        },
        PathCommand::SmoothQuadTo { x: 130.0, y: 40.0 },
    ]
}

/// `M 10,35 L j,j L j,j L 130,32` with jittered vertices.
fn angular_polyline<R: Rng + ?Sized>(rng: &mut R) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo { x: 10.0, y: 35.0 },
        PathCommand::LineTo {
            x: rng.gen_range(30.0..50.0),
            y: rng.gen_range(25.0..35.0),
        },
        PathCommand::LineTo {
            x: rng.gen_range(60.0..90.0),
            y: rng.gen_range(40.0..50.0),
        },
        PathCommand::LineTo { x: 130.0, y: 32.0 },
    ]
}
