//! Test support library
//! Provides various helper functions & utilities for tests.

#![allow(dead_code)]

use kochgon::{
    float_types::Real,
    polygon::{Centering, ComposeOptions},
    turtle::Segment,
};
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Same as [`approx_eq`] for both coordinates.
pub fn points_close(a: &Point2<Real>, b: &Point2<Real>, eps: Real) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

/// Options that draw from the origin with no recentering.
pub fn uncentered(inward: bool) -> ComposeOptions {
    ComposeOptions {
        inward,
        centering: Centering::None,
        ..Default::default()
    }
}

/// Positions a turtle visits when replaying `segments` from `start`,
/// checking that each stroke begins where the previous one ended.
pub fn replay(start: Point2<Real>, segments: &[Segment]) -> Vec<Point2<Real>> {
    let mut at = start;
    let mut out = Vec::with_capacity(segments.len());
    for s in segments {
        assert!(points_close(&at, &s.start, 1e-6), "gap before {:?}", s);
        at = s.end;
        out.push(at);
    }
    out
}
