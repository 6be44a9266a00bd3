//! Recursive Koch edge expansion.
//!
//! An edge of `depth` 0 is a single straight stroke. An edge of `depth` n is
//! four edges of `depth` n-1 and a third of the length, with a 60° bump
//! between the second and third:
//!
//! ```text
//!            /\
//!           /  \
//!   _______/    \_______
//! ```
//!
//! The same expansion drives both a drawing [`Canvas`](crate::turtle::Canvas)
//! and a measuring [`Recorder`](crate::turtle::Recorder); only the
//! [`Surface`] differs.

use crate::color::Gradient;
use crate::float_types::Real;
use crate::traits::Surface;

/// Turn into and out of the bump.
pub const BUMP_ANGLE: Real = 60.0;
/// Turn across the bump's tip.
pub const TIP_ANGLE: Real = 120.0;

/// One edge to expand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpec {
    pub length: Real,
    pub depth: u32,
    pub max_depth: u32,
}

impl EdgeSpec {
    /// Top-level edge: `depth == max_depth`.
    pub const fn new(length: Real, depth: u32) -> Self {
        EdgeSpec {
            length,
            depth,
            max_depth: depth,
        }
    }

    /// The edge one level down; `None` at the base case.
    pub fn subdivide(&self) -> Option<Self> {
        let depth = self.depth.checked_sub(1)?;
        Some(EdgeSpec {
            length: self.length / 3.0,
            depth,
            max_depth: self.max_depth,
        })
    }
}

/// Number of straight strokes one edge expands into: `4^depth`.
pub const fn segment_count(depth: u32) -> usize {
    4usize.saturating_pow(depth)
}

/// Length of each base stroke of an edge: `length / 3^depth`.
pub fn base_segment_length(length: Real, depth: u32) -> Real {
    length / (3.0 as Real).powi(depth as i32)
}

/// Expands `edge` onto `surface` with the default color gradient.
pub fn generate<S: Surface + ?Sized>(surface: &mut S, edge: EdgeSpec) {
    generate_with(surface, edge, &Gradient::default());
}

/// Expands `edge` onto `surface`, setting the stroke color from `gradient`
/// at every level.
///
/// Non-positive (or NaN) lengths and a depth above `max_depth` are ignored.
/// The heading on return equals the heading on entry.
pub fn generate_with<S: Surface + ?Sized>(surface: &mut S, edge: EdgeSpec, gradient: &Gradient) {
    if edge.length.is_nan() || edge.length <= 0.0 || edge.depth > edge.max_depth {
        return;
    }

    surface.set_color(gradient.at(edge.depth, edge.max_depth));

    let Some(sub) = edge.subdivide() else {
        surface.advance(edge.length);
        return;
    };

    generate_with(surface, sub, gradient);
    surface.left(BUMP_ANGLE);
    generate_with(surface, sub, gradient);
    surface.right(TIP_ANGLE);
    generate_with(surface, sub, gradient);
    surface.left(BUMP_ANGLE);
    generate_with(surface, sub, gradient);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::float_types::same_heading;
    use crate::turtle::{Canvas, Recorder};
    use approx::assert_relative_eq;

    #[test]
    fn depth_zero_is_one_stroke() {
        let mut canvas = Canvas::new();
        generate(&mut canvas, EdgeSpec::new(12.0, 0));
        assert_eq!(canvas.segments().len(), 1);
        assert_relative_eq!(canvas.segments()[0].length(), 12.0);
    }

    #[test]
    fn stroke_count_is_power_of_four() {
        for depth in 0..5 {
            let mut canvas = Canvas::new();
            generate(&mut canvas, EdgeSpec::new(81.0, depth));
            assert_eq!(canvas.segments().len(), segment_count(depth));
            for s in canvas.segments() {
                assert_relative_eq!(s.length(), base_segment_length(81.0, depth), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn heading_is_restored() {
        for depth in 0..6 {
            let mut rec = Recorder::new();
            rec.turtle.heading = 17.0;
            generate(&mut rec, EdgeSpec::new(10.0, depth));
            assert!(same_heading(rec.turtle.heading, 17.0), "depth {depth}");
        }
    }

    #[test]
    fn edge_spans_its_length() {
        let mut rec = Recorder::new();
        generate(&mut rec, EdgeSpec::new(9.0, 3));
        let end = rec.turtle.position;
        assert_relative_eq!(end.x, 9.0, epsilon = 1e-9);
        assert_relative_eq!(end.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn depth_one_bump_points_left() {
        let mut rec = Recorder::new();
        generate(&mut rec, EdgeSpec::new(3.0, 1));
        let tip = rec.points()[1];
        assert_relative_eq!(tip.x, 1.5, epsilon = 1e-9);
        assert_relative_eq!(tip.y, (3.0 as Real).sqrt() / 2.0, epsilon = 1e-9);
    }

    #[test]
    fn malformed_edges_are_noops() {
        let mut canvas = Canvas::new();
        generate(&mut canvas, EdgeSpec::new(0.0, 2));
        generate(&mut canvas, EdgeSpec::new(-4.0, 1));
        generate(&mut canvas, EdgeSpec::new(Real::NAN, 1));
        generate(
            &mut canvas,
            EdgeSpec {
                length: 1.0,
                depth: 3,
                max_depth: 2,
            },
        );
        assert!(canvas.segments().is_empty());
        assert_eq!(canvas.turtle.position, nalgebra::Point2::origin());
    }

    /// Keeps every color handed to it, in order.
    #[derive(Default)]
    struct ColorLog {
        colors: Vec<Rgb>,
    }

    impl Surface for ColorLog {
        fn advance(&mut self, _length: Real) {}
        fn turn(&mut self, _degrees: Real) {}
        fn set_color(&mut self, color: Rgb) {
            self.colors.push(color);
        }
        fn move_without_drawing(&mut self, _dx: Real, _dy: Real) {}
        fn set_heading(&mut self, _degrees: Real) {}
    }

    #[test]
    fn color_is_set_at_every_level() {
        let gradient = Gradient {
            leaf: Rgb(0, 0, 0),
            root: Rgb(200, 200, 200),
        };
        let mut log = ColorLog::default();
        generate_with(&mut log, EdgeSpec::new(27.0, 2), &gradient);

        // One call per recursion node: 1 + 4 + 16.
        assert_eq!(log.colors.len(), 21);
        assert_eq!(log.colors[..3], [gradient.root, Rgb(100, 100, 100), gradient.leaf]);
        assert_eq!(log.colors.iter().filter(|c| **c == Rgb(100, 100, 100)).count(), 4);
        assert_eq!(log.colors.iter().filter(|c| **c == gradient.leaf).count(), 16);
    }

    #[test]
    fn base_strokes_take_leaf_color() {
        let gradient = Gradient {
            leaf: Rgb(10, 10, 10),
            root: Rgb(200, 200, 200),
        };
        let mut canvas = Canvas::new();
        generate_with(&mut canvas, EdgeSpec::new(27.0, 2), &gradient);
        assert!(canvas.segments().iter().all(|s| s.color == gradient.leaf));
    }
}
