//! Turtle cursor and the two concrete [`Surface`]s: a drawing [`Canvas`] and
//! a measuring [`Recorder`].

use crate::color::Rgb;
use crate::float_types::{FULL_TURN, Real};
use crate::traits::Surface;
use nalgebra::{Point2, Rotation2, Vector2};

/// Position and heading of a turtle cursor.
///
/// The heading is kept as the running sum of all turns (not wrapped), so the
/// net rotation of a traversal can be read back directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurtleState {
    pub position: Point2<Real>,
    /// Degrees, 0 = east, counter-clockwise positive.
    pub heading: Real,
    pub pen_down: bool,
}

impl Default for TurtleState {
    fn default() -> Self {
        TurtleState {
            position: Point2::origin(),
            heading: 0.0,
            pen_down: true,
        }
    }
}

impl TurtleState {
    pub fn new(position: Point2<Real>, heading: Real) -> Self {
        TurtleState {
            position,
            heading,
            pen_down: true,
        }
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> Vector2<Real> {
        Rotation2::new(self.heading.to_radians()) * Vector2::x()
    }

    /// Moves along the heading and returns the new position.
    pub fn forward(&mut self, length: Real) -> Point2<Real> {
        self.position += self.direction() * length;
        self.position
    }

    pub fn left(&mut self, degrees: Real) {
        self.heading += degrees;
    }

    pub fn right(&mut self, degrees: Real) {
        self.heading -= degrees;
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    /// Places the cursor at `position` without affecting pen or heading.
    pub fn jump_to(&mut self, position: Point2<Real>) {
        self.position = position;
    }

    /// Heading wrapped into `[0, 360)`.
    pub fn normalized_heading(&self) -> Real {
        self.heading.rem_euclid(FULL_TURN)
    }
}

/// One straight stroke left on a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2<Real>,
    pub end: Point2<Real>,
    pub color: Rgb,
}

impl Segment {
    pub fn length(&self) -> Real {
        nalgebra::distance(&self.start, &self.end)
    }
}

/// Drawing surface: every pen-down `advance` becomes a [`Segment`].
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    pub turtle: TurtleState,
    color: Option<Rgb>,
    segments: Vec<Segment>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn color(&self) -> Rgb {
        self.color.unwrap_or(Rgb::BLACK)
    }
}

impl Surface for Canvas {
    fn advance(&mut self, length: Real) {
        let start = self.turtle.position;
        let end = self.turtle.forward(length);
        if self.turtle.pen_down {
            self.segments.push(Segment {
                start,
                end,
                color: self.color(),
            });
        }
    }

    fn turn(&mut self, degrees: Real) {
        self.turtle.left(degrees);
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = Some(color);
    }

    fn move_without_drawing(&mut self, dx: Real, dy: Real) {
        let was_down = self.turtle.pen_down;
        self.turtle.pen_up();
        self.turtle.jump_to(self.turtle.position + Vector2::new(dx, dy));
        if was_down {
            self.turtle.pen_down();
        }
    }

    fn set_heading(&mut self, degrees: Real) {
        self.turtle.heading = degrees;
    }
}

/// Measuring surface: records the position reached after every `advance`,
/// drawing nothing.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub turtle: TurtleState,
    points: Vec<Point2<Real>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2<Real>> {
        self.points
    }
}

impl Surface for Recorder {
    fn advance(&mut self, length: Real) {
        let end = self.turtle.forward(length);
        self.points.push(end);
    }

    fn turn(&mut self, degrees: Real) {
        self.turtle.left(degrees);
    }

    fn move_without_drawing(&mut self, dx: Real, dy: Real) {
        self.turtle.jump_to(self.turtle.position + Vector2::new(dx, dy));
    }

    fn set_heading(&mut self, degrees: Real) {
        self.turtle.heading = degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_follows_heading() {
        let mut t = TurtleState::default();
        t.left(90.0);
        let p = t.forward(2.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-9);
        t.right(180.0);
        assert_relative_eq!(t.normalized_heading(), 270.0);
    }

    #[test]
    fn canvas_skips_strokes_while_moving() {
        let mut canvas = Canvas::new();
        canvas.move_without_drawing(5.0, -1.0);
        canvas.set_color(Rgb(1, 2, 3));
        canvas.advance(3.0);
        assert_eq!(canvas.segments().len(), 1);
        let s = canvas.segments()[0];
        assert_eq!(s.start, Point2::new(5.0, -1.0));
        assert_relative_eq!(s.end.x, 8.0);
        assert_eq!(s.color, Rgb(1, 2, 3));
        assert!(canvas.turtle.pen_down);
    }

    #[test]
    fn pen_up_advance_leaves_no_segment() {
        let mut canvas = Canvas::new();
        canvas.turtle.pen_up();
        canvas.advance(1.0);
        assert!(canvas.segments().is_empty());
        assert_relative_eq!(canvas.turtle.position.x, 1.0);
    }

    #[test]
    fn recorder_keeps_post_advance_positions() {
        let mut rec = Recorder::new();
        rec.advance(1.0);
        rec.left(90.0);
        rec.advance(1.0);
        let pts = rec.points();
        assert_eq!(pts.len(), 2);
        assert_relative_eq!(pts[1].x, 1.0, epsilon = 1e-9);
        assert_relative_eq!(pts[1].y, 1.0, epsilon = 1e-9);
    }
}
