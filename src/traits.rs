use crate::color::Rgb;
use crate::float_types::Real;

/// Drawing capability consumed by the edge and polygon algorithms.
///
/// Angles are in degrees, positive turning counter-clockwise (left).
/// Implementors only need the primitive moves; `left`/`right` are provided.
pub trait Surface {
    /// Move `length` units along the current heading.
    fn advance(&mut self, length: Real);

    /// Rotate the heading by `degrees` (positive = left).
    fn turn(&mut self, degrees: Real);

    /// Stroke color for subsequent `advance` calls. Surfaces that do not
    /// render may ignore it.
    fn set_color(&mut self, _color: Rgb) {}

    /// Translate the cursor by `(dx, dy)` without leaving a stroke.
    fn move_without_drawing(&mut self, dx: Real, dy: Real);

    /// Set an absolute heading.
    fn set_heading(&mut self, degrees: Real);

    fn left(&mut self, degrees: Real) {
        self.turn(degrees);
    }

    fn right(&mut self, degrees: Real) {
        self.turn(-degrees);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn advance(&mut self, length: Real) {
        (**self).advance(length);
    }
    fn turn(&mut self, degrees: Real) {
        (**self).turn(degrees);
    }
    fn set_color(&mut self, color: Rgb) {
        (**self).set_color(color);
    }
    fn move_without_drawing(&mut self, dx: Real, dy: Real) {
        (**self).move_without_drawing(dx, dy);
    }
    fn set_heading(&mut self, degrees: Real) {
        (**self).set_heading(degrees);
    }
}
