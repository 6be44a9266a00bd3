//! Regular polygons with Koch edges, their bounds, and centering.

use crate::color::Gradient;
use crate::edge::{self, EdgeSpec};
use crate::errors::ValidationError;
use crate::float_types::{FULL_TURN, PI, Real};
use crate::traits::Surface;
use crate::turtle::{Canvas, Recorder, Segment, TurtleState};
use geo::{BoundingRect, MultiPoint};
use nalgebra::{Point2, Vector2};
use tracing::{debug, trace};

/// Validated polygon parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSpec {
    sides: usize,
    side_length: Real,
    depth: u32,
}

impl PolygonSpec {
    /// Checks raw parameters: `sides >= 3`, `side_length` positive and finite,
    /// `depth >= 0`.
    pub fn new(sides: i64, side_length: Real, depth: i64) -> Result<Self, ValidationError> {
        if sides < 3 {
            return Err(ValidationError::too_few_sides(sides));
        }
        if side_length <= 0.0 || !side_length.is_finite() {
            return Err(ValidationError::side_length(side_length));
        }
        if depth < 0 {
            return Err(ValidationError::negative_depth(depth));
        }
        let sides = usize::try_from(sides).map_err(|_| ValidationError::too_few_sides(sides))?;
        let depth = u32::try_from(depth).map_err(|_| ValidationError::depth_too_large(depth))?;
        Ok(PolygonSpec {
            sides,
            side_length,
            depth,
        })
    }

    pub const fn sides(&self) -> usize {
        self.sides
    }

    pub const fn side_length(&self) -> Real {
        self.side_length
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Turn between consecutive sides, in degrees.
    pub fn exterior_angle(&self) -> Real {
        FULL_TURN / self.sides as Real
    }

    /// Circumradius of the undeformed polygon: `s / (2 sin(π/n))`.
    pub fn circumradius(&self) -> Real {
        self.side_length / (2.0 * (PI / self.sides as Real).sin())
    }

    /// Total base strokes in the figure: `sides * 4^depth`.
    pub fn segment_count(&self) -> usize {
        self.sides.saturating_mul(edge::segment_count(self.depth))
    }

    fn edge(&self) -> EdgeSpec {
        EdgeSpec::new(self.side_length, self.depth)
    }
}

/// Axis-aligned bounds of a set of turtle positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: Real,
    pub max_x: Real,
    pub min_y: Real,
    pub max_y: Real,
}

impl Default for BoundingBox {
    fn default() -> Self {
        BoundingBox {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    }
}

impl BoundingBox {
    /// Bounds of `points`. Fewer than two points give the zero box at the origin.
    pub fn from_points(points: &[Point2<Real>]) -> Self {
        if points.len() < 2 {
            return BoundingBox::default();
        }
        let multi: MultiPoint<Real> = points.iter().map(|p| (p.x, p.y)).collect();
        match multi.bounding_rect() {
            Some(rect) => BoundingBox {
                min_x: rect.min().x,
                max_x: rect.max().x,
                min_y: rect.min().y,
                max_y: rect.max().y,
            },
            None => BoundingBox::default(),
        }
    }

    pub fn center(&self) -> Point2<Real> {
        Point2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    pub fn width(&self) -> Real {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> Real {
        self.max_y - self.min_y
    }
}

/// How the drawing start point is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Centering {
    /// Measure the fractal first and put its bounding-box center at the origin.
    #[default]
    TrueBounds,
    /// Step back by the undeformed polygon's circumradius, perpendicular to the
    /// first edge. Only approximate once bumps are added.
    Circumradius,
    /// Start at the origin.
    None,
}

/// Knobs for [`compose_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposeOptions {
    /// Turn left between sides (bumps point into the polygon) when true,
    /// right (bumps point out) when false.
    pub inward: bool,
    pub centering: Centering,
    pub gradient: Gradient,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        ComposeOptions {
            inward: true,
            centering: Centering::default(),
            gradient: Gradient::default(),
        }
    }
}

impl ComposeOptions {
    pub fn inward(inward: bool) -> Self {
        ComposeOptions {
            inward,
            ..Default::default()
        }
    }
}

/// A drawn fractal polygon.
#[derive(Clone, Debug)]
pub struct Figure {
    pub spec: PolygonSpec,
    pub inward: bool,
    /// Where the first edge starts.
    pub start: Point2<Real>,
    /// Turtle state after the last side.
    pub turtle: TurtleState,
    pub segments: Vec<Segment>,
}

impl Figure {
    /// Bounds of every drawn stroke.
    pub fn bounds(&self) -> BoundingBox {
        let points: Vec<Point2<Real>> = self
            .segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .collect();
        BoundingBox::from_points(&points)
    }

    /// Signed sum of all turns made while drawing, in degrees.
    pub fn total_turn(&self) -> Real {
        self.turtle.heading
    }

    /// Stroke endpoints in drawing order.
    pub fn endpoints(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.segments.iter().map(|s| s.end)
    }
}

/// Walks the whole polygon on `surface` from its current position and heading.
fn trace_polygon<S: Surface + ?Sized>(
    surface: &mut S,
    spec: &PolygonSpec,
    inward: bool,
    gradient: &Gradient,
) {
    let angle = spec.exterior_angle();
    for side in 0..spec.sides {
        trace!(side, "expanding side");
        edge::generate_with(surface, spec.edge(), gradient);
        if inward {
            surface.left(angle);
        } else {
            surface.right(angle);
        }
    }
}

/// Replays the figure on a [`Recorder`] from the origin at heading 0 and
/// returns the bounds of every recorded position.
pub fn measure_bounds(spec: &PolygonSpec, inward: bool) -> BoundingBox {
    let mut recorder = Recorder::new();
    trace_polygon(&mut recorder, spec, inward, &Gradient::default());
    let bounds = BoundingBox::from_points(recorder.points());
    debug!(
        points = recorder.points().len(),
        ?bounds,
        "measured fractal bounds"
    );
    bounds
}

/// Translation from the origin to the first vertex for `centering`.
pub fn start_offset(spec: &PolygonSpec, inward: bool, centering: Centering) -> Vector2<Real> {
    match centering {
        Centering::TrueBounds => -measure_bounds(spec, inward).center().coords,
        Centering::Circumradius => {
            // Interior lies on the turning side of the first edge.
            let toward_interior = if inward { 90.0 } else { -90.0 };
            let mut probe = TurtleState::default();
            probe.left(toward_interior);
            -probe.direction() * spec.circumradius()
        },
        Centering::None => Vector2::zeros(),
    }
}

/// Draws `spec` on `surface` and returns where the first edge started.
///
/// The surface is positioned relative to its current location, then its
/// heading is set to 0 before the first side.
pub fn compose_on<S: Surface + ?Sized>(
    surface: &mut S,
    spec: &PolygonSpec,
    options: &ComposeOptions,
) -> Vector2<Real> {
    let offset = start_offset(spec, options.inward, options.centering);
    surface.move_without_drawing(offset.x, offset.y);
    surface.set_heading(0.0);
    trace_polygon(surface, spec, options.inward, &options.gradient);
    offset
}

/// Draws `spec` onto a fresh [`Canvas`] with the given options.
pub fn compose_with(spec: PolygonSpec, options: &ComposeOptions) -> Figure {
    debug!(
        sides = spec.sides,
        side_length = spec.side_length,
        depth = spec.depth,
        inward = options.inward,
        centering = ?options.centering,
        "composing fractal polygon"
    );
    let mut canvas = Canvas::new();
    let offset = compose_on(&mut canvas, &spec, options);
    let turtle = canvas.turtle;
    Figure {
        spec,
        inward: options.inward,
        start: Point2::from(offset),
        turtle,
        segments: canvas.into_segments(),
    }
}

/// Draws `spec`, centred on its true bounds, turning left between sides when
/// `inward`.
pub fn compose(spec: PolygonSpec, inward: bool) -> Figure {
    compose_with(spec, &ComposeOptions::inward(inward))
}

/// Validates raw parameters and composes in one step.
pub fn compose_raw(
    sides: i64,
    side_length: Real,
    depth: i64,
    options: &ComposeOptions,
) -> Result<Figure, ValidationError> {
    let spec = PolygonSpec::new(sides, side_length, depth)?;
    Ok(compose_with(spec, options))
}
