//! SVG export of a [`Figure`].
//!
//! Turtle space is y-up; SVG is y-down, so y is negated on output. Runs of
//! connected strokes sharing a color are merged into a single `<path>`.

use super::IoError;
use crate::color::Rgb;
use crate::float_types::{Real, tolerance};
use crate::polygon::Figure;
use crate::turtle::Segment;
use ::svg::Document;
use ::svg::node::element::path::Data;
use ::svg::node::element::{Path, Rectangle};
use std::path::Path as FsPath;
use tracing::debug;

/// Styling for exported documents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgOptions {
    pub stroke_width: Real,
    /// Blank space around the figure's bounds, in figure units.
    pub margin: Real,
    pub background: Option<Rgb>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            stroke_width: 1.0,
            margin: 10.0,
            background: Some(Rgb(255, 255, 255)),
        }
    }
}

pub trait ToSvg {
    fn to_svg_document(&self, options: &SvgOptions) -> Document;

    fn to_svg(&self) -> String {
        self.to_svg_document(&SvgOptions::default()).to_string()
    }
}

#[allow(clippy::unnecessary_cast)]
fn flip(p: &nalgebra::Point2<Real>) -> (f32, f32) {
    (p.x as f32, -p.y as f32)
}

/// Splits strokes into runs that can each be one `<path>`.
fn runs(segments: &[Segment]) -> Vec<&[Segment]> {
    let mut out = Vec::new();
    let mut begin = 0;
    for i in 1..segments.len() {
        let prev = &segments[i - 1];
        let next = &segments[i];
        let joined = nalgebra::distance(&prev.end, &next.start) < tolerance();
        if !joined || prev.color != next.color {
            out.push(&segments[begin..i]);
            begin = i;
        }
    }
    if begin < segments.len() {
        out.push(&segments[begin..]);
    }
    out
}

fn run_path(run: &[Segment], stroke_width: Real) -> Option<Path> {
    let first = run.first()?;
    let data = run
        .iter()
        .fold(Data::new().move_to(flip(&first.start)), |data, s| {
            data.line_to(flip(&s.end))
        });
    Some(
        Path::new()
            .set("fill", "none")
            .set("stroke", first.color.to_string())
            .set("stroke-width", format!("{stroke_width}"))
            .set("stroke-linejoin", "round")
            .set("d", data),
    )
}

impl ToSvg for Figure {
    fn to_svg_document(&self, options: &SvgOptions) -> Document {
        let bounds = self.bounds();
        let m = options.margin.max(0.0);
        // y-down: the top edge of the view is -max_y.
        let (x, y) = (bounds.min_x - m, -bounds.max_y - m);
        let (w, h) = (bounds.width() + 2.0 * m, bounds.height() + 2.0 * m);
        let view_box = format!("{x} {y} {w} {h}");

        let mut document = Document::new()
            .set("viewBox", view_box)
            .set("width", format!("{w}"))
            .set("height", format!("{h}"));

        if let Some(background) = options.background {
            document = document.add(
                Rectangle::new()
                    .set("x", format!("{x}"))
                    .set("y", format!("{y}"))
                    .set("width", format!("{w}"))
                    .set("height", format!("{h}"))
                    .set("fill", background.to_string()),
            );
        }

        let runs = runs(&self.segments);
        debug!(segments = self.segments.len(), paths = runs.len(), "rendering svg");
        for run in runs {
            if let Some(path) = run_path(run, options.stroke_width) {
                document = document.add(path);
            }
        }
        document
    }
}

/// Writes `figure` to `path` as an SVG file.
pub fn save_svg<P: AsRef<FsPath>>(
    figure: &Figure,
    path: P,
    options: &SvgOptions,
) -> Result<(), IoError> {
    let path = path.as_ref();
    if path.file_name().is_none() {
        return Err(IoError::MalformedPath(path.display().to_string()));
    }
    if figure.segments.is_empty() {
        return Err(IoError::EmptyFigure);
    }
    ::svg::save(path, &figure.to_svg_document(options))?;
    debug!(path = %path.display(), "wrote svg");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::{Centering, ComposeOptions, PolygonSpec, compose_with};
    use nalgebra::Point2;

    fn seg(a: (Real, Real), b: (Real, Real), color: Rgb) -> Segment {
        Segment {
            start: Point2::new(a.0, a.1),
            end: Point2::new(b.0, b.1),
            color,
        }
    }

    #[test]
    fn runs_split_on_gap_and_color() {
        let red = Rgb(255, 0, 0);
        let blue = Rgb(0, 0, 255);
        let segments = vec![
            seg((0.0, 0.0), (1.0, 0.0), red),
            seg((1.0, 0.0), (2.0, 0.0), red),
            seg((2.0, 0.0), (3.0, 0.0), blue),
            seg((5.0, 0.0), (6.0, 0.0), blue),
        ];
        let lens: Vec<usize> = runs(&segments).iter().map(|r| r.len()).collect();
        assert_eq!(lens, vec![2, 1, 1]);
        assert!(runs(&[]).is_empty());
    }

    #[test]
    fn triangle_is_one_path() {
        let spec = PolygonSpec::new(3, 30.0, 0).unwrap();
        let options = ComposeOptions {
            centering: Centering::None,
            ..Default::default()
        };
        let figure = compose_with(spec, &options);
        let text = figure.to_svg();
        assert_eq!(text.matches("<path").count(), 1);
        assert!(text.contains("viewBox"));
        assert!(text.contains("fill=\"none\""));
    }

    #[test]
    fn empty_figure_is_not_saved() {
        let spec = PolygonSpec::new(3, 1.0, 0).unwrap();
        let mut figure = compose_with(spec, &ComposeOptions::default());
        figure.segments.clear();
        let err = save_svg(&figure, "unused.svg", &SvgOptions::default()).unwrap_err();
        assert!(matches!(err, IoError::EmptyFigure));
    }
}
