//! Koch-snowflake style **fractal polygons** drawn with turtle geometry.
//!
//! Each side of a regular polygon is recursively replaced by a four-stroke
//! curve with a triangular bump ([`edge`]). The polygon walk ([`polygon`]) can
//! first replay the whole figure on a measuring surface to find its true
//! bounds and center it. Drawing and measuring share one algorithm written
//! against the [`Surface`](traits::Surface) trait.
//!
//! ```
//! use kochgon::polygon::{PolygonSpec, compose};
//!
//! let spec = PolygonSpec::new(4, 90.0, 1)?;
//! let figure = compose(spec, false);
//! assert_eq!(figure.segments.len(), 16);
//! # Ok::<(), kochgon::errors::ValidationError>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export figures as `.svg`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod color;
pub mod edge;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod polygon;
pub mod traits;
pub mod turtle;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use color::{Gradient, Rgb};
pub use edge::EdgeSpec;
pub use errors::ValidationError;
pub use polygon::{BoundingBox, Centering, ComposeOptions, Figure, PolygonSpec};
pub use traits::Surface;
pub use turtle::{Canvas, Recorder, Segment, TurtleState};
