//! Stroke colors and the depth gradient applied while expanding edges.

use crate::float_types::Real;
use std::fmt;

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    /// `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: Real) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| -> u8 {
            let a = a as Real;
            let b = b as Real;
            (a + (b - a) * t).round() as u8
        };
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl fmt::Display for Rgb {
    /// CSS hex notation, e.g. `#1a2b3c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Two-stop gradient indexed by recursion level.
///
/// `leaf` is used for base-case strokes (depth 0), `root` for the outermost
/// call (depth == max_depth).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub leaf: Rgb,
    pub root: Rgb,
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient {
            leaf: Rgb(25, 25, 112),
            root: Rgb(0, 191, 255),
        }
    }
}

impl Gradient {
    /// Single-color gradient.
    pub const fn solid(color: Rgb) -> Self {
        Gradient {
            leaf: color,
            root: color,
        }
    }

    /// Color for an edge at `depth` out of `max_depth`. With `max_depth == 0`
    /// the leaf color is returned.
    pub fn at(&self, depth: u32, max_depth: u32) -> Rgb {
        if max_depth == 0 {
            return self.leaf;
        }
        self.leaf.lerp(self.root, depth as Real / max_depth as Real)
    }
}
