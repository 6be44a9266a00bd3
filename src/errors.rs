//! Validation errors

use crate::float_types::Real;

/// All the possible validation issues we might encounter when building a figure
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidParameter) A polygon parameter is outside its valid range
    #[error("(InvalidParameter) {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub(crate) fn too_few_sides(sides: i64) -> Self {
        ValidationError::InvalidParameter {
            parameter: "sides",
            reason: format!("a polygon needs at least 3 sides, got {sides}"),
        }
    }

    pub(crate) fn side_length(side_length: Real) -> Self {
        ValidationError::InvalidParameter {
            parameter: "side_length",
            reason: format!("must be a positive finite number, got {side_length}"),
        }
    }

    pub(crate) fn negative_depth(depth: i64) -> Self {
        ValidationError::InvalidParameter {
            parameter: "depth",
            reason: format!("recursion depth cannot be negative, got {depth}"),
        }
    }

    pub(crate) fn depth_too_large(depth: i64) -> Self {
        ValidationError::InvalidParameter {
            parameter: "depth",
            reason: format!("recursion depth must be at most {}, got {depth}", u32::MAX),
        }
    }

    /// Name of the offending parameter.
    pub const fn parameter(&self) -> &'static str {
        match self {
            ValidationError::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}
