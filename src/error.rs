//! Errors raised while turning untrusted props into a view model.

use std::fmt;

use thiserror::Error;

/// A coordinate axis of a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal coordinate.
    X,
    /// Vertical coordinate.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// The props do not satisfy the histogram input contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The props carry no `data` field, or it is null.
    #[error("`data` is required")]
    MissingData,
    /// `data` is present but not an array.
    #[error("`data` must be an array of points")]
    DataNotArray,
    /// A `data` entry is not an object.
    #[error("data[{index}] must be an object with numeric `x` and `y`")]
    PointNotObject { index: usize },
    /// A point lacks one of its coordinates.
    #[error("data[{index}] is missing `{axis}`")]
    MissingCoordinate { index: usize, axis: Axis },
    /// A coordinate is not a number, or is not finite.
    #[error("data[{index}].{axis} must be a finite number")]
    NonNumericCoordinate { index: usize, axis: Axis },
    /// `width` or `height` is negative or not finite.
    #[error("`{name}` must be a finite, non-negative number (got {value})")]
    InvalidDimension { name: &'static str, value: f64 },
    /// `minValue` or `maxValue` is not finite.
    #[error("`{name}` must be a finite number (got {value})")]
    NonFiniteBound { name: &'static str, value: f64 },
    /// `minValue` is greater than `maxValue`.
    #[error("`minValue` ({min}) must not exceed `maxValue` ({max})")]
    InvertedBounds { min: f64, max: f64 },
}

/// Failure to build a view model from serialized props.
#[derive(Debug, Error)]
pub enum PropsError {
    /// The input is not JSON of the expected shape.
    #[error("invalid props JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The props parsed but broke the input contract.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
