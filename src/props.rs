//! Boundary validation for histogram props.
//!
//! Props arrive in the camelCase shape the editor front end sends:
//!
//! ```json
//! { "data": [{"x": 0, "y": 0}], "width": 300, "height": 600,
//!   "unit": "dB", "minValue": 0, "maxValue": 5 }
//! ```
//!
//! Validation runs once, here. The renderer trusts whatever passes.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Axis, PropsError, ValidationError};
use crate::geom::Point;
use crate::view::HistogramViewModel;

/// Untrusted histogram props.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramProps {
    /// Raw point list; checked point by point.
    #[serde(default)]
    pub data: Option<Value>,
    /// Surface width.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Unit label.
    #[serde(default)]
    pub unit: String,
    /// Lower overlay bound.
    pub min_value: f64,
    /// Upper overlay bound.
    pub max_value: f64,
    /// Overlay indicator value.
    #[serde(default)]
    pub marker: Option<f64>,
}

impl HistogramProps {
    /// Parse and validate props from JSON.
    pub fn from_json(json: &str) -> Result<HistogramViewModel, PropsError> {
        let props: Self = serde_json::from_str(json)?;
        Ok(props.validate()?)
    }

    /// Check the props and build a view model.
    pub fn validate(self) -> Result<HistogramViewModel, ValidationError> {
        let data = parse_points(self.data.as_ref()).inspect_err(|err| {
            debug!(%err, "rejecting histogram props");
        })?;
        let model = HistogramViewModel {
            data,
            width: self.width,
            height: self.height,
            unit: self.unit,
            min_value: self.min_value,
            max_value: self.max_value,
            marker: self.marker,
        };
        validate_model(&model).inspect_err(|err| {
            debug!(%err, "rejecting histogram props");
        })?;
        Ok(model)
    }
}

/// Check a view model built in code against the input contract.
///
/// Checks run in field order and the first failure is reported.
pub fn validate_model(model: &HistogramViewModel) -> Result<(), ValidationError> {
    for (index, point) in model.data.iter().enumerate() {
        check_coordinate(index, Axis::X, point.x)?;
        check_coordinate(index, Axis::Y, point.y)?;
    }
    check_dimension("width", model.width)?;
    check_dimension("height", model.height)?;
    check_bound("minValue", model.min_value)?;
    check_bound("maxValue", model.max_value)?;
    if !model.bounds().is_ordered() {
        return Err(ValidationError::InvertedBounds {
            min: model.min_value,
            max: model.max_value,
        });
    }
    Ok(())
}

fn parse_points(data: Option<&Value>) -> Result<Vec<Point>, ValidationError> {
    let items = match data {
        None | Some(Value::Null) => return Err(ValidationError::MissingData),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::DataNotArray),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(ValidationError::PointNotObject { index });
            };
            let x = coordinate(index, Axis::X, fields.get("x"))?;
            let y = coordinate(index, Axis::Y, fields.get("y"))?;
            Ok(Point::new(x, y))
        })
        .collect()
}

fn coordinate(index: usize, axis: Axis, value: Option<&Value>) -> Result<f64, ValidationError> {
    match value {
        None => Err(ValidationError::MissingCoordinate { index, axis }),
        Some(value) => value
            .as_f64()
            .ok_or(ValidationError::NonNumericCoordinate { index, axis }),
    }
}

fn check_coordinate(index: usize, axis: Axis, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonNumericCoordinate { index, axis })
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidDimension { name, value })
    }
}

fn check_bound(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteBound { name, value })
    }
}
