//! View models and value ranges.

use crate::geom::{Point, Size};

/// Numeric range with inclusive bounds.
///
/// Bounds are kept exactly as given; callers that need `min <= max` check
/// [`Range::is_ordered`] themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Fraction of the way `value` lies from `min` to `max`.
    ///
    /// Returns `None` for ranges without positive finite span, so degenerate
    /// bounds never divide by zero.
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if !self.is_valid() || !value.is_finite() {
            return None;
        }
        Some((value - self.min) / self.span())
    }
}

/// Everything a single histogram render pass needs.
///
/// Built fresh by the caller for every render and discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramViewModel {
    /// Plotted samples in path order.
    pub data: Vec<Point>,
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Label text for the unit of the plotted values.
    pub unit: String,
    /// Lower bound of the overlay scale.
    pub min_value: f64,
    /// Upper bound of the overlay scale.
    pub max_value: f64,
    /// Current point position shown by the overlay indicator.
    pub marker: Option<f64>,
}

impl HistogramViewModel {
    /// Create a view model with no overlay indicator.
    pub fn new(
        data: Vec<Point>,
        width: f64,
        height: f64,
        unit: impl Into<String>,
        min_value: f64,
        max_value: f64,
    ) -> Self {
        Self {
            data,
            width,
            height,
            unit: unit.into(),
            min_value,
            max_value,
            marker: None,
        }
    }

    /// Set the overlay indicator position.
    pub fn with_marker(mut self, marker: f64) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Surface dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Overlay scale bounds.
    pub fn bounds(&self) -> Range {
        Range::new(self.min_value, self.max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_does_not_normalize() {
        let range = Range::new(2.0, 2.0);
        assert_eq!(range.normalize(2.0), None);
        assert_eq!(range.span(), 0.0);
    }

    #[test]
    fn normalize_is_linear() {
        let range = Range::new(-10.0, 10.0);
        assert_eq!(range.normalize(0.0), Some(0.5));
        assert_eq!(range.normalize(-10.0), Some(0.0));
        assert_eq!(range.normalize(20.0), Some(1.5));
    }

    #[test]
    fn bounds_kept_as_given() {
        let range = Range::new(5.0, 1.0);
        assert_eq!(range.min, 5.0);
        assert!(!range.is_ordered());
    }

    #[test]
    fn view_model_builder() {
        let model = HistogramViewModel::new(Vec::new(), 300.0, 600.0, "dB", 0.0, 1.0)
            .with_marker(0.25);
        assert_eq!(model.marker, Some(0.25));
        assert_eq!(model.size(), Size::new(300.0, 600.0));
        assert_eq!(model.bounds(), Range::new(0.0, 1.0));
    }
}
