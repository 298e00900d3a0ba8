//! Point position overlay.
//!
//! The overlay shares the histogram's coordinate space and marks where a
//! value falls between the scale bounds with a vertical line.

use tracing::{trace, warn};

use crate::geom::{Point, Size};
use crate::render::{LineNode, LineStyle, PointPositionNode, VisualNode};
use crate::view::Range;

/// Inputs consumed by [`PointPositionOverlay::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointPositionProps<'a> {
    /// Overlay width in pixels.
    pub width: f64,
    /// Overlay height in pixels.
    pub height: f64,
    /// Lower scale bound.
    pub min_value: f64,
    /// Upper scale bound.
    pub max_value: f64,
    /// Value to mark, if any.
    pub marker: Option<f64>,
    /// CSS class for the overlay element.
    pub class: Option<&'a str>,
    /// Indicator styling.
    pub style: LineStyle,
}

/// Builds the positional indicator overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointPositionOverlay;

impl PointPositionOverlay {
    /// Build the overlay node.
    ///
    /// Bounds and marker are recorded unchanged.
    pub fn render(props: PointPositionProps<'_>) -> VisualNode {
        let indicator = props.marker.and_then(|value| {
            let x = indicator_x(props.width, Range::new(props.min_value, props.max_value), value)?;
            trace!(value, x, "placing point position indicator");
            Some(LineNode {
                start: Point::new(x, 0.0),
                end: Point::new(x, props.height),
                style: props.style,
            })
        });
        VisualNode::PointPosition(PointPositionNode {
            size: Size::new(props.width, props.height),
            min_value: props.min_value,
            max_value: props.max_value,
            marker: props.marker,
            class: props.class.map(str::to_string),
            indicator,
        })
    }
}

/// Horizontal indicator position for `value`.
///
/// Degenerate bounds put the indicator at the left edge. Values outside the
/// range are clamped to the nearest edge. Non-finite values get no indicator.
fn indicator_x(width: f64, bounds: Range, value: f64) -> Option<f64> {
    if !value.is_finite() {
        warn!(value, "ignoring non-finite point position");
        return None;
    }
    let t = match bounds.normalize(value) {
        Some(t) => t,
        None => {
            warn!(
                min = bounds.min,
                max = bounds.max,
                "degenerate point position range"
            );
            0.0
        }
    };
    let clamped = t.clamp(0.0, 1.0);
    if clamped != t {
        warn!(value, min = bounds.min, max = bounds.max, "point position out of range");
    }
    Some(clamped * width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(min_value: f64, max_value: f64, marker: Option<f64>) -> PointPositionProps<'static> {
        PointPositionProps {
            width: 300.0,
            height: 600.0,
            min_value,
            max_value,
            marker,
            class: Some("Envelope"),
            style: LineStyle::default(),
        }
    }

    fn overlay(node: VisualNode) -> PointPositionNode {
        match node {
            VisualNode::PointPosition(overlay) => overlay,
            other => panic!("expected overlay, got {other:?}"),
        }
    }

    #[test]
    fn marker_is_interpolated() {
        let node = overlay(PointPositionOverlay::render(props(-10.0, 10.0, Some(5.0))));
        let line = node.indicator.expect("indicator");
        assert_eq!(line.start, Point::new(225.0, 0.0));
        assert_eq!(line.end, Point::new(225.0, 600.0));
    }

    #[test]
    fn equal_bounds_do_not_divide_by_zero() {
        let node = overlay(PointPositionOverlay::render(props(3.0, 3.0, Some(3.0))));
        assert_eq!(node.min_value, 3.0);
        assert_eq!(node.max_value, 3.0);
        let line = node.indicator.expect("indicator");
        assert_eq!(line.start.x, 0.0);
        assert!(line.start.x.is_finite());
    }

    #[test]
    fn out_of_range_marker_is_clamped() {
        let node = overlay(PointPositionOverlay::render(props(0.0, 5.0, Some(50.0))));
        assert_eq!(node.indicator.expect("indicator").start.x, 300.0);
        let node = overlay(PointPositionOverlay::render(props(0.0, 5.0, Some(-1.0))));
        assert_eq!(node.indicator.expect("indicator").start.x, 0.0);
    }

    #[test]
    fn no_marker_no_indicator() {
        let node = overlay(PointPositionOverlay::render(props(0.0, 5.0, None)));
        assert_eq!(node.indicator, None);
        assert_eq!(node.size, Size::new(300.0, 600.0));
        assert_eq!(node.class.as_deref(), Some("Envelope"));
    }

    #[test]
    fn nan_marker_is_recorded_without_indicator() {
        let node = overlay(PointPositionOverlay::render(props(0.0, 5.0, Some(f64::NAN))));
        assert!(node.marker.is_some_and(f64::is_nan));
        assert_eq!(node.indicator, None);
    }
}
