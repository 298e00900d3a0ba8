//! Histogram canvas entry points.

use tracing::debug;

use crate::error::PropsError;
use crate::geom::Point;
use crate::graph_body::{GraphBody, GraphBodyProps};
use crate::overlay::{PointPositionOverlay, PointPositionProps};
use crate::props::HistogramProps;
use crate::render::{VisualNode, VisualTree};
use crate::style::HistogramStyle;
use crate::view::HistogramViewModel;

/// Render a view model with the default style.
pub fn render(model: &HistogramViewModel) -> VisualTree {
    HistogramCanvas::new().render(model)
}

/// Stateless histogram renderer.
///
/// Holds only visual configuration; every call to [`HistogramCanvas::render`]
/// depends on nothing but the style and the view model passed in.
#[derive(Debug, Clone, Default)]
pub struct HistogramCanvas {
    style: HistogramStyle,
}

impl HistogramCanvas {
    /// Create a canvas with the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a canvas with custom configuration.
    pub fn builder() -> HistogramCanvasBuilder {
        HistogramCanvasBuilder::default()
    }

    /// Build the visual tree for one render pass.
    ///
    /// The root container holds the drawing surface (area plot and unit
    /// label) followed by the point position overlay at the same size.
    pub fn render(&self, model: &HistogramViewModel) -> VisualTree {
        debug!(
            points = model.data.len(),
            width = model.width,
            height = model.height,
            "rendering histogram"
        );
        let style = &self.style;

        let mut surface = GraphBody::render(GraphBodyProps {
            points: &model.data,
            origin_x: style.origin_x,
            origin_y: style.baseline_y,
            style: style.area(),
        });
        surface.push(VisualNode::Text {
            position: Point::new(
                model.width - style.label_offset_right,
                model.height - style.label_offset_bottom,
            ),
            text: model.unit.clone(),
            style: style.label(),
        });

        let overlay = PointPositionOverlay::render(PointPositionProps {
            width: model.width,
            height: model.height,
            min_value: model.min_value,
            max_value: model.max_value,
            marker: model.marker,
            class: Some(style.overlay_class.as_str()),
            style: style.marker(),
        });

        VisualTree::new(VisualNode::Container {
            class: None,
            children: vec![
                VisualNode::Surface {
                    size: model.size(),
                    class: None,
                    children: surface,
                },
                overlay,
            ],
        })
    }

    /// Validate JSON props and render them.
    pub fn render_json(&self, json: &str) -> Result<VisualTree, PropsError> {
        let model = HistogramProps::from_json(json)?;
        Ok(self.render(&model))
    }
}

/// Builder for configuring a canvas before construction.
#[derive(Debug, Default)]
pub struct HistogramCanvasBuilder {
    style: HistogramStyle,
}

impl HistogramCanvasBuilder {
    /// Replace the whole style.
    pub fn style(mut self, style: HistogramStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the area baseline.
    pub fn baseline_y(mut self, baseline_y: f64) -> Self {
        self.style.baseline_y = baseline_y;
        self
    }

    /// Fill the area with a vertical gradient.
    pub fn linear_gradient(mut self, enabled: bool) -> Self {
        self.style.use_linear_gradient = enabled;
        self
    }

    /// Set the overlay CSS class.
    pub fn overlay_class(mut self, class: impl Into<String>) -> Self {
        self.style.overlay_class = class.into();
        self
    }

    /// Build the canvas.
    pub fn build(self) -> HistogramCanvas {
        HistogramCanvas { style: self.style }
    }
}
