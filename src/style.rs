//! Visual constants for the histogram canvas.

use serde::{Deserialize, Serialize};

use crate::render::{AreaStyle, Color, LineStyle, TextStyle};

/// Visual configuration for a histogram canvas.
///
/// The default reproduces the stock canvas look. Every field can be
/// overridden from a partial JSON document with [`HistogramStyle::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistogramStyle {
    /// X coordinate the area outline starts from.
    pub origin_x: f64,
    /// Y coordinate of the area baseline, in surface units.
    pub baseline_y: f64,
    /// Area fill and stroke color.
    pub fill: Color,
    /// Area fill opacity.
    pub fill_opacity: f32,
    /// Area stroke width.
    pub stroke_width: f32,
    /// Fill the area with a vertical gradient.
    pub use_linear_gradient: bool,
    /// Fill the area at all.
    pub filled: bool,
    /// Distance from the right edge to the label start.
    pub label_offset_right: f64,
    /// Distance from the bottom edge to the label baseline.
    pub label_offset_bottom: f64,
    /// Label font family.
    pub label_font_family: String,
    /// Label font size in pixels.
    pub label_font_size: f32,
    /// Label color.
    pub label_color: Color,
    /// CSS class applied to the point position overlay.
    pub overlay_class: String,
    /// Overlay indicator color.
    pub overlay_marker_color: Color,
    /// Overlay indicator width.
    pub overlay_marker_width: f32,
}

impl Default for HistogramStyle {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            baseline_y: 600.0,
            fill: Color::BLUE,
            fill_opacity: 0.5,
            stroke_width: 1.0,
            use_linear_gradient: false,
            filled: true,
            label_offset_right: 40.0,
            label_offset_bottom: 10.0,
            label_font_family: "Verdana".to_string(),
            label_font_size: 10.0,
            label_color: Color::WHITE,
            overlay_class: "Envelope".to_string(),
            overlay_marker_color: Color::RED,
            overlay_marker_width: 1.0,
        }
    }
}

impl HistogramStyle {
    /// Parse a style from JSON, keeping defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Styling handed to the area renderer.
    pub fn area(&self) -> AreaStyle {
        AreaStyle {
            filled: self.filled,
            use_linear_gradient: self.use_linear_gradient,
            color: self.fill,
            fill_opacity: self.fill_opacity,
            stroke_width: self.stroke_width,
        }
    }

    /// Styling for the unit label.
    pub fn label(&self) -> TextStyle {
        TextStyle {
            font_family: self.label_font_family.clone(),
            size: self.label_font_size,
            color: self.label_color,
        }
    }

    /// Styling for the overlay indicator.
    pub fn marker(&self) -> LineStyle {
        LineStyle {
            color: self.overlay_marker_color,
            width: self.overlay_marker_width,
        }
    }
}
