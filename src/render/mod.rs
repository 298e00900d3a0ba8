//! Visual tree primitives.
//!
//! These types are backend-agnostic. A render pass produces a [`VisualTree`];
//! the [`svg`] module writes it as markup, and other consumers can walk the
//! nodes directly.

pub mod svg;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Size};

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range. Serialized as a
/// `[r, g, b, a]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// 8-bit channels, clamped into range.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(..)` otherwise.
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r},{g},{b},{})", self.a.clamp(0.0, 1.0))
        }
    }
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Styling for a filled area shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaStyle {
    /// Fill the closed shape; when false only the outline is stroked.
    pub filled: bool,
    /// Fill with a vertical gradient instead of a solid color.
    pub use_linear_gradient: bool,
    /// Fill and stroke color.
    pub color: Color,
    /// Fill opacity.
    pub fill_opacity: f32,
    /// Stroke width in pixels.
    pub stroke_width: f32,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            filled: true,
            use_linear_gradient: false,
            color: Color::BLUE,
            fill_opacity: 0.5,
            stroke_width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name.
    pub font_family: String,
    /// Font size in pixels.
    pub size: f32,
    /// Fill color.
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Verdana".to_string(),
            size: 10.0,
            color: Color::WHITE,
        }
    }
}

/// A closed area anchored at a baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaNode {
    /// Anchor point the outline starts from and returns to.
    pub origin: Point,
    /// Samples in path order.
    pub points: Vec<Point>,
    /// Shape styling.
    pub style: AreaStyle,
    /// Id of a gradient definition referenced by the fill.
    pub gradient: Option<String>,
}

impl AreaNode {
    /// SVG path data for the outline.
    ///
    /// Starts at the origin, runs through every point in order, drops back to
    /// the baseline under the last point, and closes. Empty when there are no
    /// points.
    pub fn path_data(&self) -> String {
        let Some(last) = self.points.last() else {
            return String::new();
        };
        let mut d = format!("M{} {}", self.origin.x, self.origin.y);
        for point in &self.points {
            d.push_str(&format!(" L{} {}", point.x, point.y));
        }
        d.push_str(&format!(" L{} {} Z", last.x, self.origin.y));
        d
    }
}

/// The positional indicator overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPositionNode {
    /// Overlay size; matches the histogram surface.
    pub size: Size,
    /// Lower scale bound, as received.
    pub min_value: f64,
    /// Upper scale bound, as received.
    pub max_value: f64,
    /// Indicator value, as received.
    pub marker: Option<f64>,
    /// CSS class applied to the overlay element.
    pub class: Option<String>,
    /// Vertical indicator line, present when a marker was given.
    pub indicator: Option<LineNode>,
}

/// A straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineNode {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// Stroke styling.
    pub style: LineStyle,
}

/// A node of the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualNode {
    /// Layout container with no drawing of its own.
    Container {
        /// Optional CSS class.
        class: Option<String>,
        /// Child nodes in paint order.
        children: Vec<VisualNode>,
    },
    /// A drawing surface of fixed size.
    Surface {
        /// Surface dimensions.
        size: Size,
        /// Optional CSS class.
        class: Option<String>,
        /// Child nodes in paint order.
        children: Vec<VisualNode>,
    },
    /// Vertical gradient from opaque `color` at the top to transparent at the
    /// bottom. The area's fill opacity is applied on top by the referencing
    /// shape, not by the gradient.
    LinearGradient {
        /// Definition id referenced by fills.
        id: String,
        /// Gradient start color.
        color: Color,
    },
    /// Filled or stroked area.
    Area(AreaNode),
    /// Line segment.
    Line(LineNode),
    /// A text run.
    Text {
        /// Baseline start position.
        position: Point,
        /// Text content, unmodified.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
    /// Point position overlay.
    PointPosition(PointPositionNode),
}

impl VisualNode {
    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[VisualNode] {
        match self {
            Self::Container { children, .. } | Self::Surface { children, .. } => children,
            _ => &[],
        }
    }
}

/// Result of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualTree {
    root: VisualNode,
}

impl VisualTree {
    /// Wrap a root node.
    pub fn new(root: VisualNode) -> Self {
        Self { root }
    }

    /// Access the root node.
    pub fn root(&self) -> &VisualNode {
        &self.root
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> Vec<&VisualNode> {
        let mut out = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// The first drawing surface.
    pub fn surface(&self) -> Option<(Size, &[VisualNode])> {
        self.nodes().into_iter().find_map(|node| match node {
            VisualNode::Surface { size, children, .. } => Some((*size, children.as_slice())),
            _ => None,
        })
    }

    /// The first area shape.
    pub fn area(&self) -> Option<&AreaNode> {
        self.nodes().into_iter().find_map(|node| match node {
            VisualNode::Area(area) => Some(area),
            _ => None,
        })
    }

    /// The first text run as `(position, text)`.
    pub fn label(&self) -> Option<(Point, &str)> {
        self.nodes().into_iter().find_map(|node| match node {
            VisualNode::Text { position, text, .. } => Some((*position, text.as_str())),
            _ => None,
        })
    }

    /// The point position overlay.
    pub fn overlay(&self) -> Option<&PointPositionNode> {
        self.nodes().into_iter().find_map(|node| match node {
            VisualNode::PointPosition(overlay) => Some(overlay),
            _ => None,
        })
    }

    /// Write the tree as a markup fragment.
    pub fn to_markup(&self) -> String {
        svg::to_markup(&self.root)
    }
}
