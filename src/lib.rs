//! histogram_canvas renders a histogram view model into a declarative visual
//! tree: an SVG surface with a filled area plot and a unit label, plus a point
//! position overlay sharing the same coordinate space.
//!
//! Rendering is a pure function of its inputs. Untrusted props are validated
//! once at the boundary by [`HistogramProps`].

#![forbid(unsafe_code)]

pub mod error;
pub mod geom;
pub mod graph_body;
pub mod histogram;
pub mod overlay;
pub mod props;
pub mod render;
pub mod style;
pub mod view;

pub use error::{Axis, PropsError, ValidationError};
pub use geom::{Point, Size};
pub use graph_body::{GraphBody, GraphBodyProps, gradient_id};
pub use histogram::{HistogramCanvas, HistogramCanvasBuilder, render};
pub use overlay::{PointPositionOverlay, PointPositionProps};
pub use props::{HistogramProps, validate_model};
pub use render::{
    AreaNode, AreaStyle, Color, LineNode, LineStyle, PointPositionNode, TextStyle, VisualNode,
    VisualTree,
};
pub use style::HistogramStyle;
pub use view::{HistogramViewModel, Range};
