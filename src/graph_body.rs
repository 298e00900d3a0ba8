//! Area shape builder for plotted samples.

use tracing::trace;

use crate::geom::Point;
use crate::render::{AreaNode, AreaStyle, Color, VisualNode};

/// Inputs consumed by [`GraphBody::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphBodyProps<'a> {
    /// Samples in path order.
    pub points: &'a [Point],
    /// X coordinate of the outline anchor.
    pub origin_x: f64,
    /// Y coordinate of the baseline.
    pub origin_y: f64,
    /// Shape styling.
    pub style: AreaStyle,
}

/// Builds the filled area under a sequence of points.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBody;

impl GraphBody {
    /// Build the nodes for one area.
    ///
    /// Returns the area node, preceded by its gradient definition when the
    /// style asks for one.
    pub fn render(props: GraphBodyProps<'_>) -> Vec<VisualNode> {
        trace!(points = props.points.len(), "building graph body");
        let gradient = (props.style.use_linear_gradient && props.style.filled)
            .then(|| gradient_id(props.style.color));
        let mut nodes = Vec::with_capacity(2);
        if let Some(id) = &gradient {
            nodes.push(VisualNode::LinearGradient {
                id: id.clone(),
                color: props.style.color,
            });
        }
        nodes.push(VisualNode::Area(AreaNode {
            origin: Point::new(props.origin_x, props.origin_y),
            points: props.points.to_vec(),
            style: props.style,
            gradient,
        }));
        nodes
    }
}

/// Gradient definition id for a fill color.
///
/// Equal colors share a definition; different colors on the same page never
/// collide.
pub fn gradient_id(color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    format!("graph-body-gradient-{r:02x}{g:02x}{b:02x}{a:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_area_is_single_node() {
        let points = [Point::new(1.0, 2.0)];
        let nodes = GraphBody::render(GraphBodyProps {
            points: &points,
            origin_x: 0.0,
            origin_y: 600.0,
            style: AreaStyle::default(),
        });
        assert_eq!(nodes.len(), 1);
        let VisualNode::Area(area) = &nodes[0] else {
            panic!("expected area node");
        };
        assert_eq!(area.origin, Point::new(0.0, 600.0));
        assert_eq!(area.points, points);
        assert_eq!(area.gradient, None);
    }

    #[test]
    fn gradient_area_emits_definition_first() {
        let nodes = GraphBody::render(GraphBodyProps {
            points: &[],
            origin_x: 0.0,
            origin_y: 100.0,
            style: AreaStyle {
                use_linear_gradient: true,
                ..AreaStyle::default()
            },
        });
        assert_eq!(nodes.len(), 2);
        let expected = gradient_id(Color::BLUE);
        assert!(matches!(
            &nodes[0],
            VisualNode::LinearGradient { id, color } if *id == expected && *color == Color::BLUE
        ));
        let VisualNode::Area(area) = &nodes[1] else {
            panic!("expected area node");
        };
        assert_eq!(area.gradient, Some(expected));
    }

    #[test]
    fn gradient_ids_follow_color() {
        assert_eq!(gradient_id(Color::BLUE), "graph-body-gradient-0000ffff");
        assert_eq!(gradient_id(Color::BLUE), gradient_id(Color::new(0.0, 0.0, 1.0, 1.0)));
        assert_ne!(gradient_id(Color::BLUE), gradient_id(Color::RED));
    }

    #[test]
    fn unfilled_area_ignores_gradient() {
        let nodes = GraphBody::render(GraphBodyProps {
            points: &[],
            origin_x: 0.0,
            origin_y: 100.0,
            style: AreaStyle {
                filled: false,
                use_linear_gradient: true,
                ..AreaStyle::default()
            },
        });
        assert_eq!(nodes.len(), 1);
    }
}
