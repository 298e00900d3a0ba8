//! Markup output for visual trees.

use std::fmt::{self, Write};

use super::{AreaNode, Color, LineNode, PointPositionNode, TextStyle, VisualNode};
use crate::geom::{Point, Size};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Write a node and its children as an HTML/SVG fragment.
pub fn to_markup(node: &VisualNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node).expect("writing to a String never fails");
    out
}

/// Write a node and its children into any formatter sink.
pub fn write_node(out: &mut impl Write, node: &VisualNode) -> fmt::Result {
    match node {
        VisualNode::Container { class, children } => {
            out.write_str("<div")?;
            write_class(out, class.as_deref())?;
            out.write_char('>')?;
            for child in children {
                write_node(out, child)?;
            }
            out.write_str("</div>")
        }
        VisualNode::Surface {
            size,
            class,
            children,
        } => {
            open_svg(out, *size, class.as_deref())?;
            out.write_char('>')?;
            for child in children {
                write_node(out, child)?;
            }
            out.write_str("</svg>")
        }
        VisualNode::LinearGradient { id, color } => write_gradient(out, id, *color),
        VisualNode::Area(area) => write_area(out, area),
        VisualNode::Line(line) => write_line(out, line),
        VisualNode::Text {
            position,
            text,
            style,
        } => write_text(out, *position, text, style),
        VisualNode::PointPosition(overlay) => write_point_position(out, overlay),
    }
}

fn open_svg(out: &mut impl Write, size: Size, class: Option<&str>) -> fmt::Result {
    write!(
        out,
        "<svg xmlns=\"{SVG_NS}\" width=\"{}\" height=\"{}\"",
        size.width, size.height
    )?;
    write_class(out, class)
}

fn write_class(out: &mut impl Write, class: Option<&str>) -> fmt::Result {
    match class {
        Some(class) => write!(out, " class=\"{}\"", escape(class)),
        None => Ok(()),
    }
}

fn write_gradient(out: &mut impl Write, id: &str, color: Color) -> fmt::Result {
    let color = color.to_css();
    write!(
        out,
        "<defs><linearGradient id=\"{}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"0%\" stop-color=\"{color}\" stop-opacity=\"1\"/>\
         <stop offset=\"100%\" stop-color=\"{color}\" stop-opacity=\"0\"/>\
         </linearGradient></defs>",
        escape(id)
    )
}

fn write_area(out: &mut impl Write, area: &AreaNode) -> fmt::Result {
    let style = area.style;
    let stroke = style.color.to_css();
    let fill = match (&area.gradient, style.filled) {
        (_, false) => "none".to_string(),
        (Some(id), true) => format!("url(#{})", escape(id)),
        (None, true) => stroke.clone(),
    };
    write!(out, "<path d=\"{}\" fill=\"{fill}\"", area.path_data())?;
    if style.filled {
        write!(out, " fill-opacity=\"{}\"", style.fill_opacity)?;
    }
    write!(
        out,
        " stroke=\"{stroke}\" stroke-width=\"{}\"/>",
        style.stroke_width
    )
}

fn write_line(out: &mut impl Write, line: &LineNode) -> fmt::Result {
    write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        line.start.x,
        line.start.y,
        line.end.x,
        line.end.y,
        line.style.color.to_css(),
        line.style.width
    )
}

fn write_text(out: &mut impl Write, position: Point, text: &str, style: &TextStyle) -> fmt::Result {
    write!(
        out,
        "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        position.x,
        position.y,
        escape(&style.font_family),
        style.size,
        style.color.to_css(),
        escape(text)
    )
}

fn write_point_position(out: &mut impl Write, overlay: &PointPositionNode) -> fmt::Result {
    open_svg(out, overlay.size, overlay.class.as_deref())?;
    write!(
        out,
        " data-min-value=\"{}\" data-max-value=\"{}\"",
        overlay.min_value, overlay.max_value
    )?;
    if let Some(marker) = overlay.marker {
        write!(out, " data-marker=\"{marker}\"")?;
    }
    out.write_char('>')?;
    if let Some(indicator) = &overlay.indicator {
        write_line(out, indicator)?;
    }
    out.write_str("</svg>")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{AreaStyle, LineStyle};

    #[test]
    fn escapes_text_content() {
        let node = VisualNode::Text {
            position: Point::new(260.0, 590.0),
            text: "<m/s> & \"more\"".to_string(),
            style: TextStyle::default(),
        };
        assert_eq!(
            to_markup(&node),
            "<text x=\"260\" y=\"590\" font-family=\"Verdana\" font-size=\"10\" \
             fill=\"#ffffff\">&lt;m/s&gt; &amp; &quot;more&quot;</text>"
        );
    }

    #[test]
    fn solid_area() {
        let node = VisualNode::Area(AreaNode {
            origin: Point::new(0.0, 600.0),
            points: vec![Point::new(10.0, 20.0)],
            style: AreaStyle::default(),
            gradient: None,
        });
        assert_eq!(
            to_markup(&node),
            "<path d=\"M0 600 L10 20 L10 600 Z\" fill=\"#0000ff\" fill-opacity=\"0.5\" \
             stroke=\"#0000ff\" stroke-width=\"1\"/>"
        );
    }

    #[test]
    fn unfilled_area_has_no_fill() {
        let node = VisualNode::Area(AreaNode {
            origin: Point::new(0.0, 600.0),
            points: Vec::new(),
            style: AreaStyle {
                filled: false,
                ..AreaStyle::default()
            },
            gradient: None,
        });
        let markup = to_markup(&node);
        assert!(markup.starts_with("<path d=\"\" fill=\"none\" stroke="));
        assert!(!markup.contains("fill-opacity"));
    }

    #[test]
    fn gradient_fill_references_definition() {
        let surface = VisualNode::Surface {
            size: Size::new(10.0, 10.0),
            class: None,
            children: vec![
                VisualNode::LinearGradient {
                    id: "fade".to_string(),
                    color: Color::BLUE,
                },
                VisualNode::Area(AreaNode {
                    origin: Point::new(0.0, 10.0),
                    points: vec![Point::new(5.0, 5.0)],
                    style: AreaStyle {
                        use_linear_gradient: true,
                        ..AreaStyle::default()
                    },
                    gradient: Some("fade".to_string()),
                }),
            ],
        };
        let markup = to_markup(&surface);
        assert!(markup.contains("<linearGradient id=\"fade\""));
        assert!(markup.contains("fill=\"url(#fade)\""));
        assert_eq!(markup.matches("fill-opacity").count(), 1);
        assert!(markup.contains("stop-color=\"#0000ff\" stop-opacity=\"1\""));
    }

    #[test]
    fn writes_into_any_sink() {
        let node = VisualNode::Container {
            class: Some("a&b".to_string()),
            children: Vec::new(),
        };
        let mut out = String::from("prefix:");
        write_node(&mut out, &node).expect("write to string");
        assert_eq!(out, "prefix:<div class=\"a&amp;b\"></div>");
    }

    #[test]
    fn overlay_carries_bounds() {
        let node = VisualNode::PointPosition(PointPositionNode {
            size: Size::new(300.0, 600.0),
            min_value: -10.0,
            max_value: 10.0,
            marker: Some(0.0),
            class: Some("Envelope".to_string()),
            indicator: Some(LineNode {
                start: Point::new(150.0, 0.0),
                end: Point::new(150.0, 600.0),
                style: LineStyle::default(),
            }),
        });
        assert_eq!(
            to_markup(&node),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"600\" \
             class=\"Envelope\" data-min-value=\"-10\" data-max-value=\"10\" data-marker=\"0\">\
             <line x1=\"150\" y1=\"0\" x2=\"150\" y2=\"600\" stroke=\"#000000\" \
             stroke-width=\"1\"/></svg>"
        );
    }
}
