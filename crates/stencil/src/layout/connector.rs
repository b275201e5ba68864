//! Flow connectors.
//!
//! Connectors are emitted as two-dimensional shapes whose box covers every
//! waypoint and, when present, the recorded label box. Waypoints and the
//! arrowhead are expressed relative to the box's bottom-left corner.

use log::{debug, trace};

use stencil_core::{
    draw::{
        Arrowhead, FillDefinition, RoundedPolyline, ShapePrimitive, ShapeRole, StrokeDefinition,
        TextBlock, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
    model::{EdgeGeometry, FlowEdge, FlowKind},
};

use super::PageFrame;
use crate::config::ConnectorConfig;

/// Smallest width or height of a connector box, in inches.
const MIN_EXTENT: f64 = 0.01;

/// Builds the connector of a flow, or `None` when it has fewer than two
/// waypoints.
pub(crate) fn build(
    flow: &FlowEdge,
    edge: &EdgeGeometry,
    frame: &PageFrame,
    config: &ConnectorConfig,
) -> Option<ShapePrimitive> {
    let points: Vec<Point> = edge
        .waypoints()
        .iter()
        .map(|p| frame.to_page(*p))
        .collect();
    if points.len() < 2 {
        debug!(flow = flow.id(), waypoints_len = points.len(); "Skipping flow without a route");
        return None;
    }

    let style = config.style(flow.kind());
    let text = if style.label_color.is_some() {
        flow.name()
    } else {
        ""
    };

    // Recorded label box on the page, when the flow has text to place.
    let label_box = edge
        .label()
        .filter(|_| !text.is_empty())
        .map(|label| {
            Bounds::new_from_center(frame.to_page(label.center()), frame.size(label.size()))
        });

    let mut bbox = Bounds::from_points(&points)?;
    if let Some(label) = &label_box {
        bbox = bbox.merge(label);
    }

    let size = Size::new(bbox.width().max(MIN_EXTENT), bbox.height().max(MIN_EXTENT));
    let origin = bbox.min_point();
    let local: Vec<Point> = points.iter().map(|p| p.sub_point(origin)).collect();

    let mut paths = Vec::with_capacity(2);
    paths.extend(RoundedPolyline::new(config.rounding()).path(&local));
    if style.arrow {
        let arrowhead = Arrowhead::new(config.arrow_length(), config.arrow_width_ratio());
        let last = local.len() - 1;
        paths.extend(arrowhead.path(local[last - 1], local[last]));
    }

    let text_block = match &label_box {
        Some(label) => TextBlock::new(
            label.center().sub_point(origin),
            label.size().at_least(Size::new(
                config.label_min_width(),
                config.label_min_height(),
            )),
        ),
        None => TextBlock::new(
            size.center(),
            size.at_least(Size::new(
                config.fallback_label_min_width(),
                config.fallback_label_min_height(),
            )),
        ),
    };

    let role = match flow.kind() {
        FlowKind::Sequence => ShapeRole::Connector,
        FlowKind::Message => ShapeRole::MessageFlow,
        FlowKind::Association => ShapeRole::Association,
    };

    let mut shape = ShapePrimitive::new(
        role,
        bbox.center().round4(),
        size.round4(),
        FillDefinition::solid(style.color),
        StrokeDefinition::new(style.color, style.weight).with_pattern(style.pattern),
    )
    .with_text_block(text_block)
    .with_paths(paths)
    .with_text(text);

    if let Some(color) = style.label_color.filter(|_| !text.is_empty()) {
        shape = shape.with_text_def(TextDefinition::new(config.label_font_size(), color));
    }

    trace!(flow = flow.id(), role:? = role, pin:? = shape.pin(); "Connector");
    Some(shape)
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::config::PageConfig;
    use stencil_core::draw::{LinePattern, PathCommand};

    fn frame() -> PageFrame {
        let extent = Bounds::new_from_top_left(Point::new(100.0, 100.0), Size::new(236.0, 36.0));
        PageFrame::fit(Some(extent), &PageConfig::default())
    }

    fn flow(kind: FlowKind, name: &str) -> FlowEdge {
        FlowEdge::new("Flow_1", kind, "A", "B", name)
    }

    fn straight() -> EdgeGeometry {
        EdgeGeometry::new(vec![Point::new(136.0, 118.0), Point::new(300.0, 118.0)])
    }

    #[test]
    fn test_straight_sequence_flow() {
        let shape = build(
            &flow(FlowKind::Sequence, ""),
            &straight(),
            &frame(),
            &ConnectorConfig::default(),
        )
        .unwrap();

        assert_eq!(shape.role(), ShapeRole::Connector);
        assert_eq!(shape.paths().len(), 2);
        assert!(!shape.paths()[0].has_arc());
        assert!(!shape.paths()[0].is_filled());
        assert!(shape.paths()[1].is_filled());
        // Horizontal line: height floored, width is the run.
        assert_eq!(shape.size().height(), 0.01);
        assert_eq!(shape.size().width(), 1.7083);
        assert_eq!(shape.fill().color().to_hex(), "#555555");
        assert!(shape.text_def().is_none());
        assert_eq!(shape.text(), None);
    }

    #[test]
    fn test_local_coordinates_start_at_box_corner() {
        let edge = EdgeGeometry::new(vec![
            Point::new(136.0, 118.0),
            Point::new(200.0, 118.0),
            Point::new(200.0, 200.0),
        ]);
        let shape = build(
            &flow(FlowKind::Sequence, ""),
            &edge,
            &frame(),
            &ConnectorConfig::default(),
        )
        .unwrap();

        let PathCommand::MoveTo(start) = shape.paths()[0].commands()[0] else {
            panic!("path must start with MoveTo");
        };
        assert!(approx_eq!(f64, start.x(), 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, start.y(), shape.size().height(), epsilon = 1e-4));
        assert!(shape.paths()[0].has_arc());
    }

    #[test]
    fn test_message_flow_is_dashed() {
        let shape = build(
            &flow(FlowKind::Message, "Order"),
            &straight(),
            &frame(),
            &ConnectorConfig::default(),
        )
        .unwrap();
        assert_eq!(shape.role(), ShapeRole::MessageFlow);
        assert_eq!(shape.stroke().pattern(), LinePattern::Dashed);
        assert_eq!(shape.text(), Some("Order"));
        assert_eq!(shape.text_def().unwrap().color().to_hex(), "#555555");
        assert_eq!(shape.text_def().unwrap().font_size(), 7.0);
    }

    #[test]
    fn test_association_has_no_arrow_or_text() {
        let shape = build(
            &flow(FlowKind::Association, "ignored"),
            &straight().with_label(Some(Bounds::new_from_top_left(
                Point::new(150.0, 40.0),
                Size::new(40.0, 14.0),
            ))),
            &frame(),
            &ConnectorConfig::default(),
        )
        .unwrap();
        assert_eq!(shape.role(), ShapeRole::Association);
        assert_eq!(shape.paths().len(), 1);
        assert_eq!(shape.stroke().pattern(), LinePattern::DashDot);
        assert_eq!(shape.text(), None);
        // The label box is ignored, so the box stays flat.
        assert_eq!(shape.size().height(), 0.01);
    }

    #[test]
    fn test_label_box_expands_connector() {
        let label = Bounds::new_from_top_left(Point::new(150.0, 60.0), Size::new(40.0, 14.0));
        let shape = build(
            &flow(FlowKind::Sequence, "yes"),
            &straight().with_label(Some(label)),
            &frame(),
            &ConnectorConfig::default(),
        )
        .unwrap();

        // From the label top (60 px) down to the line (118 px).
        assert!(approx_eq!(f64, shape.size().height(), 58.0 / 96.0, epsilon = 1e-4));
        let block = shape.text_block().unwrap();
        // 40 x 14 px floored at 0.4 x 0.2 in.
        assert!(approx_eq!(f64, block.size().width(), 0.4167, epsilon = 1e-4));
        assert_eq!(block.size().height(), 0.2);
        assert!(approx_eq!(f64, block.pin().y(), shape.size().height() - 7.0 / 96.0, epsilon = 1e-4));
        assert_eq!(shape.text_def().unwrap().color().to_hex(), "#333333");
    }

    #[test]
    fn test_fallback_text_block() {
        let shape = build(
            &flow(FlowKind::Sequence, "no"),
            &straight(),
            &frame(),
            &ConnectorConfig::default(),
        )
        .unwrap();
        let block = shape.text_block().unwrap();
        assert_eq!(block.size().height(), 0.3);
        assert!(approx_eq!(f64, block.pin().y(), 0.005, epsilon = 1e-9));
    }

    #[test]
    fn test_short_route_is_skipped() {
        let edge = EdgeGeometry::new(vec![Point::new(136.0, 118.0)]);
        let shape = build(
            &flow(FlowKind::Sequence, ""),
            &edge,
            &frame(),
            &ConnectorConfig::default(),
        );
        assert!(shape.is_none());
    }
}
