//! Example: Building a page from the diagram model
//!
//! This example shows how to assemble a diagram in code, without reading
//! BPMN XML, and package it as a Visio file.

use stencil::{
    Converter,
    geometry::{Bounds, Point, Size},
    model::{
        ActivityKind, Diagram, DiagramElement, EdgeGeometry, ElementKind, FlowEdge, FlowKind,
        GatewayKind, ShapeGeometry,
    },
};

fn shape(x: f64, y: f64, width: f64, height: f64) -> ShapeGeometry {
    ShapeGeometry::new(Bounds::new_from_top_left(
        Point::new(x, y),
        Size::new(width, height),
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut diagram = Diagram::new();

    diagram.add_element(DiagramElement::new(
        "start",
        ElementKind::StartEvent(None),
        "Request",
    ));
    diagram.add_element(DiagramElement::new(
        "review",
        ElementKind::Task(ActivityKind::User),
        "Review request",
    ));
    diagram.add_element(DiagramElement::new(
        "decide",
        ElementKind::Gateway(GatewayKind::Exclusive),
        "Approved?",
    ));

    diagram.add_shape("start", shape(100.0, 122.0, 36.0, 36.0));
    diagram.add_shape("review", shape(200.0, 100.0, 100.0, 80.0));
    diagram.add_shape("decide", shape(360.0, 115.0, 50.0, 50.0));

    diagram.add_flow(FlowEdge::new(
        "f1",
        FlowKind::Sequence,
        "start",
        "review",
        "",
    ));
    diagram.add_flow(FlowEdge::new(
        "f2",
        FlowKind::Sequence,
        "review",
        "decide",
        "",
    ));
    diagram.add_edge(
        "f1",
        EdgeGeometry::new(vec![Point::new(136.0, 140.0), Point::new(200.0, 140.0)]),
    );
    diagram.add_edge(
        "f2",
        EdgeGeometry::new(vec![Point::new(300.0, 140.0), Point::new(360.0, 140.0)]),
    );

    let converter = Converter::default();
    let page = converter.compile(&diagram);
    println!(
        "Page {} x {} in with {} shapes",
        page.size().width(),
        page.size().height(),
        page.shapes().len()
    );

    let bytes = converter.render_vsdx(&page, "Review")?;
    let path = std::env::temp_dir().join("review.vsdx");
    std::fs::write(&path, bytes)?;
    println!("Written to {}", path.display());

    Ok(())
}
