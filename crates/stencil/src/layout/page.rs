//! Page assembly.

use log::{debug, info, warn};

use stencil_core::{
    draw::ShapePrimitive,
    geometry::Size,
    model::{Diagram, ShapeCategory},
};

use super::{HeaderBands, PageFrame, connector, diagram_extent, shapes::ShapeBuilder};
use crate::config::AppConfig;

/// A compiled page: its size and every shape in drawing order.
///
/// Shape IDs run from 1 in drawing order, which is also z-order: pools,
/// lanes, node shapes (each followed by its label), annotations and finally
/// connectors.
#[derive(Debug, Clone)]
pub struct Page {
    size: Size,
    shapes: Vec<ShapePrimitive>,
}

impl Page {
    /// Page size in inches.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn shapes(&self) -> &[ShapePrimitive] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Compiles a diagram into a page.
///
/// Elements without recorded geometry and flows without a route produce no
/// shape. Nothing in the diagram can make this fail.
pub fn assemble(diagram: &Diagram, config: &AppConfig) -> Page {
    let frame = PageFrame::fit(diagram_extent(diagram), config.page());
    let bands = HeaderBands::measure(diagram, config.shapes().header_band_px());
    let builder = ShapeBuilder::new(&frame, &bands, config);
    debug!(page:? = frame.page_size(), offset:? = frame.offset(); "Page fitted");

    let mut pools = Vec::new();
    let mut lanes = Vec::new();
    let mut nodes = Vec::new();
    let mut annotations = Vec::new();

    for element in diagram.elements() {
        let Some(geometry) = diagram.shape(element.id()) else {
            debug!(id = element.id(); "Element has no shape");
            continue;
        };
        if bands.is_hidden(element.id()) {
            continue;
        }

        let built = builder.build(element, geometry);
        match element.category() {
            ShapeCategory::Pool => pools.push(built.host),
            ShapeCategory::Lane => lanes.push(built.host),
            ShapeCategory::Annotation => annotations.push(built.host),
            _ => {
                nodes.push(built.host);
                nodes.extend(built.label);
            }
        }
    }

    let mut connectors = Vec::new();
    for flow in diagram.flows() {
        for endpoint in [flow.source(), flow.target()] {
            if diagram.element(endpoint).is_none() {
                warn!(flow = flow.id(), endpoint = endpoint; "Flow endpoint not found");
            }
        }
        let Some(edge) = diagram.edge(flow.id()) else {
            debug!(flow = flow.id(); "Flow has no route");
            continue;
        };
        connectors.extend(connector::build(flow, edge, &frame, config.connectors()));
    }

    let mut shapes: Vec<ShapePrimitive> = pools
        .into_iter()
        .chain(lanes)
        .chain(nodes)
        .chain(annotations)
        .chain(connectors)
        .collect();
    for (index, shape) in shapes.iter_mut().enumerate() {
        shape.set_id(index as u32 + 1);
    }

    info!(shapes_len = shapes.len(); "Page assembled");
    Page {
        size: frame.page_size(),
        shapes,
    }
}
