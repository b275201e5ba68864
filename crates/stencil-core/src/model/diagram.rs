//! The diagram container and its source-space geometry records.
//!
//! All geometry here is in BPMN pixels: top-left origin, Y growing downward.

use indexmap::IndexMap;

use crate::{
    color::Color,
    geometry::{Bounds, Point},
    model::{DiagramElement, FlowEdge},
};

/// Per-shape color overrides from the BPMN color extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleOverrides {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
}

/// Recorded placement of an element.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    bounds: Bounds,
    horizontal: Option<bool>,
    label: Option<Bounds>,
    style: StyleOverrides,
}

impl ShapeGeometry {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            horizontal: None,
            label: None,
            style: StyleOverrides::default(),
        }
    }

    pub fn with_horizontal(mut self, horizontal: Option<bool>) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_label(mut self, label: Option<Bounds>) -> Self {
        self.label = label;
        self
    }

    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// The recorded orientation flag, if any.
    pub fn horizontal(&self) -> Option<bool> {
        self.horizontal
    }

    /// Orientation with the BPMN default applied: horizontal unless stated.
    pub fn is_horizontal(&self) -> bool {
        self.horizontal.unwrap_or(true)
    }

    /// The recorded detached label box, if any.
    pub fn label(&self) -> Option<&Bounds> {
        self.label.as_ref()
    }

    pub fn style(&self) -> &StyleOverrides {
        &self.style
    }
}

/// Recorded routing of a flow edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGeometry {
    waypoints: Vec<Point>,
    label: Option<Bounds>,
}

impl EdgeGeometry {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self {
            waypoints,
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<Bounds>) -> Self {
        self.label = label;
        self
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn label(&self) -> Option<&Bounds> {
        self.label.as_ref()
    }
}

/// A parsed BPMN diagram.
///
/// Elements and geometry keep document order. Lookups never fail hard:
/// missing ids simply return `None`.
///
/// # Examples
///
/// ```
/// use stencil_core::geometry::{Bounds, Point, Size};
/// use stencil_core::model::{Diagram, DiagramElement, ElementKind, ShapeGeometry};
///
/// let mut diagram = Diagram::default();
/// diagram.add_element(DiagramElement::new("Start_1", ElementKind::StartEvent(None), ""));
/// diagram.add_shape(
///     "Start_1",
///     ShapeGeometry::new(Bounds::new_from_top_left(
///         Point::new(100.0, 100.0),
///         Size::new(36.0, 36.0),
///     )),
/// );
///
/// assert!(!diagram.is_empty());
/// assert!(diagram.shape("Start_1").is_some());
/// assert!(diagram.shape("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    elements: IndexMap<String, DiagramElement>,
    flows: Vec<FlowEdge>,
    shapes: IndexMap<String, ShapeGeometry>,
    edges: IndexMap<String, EdgeGeometry>,
    pool_lanes: IndexMap<String, Vec<String>>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element, replacing any earlier element with the same id.
    pub fn add_element(&mut self, element: DiagramElement) {
        self.elements.insert(element.id().to_string(), element);
    }

    pub fn add_flow(&mut self, flow: FlowEdge) {
        self.flows.push(flow);
    }

    pub fn add_shape(&mut self, element_id: impl Into<String>, geometry: ShapeGeometry) {
        self.shapes.insert(element_id.into(), geometry);
    }

    pub fn add_edge(&mut self, flow_id: impl Into<String>, geometry: EdgeGeometry) {
        self.edges.insert(flow_id.into(), geometry);
    }

    /// Records the ordered lane list of a pool.
    pub fn set_pool_lanes(&mut self, pool_id: impl Into<String>, lanes: Vec<String>) {
        self.pool_lanes.insert(pool_id.into(), lanes);
    }

    /// Returns true if the diagram has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &DiagramElement> {
        self.elements.values()
    }

    pub fn element(&self, id: &str) -> Option<&DiagramElement> {
        self.elements.get(id)
    }

    pub fn elements_len(&self) -> usize {
        self.elements.len()
    }

    pub fn flows(&self) -> &[FlowEdge] {
        &self.flows
    }

    pub fn shape(&self, element_id: &str) -> Option<&ShapeGeometry> {
        self.shapes.get(element_id)
    }

    pub fn shapes(&self) -> impl Iterator<Item = (&str, &ShapeGeometry)> {
        self.shapes.iter().map(|(id, shape)| (id.as_str(), shape))
    }

    pub fn edge(&self, flow_id: &str) -> Option<&EdgeGeometry> {
        self.edges.get(flow_id)
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &EdgeGeometry)> {
        self.edges.iter().map(|(id, edge)| (id.as_str(), edge))
    }

    /// Returns the recorded lane list of a pool.
    pub fn pool_lanes(&self, pool_id: &str) -> Option<&[String]> {
        self.pool_lanes.get(pool_id).map(Vec::as_slice)
    }

    /// Iterates over every pool that has a recorded lane list.
    pub fn pools_with_lanes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.pool_lanes
            .iter()
            .map(|(pool, lanes)| (pool.as_str(), lanes.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::Size,
        model::{ElementKind, FlowKind},
    };

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_empty_diagram() {
        let diagram = Diagram::new();
        assert!(diagram.is_empty());
        assert_eq!(diagram.elements().count(), 0);
        assert!(diagram.flows().is_empty());
    }

    #[test]
    fn test_elements_keep_document_order() {
        let mut diagram = Diagram::new();
        for id in ["Task_b", "Task_a", "Task_c"] {
            diagram.add_element(DiagramElement::new(
                id,
                ElementKind::Task(crate::model::ActivityKind::Task),
                "",
            ));
        }
        let ids: Vec<_> = diagram.elements().map(DiagramElement::id).collect();
        assert_eq!(ids, ["Task_b", "Task_a", "Task_c"]);
    }

    #[test]
    fn test_pool_lanes() {
        let mut diagram = Diagram::new();
        diagram.set_pool_lanes("Pool_1", vec!["Lane_1".into(), "Lane_2".into()]);

        assert_eq!(
            diagram.pool_lanes("Pool_1"),
            Some(&["Lane_1".to_string(), "Lane_2".to_string()][..])
        );
        assert_eq!(diagram.pool_lanes("Pool_2"), None);
        assert_eq!(diagram.pools_with_lanes().count(), 1);
    }

    #[test]
    fn test_shape_orientation_default() {
        let shape = ShapeGeometry::new(bounds(0.0, 0.0, 600.0, 200.0));
        assert_eq!(shape.horizontal(), None);
        assert!(shape.is_horizontal());

        let vertical = shape.with_horizontal(Some(false));
        assert!(!vertical.is_horizontal());
    }

    #[test]
    fn test_edges_and_flows() {
        let mut diagram = Diagram::new();
        diagram.add_flow(FlowEdge::new(
            "Flow_1",
            FlowKind::Sequence,
            "A",
            "missing",
            "",
        ));
        diagram.add_edge(
            "Flow_1",
            EdgeGeometry::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
                .with_label(Some(bounds(2.0, 2.0, 40.0, 14.0))),
        );

        let edge = diagram.edge("Flow_1").unwrap();
        assert_eq!(edge.waypoints().len(), 2);
        assert!(edge.label().is_some());
        assert_eq!(diagram.flows()[0].target(), "missing");
    }
}
