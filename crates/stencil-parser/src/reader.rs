//! BPMN 2.0 XML reader.
//!
//! Walks a `roxmltree` document in three passes: flow nodes and flows, the
//! participant/process/lane hierarchy, and finally diagram interchange
//! (`BPMNShape`/`BPMNEdge`). All tag and attribute matching uses local
//! names, so any namespace prefix is accepted.

use indexmap::IndexMap;
use log::{debug, trace};
use roxmltree::{Document, Node};

use stencil_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    model::{
        ActivityKind, Diagram, DiagramElement, EdgeGeometry, ElementKind, EventTrigger, FlowEdge,
        FlowKind, GatewayKind, ShapeGeometry, StyleOverrides,
    },
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

const SHAPE_DEFAULT_SIZE: Size = Size::new(100.0, 80.0);
const SHAPE_LABEL_DEFAULT_SIZE: Size = Size::new(80.0, 27.0);
const EDGE_LABEL_DEFAULT_SIZE: Size = Size::new(40.0, 14.0);

const BIOC_NAMESPACE_HINT: &str = "bioc";
const COLOR_NAMESPACE_HINT: &str = "color";

/// Reads one parsed document into a [`Diagram`].
pub(crate) struct Reader<'a, 'input> {
    doc: &'a Document<'input>,
    collector: &'a mut DiagnosticCollector,
    diagram: Diagram,
}

impl<'a, 'input> Reader<'a, 'input> {
    pub fn new(doc: &'a Document<'input>, collector: &'a mut DiagnosticCollector) -> Self {
        Self {
            doc,
            collector,
            diagram: Diagram::new(),
        }
    }

    pub fn read(mut self) -> Diagram {
        let root = self.doc.root_element();
        if root.tag_name().name() != "definitions" {
            self.collector.emit(
                Diagnostic::error(format!(
                    "expected a `definitions` root element, found `{}`",
                    root.tag_name().name()
                ))
                .with_code(ErrorCode::E200)
                .with_label(span_of(root), "root element")
                .with_help("the input must be a BPMN 2.0 XML document"),
            );
            return self.diagram;
        }

        self.read_semantics(root);
        self.read_hierarchy(root);
        self.read_interchange(root);

        debug!(
            elements_len = self.diagram.elements_len(),
            flows_len = self.diagram.flows().len();
            "BPMN document read"
        );
        self.diagram
    }

    fn read_semantics(&mut self, root: Node) {
        for node in root.descendants().filter(Node::is_element) {
            let tag = node.tag_name().name();
            if let Some(kind) = element_kind(node) {
                self.read_element(node, kind);
            } else if let Ok(kind) = tag.parse::<FlowKind>() {
                self.read_flow(node, kind);
            }
        }
    }

    fn read_element(&mut self, node: Node, kind: ElementKind) {
        let Some(id) = node.attribute("id") else {
            self.emit_missing_id(node, "id");
            return;
        };

        let mut name = node.attribute("name").unwrap_or_default().to_string();
        if kind == ElementKind::Annotation && name.is_empty() {
            name = child_element(node, "text")
                .and_then(|text| text.text())
                .unwrap_or_default()
                .to_string();
        }

        trace!(id = id, kind:? = kind; "Element");
        self.diagram
            .add_element(DiagramElement::new(id, kind, name));
    }

    fn read_flow(&mut self, node: Node, kind: FlowKind) {
        let Some(id) = node.attribute("id") else {
            self.emit_missing_id(node, "id");
            return;
        };
        let (Some(source), Some(target)) = (node.attribute("sourceRef"), node.attribute("targetRef"))
        else {
            self.collector.emit(
                Diagnostic::warning(format!("flow `{id}` is missing `sourceRef` or `targetRef`"))
                    .with_code(ErrorCode::W305)
                    .with_label(span_of(node), "incomplete flow")
                    .with_help("the flow is ignored"),
            );
            return;
        };
        let name = node.attribute("name").unwrap_or_default();

        self.diagram
            .add_flow(FlowEdge::new(id, kind, source, target, name));
    }

    /// Maps every participant to the lanes of the process it references.
    fn read_hierarchy(&mut self, root: Node) {
        let mut process_lanes: IndexMap<&str, Vec<String>> = IndexMap::new();
        for process in root
            .descendants()
            .filter(|n| n.has_tag_name_local("process"))
        {
            let lanes: Vec<String> = process
                .descendants()
                .filter(|n| n.has_tag_name_local("lane"))
                .filter_map(|lane| lane.attribute("id"))
                .map(str::to_string)
                .collect();
            if !lanes.is_empty() {
                process_lanes.insert(process.attribute("id").unwrap_or_default(), lanes);
            }
        }

        for participant in root
            .descendants()
            .filter(|n| n.has_tag_name_local("participant"))
        {
            let (Some(id), Some(process_ref)) =
                (participant.attribute("id"), participant.attribute("processRef"))
            else {
                continue;
            };
            if let Some(lanes) = process_lanes.get(process_ref) {
                debug!(pool = id, lanes_len = lanes.len(); "Pool lanes");
                self.diagram.set_pool_lanes(id, lanes.clone());
            }
        }
    }

    fn read_interchange(&mut self, root: Node) {
        for node in root.descendants().filter(Node::is_element) {
            match node.tag_name().name() {
                "BPMNShape" => self.read_shape(node),
                "BPMNEdge" => self.read_edge(node),
                _ => {}
            }
        }
    }

    fn read_shape(&mut self, node: Node) {
        let Some(element_id) = node.attribute("bpmnElement") else {
            self.emit_missing_id(node, "bpmnElement");
            return;
        };
        let Some(bounds_node) = child_element(node, "Bounds") else {
            self.collector.emit(
                Diagnostic::warning(format!("shape `{element_id}` has no `Bounds`"))
                    .with_code(ErrorCode::W301)
                    .with_label(span_of(node), "shape without bounds")
                    .with_help("the element is not drawn"),
            );
            return;
        };
        let Some(bounds) = self.read_bounds(bounds_node, element_id, SHAPE_DEFAULT_SIZE) else {
            return;
        };

        let horizontal = node
            .attribute("isHorizontal")
            .map(|value| value.eq_ignore_ascii_case("true"));
        let label = self.read_label(node, element_id, SHAPE_LABEL_DEFAULT_SIZE);
        let style = self.read_style(node, element_id);

        self.diagram.add_shape(
            element_id,
            ShapeGeometry::new(bounds)
                .with_horizontal(horizontal)
                .with_label(label)
                .with_style(style),
        );
    }

    fn read_edge(&mut self, node: Node) {
        let Some(flow_id) = node.attribute("bpmnElement") else {
            self.emit_missing_id(node, "bpmnElement");
            return;
        };

        let mut waypoints = Vec::new();
        for waypoint in node
            .children()
            .filter(|n| n.has_tag_name_local("waypoint"))
        {
            let (Some(x), Some(y)) = (
                self.read_number(waypoint, "x", 0.0, flow_id),
                self.read_number(waypoint, "y", 0.0, flow_id),
            ) else {
                return;
            };
            waypoints.push(Point::new(x, y));
        }

        if waypoints.is_empty() {
            self.collector.emit(
                Diagnostic::warning(format!("edge `{flow_id}` has no waypoints"))
                    .with_code(ErrorCode::W302)
                    .with_label(span_of(node), "edge without waypoints")
                    .with_help("the flow is not drawn"),
            );
            return;
        }

        let label = self.read_label(node, flow_id, EDGE_LABEL_DEFAULT_SIZE);
        self.diagram
            .add_edge(flow_id, EdgeGeometry::new(waypoints).with_label(label));
    }

    /// Reads the `BPMNLabel/Bounds` of a shape or edge, if recorded.
    fn read_label(&mut self, node: Node, owner: &str, default_size: Size) -> Option<Bounds> {
        let bounds = child_element(node, "BPMNLabel").and_then(|l| child_element(l, "Bounds"))?;
        self.read_bounds(bounds, owner, default_size)
    }

    fn read_bounds(&mut self, node: Node, owner: &str, default_size: Size) -> Option<Bounds> {
        let x = self.read_number(node, "x", 0.0, owner)?;
        let y = self.read_number(node, "y", 0.0, owner)?;
        let width = self.read_number(node, "width", default_size.width(), owner)?;
        let height = self.read_number(node, "height", default_size.height(), owner)?;
        Some(Bounds::new_from_top_left(
            Point::new(x, y),
            Size::new(width, height),
        ))
    }

    /// Reads a numeric attribute, falling back to `default` when absent.
    ///
    /// Returns `None` (and emits a warning) when the attribute is present but
    /// not a finite number.
    fn read_number(&mut self, node: Node, attr: &str, default: f64, owner: &str) -> Option<f64> {
        let Some(raw) = node.attribute(attr) else {
            return Some(default);
        };
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                let mut diag =
                    Diagnostic::warning(format!("`{owner}` has a non-numeric `{attr}`: `{raw}`"))
                        .with_code(ErrorCode::W300)
                        .with_label(span_of(node), "expected a number")
                        .with_help("the geometry is skipped");
                if let Some(parent) = node.parent_element() {
                    diag = diag.with_secondary_label(span_of(parent), "in this element");
                }
                self.collector.emit(diag);
                None
            }
        }
    }

    /// Reads `bioc:fill`/`bioc:stroke`, falling back to
    /// `color:background-color`/`color:border-color`.
    fn read_style(&mut self, node: Node, owner: &str) -> StyleOverrides {
        let mut fill = None;
        let mut stroke = None;
        let mut fallback_fill = None;
        let mut fallback_stroke = None;

        for attr in node.attributes() {
            let namespace = attr.namespace().unwrap_or_default();
            let slot = match attr.name() {
                "fill" if namespace.contains(BIOC_NAMESPACE_HINT) => &mut fill,
                "stroke" if namespace.contains(BIOC_NAMESPACE_HINT) => &mut stroke,
                "background-color" if namespace.contains(COLOR_NAMESPACE_HINT) => {
                    &mut fallback_fill
                }
                "border-color" if namespace.contains(COLOR_NAMESPACE_HINT) => &mut fallback_stroke,
                _ => continue,
            };
            match Color::new(attr.value()) {
                Ok(color) => *slot = Some(color),
                Err(err) => self.collector.emit(
                    Diagnostic::warning(format!("`{owner}` has an invalid color: {err}"))
                        .with_code(ErrorCode::W303)
                        .with_label(span_of(node), "in this shape")
                        .with_help("the default color is used"),
                ),
            }
        }

        StyleOverrides {
            fill: fill.or(fallback_fill),
            stroke: stroke.or(fallback_stroke),
        }
    }

    fn emit_missing_id(&mut self, node: Node, attr: &str) {
        self.collector.emit(
            Diagnostic::warning(format!(
                "`{}` element has no `{attr}`",
                node.tag_name().name()
            ))
            .with_code(ErrorCode::W304)
            .with_label(span_of(node), "element without id")
            .with_help("the element is ignored"),
        );
    }
}

/// Returns the element kind for a flow node, participant, lane or
/// annotation tag.
fn element_kind(node: Node) -> Option<ElementKind> {
    let tag = node.tag_name().name();
    let kind = match tag {
        "startEvent" => ElementKind::StartEvent(event_trigger(node)),
        "endEvent" => ElementKind::EndEvent(event_trigger(node)),
        "intermediateCatchEvent" | "intermediateThrowEvent" | "boundaryEvent" => {
            ElementKind::IntermediateEvent(event_trigger(node))
        }
        "textAnnotation" => ElementKind::Annotation,
        "participant" => ElementKind::Pool,
        "lane" => ElementKind::Lane,
        _ => {
            if let Ok(activity) = tag.parse::<ActivityKind>() {
                ElementKind::Task(activity)
            } else {
                ElementKind::Gateway(tag.parse::<GatewayKind>().ok()?)
            }
        }
    };
    Some(kind)
}

/// The first `*EventDefinition` child decides the trigger.
fn event_trigger(node: Node) -> Option<EventTrigger> {
    node.children()
        .filter(Node::is_element)
        .map(|child| child.tag_name().name())
        .find(|name| name.ends_with("EventDefinition"))
        .map(EventTrigger::from_definition)
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, local: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name_local(local))
}

fn span_of(node: Node) -> Span {
    Span::new(node.range())
}

/// Local-name matching for element nodes.
trait LocalName {
    fn has_tag_name_local(&self, local: &str) -> bool;
}

impl LocalName for Node<'_, '_> {
    fn has_tag_name_local(&self, local: &str) -> bool {
        self.is_element() && self.tag_name().name() == local
    }
}
