//! Unit tests for the BPMN reader.
//!
//! These tests feed small BPMN documents through [`crate::parse`] and check
//! the resulting model and diagnostics.

use stencil_core::{
    color::Color,
    geometry::Point,
    model::{ActivityKind, ElementKind, EventTrigger, FlowKind, GatewayKind, ShapeCategory},
};

use crate::{error::ErrorCode, parse};

const COLLABORATION: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="http://www.omg.org/spec/BPMN/20100524/MODEL"
                  xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
                  xmlns:dc="http://www.omg.org/spec/DD/20100524/DC"
                  xmlns:di="http://www.omg.org/spec/DD/20100524/DI"
                  xmlns:bioc="http://bpmn.io/schema/bpmn/biocolor/1.0"
                  xmlns:color="http://www.omg.org/spec/BPMN/non-normative/color/1.0"
                  id="Definitions_1">
  <bpmn:collaboration id="Collaboration_1">
    <bpmn:participant id="Pool_1" name="Sales" processRef="Process_1" />
    <bpmn:participant id="Pool_2" name="Customer" />
    <bpmn:messageFlow id="Msg_1" sourceRef="Pool_2" targetRef="Start_1" name="Order" />
  </bpmn:collaboration>
  <bpmn:process id="Process_1">
    <bpmn:laneSet id="LaneSet_1">
      <bpmn:lane id="Lane_1" name="Front office">
        <bpmn:childLaneSet id="LaneSet_2">
          <bpmn:lane id="Lane_1a" />
        </bpmn:childLaneSet>
      </bpmn:lane>
      <bpmn:lane id="Lane_2" name="Back office" />
    </bpmn:laneSet>
    <bpmn:startEvent id="Start_1" name="Order received">
      <bpmn:messageEventDefinition id="MsgDef_1" />
    </bpmn:startEvent>
    <bpmn:userTask id="Task_1" name="Check order" />
    <bpmn:callActivity id="Call_1" name="Ship" />
    <bpmn:exclusiveGateway id="Gateway_1" name="Valid?" />
    <bpmn:boundaryEvent id="Timer_1" attachedToRef="Task_1">
      <bpmn:timerEventDefinition id="TimerDef_1" />
    </bpmn:boundaryEvent>
    <bpmn:endEvent id="End_1">
      <bpmn:errorEventDefinition id="ErrDef_1" />
    </bpmn:endEvent>
    <bpmn:textAnnotation id="Note_1">
      <bpmn:text>Checked within one day</bpmn:text>
    </bpmn:textAnnotation>
    <bpmn:sequenceFlow id="Flow_1" sourceRef="Start_1" targetRef="Task_1" />
    <bpmn:sequenceFlow id="Flow_2" sourceRef="Task_1" targetRef="Gateway_1" name="done" />
    <bpmn:association id="Assoc_1" sourceRef="Task_1" targetRef="Note_1" />
  </bpmn:process>
  <bpmndi:BPMNDiagram id="Diagram_1">
    <bpmndi:BPMNPlane id="Plane_1" bpmnElement="Collaboration_1">
      <bpmndi:BPMNShape id="Pool_1_di" bpmnElement="Pool_1" isHorizontal="true">
        <dc:Bounds x="100" y="50" width="600" height="250" />
      </bpmndi:BPMNShape>
      <bpmndi:BPMNShape id="Start_1_di" bpmnElement="Start_1"
                        bioc:stroke="#205022" bioc:fill="#c8e6c9"
                        color:background-color="#ffffff" color:border-color="#000000">
        <dc:Bounds x="182" y="102" width="36" height="36" />
        <bpmndi:BPMNLabel>
          <dc:Bounds x="160" y="145" width="80" />
        </bpmndi:BPMNLabel>
      </bpmndi:BPMNShape>
      <bpmndi:BPMNShape id="Task_1_di" bpmnElement="Task_1" color:background-color="#bbdefb">
        <dc:Bounds x="270" y="80" />
      </bpmndi:BPMNShape>
      <bpmndi:BPMNShape id="Vertical_di" bpmnElement="Pool_2" isHorizontal="false">
        <dc:Bounds x="800" y="50" width="200" height="400" />
      </bpmndi:BPMNShape>
      <bpmndi:BPMNEdge id="Flow_1_di" bpmnElement="Flow_1">
        <di:waypoint x="218" y="120" />
        <di:waypoint x="244" y="120" />
        <di:waypoint x="244" y="150" />
        <di:waypoint x="270" y="150" />
      </bpmndi:BPMNEdge>
      <bpmndi:BPMNEdge id="Flow_2_di" bpmnElement="Flow_2">
        <di:waypoint x="370" y="120" />
        <di:waypoint x="420" y="120" />
        <bpmndi:BPMNLabel>
          <dc:Bounds x="380" y="100" />
        </bpmndi:BPMNLabel>
      </bpmndi:BPMNEdge>
    </bpmndi:BPMNPlane>
  </bpmndi:BPMNDiagram>
</bpmn:definitions>
"##;

fn definitions(body: &str) -> String {
    format!(
        r#"<definitions xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL"
             xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI"
             xmlns:dc="http://www.omg.org/spec/DD/20100524/DC"
             xmlns:di="http://www.omg.org/spec/DD/20100524/DI"
             xmlns:bioc="http://bpmn.io/schema/bpmn/biocolor/1.0">{body}</definitions>"#
    )
}

#[test]
fn test_element_kinds() {
    let parsed = parse(COLLABORATION).expect("valid document");
    let diagram = &parsed.diagram;

    let kind = |id: &str| diagram.element(id).expect(id).kind().clone();

    assert_eq!(kind("Pool_1"), ElementKind::Pool);
    assert_eq!(kind("Lane_1a"), ElementKind::Lane);
    assert_eq!(
        kind("Start_1"),
        ElementKind::StartEvent(Some(EventTrigger::Message))
    );
    assert_eq!(kind("Task_1"), ElementKind::Task(ActivityKind::User));
    assert_eq!(kind("Call_1"), ElementKind::Task(ActivityKind::CallActivity));
    assert_eq!(kind("Gateway_1"), ElementKind::Gateway(GatewayKind::Exclusive));
    assert_eq!(
        kind("Timer_1"),
        ElementKind::IntermediateEvent(Some(EventTrigger::Timer))
    );
    assert_eq!(
        kind("End_1"),
        ElementKind::EndEvent(Some(EventTrigger::Other(
            "errorEventDefinition".to_string()
        )))
    );
    assert_eq!(
        diagram.element("Note_1").unwrap().category(),
        ShapeCategory::Annotation
    );
}

#[test]
fn test_names_and_annotation_text() {
    let parsed = parse(COLLABORATION).unwrap();
    let diagram = &parsed.diagram;

    assert_eq!(diagram.element("Start_1").unwrap().name(), "Order received");
    assert_eq!(diagram.element("Lane_1a").unwrap().name(), "");
    assert_eq!(
        diagram.element("Note_1").unwrap().name(),
        "Checked within one day"
    );
}

#[test]
fn test_elements_in_document_order() {
    let parsed = parse(COLLABORATION).unwrap();
    let ids: Vec<_> = parsed.diagram.elements().map(|e| e.id()).collect();

    assert_eq!(
        ids,
        [
            "Pool_1", "Pool_2", "Lane_1", "Lane_1a", "Lane_2", "Start_1", "Task_1", "Call_1",
            "Gateway_1", "Timer_1", "End_1", "Note_1"
        ]
    );
}

#[test]
fn test_flows() {
    let parsed = parse(COLLABORATION).unwrap();
    let flows = parsed.diagram.flows();

    assert_eq!(flows.len(), 4);
    assert_eq!(flows[0].id(), "Msg_1");
    assert_eq!(flows[0].kind(), FlowKind::Message);
    assert_eq!(flows[0].name(), "Order");
    assert_eq!(flows[2].name(), "done");
    assert_eq!(flows[3].kind(), FlowKind::Association);
    assert_eq!(flows[3].target(), "Note_1");
}

#[test]
fn test_pool_lanes_include_nested_lanes() {
    let parsed = parse(COLLABORATION).unwrap();
    let diagram = &parsed.diagram;

    assert_eq!(
        diagram.pool_lanes("Pool_1").unwrap(),
        ["Lane_1", "Lane_1a", "Lane_2"]
    );
    // no processRef
    assert_eq!(diagram.pool_lanes("Pool_2"), None);
}

#[test]
fn test_shape_bounds_and_defaults() {
    let parsed = parse(COLLABORATION).unwrap();
    let diagram = &parsed.diagram;

    let start = diagram.shape("Start_1").unwrap();
    assert_eq!(start.bounds().min_x(), 182.0);
    assert_eq!(start.bounds().width(), 36.0);
    assert_eq!(start.horizontal(), None);

    // width and height fall back to 100 x 80
    let task = diagram.shape("Task_1").unwrap();
    assert_eq!(task.bounds().width(), 100.0);
    assert_eq!(task.bounds().height(), 80.0);
}

#[test]
fn test_orientation() {
    let parsed = parse(COLLABORATION).unwrap();
    let diagram = &parsed.diagram;

    assert_eq!(diagram.shape("Pool_1").unwrap().horizontal(), Some(true));
    assert_eq!(diagram.shape("Pool_2").unwrap().horizontal(), Some(false));
}

#[test]
fn test_shape_label_defaults() {
    let parsed = parse(COLLABORATION).unwrap();
    let label = *parsed.diagram.shape("Start_1").unwrap().label().unwrap();

    assert_eq!(label.min_x(), 160.0);
    assert_eq!(label.min_y(), 145.0);
    assert_eq!(label.width(), 80.0);
    // height falls back to 27
    assert_eq!(label.height(), 27.0);
}

#[test]
fn test_colors_prefer_bioc() {
    let parsed = parse(COLLABORATION).unwrap();
    let diagram = &parsed.diagram;

    let start = diagram.shape("Start_1").unwrap().style();
    assert_eq!(start.fill, Some(Color::new("#c8e6c9").unwrap()));
    assert_eq!(start.stroke, Some(Color::new("#205022").unwrap()));

    let task = diagram.shape("Task_1").unwrap().style();
    assert_eq!(task.fill, Some(Color::new("#bbdefb").unwrap()));
    assert_eq!(task.stroke, None);
}

#[test]
fn test_edges() {
    let parsed = parse(COLLABORATION).unwrap();
    let diagram = &parsed.diagram;

    let flow_1 = diagram.edge("Flow_1").unwrap();
    assert_eq!(flow_1.waypoints().len(), 4);
    assert_eq!(flow_1.waypoints()[1], Point::new(244.0, 120.0));
    assert!(flow_1.label().is_none());

    let label = *diagram.edge("Flow_2").unwrap().label().unwrap();
    assert_eq!(label.width(), 40.0);
    assert_eq!(label.height(), 14.0);

    assert!(diagram.edge("Assoc_1").is_none());
}

#[test]
fn test_clean_document_has_no_warnings() {
    let parsed = parse(COLLABORATION).unwrap();
    assert!(parsed.warnings.is_empty(), "{:?}", parsed.warnings);
}

#[test]
fn test_malformed_xml() {
    let source = "<definitions>\n  <process id=\"P\">\n</definitions>";
    let err = parse(source).unwrap_err();

    let diag = &err.diagnostics()[0];
    assert!(diag.severity().is_error());
    assert_eq!(diag.code(), Some(ErrorCode::E100));
    let span = diag.labels()[0].span();
    assert!(span.start() > 0);
    assert!(span.end() <= source.len());
}

#[test]
fn test_wrong_root() {
    let err = parse("<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap_err();
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E200));
}

#[test]
fn test_empty_definitions() {
    let parsed = parse(&definitions("")).unwrap();
    assert!(parsed.diagram.is_empty());
}

#[test]
fn test_non_numeric_bounds_drop_shape() {
    let source = definitions(
        r#"<process id="P"><task id="Task_1" /></process>
        <bpmndi:BPMNShape bpmnElement="Task_1"><dc:Bounds x="abc" y="0" /></bpmndi:BPMNShape>"#,
    );
    let parsed = parse(&source).unwrap();

    assert!(parsed.diagram.element("Task_1").is_some());
    assert!(parsed.diagram.shape("Task_1").is_none());
    assert_eq!(parsed.warnings.len(), 1);
    assert_eq!(parsed.warnings[0].code(), Some(ErrorCode::W300));
    assert_eq!(parsed.warnings[0].labels().len(), 2);
}

#[test]
fn test_shape_without_bounds() {
    let source = definitions(
        r#"<process id="P"><task id="Task_1" /></process>
        <bpmndi:BPMNShape bpmnElement="Task_1" />"#,
    );
    let parsed = parse(&source).unwrap();

    assert!(parsed.diagram.shape("Task_1").is_none());
    assert_eq!(parsed.warnings[0].code(), Some(ErrorCode::W301));
}

#[test]
fn test_edge_without_waypoints() {
    let source = definitions(
        r#"<process id="P"><sequenceFlow id="F" sourceRef="a" targetRef="b" /></process>
        <bpmndi:BPMNEdge bpmnElement="F" />"#,
    );
    let parsed = parse(&source).unwrap();

    assert_eq!(parsed.diagram.flows().len(), 1);
    assert!(parsed.diagram.edge("F").is_none());
    assert_eq!(parsed.warnings[0].code(), Some(ErrorCode::W302));
}

#[test]
fn test_invalid_color_is_ignored() {
    let source = definitions(
        r#"<process id="P"><task id="Task_1" /></process>
        <bpmndi:BPMNShape bpmnElement="Task_1" bioc:fill="not-a-color">
          <dc:Bounds x="0" y="0" width="100" height="80" />
        </bpmndi:BPMNShape>"#,
    );
    let parsed = parse(&source).unwrap();

    let shape = parsed.diagram.shape("Task_1").unwrap();
    assert_eq!(shape.style().fill, None);
    assert_eq!(parsed.warnings[0].code(), Some(ErrorCode::W303));
}

#[test]
fn test_missing_ids_and_refs() {
    let source = definitions(
        r#"<process id="P">
          <task name="anonymous" />
          <sequenceFlow id="F1" sourceRef="a" />
          <sequenceFlow sourceRef="a" targetRef="b" />
        </process>"#,
    );
    let parsed = parse(&source).unwrap();

    assert!(parsed.diagram.is_empty());
    assert!(parsed.diagram.flows().is_empty());
    let codes: Vec<_> = parsed.warnings.iter().filter_map(|w| w.code()).collect();
    assert_eq!(codes, [ErrorCode::W304, ErrorCode::W305, ErrorCode::W304]);
}

#[test]
fn test_unknown_tags_are_ignored() {
    let source = definitions(
        r#"<process id="P">
          <complexGateway id="G" />
          <dataObjectReference id="D" />
          <dataInputAssociation id="A" />
        </process>"#,
    );
    let parsed = parse(&source).unwrap();

    assert!(parsed.diagram.is_empty());
    assert!(parsed.warnings.is_empty());
}

mod proptest_tests {
    use proptest::prelude::*;

    use super::definitions;
    use crate::parse;

    /// Any finite coordinates survive the trip through the reader unchanged.
    fn check_bounds_are_read_verbatim(x: f64, y: f64, w: f64, h: f64) -> Result<(), TestCaseError> {
        let source = definitions(&format!(
            r#"<process id="P"><task id="T" /></process>
            <bpmndi:BPMNShape bpmnElement="T"><dc:Bounds x="{x}" y="{y}" width="{w}" height="{h}" /></bpmndi:BPMNShape>"#
        ));
        let parsed = parse(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let bounds = *parsed
            .diagram
            .shape("T")
            .ok_or_else(|| TestCaseError::fail("shape missing"))?
            .bounds();

        prop_assert_eq!(bounds.min_x(), x);
        prop_assert_eq!(bounds.min_y(), y);
        prop_assert!((bounds.width() - w).abs() < 1e-9);
        prop_assert!((bounds.height() - h).abs() < 1e-9);
        Ok(())
    }

    proptest! {
        #[test]
        fn bounds_are_read_verbatim(
            x in -5000.0f64..5000.0,
            y in -5000.0f64..5000.0,
            w in 0.0f64..2000.0,
            h in 0.0f64..2000.0,
        ) {
            check_bounds_are_read_verbatim(x, y, w, h)?;
        }
    }
}
