//! Diagram elements and flow kinds.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::draw::Marker;

/// Error returned when a BPMN tag does not name a known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} `{tag}`")]
pub struct UnknownKind {
    family: &'static str,
    tag: String,
}

impl UnknownKind {
    fn new(family: &'static str, tag: &str) -> Self {
        Self {
            family,
            tag: tag.to_string(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// The event definition attached to an event, keyed by its BPMN tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTrigger {
    Message,
    Timer,
    Signal,
    /// Any other definition (error, escalation, conditional, ...); drawn
    /// without an overlay.
    Other(String),
}

impl EventTrigger {
    /// Builds a trigger from an event definition's local tag name, such as
    /// `timerEventDefinition`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_core::model::EventTrigger;
    /// assert_eq!(
    ///     EventTrigger::from_definition("messageEventDefinition"),
    ///     EventTrigger::Message
    /// );
    /// assert!(matches!(
    ///     EventTrigger::from_definition("errorEventDefinition"),
    ///     EventTrigger::Other(_)
    /// ));
    /// ```
    pub fn from_definition(tag: &str) -> Self {
        match tag {
            "messageEventDefinition" => Self::Message,
            "timerEventDefinition" => Self::Timer,
            "signalEventDefinition" => Self::Signal,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn marker(&self) -> Option<Marker> {
        match self {
            Self::Message => Some(Marker::Message),
            Self::Timer => Some(Marker::Timer),
            Self::Signal => Some(Marker::Signal),
            Self::Other(_) => None,
        }
    }
}

/// Gateway sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    Exclusive,
    Parallel,
    Inclusive,
    EventBased,
}

impl GatewayKind {
    pub fn marker(self) -> Marker {
        match self {
            Self::Exclusive => Marker::Exclusive,
            Self::Parallel => Marker::Parallel,
            Self::Inclusive => Marker::Inclusive,
            Self::EventBased => Marker::EventBased,
        }
    }
}

impl FromStr for GatewayKind {
    type Err = UnknownKind;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "exclusiveGateway" => Ok(Self::Exclusive),
            "parallelGateway" => Ok(Self::Parallel),
            "inclusiveGateway" => Ok(Self::Inclusive),
            "eventBasedGateway" => Ok(Self::EventBased),
            _ => Err(UnknownKind::new("gateway", tag)),
        }
    }
}

/// Activity sub-kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Task,
    User,
    Service,
    Script,
    Send,
    Receive,
    Manual,
    BusinessRule,
    SubProcess,
    CallActivity,
}

impl ActivityKind {
    /// Returns true for activities drawn with a heavy border and the
    /// collapsed sub-process glyph.
    pub fn is_expandable(self) -> bool {
        matches!(self, Self::SubProcess | Self::CallActivity)
    }
}

impl FromStr for ActivityKind {
    type Err = UnknownKind;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "task" => Ok(Self::Task),
            "userTask" => Ok(Self::User),
            "serviceTask" => Ok(Self::Service),
            "scriptTask" => Ok(Self::Script),
            "sendTask" => Ok(Self::Send),
            "receiveTask" => Ok(Self::Receive),
            "manualTask" => Ok(Self::Manual),
            "businessRuleTask" => Ok(Self::BusinessRule),
            "subProcess" => Ok(Self::SubProcess),
            "callActivity" => Ok(Self::CallActivity),
            _ => Err(UnknownKind::new("activity", tag)),
        }
    }
}

/// Coarse shape category, which selects outline, styling and text handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    StartEvent,
    EndEvent,
    IntermediateEvent,
    Task,
    Gateway,
    Pool,
    Lane,
    Annotation,
}

impl ShapeCategory {
    pub fn is_event(self) -> bool {
        matches!(
            self,
            Self::StartEvent | Self::EndEvent | Self::IntermediateEvent
        )
    }

    /// Returns true for pools and lanes.
    pub fn is_container(self) -> bool {
        matches!(self, Self::Pool | Self::Lane)
    }
}

impl fmt::Display for ShapeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartEvent => "start event",
            Self::EndEvent => "end event",
            Self::IntermediateEvent => "intermediate event",
            Self::Task => "task",
            Self::Gateway => "gateway",
            Self::Pool => "pool",
            Self::Lane => "lane",
            Self::Annotation => "annotation",
        };
        f.write_str(name)
    }
}

/// The full kind of a diagram element, including its sub-kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    StartEvent(Option<EventTrigger>),
    EndEvent(Option<EventTrigger>),
    /// Intermediate catch/throw events and boundary events
    IntermediateEvent(Option<EventTrigger>),
    Task(ActivityKind),
    Gateway(GatewayKind),
    /// A participant
    Pool,
    Lane,
    Annotation,
}

impl ElementKind {
    pub fn category(&self) -> ShapeCategory {
        match self {
            Self::StartEvent(_) => ShapeCategory::StartEvent,
            Self::EndEvent(_) => ShapeCategory::EndEvent,
            Self::IntermediateEvent(_) => ShapeCategory::IntermediateEvent,
            Self::Task(_) => ShapeCategory::Task,
            Self::Gateway(_) => ShapeCategory::Gateway,
            Self::Pool => ShapeCategory::Pool,
            Self::Lane => ShapeCategory::Lane,
            Self::Annotation => ShapeCategory::Annotation,
        }
    }

    /// Returns the decorative overlay for this kind, if it has one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_core::draw::Marker;
    /// # use stencil_core::model::{ActivityKind, ElementKind, GatewayKind};
    /// assert_eq!(
    ///     ElementKind::Gateway(GatewayKind::Parallel).marker(),
    ///     Some(Marker::Parallel)
    /// );
    /// assert_eq!(ElementKind::Task(ActivityKind::User).marker(), None);
    /// ```
    pub fn marker(&self) -> Option<Marker> {
        match self {
            Self::StartEvent(trigger)
            | Self::EndEvent(trigger)
            | Self::IntermediateEvent(trigger) => trigger.as_ref().and_then(EventTrigger::marker),
            Self::Task(activity) => activity.is_expandable().then_some(Marker::SubProcess),
            Self::Gateway(gateway) => Some(gateway.marker()),
            Self::Pool | Self::Lane | Self::Annotation => None,
        }
    }

    /// Returns true for kinds drawn with the heavy stroke weight.
    pub fn is_heavy(&self) -> bool {
        match self {
            Self::EndEvent(_) => true,
            Self::Task(activity) => activity.is_expandable(),
            _ => false,
        }
    }
}

/// One BPMN element: identity, kind and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramElement {
    id: String,
    kind: ElementKind,
    name: String,
}

impl DiagramElement {
    pub fn new(id: impl Into<String>, kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn category(&self) -> ShapeCategory {
        self.kind.category()
    }

    /// Display name; empty when the element has none.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Kind of a flow edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Sequence,
    Message,
    Association,
}

impl FromStr for FlowKind {
    type Err = UnknownKind;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "sequenceFlow" => Ok(Self::Sequence),
            "messageFlow" => Ok(Self::Message),
            "association" => Ok(Self::Association),
            _ => Err(UnknownKind::new("flow", tag)),
        }
    }
}

/// A connection between two elements.
///
/// Endpoints are plain ids and may dangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    id: String,
    kind: FlowKind,
    source: String,
    target: String,
    name: String,
}

impl FlowEdge {
    pub fn new(
        id: impl Into<String>,
        kind: FlowKind,
        source: impl Into<String>,
        target: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            source: source.into(),
            target: target.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
