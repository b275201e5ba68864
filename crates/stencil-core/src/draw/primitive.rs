//! Fully resolved page shapes.
//!
//! A [`ShapePrimitive`] carries everything the serializer needs for one
//! `<Shape>` element: placement, formatting cells, geometry sections and
//! text. All coordinates are in inches; `pin` is in page coordinates while
//! text blocks and paths are in shape-local coordinates.

use crate::{
    draw::{FillDefinition, Path, StrokeDefinition, TextBlock, TextDefinition},
    geometry::{Point, Size},
};

/// What a page shape represents, which determines its universal name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    /// A BPMN node: event, activity, gateway, pool, lane or annotation
    Shape,
    /// A transparent text-only shape for an event or gateway name
    Label,
    /// A sequence flow
    Connector,
    /// A message flow
    MessageFlow,
    /// An association
    Association,
}

impl ShapeRole {
    /// Returns the prefix of the shape's `NameU` attribute.
    pub fn name_prefix(self) -> &'static str {
        match self {
            Self::Shape => "Shape",
            Self::Label => "Label",
            Self::Connector => "Connector",
            Self::MessageFlow => "MsgFlow",
            Self::Association => "Assoc",
        }
    }

    /// Returns true for roles drawn as one-dimensional connectors.
    pub fn is_connector(self) -> bool {
        matches!(self, Self::Connector | Self::MessageFlow | Self::Association)
    }
}

/// One shape on the output page.
///
/// Created through [`ShapePrimitive::new`] and the `with_*` builders; the
/// numeric ID is assigned later, once the page's z-order is known.
///
/// # Examples
///
/// ```
/// use stencil_core::color::Color;
/// use stencil_core::draw::{FillDefinition, ShapePrimitive, ShapeRole, StrokeDefinition};
/// use stencil_core::geometry::{Point, Size};
///
/// let mut shape = ShapePrimitive::new(
///     ShapeRole::Shape,
///     Point::new(1.0, 7.0),
///     Size::new(1.0417, 0.8333),
///     FillDefinition::solid(Color::new("white").unwrap()),
///     StrokeDefinition::new(Color::default(), 0.02),
/// )
/// .with_text("Review");
/// shape.set_id(3);
///
/// assert_eq!(shape.name_u(), "Shape.3");
/// assert_eq!(shape.text(), Some("Review"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePrimitive {
    id: u32,
    role: ShapeRole,
    pin: Point,
    size: Size,
    text_block: Option<TextBlock>,
    rounding: Option<f64>,
    fill: FillDefinition,
    stroke: StrokeDefinition,
    text_def: Option<TextDefinition>,
    paths: Vec<Path>,
    text: Option<String>,
}

impl ShapePrimitive {
    pub fn new(
        role: ShapeRole,
        pin: Point,
        size: Size,
        fill: FillDefinition,
        stroke: StrokeDefinition,
    ) -> Self {
        Self {
            id: 0,
            role,
            pin,
            size,
            text_block: None,
            rounding: None,
            fill,
            stroke,
            text_def: None,
            paths: Vec::new(),
            text: None,
        }
    }

    pub fn with_text_block(mut self, block: TextBlock) -> Self {
        self.text_block = Some(block);
        self
    }

    pub fn with_rounding(mut self, rounding: Option<f64>) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_text_def(mut self, text_def: TextDefinition) -> Self {
        self.text_def = Some(text_def);
        self
    }

    /// Sets the shape text. Empty strings are stored as no text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = (!text.is_empty()).then_some(text);
        self
    }

    pub fn with_paths(mut self, paths: impl IntoIterator<Item = Path>) -> Self {
        self.paths.extend(paths);
        self
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn role(&self) -> ShapeRole {
        self.role
    }

    /// The `NameU` attribute, e.g. `Shape.4` or `MsgFlow.12`.
    pub fn name_u(&self) -> String {
        format!("{}.{}", self.role.name_prefix(), self.id)
    }

    /// Center of the shape in page coordinates.
    pub fn pin(&self) -> Point {
        self.pin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Local anchor of the pin, always the center of the shape.
    pub fn loc_pin(&self) -> Point {
        self.size.center()
    }

    pub fn text_block(&self) -> Option<&TextBlock> {
        self.text_block.as_ref()
    }

    pub fn rounding(&self) -> Option<f64> {
        self.rounding
    }

    pub fn fill(&self) -> &FillDefinition {
        &self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn text_def(&self) -> Option<&TextDefinition> {
        self.text_def.as_ref()
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
