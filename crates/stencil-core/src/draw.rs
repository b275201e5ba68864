//! Drawing primitives for Visio page geometry.
//!
//! Everything in this module works in page units (inches) and in the
//! shape-local coordinate system of the target format: origin at the
//! bottom-left corner of a shape, Y increasing upward.
//!
//! - [`Path`] / [`PathCommand`]: one geometry section of a shape
//! - [`ShapeDefinition`]: outline synthesis per shape category
//! - [`Marker`]: decorative overlays (gateway symbols, event icons)
//! - [`RoundedPolyline`] / [`Arrowhead`]: connector curves
//! - [`ShapePrimitive`]: a fully resolved shape ready for serialization

mod connector;
mod fill;
mod marker;
mod path;
mod primitive;
mod shape;
mod stroke;
mod text;
mod text_positioning;

pub use connector::{Arrowhead, RoundedPolyline, corner_radius};
pub use fill::FillDefinition;
pub use marker::Marker;
pub use path::{Path, PathCommand};
pub use primitive::{ShapePrimitive, ShapeRole};
pub use shape::{
    BracketDefinition, ContainerDefinition, DiamondDefinition, EllipseDefinition,
    RoundedRectangleDefinition, ShapeDefinition,
};
pub use stroke::{LinePattern, StrokeDefinition};
pub use text::{HorizontalAlign, TextBlock, TextDefinition};
pub use text_positioning::TextStrategy;
