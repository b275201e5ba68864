//! Shape definitions and outline synthesis.
//!
//! This module provides the [`ShapeDefinition`] trait and one definition per
//! outline family. A definition is a pure function of the shape's size: it
//! never looks at positions, colors or text.

use std::fmt::Debug;

use crate::{
    draw::{Path, text_positioning::TextStrategy},
    geometry::Size,
};

mod bracket;
mod container;
mod diamond;
mod ellipse;
mod rounded_rectangle;

pub use bracket::BracketDefinition;
pub use container::ContainerDefinition;
pub use diamond::DiamondDefinition;
pub use ellipse::EllipseDefinition;
pub use rounded_rectangle::RoundedRectangleDefinition;

/// A trait for shape definitions that provide stateless outline calculations.
pub trait ShapeDefinition: Debug {
    /// Returns the outline paths of a shape of the given size.
    ///
    /// The first path is the shape body. Additional paths, when present,
    /// are structural decorations of the outline itself (such as a header
    /// divider), not marker overlays.
    fn outline(&self, size: Size) -> Vec<Path>;

    /// Returns where this shape's text is rendered.
    ///
    /// Shapes whose outline covers the whole bounding box embed their text.
    fn text_strategy(&self) -> TextStrategy {
        TextStrategy::Embedded
    }

    /// Returns the corner rounding radius for the shape, if any.
    fn rounding(&self, _size: Size) -> Option<f64> {
        None
    }

    /// Creates a boxed clone of this shape definition.
    fn clone_box(&self) -> Box<dyn ShapeDefinition>;
}

/// Enable cloning of `Box<dyn ShapeDefinition>` by delegating to the clone_box method.
impl Clone for Box<dyn ShapeDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
