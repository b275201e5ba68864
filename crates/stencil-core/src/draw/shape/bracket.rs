//! Open bracket outline for text annotations.

use super::ShapeDefinition;
use crate::{
    draw::Path,
    geometry::{Point, Size},
};

/// An open bracket tracing the left edge, with short ticks along the top and
/// bottom edges. Never filled.
#[derive(Debug, Clone)]
pub struct BracketDefinition {
    tick: f64,
}

impl BracketDefinition {
    /// Creates a bracket whose horizontal ticks are `tick` inches long.
    pub fn new(tick: f64) -> Self {
        Self { tick }
    }
}

impl Default for BracketDefinition {
    fn default() -> Self {
        Self::new(0.15)
    }
}

impl ShapeDefinition for BracketDefinition {
    fn outline(&self, size: Size) -> Vec<Path> {
        let h = size.height();
        vec![Path::polyline(&[
            Point::new(self.tick, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, h),
            Point::new(self.tick, h),
        ])]
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }
}
