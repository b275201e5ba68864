//! Rounded rectangle outline for tasks and other activities.

use super::ShapeDefinition;
use crate::{
    draw::Path,
    geometry::{Point, Size},
};

/// Fraction of each dimension the corner radius may take.
const RADIUS_RATIO: f64 = 0.1;

/// A rectangle whose corners are rounded by the renderer.
///
/// The outline itself is a plain rectangle; the corner radius is reported
/// through [`ShapeDefinition::rounding`] and applied by the renderer.
#[derive(Debug, Clone)]
pub struct RoundedRectangleDefinition {
    corner_cap: f64,
}

impl RoundedRectangleDefinition {
    /// Creates a definition whose corner radius never exceeds `corner_cap`.
    pub fn new(corner_cap: f64) -> Self {
        Self { corner_cap }
    }
}

impl Default for RoundedRectangleDefinition {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl ShapeDefinition for RoundedRectangleDefinition {
    fn outline(&self, size: Size) -> Vec<Path> {
        let max = Point::new(size.width(), size.height());
        vec![Path::rectangle(Point::default(), max).with_fill(true)]
    }

    fn rounding(&self, size: Size) -> Option<f64> {
        Some(
            self.corner_cap
                .min(size.width() * RADIUS_RATIO)
                .min(size.height() * RADIUS_RATIO),
        )
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }
}
