//! Ellipse outline for events.

use super::ShapeDefinition;
use crate::{
    draw::{Path, text_positioning::TextStrategy},
    geometry::{Point, Size},
};

/// An ellipse inscribed in the shape's bounding box.
#[derive(Debug, Clone, Default)]
pub struct EllipseDefinition;

impl EllipseDefinition {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeDefinition for EllipseDefinition {
    fn outline(&self, size: Size) -> Vec<Path> {
        let center = size.center();
        let major = Point::new(size.width(), center.y());
        let minor = Point::new(center.x(), size.height());
        vec![Path::filled().ellipse(center, major, minor)]
    }

    fn text_strategy(&self) -> TextStrategy {
        TextStrategy::Detached
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PathCommand;

    #[test]
    fn test_ellipse_row_points() {
        let paths = EllipseDefinition::new().outline(Size::new(0.375, 0.375));
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_filled());

        let PathCommand::Ellipse {
            center,
            major,
            minor,
        } = paths[0].commands()[0]
        else {
            panic!("expected an ellipse row");
        };
        assert_eq!(center, Point::new(0.1875, 0.1875));
        assert_eq!(major, Point::new(0.375, 0.1875));
        assert_eq!(minor, Point::new(0.1875, 0.375));
    }

    #[test]
    fn test_ellipse_requires_detached_label() {
        assert_eq!(
            EllipseDefinition::new().text_strategy(),
            TextStrategy::Detached
        );
    }
}
