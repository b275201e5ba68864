//! Diamond outline for gateways.

use super::ShapeDefinition;
use crate::{
    draw::{Path, text_positioning::TextStrategy},
    geometry::{Point, Size},
};

/// A diamond with its vertices at the midpoints of the bounding box edges.
#[derive(Debug, Clone, Default)]
pub struct DiamondDefinition;

impl DiamondDefinition {
    pub fn new() -> Self {
        Self
    }
}

impl ShapeDefinition for DiamondDefinition {
    fn outline(&self, size: Size) -> Vec<Path> {
        let center = size.center();
        let points = [
            Point::new(center.x(), 0.0),
            Point::new(size.width(), center.y()),
            Point::new(center.x(), size.height()),
            Point::new(0.0, center.y()),
        ];
        vec![Path::polygon(&points).with_fill(true)]
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
    fn test_diamond_vertices() {
        let paths = DiamondDefinition::new().outline(Size::new(0.5208, 0.5208));
        let commands = paths[0].commands();

        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(0.2604, 0.0)));
        assert_eq!(commands[1], PathCommand::LineTo(Point::new(0.5208, 0.2604)));
        assert_eq!(commands[2], PathCommand::LineTo(Point::new(0.2604, 0.5208)));
        assert_eq!(commands[3], PathCommand::LineTo(Point::new(0.0, 0.2604)));
        assert_eq!(commands[4], PathCommand::LineTo(Point::new(0.2604, 0.0)));
    }

    #[test]
    fn test_diamond_is_filled_and_detached() {
        let definition = DiamondDefinition::new();
        assert!(definition.outline(Size::new(1.0, 1.0))[0].is_filled());
        assert_eq!(definition.text_strategy(), TextStrategy::Detached);
    }
}
