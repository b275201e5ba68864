//! Detached label placement for events and gateways.
//!
//! Visio clips a shape's text to its geometry, so text placed outside an
//! ellipse or a diamond would be cut off. Named events and gateways carry
//! their text on a separate transparent label shape instead. The host keeps
//! a text block at the same spot, which is what editors show when the host
//! is given text later.

use stencil_core::{
    color::Color,
    draw::{
        FillDefinition, Path, ShapePrimitive, ShapeRole, StrokeDefinition, TextBlock,
        TextDefinition,
    },
    geometry::{Point, Size},
    model::ShapeGeometry,
};

use super::PageFrame;
use crate::config::LabelConfig;

/// Where a detached label goes, relative to its host and on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Text block in host-local coordinates.
    pub host_block: TextBlock,
    /// Center of the label shape on the page.
    pub pin: Point,
    /// Size of the label shape.
    pub size: Size,
}

impl LabelPlacement {
    /// Resolves the label of a host placed at `pin` with size `size`.
    ///
    /// A recorded label box is used as is. Without one the label is centered
    /// below the host, wider than the host itself.
    pub fn resolve(
        frame: &PageFrame,
        geometry: &ShapeGeometry,
        pin: Point,
        size: Size,
        config: &LabelConfig,
    ) -> Self {
        let floor = Size::new(config.min_width(), config.min_height());

        match geometry.label() {
            Some(label) => {
                let offset = label.center().sub_point(geometry.bounds().center());
                let dx = frame.length(offset.x());
                let dy = frame.length(offset.y());
                let label_size = frame.size(label.size()).at_least(floor);

                let host_pin = Point::new(size.width() / 2.0 + dx, size.height() / 2.0 - dy);
                Self {
                    host_block: TextBlock::new(host_pin, label_size),
                    pin: frame.to_page(label.center()).round4(),
                    size: label_size.round4(),
                }
            }
            None => {
                let label_size = Size::new(
                    (size.width() * config.fallback_width_factor()).max(config.fallback_min_width()),
                    config.fallback_height(),
                );
                let drop = label_size.height() / 2.0 + config.fallback_gap();

                let host_pin = Point::new(size.width() / 2.0, -drop);
                Self {
                    host_block: TextBlock::new(host_pin, label_size),
                    pin: Point::new(pin.x(), pin.y() - size.height() / 2.0 - drop).round4(),
                    size: label_size.at_least(floor).round4(),
                }
            }
        }
    }

    /// Builds the transparent text-only label shape.
    pub fn shape(&self, text: &str, fill: Color, text_def: TextDefinition) -> ShapePrimitive {
        let max = Point::new(self.size.width(), self.size.height());
        let mut outline = Path::invisible();
        outline.extend_polyline(&[
            Point::default(),
            Point::new(max.x(), 0.0),
            max,
            Point::new(0.0, max.y()),
            Point::default(),
        ]);

        ShapePrimitive::new(
            ShapeRole::Label,
            self.pin,
            self.size,
            FillDefinition::none(fill),
            StrokeDefinition::hidden(),
        )
        .with_text_block(TextBlock::fill(self.size))
        .with_text_def(text_def)
        .with_paths([outline])
        .with_text(text)
    }
}
