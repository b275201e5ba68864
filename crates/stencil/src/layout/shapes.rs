//! Node shapes: events, activities, gateways, pools, lanes and annotations.

use std::f64::consts::FRAC_PI_2;

use log::trace;

use stencil_core::{
    draw::{
        BracketDefinition, ContainerDefinition, DiamondDefinition, EllipseDefinition,
        FillDefinition, HorizontalAlign, RoundedRectangleDefinition, ShapeDefinition,
        ShapePrimitive, ShapeRole, StrokeDefinition, TextBlock, TextDefinition,
    },
    geometry::{Point, Size},
    model::{DiagramElement, ShapeCategory, ShapeGeometry},
};

use super::{HeaderBands, PageFrame, label::LabelPlacement};
use crate::config::AppConfig;

/// A node shape and, for named events and gateways, its detached label.
#[derive(Debug, Clone)]
pub(crate) struct NodeShapes {
    pub host: ShapePrimitive,
    pub label: Option<ShapePrimitive>,
}

/// Resolves node shapes against a fitted page.
pub(crate) struct ShapeBuilder<'a> {
    frame: &'a PageFrame,
    bands: &'a HeaderBands,
    config: &'a AppConfig,
}

impl<'a> ShapeBuilder<'a> {
    pub fn new(frame: &'a PageFrame, bands: &'a HeaderBands, config: &'a AppConfig) -> Self {
        Self {
            frame,
            bands,
            config,
        }
    }

    pub fn build(&self, element: &DiagramElement, geometry: &ShapeGeometry) -> NodeShapes {
        let category = element.category();
        let (pin, size) = self.frame.shape_box(geometry.bounds());
        let band = self
            .bands
            .band_px(element.id())
            .map(|px| self.frame.length(px))
            .unwrap_or(0.0);
        let horizontal = geometry.is_horizontal();

        let definition = self.definition(category, band, horizontal);
        let strategy = definition.text_strategy();

        let mut paths = definition.outline(size);
        if let Some(marker) = element.kind().marker() {
            paths.extend(marker.paths(size));
        }

        let shapes = self.config.shapes();
        let text_def = TextDefinition::new(self.font_size(category, band), shapes.text_color())
            .with_align(match category {
                ShapeCategory::Annotation => HorizontalAlign::Left,
                _ => HorizontalAlign::Center,
            });

        let (text_block, label) = if category.is_event() || category == ShapeCategory::Gateway {
            let placement =
                LabelPlacement::resolve(self.frame, geometry, pin, size, self.config.labels());
            let label = strategy.needs_label_shape(element.name()).then(|| {
                placement.shape(
                    element.name(),
                    shapes.fill_color(),
                    TextDefinition::new(self.config.labels().font_size(), shapes.text_color()),
                )
            });
            (placement.host_block, label)
        } else if category.is_container() {
            (container_block(size, band, horizontal), None)
        } else {
            (TextBlock::fill(size), None)
        };

        let host_text = if strategy.host_carries_text(element.name()) {
            element.name()
        } else {
            ""
        };

        let host = ShapePrimitive::new(
            ShapeRole::Shape,
            pin,
            size,
            self.fill(category, geometry),
            self.stroke(element, geometry),
        )
        .with_text_block(text_block)
        .with_rounding(definition.rounding(size))
        .with_text_def(text_def)
        .with_paths(paths)
        .with_text(host_text);

        trace!(id = element.id(), category:% = category, pin:? = pin, size:? = size; "Node shape");

        NodeShapes { host, label }
    }

    fn definition(
        &self,
        category: ShapeCategory,
        band: f64,
        horizontal: bool,
    ) -> Box<dyn ShapeDefinition> {
        let shapes = self.config.shapes();
        match category {
            ShapeCategory::StartEvent
            | ShapeCategory::EndEvent
            | ShapeCategory::IntermediateEvent => Box::new(EllipseDefinition::new()),
            ShapeCategory::Gateway => Box::new(DiamondDefinition::new()),
            ShapeCategory::Task => {
                Box::new(RoundedRectangleDefinition::new(shapes.task_corner_cap()))
            }
            ShapeCategory::Annotation => {
                Box::new(BracketDefinition::new(shapes.annotation_tick()))
            }
            ShapeCategory::Pool | ShapeCategory::Lane => {
                Box::new(ContainerDefinition::new(band, horizontal))
            }
        }
    }

    fn fill(&self, category: ShapeCategory, geometry: &ShapeGeometry) -> FillDefinition {
        if let Some(color) = geometry.style().fill {
            return FillDefinition::solid(color);
        }
        let white = self.config.shapes().fill_color();
        match category {
            ShapeCategory::Annotation => FillDefinition::transparent(white),
            _ => FillDefinition::solid(white),
        }
    }

    fn stroke(&self, element: &DiagramElement, geometry: &ShapeGeometry) -> StrokeDefinition {
        let shapes = self.config.shapes();
        let light = matches!(
            element.category(),
            ShapeCategory::Pool | ShapeCategory::Lane | ShapeCategory::Annotation
        );

        let color = geometry.style().stroke.unwrap_or(if light {
            shapes.container_stroke_color()
        } else {
            shapes.stroke_color()
        });
        let weight = if element.kind().is_heavy() {
            shapes.heavy_weight()
        } else if light {
            shapes.light_weight()
        } else {
            shapes.regular_weight()
        };

        StrokeDefinition::new(color, weight)
    }

    fn font_size(&self, category: ShapeCategory, band: f64) -> f64 {
        let shapes = self.config.shapes();
        match category {
            ShapeCategory::Task => shapes.task_font_size(),
            ShapeCategory::Annotation => shapes.annotation_font_size(),
            ShapeCategory::StartEvent
            | ShapeCategory::EndEvent
            | ShapeCategory::IntermediateEvent
            | ShapeCategory::Gateway => shapes.event_font_size(),
            ShapeCategory::Pool | ShapeCategory::Lane if band > 0.0 => {
                shapes.header_font_size(band)
            }
            ShapeCategory::Pool | ShapeCategory::Lane => shapes.container_font_size(),
        }
    }
}

/// Text block of a pool or lane.
///
/// Horizontal containers read bottom-to-top inside the left band; vertical
/// containers read normally inside the top band.
fn container_block(size: Size, band: f64, horizontal: bool) -> TextBlock {
    if band <= 0.0 {
        return TextBlock::fill(size);
    }
    if horizontal {
        TextBlock::new(
            Point::new(band / 2.0, size.height() / 2.0),
            Size::new(size.height(), band),
        )
        .with_angle(FRAC_PI_2)
    } else {
        TextBlock::new(
            Point::new(size.width() / 2.0, size.height() - band / 2.0),
            Size::new(size.width(), band),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use stencil_core::{
        color::Color,
        draw::{LinePattern, PathCommand},
        geometry::Bounds,
        model::{
            ActivityKind, Diagram, ElementKind, EventTrigger, GatewayKind, StyleOverrides,
        },
    };

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
    }

    fn build_one(kind: ElementKind, name: &str, geometry: ShapeGeometry) -> NodeShapes {
        let mut diagram = Diagram::new();
        diagram.add_element(DiagramElement::new("E", kind, name));
        diagram.add_shape("E", geometry);
        build_in(&diagram, "E")
    }

    fn build_in(diagram: &Diagram, id: &str) -> NodeShapes {
        let config = AppConfig::default();
        let frame = PageFrame::fit(crate::layout::diagram_extent(diagram), config.page());
        let bands = HeaderBands::measure(diagram, config.shapes().header_band_px());
        let builder = ShapeBuilder::new(&frame, &bands, &config);
        builder.build(diagram.element(id).unwrap(), diagram.shape(id).unwrap())
    }

    #[test]
    fn test_start_event_is_ellipse() {
        let shapes = build_one(
            ElementKind::StartEvent(None),
            "",
            ShapeGeometry::new(bounds(100.0, 100.0, 36.0, 36.0)),
        );
        let host = shapes.host;
        assert_eq!(host.size(), Size::new(0.375, 0.375));
        assert_eq!(host.paths().len(), 1);
        assert!(matches!(host.paths()[0].commands()[0], PathCommand::Ellipse { .. }));
        assert_eq!(host.stroke().weight(), 0.02);
        assert_eq!(host.stroke().color().to_hex(), "#000000");
        assert_eq!(host.text_def().unwrap().font_size(), 6.0);
        assert!(shapes.label.is_none());
        assert_eq!(host.text(), None);
    }

    #[test]
    fn test_named_end_event_gets_label() {
        let shapes = build_one(
            ElementKind::EndEvent(Some(EventTrigger::Message)),
            "Done",
            ShapeGeometry::new(bounds(100.0, 100.0, 36.0, 36.0)),
        );
        assert_eq!(shapes.host.stroke().weight(), 0.04);
        assert_eq!(shapes.host.text(), None);
        // Ellipse plus envelope and fold line.
        assert_eq!(shapes.host.paths().len(), 3);

        let label = shapes.label.unwrap();
        assert_eq!(label.role(), ShapeRole::Label);
        assert_eq!(label.text(), Some("Done"));
        assert!(label.pin().y() < shapes.host.pin().y());
    }

    #[test]
    fn test_gateway_marker_and_label() {
        let shapes = build_one(
            ElementKind::Gateway(GatewayKind::Exclusive),
            "Approved?",
            ShapeGeometry::new(bounds(100.0, 100.0, 50.0, 50.0)),
        );
        assert_eq!(shapes.host.paths().len(), 2);
        assert!(shapes.host.rounding().is_none());
        assert_eq!(shapes.label.unwrap().text(), Some("Approved?"));
    }

    #[test]
    fn test_task_embeds_text() {
        let shapes = build_one(
            ElementKind::Task(ActivityKind::User),
            "Review order",
            ShapeGeometry::new(bounds(200.0, 80.0, 100.0, 80.0)),
        );
        let host = shapes.host;
        assert_eq!(host.text(), Some("Review order"));
        assert!(shapes.label.is_none());
        // min(0.1, 0.1 * 1.0417, 0.1 * 0.8333)
        assert!(approx_eq!(f64, host.rounding().unwrap(), 0.08333, epsilon = 1e-9));
        assert_eq!(host.text_block().unwrap().size(), host.size());
        assert_eq!(host.text_def().unwrap().font_size(), 8.0);
    }

    #[test]
    fn test_sub_process_is_heavy_with_marker() {
        let shapes = build_one(
            ElementKind::Task(ActivityKind::SubProcess),
            "Ship",
            ShapeGeometry::new(bounds(200.0, 80.0, 100.0, 80.0)),
        );
        assert_eq!(shapes.host.stroke().weight(), 0.04);
        assert!(shapes.host.paths().len() > 1);
    }

    #[test]
    fn test_annotation_style() {
        let shapes = build_one(
            ElementKind::Annotation,
            "Check stock first",
            ShapeGeometry::new(bounds(400.0, 20.0, 120.0, 40.0)),
        );
        let host = shapes.host;
        assert!(host.fill().is_transparent());
        assert_eq!(host.stroke().weight(), 0.01);
        assert_eq!(host.stroke().color().to_hex(), "#999999");
        assert_eq!(host.text_def().unwrap().align(), HorizontalAlign::Left);
        assert_eq!(host.text_def().unwrap().font_size(), 7.0);
        assert!(!host.paths()[0].is_filled());
        assert_eq!(host.text(), Some("Check stock first"));
    }

    #[test]
    fn test_style_overrides() {
        let style = StyleOverrides {
            fill: Some(Color::new("#e1f5fe").unwrap()),
            stroke: Some(Color::new("#0277bd").unwrap()),
        };
        let shapes = build_one(
            ElementKind::Task(ActivityKind::Task),
            "",
            ShapeGeometry::new(bounds(200.0, 80.0, 100.0, 80.0)).with_style(style),
        );
        assert_eq!(shapes.host.fill().color().to_hex(), "#E1F5FE");
        assert!(!shapes.host.fill().is_transparent());
        assert_eq!(shapes.host.stroke().color().to_hex(), "#0277BD");
        assert_eq!(shapes.host.stroke().pattern(), LinePattern::Solid);
    }

    #[test]
    fn test_horizontal_pool_header_text() {
        let mut diagram = Diagram::new();
        diagram.add_element(DiagramElement::new("Pool", ElementKind::Pool, "Sales"));
        diagram.add_shape("Pool", ShapeGeometry::new(bounds(0.0, 0.0, 600.0, 200.0)));

        let host = build_in(&diagram, "Pool").host;
        let block = host.text_block().unwrap();
        assert!(approx_eq!(f64, block.angle(), FRAC_PI_2, epsilon = 1e-12));
        assert_eq!(block.pin(), Point::new(0.15625, host.size().height() / 2.0));
        assert_eq!(block.size(), Size::new(host.size().height(), 0.3125));
        assert_eq!(host.text_def().unwrap().font_size(), 7.0);
        // Body plus header divider.
        assert_eq!(host.paths().len(), 2);
        assert_eq!(host.text(), Some("Sales"));
    }

    #[test]
    fn test_vertical_pool_without_band() {
        let mut diagram = Diagram::new();
        diagram.add_element(DiagramElement::new("Pool", ElementKind::Pool, "Column"));
        diagram.add_shape(
            "Pool",
            ShapeGeometry::new(bounds(0.0, 0.0, 200.0, 600.0)).with_horizontal(Some(false)),
        );

        let host = build_in(&diagram, "Pool").host;
        let block = host.text_block().unwrap();
        assert_eq!(block.angle(), 0.0);
        assert_eq!(block.size(), host.size());
        assert_eq!(host.text_def().unwrap().font_size(), 9.0);
        assert_eq!(host.paths().len(), 1);
    }

    #[test]
    fn test_vertical_container_block() {
        let block = container_block(Size::new(2.0, 6.0), 0.3125, false);
        assert_eq!(block.angle(), 0.0);
        assert_eq!(block.pin(), Point::new(1.0, 6.0 - 0.15625));
        assert_eq!(block.size(), Size::new(2.0, 0.3125));
    }
}
