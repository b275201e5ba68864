//! Source-to-page coordinate transform.
//!
//! Source geometry is in pixels with a top-left origin; page geometry is in
//! inches with a bottom-left origin. The frame shifts the drawing so that
//! its top-left extent lands exactly one margin away from the page edges.

use stencil_core::{
    geometry::{Bounds, Point, Size},
    model::Diagram,
};

use crate::config::PageConfig;

/// Returns the source-space extent of every shape box and waypoint.
///
/// Detached label boxes do not count. Returns `None` for a diagram with no
/// recorded geometry.
pub fn diagram_extent(diagram: &Diagram) -> Option<Bounds> {
    let shapes = diagram.shapes().map(|(_, shape)| *shape.bounds());
    let waypoints = diagram
        .edges()
        .flat_map(|(_, edge)| edge.waypoints().iter().copied())
        .map(Bounds::from_point);

    shapes
        .chain(waypoints)
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// The fitted page and the transform into it.
///
/// # Examples
///
/// ```
/// # use stencil::config::PageConfig;
/// # use stencil::layout::PageFrame;
/// # use stencil_core::geometry::{Bounds, Point, Size};
/// let extent = Bounds::new_from_top_left(Point::new(100.0, 100.0), Size::new(236.0, 36.0));
/// let frame = PageFrame::fit(Some(extent), &PageConfig::default());
///
/// assert_eq!(frame.page_size(), Size::new(11.0, 8.5));
/// let p = frame.to_page(Point::new(100.0, 100.0));
/// assert!((p.x() - 50.0 / 96.0).abs() < 1e-9);
/// assert!((p.y() - (8.5 - 50.0 / 96.0)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    ppi: f64,
    offset: Point,
    page: Size,
}

impl PageFrame {
    /// Fits a page around `extent`, flooring it at the configured minimum.
    ///
    /// An absent extent yields exactly the minimum page.
    pub fn fit(extent: Option<Bounds>, config: &PageConfig) -> Self {
        let ppi = config.ppi();
        let margin = config.margin_px();
        let min = Size::new(config.min_width(), config.min_height());

        let Some(extent) = extent else {
            return Self {
                ppi,
                offset: Point::new(-margin, -margin),
                page: min,
            };
        };

        let page = Size::new(
            (extent.width() + 2.0 * margin) / ppi,
            (extent.height() + 2.0 * margin) / ppi,
        )
        .at_least(min)
        .round4();

        Self {
            ppi,
            offset: Point::new(extent.min_x() - margin, extent.min_y() - margin),
            page,
        }
    }

    /// Page size in inches, rounded to 4 decimals.
    pub fn page_size(&self) -> Size {
        self.page
    }

    /// Source pixel of the page's top-left corner.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Converts a source length in pixels to inches.
    pub fn length(&self, px: f64) -> f64 {
        px / self.ppi
    }

    /// Converts a source size in pixels to inches.
    pub fn size(&self, size: Size) -> Size {
        size.scale(1.0 / self.ppi)
    }

    /// Maps a source point onto the page.
    pub fn to_page(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.offset.x()) / self.ppi,
            self.page.height() - (point.y() - self.offset.y()) / self.ppi,
        )
    }

    /// Maps a page point back into source pixels.
    pub fn from_page(&self, point: Point) -> Point {
        Point::new(
            point.x() * self.ppi + self.offset.x(),
            (self.page.height() - point.y()) * self.ppi + self.offset.y(),
        )
    }

    /// Returns the pin (center) and size of a source box on the page,
    /// both rounded to 4 decimals.
    pub fn shape_box(&self, bounds: &Bounds) -> (Point, Size) {
        let pin = self.to_page(bounds.center()).round4();
        let size = self.size(bounds.size()).round4();
        (pin, size)
    }
}
