//! Rectangle outline for pools and lanes.

use super::ShapeDefinition;
use crate::{
    draw::Path,
    geometry::{Point, Size},
};

/// A pool or lane rectangle with an optional header band.
///
/// When a band is present, a second unfilled path draws the divider between
/// the header strip and the content area. Horizontal containers carry the
/// header on the left edge; vertical containers carry it along the top.
#[derive(Debug, Clone)]
pub struct ContainerDefinition {
    band: f64,
    horizontal: bool,
}

impl ContainerDefinition {
    /// Creates a container with a header band of `band` inches.
    ///
    /// A band of zero (or less) means no header strip.
    pub fn new(band: f64, horizontal: bool) -> Self {
        Self { band, horizontal }
    }

    /// Returns true if a header band is drawn.
    pub fn has_band(&self) -> bool {
        self.band > 0.0
    }

    pub fn band(&self) -> f64 {
        self.band
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn divider(&self, size: Size) -> Path {
        let (start, end) = if self.horizontal {
            (
                Point::new(self.band, 0.0),
                Point::new(self.band, size.height()),
            )
        } else {
            let y = size.height() - self.band;
            (Point::new(0.0, y), Point::new(size.width(), y))
        };
        Path::polyline(&[start, end])
    }
}

impl ShapeDefinition for ContainerDefinition {
    fn outline(&self, size: Size) -> Vec<Path> {
        let max = Point::new(size.width(), size.height());
        let mut paths = vec![Path::rectangle(Point::default(), max).with_fill(true)];
        if self.has_band() {
            paths.push(self.divider(size));
        }
        paths
    }

    fn clone_box(&self) -> Box<dyn ShapeDefinition> {
        Box::new(self.clone())
    }
}
