//! Header band measurement for pools and lanes.

use indexmap::{IndexMap, IndexSet};
use log::debug;

use stencil_core::model::{Diagram, ShapeCategory};

/// Header band widths, in source pixels, keyed by pool or lane id.
///
/// A pool that owns placed lanes gets a band as wide as the gap between its
/// left edge and the leftmost lane, never narrower than the configured
/// default. Its lanes share that band, except that a single unnamed lane is
/// hidden altogether. Horizontal pools that end up without a measured band
/// still receive the default width so their rotated header text has a strip
/// to live in.
#[derive(Debug, Clone, Default)]
pub struct HeaderBands {
    bands: IndexMap<String, f64>,
    hidden: IndexSet<String>,
}

impl HeaderBands {
    /// Measures every band in the diagram.
    ///
    /// `default_px` is both the floor of a measured band and the width of a
    /// band that cannot be measured.
    pub fn measure(diagram: &Diagram, default_px: f64) -> Self {
        let mut bands = Self::default();

        for (pool_id, lanes) in diagram.pools_with_lanes() {
            let Some(pool) = diagram.shape(pool_id) else {
                continue;
            };
            let Some(lane_left) = lanes
                .iter()
                .filter_map(|lane| diagram.shape(lane))
                .map(|lane| lane.bounds().min_x())
                .reduce(f64::min)
            else {
                continue;
            };

            let band = (lane_left - pool.bounds().min_x()).max(default_px);
            bands.bands.insert(pool_id.to_string(), band);

            let any_named = lanes
                .iter()
                .any(|lane| diagram.element(lane).is_some_and(|e| e.has_name()));
            match lanes {
                [lane] if !any_named => {
                    debug!(pool = pool_id, lane = lane.as_str(); "Hiding single unnamed lane");
                    bands.hidden.insert(lane.clone());
                }
                _ => {
                    for lane in lanes {
                        bands.bands.insert(lane.clone(), band);
                    }
                }
            }
            debug!(pool = pool_id, band = band, lanes_len = lanes.len(); "Header band measured");
        }

        // Pools with a lane list but no placed lanes.
        for (pool_id, _) in diagram.pools_with_lanes() {
            if bands.bands.contains_key(pool_id) {
                continue;
            }
            if diagram.shape(pool_id).is_some_and(|s| s.is_horizontal()) {
                bands.bands.insert(pool_id.to_string(), default_px);
            }
        }

        // Pools without any lane list.
        for pool in diagram
            .elements()
            .filter(|e| e.category() == ShapeCategory::Pool)
        {
            if bands.bands.contains_key(pool.id()) {
                continue;
            }
            if diagram.shape(pool.id()).is_some_and(|s| s.is_horizontal()) {
                bands.bands.insert(pool.id().to_string(), default_px);
            }
        }

        bands
    }

    /// Band width of a pool or lane in source pixels, if it has one.
    pub fn band_px(&self, id: &str) -> Option<f64> {
        self.bands.get(id).copied()
    }

    /// Returns true for a lane that is not drawn at all.
    pub fn is_hidden(&self, id: &str) -> bool {
        self.hidden.contains(id)
    }
}
