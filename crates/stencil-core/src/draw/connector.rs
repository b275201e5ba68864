//! Connector curves.
//!
//! A connector is drawn as an open polyline whose interior corners are
//! replaced by circular arcs, optionally terminated by a filled triangular
//! arrowhead. All points are expected in the connector's local coordinate
//! system.
//!
//! # Corner rounding
//!
//! At each interior vertex `v` with neighbours `prev` and `next`:
//!
//! ```text
//!   prev ──────────── cb1 ╮
//!                         │ ArcTo (bow = r(1 - cos(θ/2)))
//!                         cb2
//!                         │
//!                         next
//! ```
//!
//! `cb1` and `cb2` are cut back by `r` from `v` along each adjacent segment,
//! where `r` is clamped so it never consumes more than 45% of either segment.

use crate::{draw::Path, geometry::Point};

/// Largest share of an adjacent segment a corner may consume.
const MAX_SEGMENT_SHARE: f64 = 0.45;
/// Segments shorter than this are treated as degenerate.
const MIN_SEGMENT_LENGTH: f64 = 1e-6;
/// Turns smaller than this angle (radians) are treated as straight.
const MIN_TURN_ANGLE: f64 = 1e-4;

/// Returns the rounding radius for a corner between segments of the given
/// lengths.
///
/// # Examples
///
/// ```
/// # use stencil_core::draw::corner_radius;
/// assert_eq!(corner_radius(0.15, 2.0, 3.0), 0.15);
/// assert_eq!(corner_radius(0.15, 0.2, 3.0), 0.2 * 0.45);
/// ```
pub fn corner_radius(max_radius: f64, incoming: f64, outgoing: f64) -> f64 {
    max_radius
        .min(incoming * MAX_SEGMENT_SHARE)
        .min(outgoing * MAX_SEGMENT_SHARE)
}

/// Builds rounded polylines through ordered waypoints.
#[derive(Debug, Clone, Copy)]
pub struct RoundedPolyline {
    radius: f64,
}

impl RoundedPolyline {
    /// Creates a builder rounding corners with at most `radius` inches.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the stroked path through `points`, or `None` for fewer than
    /// two points.
    ///
    /// Two points always produce a single straight segment.
    pub fn path(&self, points: &[Point]) -> Option<Path> {
        let (first, last) = match points {
            [] | [_] => return None,
            [first, .., last] => (*first, *last),
        };

        let mut path = Path::stroked().move_to(first);
        for window in points.windows(3) {
            let [prev, vertex, next] = [window[0], window[1], window[2]];
            path = self.round_corner(path, prev, vertex, next);
        }
        Some(path.line_to(last))
    }

    fn round_corner(&self, path: Path, prev: Point, vertex: Point, next: Point) -> Path {
        let to_prev = prev.sub_point(vertex);
        let to_next = next.sub_point(vertex);
        let len_in = to_prev.hypot();
        let len_out = to_next.hypot();

        if len_in < MIN_SEGMENT_LENGTH || len_out < MIN_SEGMENT_LENGTH {
            return path.line_to(vertex);
        }

        let r = corner_radius(self.radius, len_in, len_out);
        let u1 = to_prev.scale(1.0 / len_in);
        let u2 = to_next.scale(1.0 / len_out);
        let cut_in = vertex.add_point(u1.scale(r));
        let cut_out = vertex.add_point(u2.scale(r));

        let path = path.line_to(cut_in);

        let dot = u1.x() * u2.x() + u1.y() * u2.y();
        let turn = (-dot).clamp(-1.0, 1.0).acos();
        if turn < MIN_TURN_ANGLE {
            return path.line_to(cut_out);
        }

        let mut bow = r * (1.0 - (turn / 2.0).cos());
        // incoming direction is -u1
        let cross = -u1.x() * u2.y() + u1.y() * u2.x();
        if cross < 0.0 {
            bow = -bow;
        }
        path.arc_to(cut_out, bow)
    }
}

/// Builds filled triangular arrowheads.
#[derive(Debug, Clone, Copy)]
pub struct Arrowhead {
    length: f64,
    half_width: f64,
}

impl Arrowhead {
    /// Creates an arrowhead `length` inches long whose half-width is
    /// `length * width_ratio`.
    pub fn new(length: f64, width_ratio: f64) -> Self {
        Self {
            length,
            half_width: length * width_ratio,
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Returns the arrowhead for a segment ending at `tip`, or `None` if the
    /// segment is degenerate.
    pub fn path(&self, from: Point, tip: Point) -> Option<Path> {
        let delta = tip.sub_point(from);
        let length = delta.hypot();
        if length < MIN_SEGMENT_LENGTH {
            return None;
        }

        let u = delta.scale(1.0 / length);
        let normal = Point::new(-u.y(), u.x());
        let base = tip.sub_point(u.scale(self.length));
        let left = base.add_point(normal.scale(self.half_width));
        let right = base.sub_point(normal.scale(self.half_width));

        Some(Path::polygon(&[tip, left, right]).with_fill(true))
    }
}
