//! Decorative marker overlays.
//!
//! Markers are small stroked paths layered on top of a shape outline to show
//! its sub-kind: the symbol inside a gateway, the icon inside an event, or the
//! collapsed sub-process glyph at the bottom of an activity. Marker geometry
//! is expressed in the same shape-local coordinates as the outline.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, TAU};

use crate::{
    draw::Path,
    geometry::{Point, Size, round4},
};

/// Marker scale relative to the smaller shape side, for gateways.
const GATEWAY_SCALE: f64 = 0.3;
/// Marker scale relative to the smaller shape side, for events.
const EVENT_SCALE: f64 = 0.25;
/// Number of segments used to approximate circles.
const CIRCLE_SEGMENTS: usize = 12;

/// Side of the collapsed sub-process box, in inches.
const SUB_PROCESS_BOX: f64 = 0.12;
/// Gap between the collapsed sub-process box and the bottom edge, in inches.
const SUB_PROCESS_MARGIN: f64 = 0.04;
/// Length of the plus arms relative to half the box side.
const SUB_PROCESS_CROSS: f64 = 0.65;

/// Decorative overlay drawn on top of a shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Diagonal cross inside an exclusive gateway
    Exclusive,
    /// Upright plus inside a parallel gateway
    Parallel,
    /// Circle inside an inclusive gateway
    Inclusive,
    /// Pentagon inside an event-based gateway
    EventBased,
    /// Envelope inside a message event
    Message,
    /// Clock face inside a timer event
    Timer,
    /// Triangle inside a signal event
    Signal,
    /// Boxed plus at the bottom of a collapsed sub-process or call activity
    SubProcess,
}

impl Marker {
    /// Returns the overlay paths for a shape of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use stencil_core::draw::Marker;
    /// # use stencil_core::geometry::Size;
    /// let paths = Marker::Message.paths(Size::new(0.375, 0.375));
    /// assert_eq!(paths.len(), 2);
    /// assert!(paths.iter().all(|p| !p.is_filled()));
    /// ```
    pub fn paths(self, size: Size) -> Vec<Path> {
        let center = size.center().round4();
        match self {
            Self::Exclusive => vec![exclusive(center, size.min_side() * GATEWAY_SCALE)],
            Self::Parallel => vec![parallel(center, size.min_side() * GATEWAY_SCALE)],
            Self::Inclusive => vec![ring(
                center,
                size.min_side() * GATEWAY_SCALE * 0.6,
                CIRCLE_SEGMENTS,
                0.0,
            )],
            Self::EventBased => vec![ring(
                center,
                size.min_side() * GATEWAY_SCALE * 0.6,
                5,
                -FRAC_PI_2,
            )],
            Self::Message => envelope(center, size.min_side() * EVENT_SCALE),
            Self::Timer => clock(center, size.min_side() * EVENT_SCALE),
            Self::Signal => vec![triangle(center, size.min_side() * EVENT_SCALE)],
            Self::SubProcess => sub_process(size),
        }
    }
}

// Gateway arm lengths are rounded before the vertices are derived from them.
fn exclusive(c: Point, scale: f64) -> Path {
    let d = round4(scale * 0.7);
    Path::stroked()
        .move_to(Point::new(c.x() - d, c.y() - d))
        .line_to(Point::new(c.x() + d, c.y() + d))
        .move_to(Point::new(c.x() + d, c.y() - d))
        .line_to(Point::new(c.x() - d, c.y() + d))
}

fn parallel(c: Point, scale: f64) -> Path {
    let d = round4(scale * 0.8);
    plus(c, d)
}

fn plus(c: Point, d: f64) -> Path {
    Path::stroked()
        .move_to(Point::new(c.x(), c.y() - d))
        .line_to(Point::new(c.x(), c.y() + d))
        .move_to(Point::new(c.x() - d, c.y()))
        .line_to(Point::new(c.x() + d, c.y()))
}

/// A closed regular polygon with `sides` vertices starting at `phase`.
fn ring(c: Point, radius: f64, sides: usize, phase: f64) -> Path {
    let points: Vec<Point> = (0..sides)
        .map(|i| {
            let angle = TAU * i as f64 / sides as f64 + phase;
            Point::new(c.x() + radius * angle.cos(), c.y() + radius * angle.sin())
        })
        .collect();
    Path::polygon(&points)
}

fn envelope(c: Point, scale: f64) -> Vec<Path> {
    let half_w = scale * 1.2;
    let half_h = scale * 0.8;
    let (left, right) = (c.x() - half_w, c.x() + half_w);
    let (bottom, top) = (c.y() - half_h, c.y() + half_h);

    let body = Path::rectangle(Point::new(left, bottom), Point::new(right, top));
    let flap = Path::polyline(&[
        Point::new(left, top),
        Point::new(c.x(), c.y() + half_h * 0.3),
        Point::new(right, top),
    ]);
    vec![body, flap]
}

fn clock(c: Point, scale: f64) -> Vec<Path> {
    let radius = scale * 0.8;
    let face = ring(c, radius, CIRCLE_SEGMENTS, 0.0);

    let short_hand = Point::new(
        c.x() + radius * 0.5 * FRAC_PI_3.cos(),
        c.y() + radius * 0.5 * FRAC_PI_3.sin(),
    );
    let long_hand = Point::new(c.x(), c.y() + radius * 0.7);
    let hands = Path::stroked()
        .move_to(c)
        .line_to(short_hand)
        .move_to(c)
        .line_to(long_hand);

    vec![face, hands]
}

fn triangle(c: Point, scale: f64) -> Path {
    let s = scale * 0.8;
    Path::polygon(&[
        Point::new(c.x(), c.y() + s),
        Point::new(c.x() - s, c.y() - s * 0.6),
        Point::new(c.x() + s, c.y() - s * 0.6),
    ])
}

fn sub_process(size: Size) -> Vec<Path> {
    let half = SUB_PROCESS_BOX / 2.0;
    let c = Point::new(size.width() / 2.0, SUB_PROCESS_MARGIN + half).round4();

    let frame = Path::rectangle(
        Point::new(c.x() - half, c.y() - half),
        Point::new(c.x() + half, c.y() + half),
    );
    vec![frame, plus(c, half * SUB_PROCESS_CROSS)]
}
