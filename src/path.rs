//! Edge path geometry.
//!
//! An edge is drawn either as a straight segment or as a horizontal-biased
//! cubic bezier between its two socket anchors. The same geometry is used for
//! hit testing, cut-line intersection and the SVG commands handed to the view.

use crate::edge::EdgeType;
use crate::geometry::{distance_to_segment_sq, segments_intersect, Point};

/// Endpoints closer than this are always drawn straight to avoid zig-zags.
const STRAIGHT_THRESHOLD: f64 = 10.0;

/// Cubic bezier curve for distance calculations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point, // Start point
    pub p1: Point, // Control point 1
    pub p2: Point, // Control point 2
    pub p3: Point, // End point
}

impl CubicBezier {
    /// Control points extend horizontally from both ends by
    /// `max(|dx| / 2, min_offset)`.
    pub fn from_endpoints(start: Point, end: Point, min_offset: f64) -> Self {
        let d = end - start;
        if d.x * d.x + d.y * d.y < STRAIGHT_THRESHOLD * STRAIGHT_THRESHOLD {
            return CubicBezier {
                p0: start,
                p1: start,
                p2: end,
                p3: end,
            };
        }

        let offset = (d.x.abs() * 0.5).max(min_offset);

        CubicBezier {
            p0: start,
            p1: Point::new(start.x + offset, start.y),
            p2: Point::new(end.x - offset, end.y),
            p3: end,
        }
    }

    /// Evaluate the bezier curve at parameter t (0.0 to 1.0)
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * self.p0.x + 3.0 * mt2 * t * self.p1.x + 3.0 * mt * t2 * self.p2.x + t3 * self.p3.x;
        let y = mt3 * self.p0.y + 3.0 * mt2 * t * self.p1.y + 3.0 * mt * t2 * self.p2.y + t3 * self.p3.y;

        Point::new(x, y)
    }

    fn is_straight(&self) -> bool {
        self.p0 == self.p1 && self.p2 == self.p3
    }
}

/// Geometric path of one edge in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgePath {
    Direct { start: Point, end: Point },
    Bezier(CubicBezier),
}

impl EdgePath {
    pub fn new(edge_type: EdgeType, start: Point, end: Point, min_offset: f64) -> Self {
        match edge_type {
            EdgeType::Direct => EdgePath::Direct { start, end },
            EdgeType::Bezier => EdgePath::Bezier(CubicBezier::from_endpoints(start, end, min_offset)),
        }
    }

    /// Flatten into a polyline. Straight paths yield their two endpoints.
    pub fn polyline(&self, samples: usize) -> Vec<Point> {
        match self {
            EdgePath::Direct { start, end } => vec![*start, *end],
            EdgePath::Bezier(b) if b.is_straight() => vec![b.p0, b.p3],
            EdgePath::Bezier(b) => {
                let samples = if samples == 0 { 20 } else { samples };
                (0..=samples)
                    .map(|i| b.eval(i as f64 / samples as f64))
                    .collect()
            }
        }
    }

    /// Minimum distance from `point` to the (sampled) path.
    pub fn distance_to(&self, point: Point, samples: usize) -> f64 {
        self.polyline(samples)
            .windows(2)
            .map(|w| distance_to_segment_sq(point, w[0], w[1]))
            .fold(f64::MAX, f64::min)
            .sqrt()
    }

    /// Whether the segment `a-b` crosses the (sampled) path.
    pub fn intersects_segment(&self, a: Point, b: Point, samples: usize) -> bool {
        self.polyline(samples)
            .windows(2)
            .any(|w| segments_intersect(a, b, w[0], w[1]))
    }

    /// SVG path commands, e.g. `"M 10 20 C 60 20 90 80 140 80"`.
    pub fn svg_commands(&self) -> String {
        match self {
            EdgePath::Direct { start, end } => {
                format!("M {} {} L {} {}", start.x, start.y, end.x, end.y)
            }
            EdgePath::Bezier(b) if b.is_straight() => {
                format!("M {} {} L {} {}", b.p0.x, b.p0.y, b.p3.x, b.p3.y)
            }
            EdgePath::Bezier(b) => format!(
                "M {} {} C {} {} {} {} {} {}",
                b.p0.x, b.p0.y, b.p1.x, b.p1.y, b.p2.x, b.p2.y, b.p3.x, b.p3.y
            ),
        }
    }
}
