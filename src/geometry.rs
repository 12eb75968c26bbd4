use serde::{Deserialize, Serialize};

/// A point in the shared diagram coordinate space.
///
/// Equality is exact coordinate match; the router never compares with an
/// epsilon, so two points are either identical or distinct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `(x, y)` lies within `radius` of this point (inclusive).
    pub fn near(&self, x: f32, y: f32, radius: f32) -> bool {
        self.distance_to(Point::new(x, y)) <= radius
    }
}

/// An axis-aligned obstacle rectangle with `x1 <= x2` and `y1 <= y2`.
///
/// Boxes are supplied by the caller per routing call; the router does not
/// retain them between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns a copy with misordered corners swapped into canonical form.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// The four boundary segments, in top/right/bottom/left order.
    pub fn edges(&self) -> [Segment; 4] {
        let tl = Point::new(self.x1, self.y1);
        let tr = Point::new(self.x2, self.y1);
        let br = Point::new(self.x2, self.y2);
        let bl = Point::new(self.x1, self.y2);
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }
}

/// A line segment between two points. Transient: built only for
/// containment/intersection tests, never stored in a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    fn is_vertical(&self) -> bool {
        self.a.x == self.b.x
    }

    fn min_x(&self) -> f32 {
        self.a.x.min(self.b.x)
    }

    fn max_x(&self) -> f32 {
        self.a.x.max(self.b.x)
    }

    fn min_y(&self) -> f32 {
        self.a.y.min(self.b.y)
    }

    fn max_y(&self) -> f32 {
        self.a.y.max(self.b.y)
    }

    fn in_bounds(&self, x: f32, y: f32) -> bool {
        x >= self.min_x() && x <= self.max_x() && y >= self.min_y() && y <= self.max_y()
    }

    /// Slope of the segment's carrier line. Callers must handle the vertical
    /// case first; the division here assumes distinct x coordinates.
    fn slope(&self) -> f32 {
        (self.b.y - self.a.y) / (self.b.x - self.a.x)
    }

    /// y-intercept of the carrier line (non-vertical segments only).
    fn intercept(&self) -> f32 {
        self.a.y - self.slope() * self.a.x
    }

    /// True when `(x, y)` lies on the segment: within its bounding box and on
    /// its carrier line. Vertical segments are matched by x alone.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        if self.is_vertical() {
            return x == self.a.x;
        }
        y == self.slope() * x + self.intercept()
    }

    /// Segment/segment intersection with full case analysis: both vertical,
    /// one vertical, parallel non-vertical, and the general crossing case.
    pub fn intersects(&self, other: &Segment) -> bool {
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => {
                // Coincident carrier lines with overlapping y ranges.
                self.a.x == other.a.x
                    && self.min_y() <= other.max_y()
                    && other.min_y() <= self.max_y()
            }
            (true, false) => {
                let x = self.a.x;
                let y = other.slope() * x + other.intercept();
                self.contains(x, y) && other.contains(x, y)
            }
            (false, true) => other.intersects(self),
            (false, false) => {
                let k1 = self.slope();
                let k2 = other.slope();
                let c1 = self.intercept();
                let c2 = other.intercept();
                if k1 == k2 {
                    // Parallel: intersect only when coincident and overlapping.
                    return c1 == c2
                        && self.min_x() <= other.max_x()
                        && other.min_x() <= self.max_x();
                }
                let x = (c2 - c1) / (k1 - k2);
                let y = k1 * x + c1;
                self.contains(x, y) && other.contains(x, y)
            }
        }
    }
}
