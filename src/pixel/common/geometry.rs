//! Integer points and half-open rectangles in image space

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the point lies inside `r` (max edges excluded).
    pub const fn in_rect(self, r: Rect) -> bool {
        r.min.x <= self.x && self.x < r.max.x && r.min.y <= self.y && self.y < r.max.y
    }
}

/// A rectangle containing the points with `min.x <= x < max.x` and
/// `min.y <= y < max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a rectangle from two corners, swapping coordinates as needed so
    /// that the result is well-formed.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    pub const fn dx(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub const fn dy(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Width as a buffer length; zero for empty or inverted rectangles.
    pub fn width(&self) -> usize {
        self.dx().max(0) as usize
    }

    pub fn height(&self) -> usize {
        self.dy().max(0) as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        Point::new(x, y).in_rect(*self)
    }

    /// The largest rectangle contained by both `self` and `other`, or the
    /// zero rectangle if they do not overlap.
    pub fn intersect(&self, other: Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Rect::default() } else { r }
    }

    /// Row-major iterator over every point in the rectangle.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let r = *self;
        (r.min.y..r.max.y).flat_map(move |y| (r.min.x..r.max.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.min.x, self.min.y, self.max.x, self.max.y)
    }
}
