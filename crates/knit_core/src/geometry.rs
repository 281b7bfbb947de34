//! Integer geometry
//!
//! Regions are half-open: `min` is inside the rectangle, `max` is not.

use std::fmt;

/// A point in integer pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a delta
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An axis-aligned integer rectangle
///
/// Used both for widget-local regions and, after [`Rect::absolute`], for
/// screen-space regions. A rectangle with zero width or height is empty and
/// drawing into it does nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Create a rectangle from two corners, swapping coordinates as needed
    /// so that `min <= max` on both axes.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Create a rectangle from an origin and a size
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn x(&self) -> i32 {
        self.min.x
    }

    pub fn y(&self) -> i32 {
        self.min.y
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Width and height as a pair
    pub fn size(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// Whether the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Half-open containment test: `min <= p < max`
    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x
            && point.x < self.max.x
            && self.min.y <= point.y
            && point.y < self.max.y
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Rect {
            min: self.min.offset(dx, dy),
            max: self.max.offset(dx, dy),
        }
    }

    /// Translate a relative region into the coordinate space of `origin`.
    ///
    /// The result starts at `origin.min + relative.min` and keeps the size of
    /// `relative`; it is not clipped to `origin`.
    pub fn absolute(relative: Rect, origin: Rect) -> Rect {
        let x = origin.min.x + relative.min.x;
        let y = origin.min.y + relative.min.y;
        Rect::from_xywh(x, y, relative.width(), relative.height())
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_canonicalizes_corners() {
        let r = Rect::new(10, 20, 0, 5);
        assert_eq!(r.min, Point::new(0, 5));
        assert_eq!(r.max, Point::new(10, 20));
        assert_eq!(r.size(), (10, 15));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::from_xywh(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 5)));
        assert!(!r.contains(Point::new(5, 10)));
        assert!(!r.contains(Point::new(-1, 5)));
    }

    #[test]
    fn test_empty_rect() {
        assert!(Rect::from_xywh(5, 5, 0, 10).is_empty());
        assert!(Rect::from_xywh(5, 5, 10, 0).is_empty());
        assert!(!Rect::from_xywh(5, 5, 1, 1).is_empty());
        // Nothing is inside an empty rect
        assert!(!Rect::from_xywh(5, 5, 0, 10).contains(Point::new(5, 5)));
    }

    #[test]
    fn test_absolute_region() {
        let parent = Rect::from_xywh(100, 50, 300, 200);
        let child = Rect::from_xywh(10, 20, 80, 24);

        let abs = Rect::absolute(child, parent);
        assert_eq!(abs, Rect::from_xywh(110, 70, 80, 24));

        // Not clipped against the parent
        let overflowing = Rect::from_xywh(280, 0, 100, 10);
        assert_eq!(
            Rect::absolute(overflowing, parent),
            Rect::from_xywh(380, 50, 100, 10)
        );
    }
}
