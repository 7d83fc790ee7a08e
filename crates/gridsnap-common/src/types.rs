use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle in device pixels, stored as edge coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// A rect is proper iff it has positive extent on both axes.
    pub fn is_proper(&self) -> bool {
        self.left < self.right && self.top < self.bottom
    }

    pub fn has_negative_coords(&self) -> bool {
        self.left < 0 || self.top < 0 || self.right < 0 || self.bottom < 0
    }

    /// Area in square pixels. Widened to `i64`: a 32k x 32k rect already
    /// overflows `i32`.
    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// The rect grown by `radius` on all four sides.
    pub fn expanded(&self, radius: i32) -> Rect {
        Rect {
            left: self.left - radius,
            top: self.top - radius,
            right: self.right + radius,
            bottom: self.bottom + radius,
        }
    }

    /// Containment with inclusive edges on all sides.
    pub fn contains_inclusive(&self, p: Point) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }

    /// Containment under the half-open convention `[left, right) x [top, bottom)`.
    pub fn contains_half_open(&self, p: Point) -> bool {
        self.left <= p.x && p.x < self.right && self.top <= p.y && p.y < self.bottom
    }

    /// Whether the interiors of the two rects intersect (strict on both axes).
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.top.max(other.top) < self.bottom.min(other.bottom)
            && self.left.max(other.left) < self.right.min(other.right)
    }

    /// The smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Stable identifier of a zone within its set. Assigned densely from 1 on
/// insertion; 0 is reserved because hosts store the id in a window property
/// where the zero value is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u64);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_extents() {
        let r = Rect::new(10, 20, 110, 220);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 200);
        assert_eq!(r.area(), 20_000);
        assert!(r.is_proper());
        assert!(!r.has_negative_coords());
    }

    #[test]
    fn rect_degenerate_is_not_proper() {
        assert!(!Rect::new(10, 10, 10, 50).is_proper());
        assert!(!Rect::new(10, 10, 5, 50).is_proper());
        assert!(Rect::new(-5, 0, 5, 10).has_negative_coords());
    }

    #[test]
    fn rect_expanded() {
        let r = Rect::new(100, 100, 200, 200).expanded(20);
        assert_eq!(r, Rect::new(80, 80, 220, 220));
    }

    #[test]
    fn rect_containment_conventions() {
        let r = Rect::new(0, 0, 100, 100);
        // Inclusive accepts all four edges.
        assert!(r.contains_inclusive(Point::new(100, 100)));
        assert!(r.contains_inclusive(Point::new(0, 0)));
        // Half-open rejects the right and bottom edges.
        assert!(r.contains_half_open(Point::new(0, 0)));
        assert!(r.contains_half_open(Point::new(99, 99)));
        assert!(!r.contains_half_open(Point::new(100, 50)));
        assert!(!r.contains_half_open(Point::new(50, 100)));
    }

    #[test]
    fn rect_overlap_is_strict() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(40, 40, 200, 200);
        let c = Rect::new(100, 0, 200, 100); // shares an edge with a
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, -10, 220, 90);
        assert_eq!(a.union(&b), Rect::new(0, -10, 220, 100));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0, 0, 1920, 1080);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn zone_id_display() {
        assert_eq!(ZoneId(42).to_string(), "zone-42");
    }

    #[test]
    fn zone_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ZoneId(1));
        set.insert(ZoneId(2));
        set.insert(ZoneId(1));
        assert_eq!(set.len(), 2);
    }
}
