//! Shape geometry
//!
//! The engine treats every shape through [`Geometry`] and never branches on
//! the concrete kind. `contains(o, p)` must imply `bounds(o).contains(p)`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::region::Region;

/// Geometry test for a shape drawn at some origin (its center)
pub trait Geometry {
    /// Bounding region of the shape centered at `origin`
    fn bounds(&self, origin: IVec2) -> Region;
    /// Whether the pixel `point` is covered by the shape centered at `origin`
    fn contains(&self, origin: IVec2, point: IVec2) -> bool;
}

/// Filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub half_size: IVec2,
}

impl Geometry for Rect {
    fn bounds(&self, origin: IVec2) -> Region {
        Region::centered(origin, self.half_size)
    }

    fn contains(&self, origin: IVec2, point: IVec2) -> bool {
        self.bounds(origin).contains(point)
    }
}

/// One-pixel rectangle outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectOutline {
    pub half_size: IVec2,
}

impl Geometry for RectOutline {
    fn bounds(&self, origin: IVec2) -> Region {
        Region::centered(origin, self.half_size)
    }

    fn contains(&self, origin: IVec2, point: IVec2) -> bool {
        let b = self.bounds(origin);
        b.contains(point)
            && (point.x == b.top_left.x
                || point.x == b.bot_right.x
                || point.y == b.top_left.y
                || point.y == b.bot_right.y)
    }
}

/// Filled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: i32,
}

impl Geometry for Circle {
    fn bounds(&self, origin: IVec2) -> Region {
        Region::centered(origin, IVec2::splat(self.radius))
    }

    fn contains(&self, origin: IVec2, point: IVec2) -> bool {
        let d = point - origin;
        d.length_squared() <= self.radius * self.radius
    }
}

/// Filled right-pointing arrow head (isosceles triangle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
    pub size: i32,
}

impl Geometry for Arrow {
    fn bounds(&self, origin: IVec2) -> Region {
        Region::centered(origin, IVec2::splat(self.size / 2))
    }

    fn contains(&self, origin: IVec2, point: IVec2) -> bool {
        let half = self.size / 2;
        let d = point - origin;
        // Base on the left edge, tip at the right edge
        self.bounds(origin).contains(point) && 2 * d.y.abs() <= half - d.x
    }
}

/// Every shape kind the game can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    RectOutline(RectOutline),
    Circle(Circle),
    Arrow(Arrow),
}

impl Shape {
    pub const fn rect(half_size: IVec2) -> Self {
        Shape::Rect(Rect { half_size })
    }

    pub const fn outline(half_size: IVec2) -> Self {
        Shape::RectOutline(RectOutline { half_size })
    }

    pub const fn circle(radius: i32) -> Self {
        Shape::Circle(Circle { radius })
    }

    pub const fn arrow(size: i32) -> Self {
        Shape::Arrow(Arrow { size })
    }
}

impl Geometry for Shape {
    fn bounds(&self, origin: IVec2) -> Region {
        match self {
            Shape::Rect(s) => s.bounds(origin),
            Shape::RectOutline(s) => s.bounds(origin),
            Shape::Circle(s) => s.bounds(origin),
            Shape::Arrow(s) => s.bounds(origin),
        }
    }

    fn contains(&self, origin: IVec2, point: IVec2) -> bool {
        match self {
            Shape::Rect(s) => s.contains(origin, point),
            Shape::RectOutline(s) => s.contains(origin, point),
            Shape::Circle(s) => s.contains(origin, point),
            Shape::Arrow(s) => s.contains(origin, point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rect_bounds() {
        let r = Shape::rect(IVec2::new(2, 10));
        let b = r.bounds(IVec2::new(12, 80));
        assert_eq!(b, Region::new(IVec2::new(10, 70), IVec2::new(14, 90)));
        assert!(r.contains(IVec2::new(12, 80), IVec2::new(14, 90)));
        assert!(!r.contains(IVec2::new(12, 80), IVec2::new(15, 90)));
    }

    #[test]
    fn test_outline_is_hollow() {
        let o = Shape::outline(IVec2::new(5, 5));
        let c = IVec2::new(20, 20);
        assert!(o.contains(c, IVec2::new(15, 20)));
        assert!(o.contains(c, IVec2::new(22, 25)));
        assert!(!o.contains(c, c));
        assert!(!o.contains(c, IVec2::new(26, 20)));
    }

    #[test]
    fn test_circle() {
        let s = Shape::circle(8);
        let c = IVec2::new(74, 85);
        assert!(s.contains(c, c));
        assert!(s.contains(c, c + IVec2::new(8, 0)));
        // Corner of the bounding box lies outside the disc
        assert!(!s.contains(c, c + IVec2::new(8, 8)));
        assert_eq!(s.bounds(c).area(), 17 * 17);
    }

    #[test]
    fn test_arrow_tip_and_base() {
        let a = Shape::arrow(10);
        let c = IVec2::new(30, 30);
        assert!(a.contains(c, IVec2::new(25, 25)));
        assert!(a.contains(c, IVec2::new(35, 30)));
        assert!(!a.contains(c, IVec2::new(35, 31)));
    }

    fn arb_shape() -> impl Strategy<Value = Shape> {
        prop_oneof![
            (1i32..20, 1i32..20).prop_map(|(w, h)| Shape::rect(IVec2::new(w, h))),
            (1i32..20, 1i32..20).prop_map(|(w, h)| Shape::outline(IVec2::new(w, h))),
            (1i32..20).prop_map(Shape::circle),
            (2i32..40).prop_map(Shape::arrow),
        ]
    }

    proptest! {
        #[test]
        fn prop_contains_implies_bounds(
            shape in arb_shape(),
            ox in -20i32..150,
            oy in -20i32..180,
            dx in -25i32..25,
            dy in -25i32..25,
        ) {
            let origin = IVec2::new(ox, oy);
            let point = origin + IVec2::new(dx, dy);
            if shape.contains(origin, point) {
                prop_assert!(shape.bounds(origin).contains(point));
            }
        }
    }
}
