//! Integer 2D vector used for positions and velocities

use std::fmt;
use std::ops::Add;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Immutable integer coordinate or velocity.
///
/// Equality is exact and component-wise; collisions are tested with `==`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(IVec2);

impl Point {
    pub const ZERO: Point = Point(IVec2::ZERO);

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub fn x(self) -> i32 {
        self.0.x
    }

    pub fn y(self) -> i32 {
        self.0.y
    }

    /// Wrap each axis into `[0, max)` (euclidean remainder).
    ///
    /// An axis whose bound is not positive is left as is.
    pub fn wrapped(self, max_x: i32, max_y: i32) -> Self {
        Self::new(wrap_axis(self.0.x, max_x), wrap_axis(self.0.y, max_y))
    }
}

#[inline]
fn wrap_axis(value: i32, max: i32) -> i32 {
    if max > 0 { value.rem_euclid(max) } else { value }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0.wrapping_add(other.0))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_is_component_wise() {
        let p = Point::new(3, -4) + Point::new(10, 6);
        assert_eq!(p, Point::new(13, 2));
    }

    #[test]
    fn test_wrap_both_edges() {
        assert_eq!(Point::new(80, 5).wrapped(80, 24), Point::new(0, 5));
        assert_eq!(Point::new(-1, 24).wrapped(80, 24), Point::new(79, 0));
        assert_eq!(Point::new(-81, -25).wrapped(80, 24), Point::new(79, 23));
    }

    #[test]
    fn test_wrap_ignores_non_positive_bound() {
        assert_eq!(Point::new(-7, 30).wrapped(0, -3), Point::new(-7, 30));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(100, 0).to_string(), "(100, 0)");
    }

    proptest! {
        #[test]
        fn prop_equality_is_reflexive_and_symmetric(
            ax in -1000i32..1000, ay in -1000i32..1000,
            bx in -1000i32..1000, by in -1000i32..1000,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a, a);
            prop_assert_eq!(a == b, b == a);
            prop_assert_eq!(a == b, ax == bx && ay == by);
        }

        #[test]
        fn prop_wrapped_lands_in_bounds(
            x in -10_000i32..10_000, y in -10_000i32..10_000,
            w in 1i32..2000, h in 1i32..2000,
        ) {
            let p = Point::new(x, y).wrapped(w, h);
            prop_assert!((0..w).contains(&p.x()));
            prop_assert!((0..h).contains(&p.y()));
            prop_assert_eq!(p.wrapped(w, h), p);
        }
    }
}
