use crate::types::{Coordinate, Membership};

/// A small circle (spherical cap) on the celestial sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Coordinate,
    radius: f64,
}

impl Circle {
    /// Create a circle from its center and angular radius in degrees
    ///
    /// Returns `None` if `radius` is NaN or lies outside `[0, 180]`.
    pub fn new(center: Coordinate, radius: f64) -> Option<Self> {
        if !(0.0..=180.0).contains(&radius) {
            return None;
        }

        Some(Self { center, radius })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Angular radius in degrees
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Check whether `point` lies strictly inside the circle
    ///
    /// A point whose separation from the center equals the radius exactly
    /// is on the boundary and is **not** contained. A zero-radius circle
    /// therefore contains nothing, not even its own center.
    pub fn contains(&self, point: Coordinate) -> bool {
        self.center.angular_separation(point) < self.radius
    }

    pub fn membership(&self, point: Coordinate) -> Membership {
        Membership::from(self.contains(point))
    }
}
