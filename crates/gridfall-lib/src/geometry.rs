//! Planar geometry primitives shared by the graph, editor, and drop planner.
//!
//! All coordinates live in normalized map space: `[0, 1] x [0, 1]` with the
//! origin in the top-left corner of the map. Distances in meters are obtained
//! by scaling a normalized distance with the map's side length.

use serde::{Deserialize, Serialize};

/// A point (or free vector) in normalized map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in normalized units.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise difference `self - other`.
    pub fn sub(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Scale both components by `factor`.
    pub fn scale(&self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    /// Dot product, treating both points as vectors.
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Vector length.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(&self) -> Option<Point> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Point::new(self.x / len, self.y / len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.3, 0.4);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_has_no_direction() {
        assert!(Point::new(0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn normalized_preserves_direction() {
        let v = Point::new(3.0, 4.0).normalized().unwrap();
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y - 0.8).abs() < 1e-12);
        assert!((v.length() - 1.0).abs() < 1e-12);
    }
}
