//! Planar geometry shared by whale movement, seeding, and the boat course.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn contains(&self, point: Point) -> bool {
        distance(point, self.center) < self.radius
    }
}

/// Whether the segment from `a` to `b` crosses `circle`.
///
/// The segment is parametrized over t in [0, 1] and intersected with the
/// circle by solving the quadratic via its discriminant. A zero-length
/// segment degenerates to plain containment rather than dividing by a
/// vanishing quadratic coefficient.
pub fn segment_intersects_circle(a: Point, b: Point, circle: &Circle) -> bool {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let fx = a.x - circle.center.x;
    let fy = a.y - circle.center.y;

    let qa = dx * dx + dy * dy;
    if qa <= f64::EPSILON {
        return circle.contains(a);
    }
    let qb = 2.0 * (fx * dx + fy * dy);
    let qc = fx * fx + fy * fy - circle.radius * circle.radius;

    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant < 0.0 {
        return false;
    }

    let root = discriminant.sqrt();
    let t1 = (-qb - root) / (2.0 * qa);
    let t2 = (-qb + root) / (2.0 * qa);
    (0.0..=1.0).contains(&t1) || (0.0..=1.0).contains(&t2)
}

/// Rectangular sea area with its origin at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeaBounds {
    pub width: f64,
    pub height: f64,
}

impl SeaBounds {
    pub fn sample(&self, rng: &mut impl Rng) -> Point {
        Point {
            x: rng.gen_range(0.0..self.width),
            y: rng.gen_range(0.0..self.height),
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point { x: 0.0, y: 0.0 },
            Point { x: self.width, y: 0.0 },
            Point { x: 0.0, y: self.height },
            Point {
                x: self.width,
                y: self.height,
            },
        ]
    }

    /// The corner farthest from `from`; the deterministic fallback anchor
    /// when rejection sampling against the island runs out of attempts.
    pub fn farthest_corner(&self, from: Point) -> Point {
        self.corners()
            .into_iter()
            .max_by(|a, b| distance(*a, from).total_cmp(&distance(*b, from)))
            .expect("bounds always have four corners")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn island() -> Circle {
        Circle {
            center: Point { x: 100.0, y: 100.0 },
            radius: 10.0,
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 3.0, y: 4.0 };
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_through_center_intersects() {
        let a = Point { x: 0.0, y: 100.0 };
        let b = Point { x: 200.0, y: 100.0 };
        assert!(segment_intersects_circle(a, b, &island()));
    }

    #[test]
    fn segment_outside_radius_misses() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 0.0, y: 200.0 };
        assert!(!segment_intersects_circle(a, b, &island()));
    }

    #[test]
    fn zero_length_segment_matches_containment() {
        let inside = Point { x: 98.0, y: 102.0 };
        let outside = Point { x: 150.0, y: 150.0 };
        assert!(segment_intersects_circle(inside, inside, &island()));
        assert!(!segment_intersects_circle(outside, outside, &island()));
        assert!(island().contains(inside));
        assert!(!island().contains(outside));
    }

    #[test]
    fn farthest_corner_opposes_the_reference_point() {
        let bounds = SeaBounds {
            width: 1600.0,
            height: 900.0,
        };
        let corner = bounds.farthest_corner(Point { x: 1568.0, y: 882.0 });
        assert_eq!(corner, Point { x: 0.0, y: 0.0 });
    }
}
