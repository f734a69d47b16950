//! The player-steered boat and its waypoint course.
//!
//! Course editing is the input-producer boundary: a pointer capture layer
//! calls `begin_course` on press, `extend_course` on drag, and
//! `commit_course` on release. The navigation system consumes the course
//! front-to-back.

use std::collections::VecDeque;

use crate::geometry::{distance, Circle, Point};

#[derive(Debug, Clone)]
pub struct Boat {
    pub pos: Point,
    pub width: f64,
    pub height: f64,
    pub speed: f64,
    pub moving: bool,
    pub observation_radius: f64,
    pub course: VecDeque<Point>,
}

impl Boat {
    pub fn new(pos: Point, width: f64, height: f64, speed: f64, observation_radius: f64) -> Self {
        Self {
            pos,
            width,
            height,
            speed,
            moving: false,
            observation_radius,
            course: VecDeque::new(),
        }
    }

    /// Discard any previous course and start a new one at `start`.
    pub fn begin_course(&mut self, start: Point) {
        self.moving = false;
        self.course.clear();
        self.course.push_back(start);
    }

    pub fn extend_course(&mut self, point: Point) {
        self.course.push_back(point);
    }

    /// Finalize the course: if it does not already end within the island's
    /// radius, append the island center so the voyage terminates there, then
    /// mark the boat ready to move. Committing an empty course is a no-op.
    pub fn commit_course(&mut self, island: &Circle) {
        let Some(last) = self.course.back().copied() else {
            return;
        };
        if distance(last, island.center) > island.radius {
            self.course.push_back(island.center);
        }
        self.moving = true;
    }

    pub fn is_following(&self) -> bool {
        self.moving && !self.course.is_empty()
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

    fn boat() -> Boat {
        Boat::new(Point { x: 0.0, y: 0.0 }, 25.0, 10.0, 0.45, 2000.0)
    }

    #[test]
    fn commit_appends_island_center_when_course_ends_offshore() {
        let mut boat = boat();
        boat.begin_course(Point { x: 0.0, y: 0.0 });
        boat.extend_course(Point { x: 10.0, y: 0.0 });
        boat.commit_course(&island());
        assert_eq!(boat.course.len(), 3);
        assert_eq!(boat.course.back().copied(), Some(island().center));
        assert!(boat.moving);
    }

    #[test]
    fn commit_leaves_course_alone_when_it_ends_on_the_island() {
        let mut boat = boat();
        boat.begin_course(Point { x: 0.0, y: 0.0 });
        boat.extend_course(Point { x: 98.0, y: 103.0 });
        boat.commit_course(&island());
        assert_eq!(boat.course.len(), 2);
        assert!(boat.moving);
    }

    #[test]
    fn commit_with_no_course_stays_idle() {
        let mut boat = boat();
        boat.commit_course(&island());
        assert!(boat.course.is_empty());
        assert!(!boat.moving);
    }

    #[test]
    fn begin_discards_the_previous_course() {
        let mut boat = boat();
        boat.begin_course(Point { x: 1.0, y: 1.0 });
        boat.extend_course(Point { x: 2.0, y: 2.0 });
        boat.commit_course(&island());
        boat.begin_course(Point { x: 5.0, y: 5.0 });
        assert_eq!(boat.course.len(), 1);
        assert!(!boat.moving);
    }
}
