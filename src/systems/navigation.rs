use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    geometry::distance,
    rng::SystemRng,
    world::World,
};

const ARRIVAL_THRESHOLD: f64 = 1.0;

/// Steps the boat along its committed course: idle until a course is
/// committed, following until the course is exhausted, then idle again.
pub struct NavigationSystem;

impl NavigationSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for NavigationSystem {
    fn name(&self) -> &str {
        "navigation"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let boat = &mut world.boat;
        if !boat.moving {
            return Ok(());
        }

        while let Some(next) = boat.course.front().copied() {
            if distance(boat.pos, next) < ARRIVAL_THRESHOLD {
                boat.course.pop_front();
            } else {
                break;
            }
        }
        let Some(next) = boat.course.front().copied() else {
            boat.moving = false;
            return Ok(());
        };

        let remaining = distance(boat.pos, next);
        if remaining <= boat.speed {
            // Within one step: snap onto the waypoint instead of orbiting it.
            boat.pos = next;
            boat.course.pop_front();
            if boat.course.is_empty() {
                boat.moving = false;
            }
        } else {
            let bearing = (next.y - boat.pos.y).atan2(next.x - boat.pos.x);
            boat.pos.x += boat.speed * bearing.cos();
            boat.pos.y += boat.speed * bearing.sin();
        }
        Ok(())
    }
}
