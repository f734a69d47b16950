use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    geometry::{distance, segment_intersects_circle, Circle, Point, SeaBounds},
    rng::SystemRng,
    world::World,
};

const ARRIVAL_THRESHOLD: f64 = 1.0;
const MAX_TARGET_ATTEMPTS: u32 = 64;

/// Target-seeking movement with island avoidance. A whale whose target is
/// reached, or whose straight path would cross the island, retargets
/// instead of moving that tick.
pub struct MovementSystem;

impl MovementSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let bounds = world.bounds;
        let island = world.island;
        for whale in world.whales.iter_mut() {
            let remaining = distance(whale.pos, whale.target);
            if remaining < ARRIVAL_THRESHOLD
                || segment_intersects_circle(whale.pos, whale.target, &island)
            {
                whale.target = pick_clear_target(whale.pos, bounds, &island, rng);
                continue;
            }
            let bearing = (whale.target.y - whale.pos.y).atan2(whale.target.x - whale.pos.x);
            whale.pos.x += whale.speed * bearing.cos();
            whale.pos.y += whale.speed * bearing.sin();
        }
        Ok(())
    }
}

/// Rejection-sample a target whose straight path from `from` misses the
/// island. Attempts are capped; on exhaustion the target falls back to the
/// corner farthest from the island center.
fn pick_clear_target(
    from: Point,
    bounds: SeaBounds,
    island: &Circle,
    rng: &mut SystemRng<'_>,
) -> Point {
    for _ in 0..MAX_TARGET_ATTEMPTS {
        let candidate = bounds.sample(rng);
        if !segment_intersects_circle(from, candidate, island) {
            return candidate;
        }
    }
    bounds.farthest_corner(island.center)
}
