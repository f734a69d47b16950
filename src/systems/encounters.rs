use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    geometry::distance,
    rng::SystemRng,
    whale::Sex,
    world::World,
};

/// Flags females that came close enough to a male this tick. Pairwise over
/// the live pod; O(n squared) is fine at tens of whales.
pub struct EncounterSystem;

impl EncounterSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EncounterSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for EncounterSystem {
    fn name(&self) -> &str {
        "encounters"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let radius = world.pod.encounter_radius;
        let count = world.whales.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = world.whales.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if a.sex == b.sex {
                    continue;
                }
                if distance(a.pos, b.pos) >= radius {
                    continue;
                }
                if a.sex == Sex::Female {
                    a.met_male_this_year = true;
                }
                if b.sex == Sex::Female {
                    b.met_male_this_year = true;
                }
            }
        }
        Ok(())
    }
}
