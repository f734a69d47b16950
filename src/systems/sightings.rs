use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    geometry::distance,
    rng::SystemRng,
    world::World,
};

/// Unions every whale currently within the boat's observation radius into
/// the sightings set. The set only ever grows; its size is the
/// whales-observed display metric.
pub struct SightingsSystem;

impl SightingsSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SightingsSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for SightingsSystem {
    fn name(&self) -> &str {
        "sightings"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let origin = world.boat.pos;
        let radius = world.boat.observation_radius;
        for whale in &world.whales {
            if distance(origin, whale.pos) < radius {
                world.sightings.insert(whale.id);
            }
        }
        Ok(())
    }
}
