use anyhow::Result;
use rand::Rng;

use crate::{
    engine::{System, SystemContext},
    rng::SystemRng,
    world::World,
};

/// One tick ages every whale by one day.
const AGE_MONTHS_PER_TICK: f64 = 1.0 / 30.0;

/// Ages the pod and applies the per-tick death draw. Removal happens in a
/// single retain pass, so compacting the pod never skips a whale.
pub struct MortalitySystem;

impl MortalitySystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MortalitySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MortalitySystem {
    fn name(&self) -> &str {
        "mortality"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        world.whales.retain_mut(|whale| {
            whale.age_months += AGE_MONTHS_PER_TICK;
            rng.gen::<f64>() >= whale.tick_death_probability()
        });
        Ok(())
    }
}
