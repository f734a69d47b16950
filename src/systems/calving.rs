use anyhow::Result;
use rand::Rng;

use crate::{
    engine::{System, SystemContext},
    geometry::Point,
    rng::SystemRng,
    whale::Sex,
    world::World,
};

/// Summer calving. A female qualifies when she has met a male and has not
/// calved this calendar year; every qualifying tick repeats the draw until
/// it succeeds or summer ends, and the year gate blocks a second calf.
pub struct CalvingSystem;

impl CalvingSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalvingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CalvingSystem {
    fn name(&self) -> &str {
        "calving"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut World,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        if !world.calendar.is_summer() {
            return Ok(());
        }
        let year = world.calendar.year();
        let chance = world.pod.calving_chance;

        let mut calvings: Vec<(usize, Point)> = Vec::new();
        for (index, whale) in world.whales.iter().enumerate() {
            if whale.sex != Sex::Female
                || !whale.met_male_this_year
                || year <= whale.last_calved_year
            {
                continue;
            }
            if rng.gen::<f64>() < chance {
                calvings.push((index, whale.pos));
            }
        }

        // Calves append to the end of the pod, so mother indices stay valid.
        for (index, pos) in calvings {
            world.spawn_calf(pos, rng);
            let mother = &mut world.whales[index];
            mother.met_male_this_year = false;
            mother.last_calved_year = year;
        }
        Ok(())
    }
}
