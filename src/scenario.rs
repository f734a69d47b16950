use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::{
    boat::Boat,
    geometry::{Circle, Point, SeaBounds},
    whale::PodParams,
    world::World,
};

fn default_dt_days() -> f64 {
    0.1
}

fn default_snapshot_interval_ticks() -> u64 {
    30
}

fn default_sea_width() -> f64 {
    1600.0
}

fn default_sea_height() -> f64 {
    900.0
}

fn default_pod_count() -> usize {
    10
}

fn default_whale_size() -> f64 {
    30.0
}

fn default_whale_speed() -> f64 {
    2.0
}

fn default_lifespan_years() -> f64 {
    50.0
}

fn default_lifespan_spread_years() -> f64 {
    10.0
}

fn default_encounter_radius() -> f64 {
    50.0
}

fn default_calving_chance() -> f64 {
    0.1
}

fn default_boat_width() -> f64 {
    25.0
}

fn default_boat_height() -> f64 {
    10.0
}

fn default_boat_speed() -> f64 {
    0.45
}

fn default_observation_radius() -> f64 {
    2000.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    #[serde(default = "default_dt_days")]
    pub dt_days: f64,
    #[serde(default)]
    pub ticks: Option<u64>,
    #[serde(default = "default_snapshot_interval_ticks")]
    pub snapshot_interval_ticks: u64,
    #[serde(default)]
    pub sea: ScenarioSea,
    pub island: ScenarioIsland,
    #[serde(default)]
    pub pod: ScenarioPod,
    #[serde(default)]
    pub boat: ScenarioBoat,
    #[serde(default)]
    pub course: Vec<ScenarioPoint>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSea {
    #[serde(default = "default_sea_width")]
    pub width: f64,
    #[serde(default = "default_sea_height")]
    pub height: f64,
}

impl Default for ScenarioSea {
    fn default() -> Self {
        Self {
            width: default_sea_width(),
            height: default_sea_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioIsland {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioPod {
    #[serde(default = "default_pod_count")]
    pub count: usize,
    #[serde(default = "default_whale_size")]
    pub size: f64,
    #[serde(default = "default_whale_speed")]
    pub speed: f64,
    #[serde(default = "default_lifespan_years")]
    pub lifespan_years: f64,
    #[serde(default = "default_lifespan_spread_years")]
    pub lifespan_spread_years: f64,
    #[serde(default = "default_encounter_radius")]
    pub encounter_radius: f64,
    #[serde(default = "default_calving_chance")]
    pub calving_chance: f64,
}

impl Default for ScenarioPod {
    fn default() -> Self {
        Self {
            count: default_pod_count(),
            size: default_whale_size(),
            speed: default_whale_speed(),
            lifespan_years: default_lifespan_years(),
            lifespan_spread_years: default_lifespan_spread_years(),
            encounter_radius: default_encounter_radius(),
            calving_chance: default_calving_chance(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioBoat {
    #[serde(default = "default_boat_width")]
    pub width: f64,
    #[serde(default = "default_boat_height")]
    pub height: f64,
    #[serde(default = "default_boat_speed")]
    pub speed: f64,
    #[serde(default = "default_observation_radius")]
    pub observation_radius: f64,
}

impl Default for ScenarioBoat {
    fn default() -> Self {
        Self {
            width: default_boat_width(),
            height: default_boat_height(),
            speed: default_boat_speed(),
            observation_radius: default_observation_radius(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioPoint {
    pub x: f64,
    pub y: f64,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    /// Build the initial world: the boat moored at the island, the pod
    /// seeded off-island, and any pre-drawn course committed.
    pub fn build_world(&self) -> World {
        let bounds = SeaBounds {
            width: self.sea.width,
            height: self.sea.height,
        };
        let island = Circle {
            center: Point {
                x: self.island.x,
                y: self.island.y,
            },
            radius: self.island.radius,
        };
        let pod = PodParams {
            size: self.pod.size,
            speed: self.pod.speed,
            lifespan_years: self.pod.lifespan_years,
            lifespan_spread_years: self.pod.lifespan_spread_years,
            encounter_radius: self.pod.encounter_radius,
            calving_chance: self.pod.calving_chance,
        };
        let boat = Boat::new(
            island.center,
            self.boat.width,
            self.boat.height,
            self.boat.speed,
            self.boat.observation_radius,
        );
        let mut world = World::new(self.dt_days, bounds, island, pod, boat);

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        for _ in 0..self.pod.count {
            world.spawn_whale(&mut rng);
        }

        let mut waypoints = self.course.iter().map(|p| Point { x: p.x, y: p.y });
        if let Some(start) = waypoints.next() {
            world.begin_course(start);
            for point in waypoints {
                world.extend_course(point);
            }
            world.commit_course();
        }
        world
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.or(self.ticks).unwrap_or(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
name: harbor
seed: 11
island:
  x: 100
  y: 100
  radius: 10
";

    #[test]
    fn minimal_scenario_fills_in_defaults() {
        let scenario: Scenario = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(scenario.name, "harbor");
        assert_eq!(scenario.seed, 11);
        assert_eq!(scenario.dt_days, 0.1);
        assert_eq!(scenario.snapshot_interval_ticks, 30);
        assert_eq!(scenario.sea.width, 1600.0);
        assert_eq!(scenario.pod.count, 10);
        assert_eq!(scenario.pod.encounter_radius, 50.0);
        assert_eq!(scenario.pod.calving_chance, 0.1);
        assert_eq!(scenario.boat.observation_radius, 2000.0);
        assert!(scenario.course.is_empty());
    }

    #[test]
    fn tick_overrides_take_precedence() {
        let scenario: Scenario = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(scenario.ticks(None), 3600);
        assert_eq!(scenario.ticks(Some(42)), 42);
    }

    #[test]
    fn build_world_seeds_the_pod_and_moors_the_boat() {
        let scenario: Scenario = serde_yaml::from_str(MINIMAL).unwrap();
        let world = scenario.build_world();
        assert_eq!(world.whale_count(), 10);
        assert_eq!(world.boat().pos, world.island().center);
        assert!(!world.boat().moving);
    }

    #[test]
    fn a_configured_course_is_committed_at_build() {
        let yaml = format!("{MINIMAL}\ncourse:\n  - {{x: 0, y: 0}}\n  - {{x: 20, y: 0}}\n");
        let scenario: Scenario = serde_yaml::from_str(&yaml).unwrap();
        let world = scenario.build_world();
        let boat = world.boat();
        assert!(boat.moving);
        // (20, 0) is off the island, so commit appended the island center.
        assert_eq!(boat.course.len(), 3);
        assert_eq!(boat.course.back().copied(), Some(world.island().center));
    }
}
