use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::boat::Boat;
use crate::calendar::Calendar;
use crate::geometry::{Circle, Point, SeaBounds};
use crate::whale::{PodParams, Sex, Whale, WhaleId};

/// Candidate positions are resampled against the island at most this many
/// times before falling back to the corner farthest from it.
const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhaleSnapshot {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub sex: Sex,
    pub size: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatSnapshot {
    pub x: f64,
    pub y: f64,
    pub moving: bool,
    pub course: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSnapshot {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// Everything a render consumer needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub scenario: String,
    pub tick: u64,
    pub calendar: CalendarSnapshot,
    pub sea: SeaBounds,
    pub island: Circle,
    pub whales_alive: usize,
    pub whales_sighted: usize,
    pub whales: Vec<WhaleSnapshot>,
    pub boat: BoatSnapshot,
}

/// The explicit simulation state owned by the tick orchestrator. Systems
/// receive it by mutable reference; nothing lives in module-level globals,
/// so multiple worlds can run side by side in tests.
pub struct World {
    tick: u64,
    dt_days: f64,
    next_whale: u64,
    pub(crate) calendar: Calendar,
    pub(crate) bounds: SeaBounds,
    pub(crate) island: Circle,
    pub(crate) pod: PodParams,
    pub(crate) whales: Vec<Whale>,
    pub(crate) boat: Boat,
    pub(crate) sightings: HashSet<WhaleId>,
}

impl World {
    pub fn new(dt_days: f64, bounds: SeaBounds, island: Circle, pod: PodParams, boat: Boat) -> Self {
        Self {
            tick: 0,
            dt_days,
            next_whale: 0,
            calendar: Calendar::new(),
            bounds,
            island,
            pod,
            whales: Vec::new(),
            boat,
            sightings: HashSet::new(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn dt_days(&self) -> f64 {
        self.dt_days
    }

    pub fn advance_time(&mut self) {
        self.tick += 1;
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    pub fn bounds(&self) -> SeaBounds {
        self.bounds
    }

    pub fn island(&self) -> Circle {
        self.island
    }

    pub fn pod(&self) -> &PodParams {
        &self.pod
    }

    pub fn pod_mut(&mut self) -> &mut PodParams {
        &mut self.pod
    }

    pub fn whales(&self) -> &[Whale] {
        &self.whales
    }

    pub fn whales_mut(&mut self) -> &mut Vec<Whale> {
        &mut self.whales
    }

    pub fn whale_count(&self) -> usize {
        self.whales.len()
    }

    pub fn boat(&self) -> &Boat {
        &self.boat
    }

    pub fn boat_mut(&mut self) -> &mut Boat {
        &mut self.boat
    }

    /// Distinct whales ever observed within the boat's observation radius.
    pub fn sighted_count(&self) -> usize {
        self.sightings.len()
    }

    pub fn begin_course(&mut self, start: Point) {
        self.boat.begin_course(start);
    }

    pub fn extend_course(&mut self, point: Point) {
        self.boat.extend_course(point);
    }

    pub fn commit_course(&mut self) {
        self.boat.commit_course(&self.island);
    }

    /// Spawn a whale at a position rejection-sampled to lie off the island.
    pub fn spawn_whale(&mut self, rng: &mut impl Rng) -> WhaleId {
        let mut pos = self.bounds.sample(rng);
        let mut attempts = 0;
        while self.island.contains(pos) {
            attempts += 1;
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                pos = self.bounds.farthest_corner(self.island.center);
                break;
            }
            pos = self.bounds.sample(rng);
        }
        let target = self.bounds.sample(rng);
        let id = self.allocate();
        let whale = Whale::draw(id, &self.pod, pos, target, self.calendar.year(), rng);
        self.whales.push(whale);
        id
    }

    /// Spawn a calf at its mother's position; everything else is drawn
    /// fresh per the standard creation rule.
    pub fn spawn_calf(&mut self, mother_pos: Point, rng: &mut impl Rng) -> WhaleId {
        let target = self.bounds.sample(rng);
        let id = self.allocate();
        let calf = Whale::draw(id, &self.pod, mother_pos, target, self.calendar.year(), rng);
        self.whales.push(calf);
        id
    }

    pub fn snapshot(&self, scenario: &str) -> WorldSnapshot {
        let whales = self
            .whales
            .iter()
            .map(|whale| WhaleSnapshot {
                id: whale.id.raw(),
                x: whale.pos.x,
                y: whale.pos.y,
                sex: whale.sex,
                size: whale.size,
            })
            .collect();
        WorldSnapshot {
            scenario: scenario.to_string(),
            tick: self.tick,
            calendar: CalendarSnapshot {
                day: self.calendar.day(),
                month: self.calendar.month(),
                year: self.calendar.year(),
            },
            sea: self.bounds,
            island: self.island,
            whales_alive: self.whales.len(),
            whales_sighted: self.sightings.len(),
            whales,
            boat: BoatSnapshot {
                x: self.boat.pos.x,
                y: self.boat.pos.y,
                moving: self.boat.moving,
                course: self.boat.course.iter().copied().collect(),
            },
        }
    }

    fn allocate(&mut self) -> WhaleId {
        let id = WhaleId::from_raw(self.next_whale);
        self.next_whale += 1;
        id
    }
}
