//! Per-whale state and lifecycle draws.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::calendar::{DAYS_IN_MONTH, MONTHS_IN_YEAR};
use crate::geometry::Point;

/// Stable identifier assigned at creation; the sightings set is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WhaleId(u64);

impl WhaleId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Species-level tuning shared by every whale in the pod.
#[derive(Debug, Clone)]
pub struct PodParams {
    pub size: f64,
    pub speed: f64,
    pub lifespan_years: f64,
    pub lifespan_spread_years: f64,
    pub encounter_radius: f64,
    pub calving_chance: f64,
}

#[derive(Debug, Clone)]
pub struct Whale {
    pub id: WhaleId,
    pub pos: Point,
    pub size: f64,
    pub speed: f64,
    pub target: Point,
    pub sex: Sex,
    pub met_male_this_year: bool,
    pub birth_year: u32,
    pub last_calved_year: u32,
    pub age_months: f64,
    pub lifespan_years: f64,
}

impl Whale {
    /// Draw a fresh whale at `pos`: sex is a fair coin, lifespan is the
    /// species average plus a uniform spread, fixed once for life. The
    /// last-calved year starts at the birth year, so a female first
    /// qualifies for calving the year after she is born.
    pub(crate) fn draw(
        id: WhaleId,
        pod: &PodParams,
        pos: Point,
        target: Point,
        year: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let sex = if rng.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        };
        let lifespan_years = if pod.lifespan_spread_years > 0.0 {
            pod.lifespan_years + rng.gen_range(0.0..pod.lifespan_spread_years)
        } else {
            pod.lifespan_years
        };
        Self {
            id,
            pos,
            size: pod.size,
            speed: pod.speed,
            target,
            sex,
            met_male_this_year: false,
            birth_year: year,
            last_calved_year: year,
            age_months: 0.0,
            lifespan_years,
        }
    }

    /// Per-tick death probability: one tick is one day of whale age, so the
    /// expected lifetime in ticks equals the lifespan in days.
    pub fn tick_death_probability(&self) -> f64 {
        1.0 / (self.lifespan_years * f64::from(MONTHS_IN_YEAR * DAYS_IN_MONTH))
    }
}
