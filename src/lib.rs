pub mod boat;
pub mod calendar;
pub mod engine;
pub mod geometry;
pub mod rng;
pub mod scenario;
pub mod snapshot;
pub mod systems;
pub mod web;
pub mod whale;
pub mod world;

pub use scenario::Scenario;
pub use world::World;
