//! Simulation engine for HEXAQUEST.
//!
//! Owns the hecs ECS world, advances all systems once per frame,
//! and produces GameStateSnapshots for the presentation layer.

pub mod engine;
pub mod feed;
pub mod schedule;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use hexaquest_core as core;
