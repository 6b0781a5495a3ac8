//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the run's `Session`.
//! They hold no state of their own.

pub mod cleanup;
pub mod combat;
pub mod effects;
pub mod enemy_ai;
pub mod loot;
pub mod movement;
pub mod snapshot;
pub mod stage;
