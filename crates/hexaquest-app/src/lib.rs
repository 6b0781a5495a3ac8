//! HEXAQUEST headless host.
//!
//! Runs the simulation engine on a game-loop thread, keeps the latest
//! snapshot for polling, persists save slots as JSON files, and provides
//! an autopilot that plays the game for smoke runs.

pub mod autopilot;
pub mod game_loop;
pub mod persistence;
pub mod state;

pub use hexaquest_core as core;
