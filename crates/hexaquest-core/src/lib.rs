//! Core types and definitions for the HEXAQUEST simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, items, player stats, commands, state snapshots, events,
//! and constants. It has no dependency on any runtime or rendering layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod items;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
