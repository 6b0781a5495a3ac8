//! Enemy AI for HEXAQUEST.
//!
//! Implements the per-tick enemy decision policy and the stat/ability
//! profiles enemies are built from.

pub mod policy;
pub mod profiles;

pub use hexaquest_core as core;

#[cfg(test)]
mod tests;
