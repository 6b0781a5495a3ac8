//! Fundamental geometric and simulation types.
//!
//! The arena is a flat ground plane. `x` runs east, `y` maps to the
//! renderer's depth axis (negative is "forward" from the default camera).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ground-plane position in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// Ground-plane velocity in units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Unit vector the player is facing. Defaults to "forward" (negative y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Facing(pub DVec2);

/// Simulation time tracking.
///
/// Time only accumulates while the simulation is running, so every
/// cooldown, lifetime and scheduled task freezes while paused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of advancing ticks so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Straight-line distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }

    /// Unit vector from this position toward `other` (zero if coincident).
    pub fn direction_to(&self, other: &Position) -> DVec2 {
        (other.0 - self.0).normalize_or_zero()
    }

    /// Offset by a displacement vector.
    pub fn offset(&self, delta: DVec2) -> Position {
        Position(self.0 + delta)
    }
}

impl Velocity {
    /// Velocity of magnitude `speed` along `direction` (normalized here).
    pub fn toward(direction: DVec2, speed: f64) -> Self {
        Self(direction.normalize_or_zero() * speed)
    }

    pub fn speed(&self) -> f64 {
        self.0.length()
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self(DVec2::NEG_Y)
    }
}

impl Facing {
    /// Face along `direction`; a zero vector leaves the facing unchanged.
    pub fn turned_toward(self, direction: DVec2) -> Self {
        match direction.try_normalize() {
            Some(dir) => Self(dir),
            None => self,
        }
    }
}

impl SimTime {
    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
