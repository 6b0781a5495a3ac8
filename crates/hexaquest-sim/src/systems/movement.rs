//! Player movement integration.
//!
//! Moves the player along the held direction each tick:
//! position += dir * speed * dt, with speed scaled by agility.

use glam::DVec2;

use hexaquest_core::constants::{AGILITY_SPEED_DIVISOR, PLAYER_MOVE_SPEED};

use crate::session::Session;

/// Run speed for a given agility (units per second).
pub fn player_speed(agility: u32) -> f64 {
    PLAYER_MOVE_SPEED * (agility as f64 / AGILITY_SPEED_DIVISOR + 1.0)
}

/// Integrate the player's held movement direction over `dt` seconds.
pub fn run(session: &mut Session, dt: f64) {
    let dir = session.player.move_dir.normalize_or_zero();
    if dir == DVec2::ZERO {
        return;
    }
    let speed = player_speed(session.ledger.stats.agility);
    session.player.position.0 += dir * speed * dt;
}
