//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::AbilityKind;
use crate::items::Item;

/// A hostile combatant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id, also used as the owner tag of spawned effects.
    pub id: u32,
    pub is_boss: bool,
    /// Base damage stat, scaled by stage.
    pub damage: f64,
}

/// Hit points of an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: f64,
    pub max_hp: f64,
}

/// One ability in an enemy's kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub kind: AbilityKind,
    pub damage_mult: f64,
    pub cooldown_secs: f64,
    /// Simulation time of the last use; `None` if never used.
    pub last_used: Option<f64>,
    /// Trigger range (units). Unused for buffs.
    pub range: f64,
    /// Delay between cast and detonation (aoe only).
    pub cast_time_secs: Option<f64>,
    /// Effect radius (aoe only).
    pub radius: Option<f64>,
    /// Cosmetic tint of the projectile (ranged only).
    pub projectile_color: Option<u32>,
}

/// Ordered ability list; earlier entries have priority.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abilities {
    pub list: Vec<Ability>,
}

/// An enemy projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f64,
    /// Enemy id of the caster. The projectile outlives its owner.
    pub owner: u32,
    pub lifetime_secs: f64,
    pub color: Option<u32>,
}

/// A telegraphed area attack waiting to detonate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AoeZone {
    pub damage: f64,
    pub radius: f64,
    /// Simulation time at which the zone detonates.
    pub detonate_at: f64,
    pub owner: u32,
}

/// An item lying on the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootDrop {
    pub item: Item,
    /// Cosmetic bobbing phase offset.
    pub float_phase: f64,
    /// Set once the "inventory full" message has been shown for this drop.
    pub full_warned: bool,
}

/// Marks the stage-exit portal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Portal;

/// Cosmetic: enemy was just struck.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitFlash;

/// Cosmetic: enemy is mid melee lunge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lunging;
