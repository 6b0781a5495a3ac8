//! Entity spawn factories for populating the simulation world.
//!
//! Creates enemies, timed effects, loot drops and the exit portal with
//! their component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hexaquest_ai::profiles;
use hexaquest_core::components::*;
use hexaquest_core::constants::*;
use hexaquest_core::items::Item;
use hexaquest_core::types::{Position, Velocity};

/// Spawn one enemy scaled for `stage`. Normal enemies draw their ability
/// kit from `rng`; bosses get the fixed boss kit.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: u32,
    stage: u32,
    is_boss: bool,
    position: Position,
) -> Entity {
    let profile = profiles::enemy_profile(stage, is_boss);
    let list = if is_boss {
        profiles::boss_loadout()
    } else {
        profiles::roll_minion_loadout(rng)
    };

    world.spawn((
        Enemy {
            id,
            is_boss,
            damage: profile.damage,
        },
        Health {
            hp: profile.max_hp,
            max_hp: profile.max_hp,
        },
        position,
        Abilities { list },
    ))
}

/// Spawn a projectile at `origin` flying toward `target`'s current position.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    target: Position,
    damage: f64,
    owner: u32,
    color: Option<u32>,
) -> Entity {
    let velocity = Velocity::toward(target.0 - origin.0, PROJECTILE_SPEED);
    world.spawn((
        Projectile {
            damage,
            owner,
            lifetime_secs: PROJECTILE_LIFETIME_SECS,
            color,
        },
        origin,
        velocity,
    ))
}

/// Spawn a telegraphed area attack centred on `at`.
pub fn spawn_aoe_zone(
    world: &mut World,
    at: Position,
    damage: f64,
    radius: f64,
    detonate_at: f64,
    owner: u32,
) -> Entity {
    world.spawn((
        AoeZone {
            damage,
            radius,
            detonate_at,
            owner,
        },
        at,
    ))
}

/// Drop an item on the floor.
pub fn spawn_loot(world: &mut World, rng: &mut ChaCha8Rng, item: Item, at: Position) -> Entity {
    let float_phase = rng.gen_range(0.0..LOOT_FLOAT_PHASE_MAX);
    world.spawn((
        LootDrop {
            item,
            float_phase,
            full_warned: false,
        },
        at,
    ))
}

pub fn spawn_portal(world: &mut World, at: Position) -> Entity {
    world.spawn((Portal, at))
}
