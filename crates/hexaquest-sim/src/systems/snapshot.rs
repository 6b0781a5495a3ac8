//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only with respect to the world.

use hecs::World;

use hexaquest_core::components::*;
use hexaquest_core::events::SimEvent;
use hexaquest_core::state::*;
use hexaquest_core::types::Position;
use hexaquest_procgen::loot::rarity_color;
use hexaquest_procgen::stage::biome_hue;

use crate::session::Session;
use crate::systems::stage::portal_position;

/// Vertical amplitude of the loot bob animation.
const LOOT_BOB_AMPLITUDE: f64 = 0.2;

/// Build a complete GameStateSnapshot from the current world and session.
pub fn build_snapshot(world: &World, session: &Session, events: Vec<SimEvent>) -> GameStateSnapshot {
    let now = session.now();

    GameStateSnapshot {
        time: session.time,
        phase: session.phase,
        stage: session.stage,
        player: build_player(session),
        inventory: session.ledger.inventory.clone(),
        equipment: session.ledger.equipment.clone(),
        active_boss: session.active_boss.clone(),
        combat_log: session.feed.log_entries().cloned().collect(),
        notifications: session.feed.notifications().to_vec(),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        aoe_zones: build_aoe_zones(world, now),
        loot: build_loot(world, now),
        portal: portal_position(world),
        events,
    }
}

fn build_player(session: &Session) -> PlayerView {
    PlayerView {
        stats: session.ledger.stats.clone(),
        position: session.player.position,
        facing: session.player.facing.0,
        attack_ready: session.player.attack_ready(session.now()),
        biome_hue: biome_hue(session.stage.stage),
    }
}

/// Live enemies, sorted by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Health, &Position, Option<&HitFlash>, Option<&Lunging>)>()
        .iter()
        .filter(|(_, (_, health, ..))| health.hp > 0.0)
        .map(|(_, (enemy, health, pos, flash, lunge))| EnemyView {
            id: enemy.id,
            position: *pos,
            hp: health.hp,
            max_hp: health.max_hp,
            is_boss: enemy.is_boss,
            flashing: flash.is_some(),
            lunging: lunge.is_some(),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            position: *pos,
            owner: projectile.owner,
            color: projectile.color,
        })
        .collect()
}

fn build_aoe_zones(world: &World, now: f64) -> Vec<AoeZoneView> {
    world
        .query::<(&AoeZone, &Position)>()
        .iter()
        .map(|(_, (zone, pos))| AoeZoneView {
            position: *pos,
            radius: zone.radius,
            detonates_in: (zone.detonate_at - now).max(0.0),
        })
        .collect()
}

fn build_loot(world: &World, now: f64) -> Vec<LootView> {
    world
        .query::<(&LootDrop, &Position)>()
        .iter()
        .map(|(_, (drop, pos))| LootView {
            position: *pos,
            name: drop.item.name.clone(),
            rarity: drop.item.rarity,
            color: rarity_color(drop.item.rarity),
            bob: (now * 2.0 + drop.float_phase).sin() * LOOT_BOB_AMPLITUDE,
        })
        .collect()
}
