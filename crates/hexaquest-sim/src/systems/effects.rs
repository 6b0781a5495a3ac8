//! Timed-effect registry: projectile flight and area detonations.
//!
//! Effects are only ever spawned by enemy abilities; this system advances
//! them and hands contact damage to the combat resolver.

use hecs::{Entity, World};

use hexaquest_core::components::{AoeZone, Projectile};
use hexaquest_core::constants::PROJECTILE_CONTACT_RADIUS;
use hexaquest_core::events::SimEvent;
use hexaquest_core::types::{Position, Velocity};

use crate::session::Session;
use crate::systems::combat;

/// Move projectiles, apply contact hits, and expire spent ones.
pub fn run_projectiles(
    world: &mut World,
    session: &mut Session,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let player = session.player.position;
    let mut hits: Vec<f64> = Vec::new();

    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        projectile.lifetime_secs -= dt;
        pos.0 += vel.0 * dt;

        if pos.range_to(&player) < PROJECTILE_CONTACT_RADIUS {
            hits.push(projectile.damage);
            despawn_buffer.push(entity);
        } else if projectile.lifetime_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for damage in hits {
        combat::damage_player(session, damage);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Detonate every zone whose cast delay has elapsed.
pub fn run_aoe(world: &mut World, session: &mut Session, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let now = session.now();
    let player = session.player.position;
    let mut detonations: Vec<(Position, f64, f64)> = Vec::new();

    for (entity, (zone, pos)) in world.query_mut::<(&AoeZone, &Position)>() {
        if now >= zone.detonate_at {
            detonations.push((*pos, zone.radius, zone.damage));
            despawn_buffer.push(entity);
        }
    }

    for (position, radius, damage) in detonations {
        let hit_player = position.range_to(&player) < radius;
        if hit_player {
            combat::damage_player(session, damage);
        }
        session.emit(SimEvent::AoeDetonated {
            position,
            radius,
            hit_player,
        });
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
