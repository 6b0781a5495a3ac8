//! Enemy controller: runs the decision policy for every live enemy and
//! carries out the chosen action.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use hexaquest_ai::policy::{self, EnemyAction, EnemyContext};
use hexaquest_core::components::{Abilities, Enemy, Health, Lunging};
use hexaquest_core::constants::*;
use hexaquest_core::enums::{AbilityKind, LogKind};
use hexaquest_core::events::SimEvent;
use hexaquest_core::types::Position;

use crate::schedule::TaskAction;
use crate::session::Session;
use crate::systems::combat;
use crate::world_setup;

/// Effects decided during the query, spawned once it ends.
enum Spawn {
    Projectile {
        origin: Position,
        damage: f64,
        owner: u32,
        color: Option<u32>,
    },
    Zone {
        damage: f64,
        radius: f64,
        detonate_at: f64,
        owner: u32,
    },
}

/// Run one frame of enemy behaviour.
pub fn run(world: &mut World, session: &mut Session, rng: &mut ChaCha8Rng, dt: f64) {
    let now = session.now();
    let stage = session.stage.stage;
    let player = session.player.position;

    let mut spawns: Vec<Spawn> = Vec::new();
    let mut lunges: Vec<Entity> = Vec::new();

    for (entity, (enemy, health, pos, abilities)) in
        world.query_mut::<(&Enemy, &mut Health, &mut Position, &mut Abilities)>()
    {
        if health.hp <= 0.0 {
            continue;
        }

        let ctx = EnemyContext {
            is_boss: enemy.is_boss,
            hp: health.hp,
            max_hp: health.max_hp,
            distance_to_player: pos.range_to(&player),
            now,
            stage,
        };
        let who = if enemy.is_boss { "Boss" } else { "Enemy" };

        match policy::evaluate(&ctx, &abilities.list) {
            EnemyAction::Cast { index, kind } => {
                let ability = &mut abilities.list[index];
                ability.last_used = Some(now);
                let damage = enemy.damage * ability.damage_mult;
                match kind {
                    AbilityKind::Buff => {
                        health.hp = (health.hp + health.max_hp * BUFF_HEAL_FRACTION)
                            .min(health.max_hp);
                        if enemy.is_boss {
                            session.sync_boss_hp(health.hp);
                        }
                        session.log(format!("{who} used {}!", ability.name), LogKind::Info);
                    }
                    AbilityKind::Ranged => spawns.push(Spawn::Projectile {
                        origin: *pos,
                        damage,
                        owner: enemy.id,
                        color: ability.projectile_color,
                    }),
                    AbilityKind::Aoe => {
                        spawns.push(Spawn::Zone {
                            damage,
                            radius: ability.radius.unwrap_or(DEFAULT_AOE_RADIUS),
                            detonate_at: now
                                + ability.cast_time_secs.unwrap_or(DEFAULT_CAST_TIME_SECS),
                            owner: enemy.id,
                        });
                        session.log(format!("{who} casting {}!", ability.name), LogKind::Info);
                    }
                    // Never selected by the policy.
                    AbilityKind::Melee => {}
                }
                session.emit(SimEvent::AbilityCast {
                    enemy_id: enemy.id,
                    kind,
                });
            }
            EnemyAction::Advance { speed } => {
                pos.0 += policy::chase_step(pos.0, player.0, speed, dt);
            }
            EnemyAction::Melee => {
                if policy::roll_melee(rng, dt) {
                    combat::damage_player(session, enemy.damage);
                    lunges.push(entity);
                }
            }
        }
    }

    for spawn in spawns {
        match spawn {
            Spawn::Projectile {
                origin,
                damage,
                owner,
                color,
            } => {
                world_setup::spawn_projectile(world, origin, player, damage, owner, color);
            }
            Spawn::Zone {
                damage,
                radius,
                detonate_at,
                owner,
            } => {
                world_setup::spawn_aoe_zone(world, player, damage, radius, detonate_at, owner);
            }
        }
    }

    for entity in lunges {
        let _ = world.insert_one(entity, Lunging);
        session
            .scheduler
            .schedule(now + MELEE_LUNGE_SECS, TaskAction::ClearLunge(entity));
    }
}
