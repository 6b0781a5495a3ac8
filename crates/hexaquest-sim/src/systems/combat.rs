//! Combat resolver: player swings, damage to the player, and kill rewards.

use glam::DVec2;
use hecs::{Entity, World};
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use hexaquest_core::components::{Enemy, Health, HitFlash};
use hexaquest_core::constants::*;
use hexaquest_core::enums::{LogKind, NotificationKind, Rarity};
use hexaquest_core::events::SimEvent;
use hexaquest_core::types::Position;
use hexaquest_procgen::loot;

use crate::schedule::TaskAction;
use crate::session::Session;
use crate::world_setup;

/// Outcome of one player damage roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRoll {
    pub amount: u32,
    pub crit: bool,
}

/// Roll the damage of a swing: `(str*2 + weapon) * U[0.9, 1.1)`, doubled on a
/// crit. Crit chance in percent is `dex*0.5 + weapon crit`.
pub fn roll_player_damage<R: Rng + ?Sized>(
    rng: &mut R,
    strength: u32,
    weapon_damage: f64,
    dexterity: u32,
    weapon_crit: f64,
) -> DamageRoll {
    let base = strength as f64 * STRENGTH_DAMAGE_FACTOR + weapon_damage;
    let mut damage = base * (DAMAGE_VARIANCE_MIN + rng.gen::<f64>() * DAMAGE_VARIANCE_SPAN);
    let crit_chance = dexterity as f64 * CRIT_PER_DEXTERITY + weapon_crit;
    let crit = rng.gen::<f64>() * 100.0 < crit_chance;
    if crit {
        damage *= CRIT_MULTIPLIER;
    }
    DamageRoll {
        amount: damage.floor().max(0.0) as u32,
        crit,
    }
}

/// Whether `target` lies in the swing arc of a player at `origin` facing `facing`.
pub fn in_strike_zone(origin: Position, facing: DVec2, target: Position) -> bool {
    let distance = origin.range_to(&target);
    if distance > ATTACK_RANGE {
        return false;
    }
    distance < POINT_BLANK_RANGE || facing.dot(origin.direction_to(&target)) > ATTACK_CONE_DOT
}

/// Damage actually taken after defense. Never below 1 for a positive hit.
pub fn mitigate(raw: f64, defense: f64) -> f64 {
    if raw <= 0.0 {
        return 0.0;
    }
    (raw * MITIGATION_BASE / (MITIGATION_BASE + defense.max(0.0)))
        .floor()
        .max(MIN_DAMAGE_TAKEN)
}

pub fn xp_reward(stage: u32, is_boss: bool) -> u64 {
    let mult = if is_boss { BOSS_XP_MULTIPLIER } else { 1.0 };
    (XP_REWARD_BASE * (stage as f64).powf(XP_REWARD_EXPONENT) * mult).floor() as u64
}

pub fn gold_reward<R: Rng + ?Sized>(rng: &mut R, stage: u32, is_boss: bool) -> u64 {
    let base = 1 + (stage as f64 * GOLD_PER_STAGE).floor() as u64;
    let bonus = if is_boss {
        BOSS_GOLD_BASE + stage as u64 * BOSS_GOLD_PER_STAGE
    } else {
        rng.gen_range(0..=MINION_GOLD_MAX_BONUS)
    };
    base + bonus
}

/// Apply raw damage to the player through mitigation. Returns the damage
/// taken. A killing blow pauses the run in the defeated state.
pub fn damage_player(session: &mut Session, raw: f64) -> u32 {
    if session.stage.defeated || raw <= 0.0 {
        return 0;
    }
    let taken = mitigate(raw, session.ledger.defense());
    let alive = session.ledger.apply_damage(taken);
    let amount = taken as u32;
    session.log(format!("Took {amount} damage!"), LogKind::Damage);
    session.emit(SimEvent::PlayerDamaged { amount });

    if alive {
        session.mark_progress();
    } else {
        session.notify("YOU DIED", NotificationKind::Boss);
        session.stage.defeated = true;
        session.stage.paused = true;
        session.emit(SimEvent::PlayerDefeated);
        info!("player defeated on stage {}", session.stage.stage);
    }
    amount
}

struct Struck {
    entity: Entity,
    id: u32,
    is_boss: bool,
    hp: f64,
    position: Position,
}

/// Resolve a swing toward `aim`. Starts the attack cooldown and returns the
/// number of enemies hit.
pub fn player_attack(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    aim: DVec2,
) -> u32 {
    let now = session.now();
    session.player.facing = session.player.facing.turned_toward(aim);
    session.player.last_attack = Some(now);
    let origin = session.player.position;
    let facing = session.player.facing.0;

    let ledger = &session.ledger;
    let roll = roll_player_damage(
        rng,
        ledger.stats.strength,
        ledger.weapon_damage(),
        ledger.stats.dexterity,
        ledger.weapon_crit_chance(),
    );
    if roll.crit {
        session.log("CRITICAL HIT!", LogKind::Damage);
    }

    let mut struck: Vec<Struck> = Vec::new();
    for (entity, (enemy, health, pos)) in world.query_mut::<(&Enemy, &mut Health, &mut Position)>()
    {
        if health.hp <= 0.0 || !in_strike_zone(origin, facing, *pos) {
            continue;
        }
        health.hp -= roll.amount as f64;
        session.log(format!("Dealt {} damage", roll.amount), LogKind::Damage);
        if !enemy.is_boss {
            let to_enemy = pos.0 - origin.0;
            pos.0 += to_enemy * KNOCKBACK_FACTOR;
        } else {
            session.sync_boss_hp(health.hp);
        }
        struck.push(Struck {
            entity,
            id: enemy.id,
            is_boss: enemy.is_boss,
            hp: health.hp,
            position: *pos,
        });
    }

    for hit in &struck {
        session.emit(SimEvent::EnemyHit {
            enemy_id: hit.id,
            damage: roll.amount,
            position: hit.position,
        });
        if hit.hp <= 0.0 {
            resolve_kill(world, session, rng, hit.id, hit.is_boss, hit.position);
        } else {
            let _ = world.insert_one(hit.entity, HitFlash);
            session
                .scheduler
                .schedule(now + HIT_FLASH_SECS, TaskAction::ClearHitFlash(hit.entity));
        }
    }

    let hits = struck.len() as u32;
    session.emit(SimEvent::Swing {
        hits,
        crit: roll.crit,
    });
    hits
}

/// Grant rewards for a dead enemy and roll its loot. The entity itself is
/// removed by end-of-tick compaction.
pub fn resolve_kill(
    world: &mut World,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    enemy_id: u32,
    is_boss: bool,
    position: Position,
) {
    let stage = session.stage.stage;
    if is_boss {
        session.active_boss = None;
        info!("boss of stage {stage} defeated");
    }

    let xp = xp_reward(stage, is_boss);
    if let Some(level) = session.ledger.gain_xp(xp) {
        session.notify(
            format!("LEVEL UP! You reached Level {level}"),
            NotificationKind::LevelUp,
        );
        session.emit(SimEvent::LevelUp { level });
        info!("player reached level {level}");
    }

    let gold = gold_reward(rng, stage, is_boss);
    session.ledger.add_gold(gold);
    session.log(format!("Found {gold} Gold"), LogKind::Gold);

    if is_boss || rng.gen::<f64>() < LOOT_DROP_CHANCE {
        let item = loot::generate_item(rng, stage, is_boss.then_some(Rarity::Epic));
        let rarity = item.rarity;
        debug!("{} dropped at ({:.1}, {:.1})", item.name, position.0.x, position.0.y);
        world_setup::spawn_loot(world, rng, item, position);
        session.log(format!("{rarity} Drop!"), LogKind::Loot);
        session.emit(SimEvent::LootDropped { rarity, position });
    }

    session.emit(SimEvent::EnemyKilled {
        enemy_id,
        boss: is_boss,
        xp,
        gold,
    });
    session.mark_progress();
}
