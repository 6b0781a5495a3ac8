//! Enemy decision policy.
//!
//! Pure functions that pick what an enemy does this tick from its ability
//! kit, its health and its distance to the player. No ECS dependency;
//! operates on plain data.

use glam::DVec2;
use rand::Rng;

use hexaquest_core::components::Ability;
use hexaquest_core::constants::*;
use hexaquest_core::enums::AbilityKind;

/// Input to the policy for a single enemy.
pub struct EnemyContext {
    pub is_boss: bool,
    pub hp: f64,
    pub max_hp: f64,
    pub distance_to_player: f64,
    /// Current simulation time (seconds).
    pub now: f64,
    /// Current stage index (drives chase speed).
    pub stage: u32,
}

/// What the enemy does this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyAction {
    /// Use the ability at `index` in the kit.
    Cast { index: usize, kind: AbilityKind },
    /// Walk straight at the player at `speed` units per second.
    Advance { speed: f64 },
    /// In melee reach with nothing to cast; the caller rolls for a hit.
    Melee,
}

/// Cooldown gate: `now - last_used >= cooldown`. Never-used abilities are ready.
pub fn ability_ready(ability: &Ability, now: f64) -> bool {
    match ability.last_used {
        None => true,
        Some(last) => now - last >= ability.cooldown_secs,
    }
}

/// Whether `ability` may fire right now for the enemy described by `ctx`.
///
/// Melee-tagged abilities are never cast; melee is the fallback behaviour.
pub fn is_eligible(ability: &Ability, ctx: &EnemyContext) -> bool {
    if !ability_ready(ability, ctx.now) {
        return false;
    }
    match ability.kind {
        AbilityKind::Buff => ctx.hp < ctx.max_hp * BUFF_HP_THRESHOLD,
        AbilityKind::Ranged | AbilityKind::Aoe => ctx.distance_to_player < ability.range,
        AbilityKind::Melee => false,
    }
}

/// First eligible ability in list order (stable priority).
pub fn select_ability(abilities: &[Ability], ctx: &EnemyContext) -> Option<usize> {
    abilities.iter().position(|ability| is_eligible(ability, ctx))
}

/// Evaluate the policy for one enemy.
pub fn evaluate(ctx: &EnemyContext, abilities: &[Ability]) -> EnemyAction {
    if let Some(index) = select_ability(abilities, ctx) {
        return EnemyAction::Cast {
            index,
            kind: abilities[index].kind,
        };
    }

    if ctx.distance_to_player > melee_reach(ctx.is_boss) {
        EnemyAction::Advance {
            speed: chase_speed(ctx.stage, ctx.is_boss),
        }
    } else {
        EnemyAction::Melee
    }
}

/// Distance inside which an enemy stops chasing.
pub fn melee_reach(is_boss: bool) -> f64 {
    if is_boss {
        BOSS_MELEE_REACH
    } else {
        MELEE_REACH
    }
}

/// Chase speed in units per second. Grows slightly with the stage; bosses
/// lumber at a fraction of it.
pub fn chase_speed(stage: u32, is_boss: bool) -> f64 {
    let speed = ENEMY_BASE_SPEED + stage as f64 * ENEMY_SPEED_PER_STAGE;
    if is_boss {
        speed * BOSS_SPEED_FACTOR
    } else {
        speed
    }
}

/// Displacement for one tick of chasing from `from` toward `to`.
/// Never overshoots the target.
pub fn chase_step(from: DVec2, to: DVec2, speed: f64, dt: f64) -> DVec2 {
    let offset = to - from;
    let distance = offset.length();
    let step = (speed * dt).min(distance);
    offset.normalize_or_zero() * step
}

/// Probability of landing a melee hit during a frame of `dt` seconds.
///
/// Equals `MELEE_CHANCE_PER_REFERENCE_TICK` at the reference tick rate and
/// compounds for longer or shorter frames, so the hit rate per second does
/// not depend on the frame rate.
pub fn melee_chance(dt: f64) -> f64 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - MELEE_CHANCE_PER_REFERENCE_TICK).powf(dt * TICK_RATE as f64)
}

/// Roll whether an idle enemy in reach lands a hit this frame.
pub fn roll_melee<R: Rng>(rng: &mut R, dt: f64) -> bool {
    rng.gen::<f64>() < melee_chance(dt)
}
