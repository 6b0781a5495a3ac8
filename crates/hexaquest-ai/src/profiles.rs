//! Enemy stat profiles and ability loadouts.
//!
//! Consolidates per-stage enemy parameters and the fixed ability kits.

use rand::Rng;

use hexaquest_core::components::Ability;
use hexaquest_core::constants::*;
use hexaquest_core::enums::AbilityKind;

/// Base stats for an enemy spawned on a given stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Starting (and maximum) hit points. Not rounded.
    pub max_hp: f64,
    /// Base damage stat; ability payloads scale from it.
    pub damage: f64,
}

/// Get the profile for an enemy on `stage`.
pub fn enemy_profile(stage: u32, is_boss: bool) -> EnemyProfile {
    let base_hp = ENEMY_BASE_HP * ENEMY_HP_GROWTH.powi(stage as i32);
    EnemyProfile {
        max_hp: if is_boss {
            base_hp * BOSS_HP_MULTIPLIER
        } else {
            base_hp
        },
        damage: ENEMY_BASE_DAMAGE + stage as f64 * ENEMY_DAMAGE_PER_STAGE,
    }
}

/// Display name of the boss guarding `stage`.
pub fn boss_name(stage: u32) -> String {
    format!("Level {stage} Guardian")
}

/// Fixed boss kit, in priority order.
pub fn boss_loadout() -> Vec<Ability> {
    vec![nova(), fireball(), enrage()]
}

/// Kit for a normal enemy from a single uniform roll in `[0, 1)`.
///
/// Roughly 30% throw rocks, 20% smash, the rest only melee.
pub fn minion_loadout(roll: f64) -> Vec<Ability> {
    if roll < 0.3 {
        vec![rock_throw()]
    } else if roll >= 0.8 {
        vec![smash()]
    } else {
        Vec::new()
    }
}

/// Draw a normal enemy's kit from `rng`.
pub fn roll_minion_loadout<R: Rng>(rng: &mut R) -> Vec<Ability> {
    minion_loadout(rng.gen::<f64>())
}

pub fn nova() -> Ability {
    Ability {
        name: "Nova".into(),
        kind: AbilityKind::Aoe,
        damage_mult: 1.5,
        cooldown_secs: 8.0,
        last_used: None,
        range: 8.0,
        cast_time_secs: Some(2.0),
        radius: Some(5.0),
        projectile_color: None,
    }
}

pub fn fireball() -> Ability {
    Ability {
        name: "Fireball".into(),
        kind: AbilityKind::Ranged,
        damage_mult: 1.2,
        cooldown_secs: 4.0,
        last_used: None,
        range: 15.0,
        cast_time_secs: None,
        radius: None,
        projectile_color: Some(0xff4500),
    }
}

pub fn enrage() -> Ability {
    Ability {
        name: "Enrage".into(),
        kind: AbilityKind::Buff,
        damage_mult: 0.0,
        cooldown_secs: 15.0,
        last_used: None,
        range: 0.0,
        cast_time_secs: None,
        radius: None,
        projectile_color: None,
    }
}

pub fn rock_throw() -> Ability {
    Ability {
        name: "Rock Throw".into(),
        kind: AbilityKind::Ranged,
        damage_mult: 0.8,
        cooldown_secs: 5.0,
        last_used: None,
        range: 10.0,
        cast_time_secs: None,
        radius: None,
        projectile_color: Some(0x888888),
    }
}

pub fn smash() -> Ability {
    Ability {
        name: "Smash".into(),
        kind: AbilityKind::Aoe,
        damage_mult: 1.2,
        cooldown_secs: 6.0,
        last_used: None,
        range: 3.0,
        cast_time_secs: Some(1.5),
        radius: Some(2.5),
        projectile_color: None,
    }
}
