//! Simulation constants and tuning parameters.

/// Reference frame rate (Hz). Per-frame tunings are expressed per second
/// relative to this rate.
pub const TICK_RATE: u32 = 60;

/// Seconds per reference tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest frame delta the engine will integrate in one step (seconds).
pub const MAX_FRAME_DT: f64 = 0.25;

// --- Player ---

pub const PLAYER_BASE_HP: f64 = 100.0;
pub const PLAYER_BASE_MANA: f64 = 50.0;
pub const PLAYER_BASE_ATTRIBUTE: u32 = 5;

/// Player run speed at agility 0 (units per second).
pub const PLAYER_MOVE_SPEED: f64 = 9.0;

/// Speed bonus is `agility / AGILITY_SPEED_DIVISOR` of the base speed.
pub const AGILITY_SPEED_DIVISOR: f64 = 20.0;

/// Minimum time between two player swings (seconds).
pub const ATTACK_COOLDOWN_SECS: f64 = 0.5;

/// Maximum number of items carried in the bag.
pub const INVENTORY_CAPACITY: usize = 20;

/// Fraction of max hp restored by a health potion.
pub const HEALTH_POTION_FRACTION: f64 = 0.3;

// --- Progression ---

/// XP needed to go from level 1 to 2.
pub const XP_BASE_THRESHOLD: u64 = 100;

/// Threshold for the next level is `floor(XP_CURVE_BASE * level^XP_CURVE_EXPONENT)`.
pub const XP_CURVE_BASE: f64 = 100.0;
pub const XP_CURVE_EXPONENT: f64 = 1.2;

pub const LEVEL_UP_MAX_HP_GAIN: f64 = 15.0;
pub const STAT_POINTS_PER_LEVEL: u32 = 1;

// --- Save limits ---

/// Highest stage index a save may resume on.
pub const SAVE_MAX_STAGE: u32 = 1_000;
/// Highest character level, attribute value or point pool a save may carry.
pub const SAVE_MAX_LEVEL: u32 = 1_000;
/// Ceiling for the xp and gold counters in a save.
pub const SAVE_MAX_COUNTER: u64 = 1_000_000_000_000;

// --- Player attack ---

/// Reach of a sword swing (units).
pub const ATTACK_RANGE: f64 = 3.5;

/// Inside this distance the swing connects regardless of facing.
pub const POINT_BLANK_RANGE: f64 = 1.0;

/// Minimum dot(facing, direction) for a hit (~120 degree cone).
pub const ATTACK_CONE_DOT: f64 = 0.5;

pub const STRENGTH_DAMAGE_FACTOR: f64 = 2.0;

/// Damage roll multiplier is `DAMAGE_VARIANCE_MIN + r * DAMAGE_VARIANCE_SPAN`.
pub const DAMAGE_VARIANCE_MIN: f64 = 0.9;
pub const DAMAGE_VARIANCE_SPAN: f64 = 0.2;

/// Crit chance in percent points gained per dexterity point.
pub const CRIT_PER_DEXTERITY: f64 = 0.5;
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// Non-boss enemies are pushed by this multiple of the hit vector.
pub const KNOCKBACK_FACTOR: f64 = 1.5;

// --- Mitigation ---

pub const VITALITY_DEFENSE_FACTOR: f64 = 0.8;
pub const MITIGATION_BASE: f64 = 100.0;
pub const MIN_DAMAGE_TAKEN: f64 = 1.0;

// --- Kill rewards ---

pub const XP_REWARD_BASE: f64 = 30.0;
pub const XP_REWARD_EXPONENT: f64 = 1.1;
pub const BOSS_XP_MULTIPLIER: f64 = 10.0;

pub const GOLD_PER_STAGE: f64 = 0.5;
pub const BOSS_GOLD_BASE: u64 = 50;
pub const BOSS_GOLD_PER_STAGE: u64 = 5;
/// Normal enemies add a random 0..=MINION_GOLD_MAX_BONUS gold.
pub const MINION_GOLD_MAX_BONUS: u64 = 2;

/// Chance a normal enemy drops an item.
pub const LOOT_DROP_CHANCE: f64 = 0.05;

// --- Enemies ---

pub const ENEMY_BASE_HP: f64 = 30.0;
pub const ENEMY_HP_GROWTH: f64 = 1.15;
pub const BOSS_HP_MULTIPLIER: f64 = 8.0;

pub const ENEMY_BASE_DAMAGE: f64 = 5.0;
pub const ENEMY_DAMAGE_PER_STAGE: f64 = 1.5;

/// Enemy chase speed at stage 0 (units per second).
pub const ENEMY_BASE_SPEED: f64 = 2.4;
pub const ENEMY_SPEED_PER_STAGE: f64 = 0.12;
pub const BOSS_SPEED_FACTOR: f64 = 0.8;

/// Distance inside which an enemy stops chasing and tries to melee.
pub const MELEE_REACH: f64 = 1.5;
pub const BOSS_MELEE_REACH: f64 = 4.0;

/// Chance of a melee hit per reference tick while in reach.
pub const MELEE_CHANCE_PER_REFERENCE_TICK: f64 = 0.015;

/// Buff abilities only fire below this fraction of max hp.
pub const BUFF_HP_THRESHOLD: f64 = 0.5;
pub const BUFF_HEAL_FRACTION: f64 = 0.2;

// --- Timed effects ---

pub const PROJECTILE_SPEED: f64 = 10.0;
pub const PROJECTILE_LIFETIME_SECS: f64 = 3.0;
pub const PROJECTILE_CONTACT_RADIUS: f64 = 1.0;

pub const DEFAULT_CAST_TIME_SECS: f64 = 1.5;
pub const DEFAULT_AOE_RADIUS: f64 = 3.0;

// --- Stages ---

/// Every Nth stage is a boss stage.
pub const BOSS_STAGE_INTERVAL: u32 = 10;
pub const BOSS_ESCORT_COUNT: u32 = 2;

/// Normal stages spawn `BASE_ENEMY_COUNT + floor(stage / ENEMY_COUNT_STAGE_DIVISOR)`.
pub const BASE_ENEMY_COUNT: u32 = 4;
pub const ENEMY_COUNT_STAGE_DIVISOR: f64 = 1.5;

/// Enemies spawn on a ring `[SPAWN_RING_MIN, SPAWN_RING_MIN + SPAWN_RING_SPAN)` from the origin.
pub const SPAWN_RING_MIN: f64 = 8.0;
pub const SPAWN_RING_SPAN: f64 = 12.0;

/// Portal appears at the player's position plus this offset.
pub const PORTAL_OFFSET_X: f64 = 0.0;
pub const PORTAL_OFFSET_Y: f64 = -8.0;
pub const PORTAL_CONTACT_RADIUS: f64 = 2.0;

pub const LOOT_PICKUP_RADIUS: f64 = 1.5;

/// Stages per biome and the hue of each biome.
pub const BIOME_STAGE_SPAN: u32 = 5;
pub const BIOME_HUES: [u16; 5] = [220, 280, 10, 120, 40];

// --- Feed & cosmetics ---

pub const COMBAT_LOG_CAPACITY: usize = 6;
pub const NOTIFICATION_LIFETIME_SECS: f64 = 3.0;
pub const HIT_FLASH_SECS: f64 = 0.1;
pub const MELEE_LUNGE_SECS: f64 = 0.2;
pub const LOOT_FLOAT_PHASE_MAX: f64 = 10.0;
