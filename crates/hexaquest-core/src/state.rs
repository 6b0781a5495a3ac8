//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{CombatLogEntry, Notification, SimEvent};
use crate::items::{Equipment, Item};
use crate::stats::PlayerStats;
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub stage: StageState,
    pub player: PlayerView,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    pub active_boss: Option<BossSummary>,
    pub combat_log: Vec<CombatLogEntry>,
    pub notifications: Vec<Notification>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub aoe_zones: Vec<AoeZoneView>,
    pub loot: Vec<LootView>,
    pub portal: Option<Position>,
    pub events: Vec<SimEvent>,
}

/// Stage bookkeeping. Only `stage` is persisted across save/load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageState {
    /// Current stage index, starting at 1.
    pub stage: u32,
    pub paused: bool,
    /// True iff `stage % 10 == 0`.
    pub boss_stage: bool,
    pub main_menu: bool,
    /// Player hp reached zero; only a restart leaves this state.
    pub defeated: bool,
}

impl Default for StageState {
    fn default() -> Self {
        Self {
            stage: 1,
            paused: false,
            boss_stage: false,
            main_menu: true,
            defeated: false,
        }
    }
}

/// UI-facing projection of the live boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossSummary {
    pub name: String,
    pub hp: f64,
    pub max_hp: f64,
}

/// The player avatar as seen by the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub stats: PlayerStats,
    pub position: Position,
    pub facing: DVec2,
    /// Swing cooldown has elapsed.
    pub attack_ready: bool,
    /// Hue of the current biome (degrees).
    pub biome_hue: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub hp: f64,
    pub max_hp: f64,
    pub is_boss: bool,
    pub flashing: bool,
    pub lunging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub owner: u32,
    pub color: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AoeZoneView {
    pub position: Position,
    pub radius: f64,
    /// Seconds until detonation (never negative).
    pub detonates_in: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootView {
    pub position: Position,
    pub name: String,
    pub rarity: Rarity,
    /// `0xRRGGBB` tint for the rarity.
    pub color: u32,
    /// Vertical bob offset for the floating animation.
    pub bob: f64,
}
