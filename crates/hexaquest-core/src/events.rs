//! Events and feed entries emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// One-shot events for the presentation layer (sounds, effects).
/// Drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    StageStarted { stage: u32, boss: bool },
    /// Player swung; `hits` enemies were struck.
    Swing { hits: u32, crit: bool },
    EnemyHit { enemy_id: u32, damage: u32, position: Position },
    EnemyKilled { enemy_id: u32, boss: bool, xp: u64, gold: u64 },
    AbilityCast { enemy_id: u32, kind: AbilityKind },
    AoeDetonated { position: Position, radius: f64, hit_player: bool },
    PlayerDamaged { amount: u32 },
    LootDropped { rarity: Rarity, position: Position },
    ItemPickedUp { item_id: String },
    LevelUp { level: u32 },
    PortalOpened { position: Position },
    PlayerDefeated,
}

/// One line of the rolling combat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub id: u64,
    pub message: String,
    pub kind: LogKind,
    /// Simulation time when the line was written.
    pub timestamp: f64,
}

/// A transient banner that expires after a few seconds of simulation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}
