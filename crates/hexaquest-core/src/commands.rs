//! Player commands sent from the input/UI layer to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session ---
    /// Leave the main menu and begin (or resume) the current stage.
    StartGame,
    /// Wipe progression and start again from stage 1.
    Restart,
    /// Flip the paused flag.
    TogglePause,
    Pause,
    Resume,

    // --- Progression ---
    UsePotion { kind: PotionKind },
    UpgradeStat { attribute: Attribute },
    Equip { item_id: String },
    Unequip { slot: EquipSlot },
    Discard { item_id: String },

    // --- Action ---
    /// Swing toward `aim` (a direction on the ground plane).
    Attack { aim: DVec2 },
    /// Set the held movement direction (zero to stop).
    Move { direction: DVec2 },
}
