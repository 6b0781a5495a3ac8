//! Save record: the persisted subset of a run.
//!
//! Shape: `{ stats, inventory, equipment: {MainHand|OffHand|Armor: Item|null}, level }`
//! where `level` is the stage index to resume on.

use serde::{Deserialize, Serialize};

use hexaquest_core::constants::{
    INVENTORY_CAPACITY, SAVE_MAX_COUNTER, SAVE_MAX_LEVEL, SAVE_MAX_STAGE,
};
use hexaquest_core::enums::Attribute;
use hexaquest_core::items::{Equipment, Item};
use hexaquest_core::stats::PlayerStats;

use crate::error::SaveError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub stats: PlayerStats,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    /// Stage to resume on.
    pub level: u32,
}

impl SaveRecord {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate a save blob.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let record: SaveRecord = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// Reject records that would break ledger invariants once loaded.
    pub fn validate(&self) -> Result<(), SaveError> {
        let stats = &self.stats;
        if !(1..=SAVE_MAX_STAGE).contains(&self.level) {
            return Err(invalid(format!("stage index must be in 1..={SAVE_MAX_STAGE}")));
        }
        if !(1..=SAVE_MAX_LEVEL).contains(&stats.level) {
            return Err(invalid(format!("character level must be in 1..={SAVE_MAX_LEVEL}")));
        }
        if !stats.max_hp.is_finite() || stats.max_hp <= 0.0 {
            return Err(invalid("maxHp must be positive"));
        }
        if !stats.hp.is_finite() || stats.hp < 0.0 || stats.hp > stats.max_hp {
            return Err(invalid("hp out of range"));
        }
        if !stats.mana.is_finite() || stats.mana < 0.0 || stats.mana > stats.max_mana {
            return Err(invalid("mana out of range"));
        }
        if stats.xp_to_next_level == 0 || stats.xp_to_next_level > SAVE_MAX_COUNTER {
            return Err(invalid("xpToNextLevel out of range"));
        }
        if stats.xp >= stats.xp_to_next_level {
            return Err(invalid(format!(
                "xp {} has reached xpToNextLevel {}",
                stats.xp, stats.xp_to_next_level
            )));
        }
        if stats.gold > SAVE_MAX_COUNTER {
            return Err(invalid("gold out of range"));
        }
        if stats.stat_points > SAVE_MAX_LEVEL || stats.skill_points > SAVE_MAX_LEVEL {
            return Err(invalid("point pool out of range"));
        }
        if let Some(attribute) = Attribute::ALL
            .into_iter()
            .find(|a| stats.attribute(*a) > SAVE_MAX_LEVEL)
        {
            return Err(invalid(format!("{attribute:?} out of range")));
        }
        if self.inventory.len() > INVENTORY_CAPACITY {
            return Err(invalid(format!(
                "inventory holds {} items, capacity is {INVENTORY_CAPACITY}",
                self.inventory.len()
            )));
        }
        for (slot, item) in self.equipment.iter() {
            if item.slot != Some(slot) {
                return Err(invalid(format!("{} is not a {slot:?} item", item.name)));
            }
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> SaveError {
    SaveError::Invalid(reason.into())
}
