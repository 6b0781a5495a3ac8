//! Progression ledger: the single owner of player stats, inventory and
//! equipment.
//!
//! Every mutation either succeeds completely or returns a [`LedgerError`]
//! and leaves the ledger untouched. Callers turn outcomes into log lines.

use hexaquest_core::constants::*;
use hexaquest_core::enums::{Attribute, EquipSlot, PotionKind};
use hexaquest_core::items::{Equipment, Item};
use hexaquest_core::stats::PlayerStats;

use crate::error::{LedgerError, LedgerResult};
use crate::save::SaveRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressionLedger {
    pub stats: PlayerStats,
    /// Bag contents in pickup order. Never longer than `INVENTORY_CAPACITY`.
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
}

/// Result of a successful equip.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipped {
    pub name: String,
    pub slot: EquipSlot,
    /// Previously worn item, now back in the inventory.
    pub displaced: Option<String>,
}

/// XP needed to advance past `level`.
pub fn xp_threshold(level: u32) -> u64 {
    (XP_CURVE_BASE * (level as f64).powf(XP_CURVE_EXPONENT)).floor() as u64
}

impl ProgressionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from a validated save record.
    pub fn from_record(record: &SaveRecord) -> Self {
        Self {
            stats: record.stats.clone(),
            inventory: record.inventory.clone(),
            equipment: record.equipment.clone(),
        }
    }

    pub fn to_record(&self, stage: u32) -> SaveRecord {
        SaveRecord {
            stats: self.stats.clone(),
            inventory: self.inventory.clone(),
            equipment: self.equipment.clone(),
            level: stage,
        }
    }

    /// Back to a fresh level 1 character with empty bags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Grant experience. At most one level is gained per call, even if the
    /// remainder exceeds the next threshold. Returns the new level on a level-up.
    pub fn gain_xp(&mut self, amount: u64) -> Option<u32> {
        let stats = &mut self.stats;
        stats.xp = stats.xp.saturating_add(amount);
        if stats.xp < stats.xp_to_next_level {
            return None;
        }

        stats.xp -= stats.xp_to_next_level;
        stats.level = stats.level.saturating_add(1);
        stats.stat_points = stats.stat_points.saturating_add(STAT_POINTS_PER_LEVEL);
        stats.xp_to_next_level = xp_threshold(stats.level);
        stats.max_hp += LEVEL_UP_MAX_HP_GAIN;
        stats.hp = stats.max_hp;
        Some(stats.level)
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.stats.gold = self.stats.gold.saturating_add(amount);
    }

    /// Spend a stat point on `attribute`. Returns the new attribute value.
    pub fn upgrade_stat(&mut self, attribute: Attribute) -> LedgerResult<u32> {
        if self.stats.stat_points == 0 {
            return Err(LedgerError::NoStatPoints);
        }
        self.stats.stat_points -= 1;
        let value = self.stats.attribute_mut(attribute);
        *value = value.saturating_add(1);
        Ok(*value)
    }

    /// Drink a potion. Returns the hp restored, or `None` for kinds that
    /// have no effect yet.
    pub fn use_potion(&mut self, kind: PotionKind) -> Option<f64> {
        match kind {
            PotionKind::Health => {
                let amount = self.stats.max_hp * HEALTH_POTION_FRACTION;
                Some(self.stats.heal(amount))
            }
            PotionKind::Mana | PotionKind::Speed => None,
        }
    }

    /// Move an inventory item into its slot, returning whatever it displaces
    /// to the bag.
    pub fn equip(&mut self, item_id: &str) -> LedgerResult<Equipped> {
        let index = self.find(item_id)?;
        let item = &self.inventory[index];
        if item.min_level > self.stats.level {
            return Err(LedgerError::LevelTooLow {
                required: item.min_level,
            });
        }
        let slot = item
            .slot
            .ok_or_else(|| LedgerError::NotEquippable(item.name.clone()))?;

        let item = self.inventory.remove(index);
        let name = item.name.clone();
        let displaced = self.equipment.replace(slot, item);
        let displaced_name = displaced.as_ref().map(|d| d.name.clone());
        if let Some(previous) = displaced {
            self.inventory.push(previous);
        }
        Ok(Equipped {
            name,
            slot,
            displaced: displaced_name,
        })
    }

    /// Move the item in `slot` to the end of the inventory.
    pub fn unequip(&mut self, slot: EquipSlot) -> LedgerResult<String> {
        if self.equipment.get(slot).is_none() {
            return Err(LedgerError::SlotEmpty(slot));
        }
        if self.inventory_full() {
            return Err(LedgerError::InventoryFull);
        }
        let item = self
            .equipment
            .take(slot)
            .ok_or(LedgerError::SlotEmpty(slot))?;
        let name = item.name.clone();
        self.inventory.push(item);
        Ok(name)
    }

    /// Put a picked-up item in the bag.
    pub fn add_item(&mut self, item: Item) -> LedgerResult<()> {
        if self.inventory_full() {
            return Err(LedgerError::InventoryFull);
        }
        self.inventory.push(item);
        Ok(())
    }

    /// Throw an item away.
    pub fn discard(&mut self, item_id: &str) -> LedgerResult<Item> {
        let index = self.find(item_id)?;
        Ok(self.inventory.remove(index))
    }

    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= INVENTORY_CAPACITY
    }

    /// Defense granted by the worn armor piece.
    pub fn armor_defense(&self) -> f64 {
        self.equipment
            .get(EquipSlot::Armor)
            .and_then(|item| item.stats.defense)
            .unwrap_or(0) as f64
    }

    /// Total defense used for damage mitigation.
    pub fn defense(&self) -> f64 {
        self.armor_defense() + self.stats.vitality as f64 * VITALITY_DEFENSE_FACTOR
    }

    pub fn weapon_damage(&self) -> f64 {
        self.main_hand_stat(|item| item.stats.damage)
    }

    /// Extra crit chance (percent points) from the main-hand weapon.
    pub fn weapon_crit_chance(&self) -> f64 {
        self.main_hand_stat(|item| item.stats.crit_chance)
    }

    /// Remove already-mitigated damage from the player. Returns true if the
    /// player is still alive.
    pub fn apply_damage(&mut self, amount: f64) -> bool {
        self.stats.lose_hp(amount);
        self.stats.is_alive()
    }

    fn main_hand_stat(&self, stat: impl Fn(&Item) -> Option<u32>) -> f64 {
        self.equipment
            .get(EquipSlot::MainHand)
            .and_then(stat)
            .unwrap_or(0) as f64
    }

    fn find(&self, item_id: &str) -> LedgerResult<usize> {
        self.inventory
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| LedgerError::ItemNotFound(item_id.to_string()))
    }
}
