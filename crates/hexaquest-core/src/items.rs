//! Item data model. Items are immutable once generated; equipping only
//! moves them between the inventory and the equipment slots.

use serde::{Deserialize, Serialize};

use crate::enums::{EquipSlot, ItemCategory, Rarity};

/// Sparse stat bonus bundle. Only the fields relevant to the item are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agility: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitality: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<u32>,
    /// Extra critical chance in percent points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crit_chance: Option<u32>,
}

/// A generated piece of loot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ItemCategory,
    /// Template archetype (e.g. "Sword", "Plate").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<EquipSlot>,
    pub rarity: Rarity,
    pub min_level: u32,
    pub stats: ItemStats,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Worn items, one optional item per slot. Serializes as a
/// `{"MainHand": .., "OffHand": .., "Armor": ..}` map with `null` for empty slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "MainHand", default)]
    pub main_hand: Option<Item>,
    #[serde(rename = "OffHand", default)]
    pub off_hand: Option<Item>,
    #[serde(rename = "Armor", default)]
    pub armor: Option<Item>,
}

impl Equipment {
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slot_ref(slot).as_ref()
    }

    /// Put `item` into `slot`, returning whatever was there before.
    pub fn replace(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    pub fn take(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Iterate over occupied slots.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        EquipSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }

    fn slot_ref(&self, slot: EquipSlot) -> &Option<Item> {
        match slot {
            EquipSlot::MainHand => &self.main_hand,
            EquipSlot::OffHand => &self.off_hand,
            EquipSlot::Armor => &self.armor,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Item> {
        match slot {
            EquipSlot::MainHand => &mut self.main_hand,
            EquipSlot::OffHand => &mut self.off_hand,
            EquipSlot::Armor => &mut self.armor,
        }
    }
}
