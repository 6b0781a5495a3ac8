//! Player stat record.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Attribute;

/// Mutable player stat block. Field names serialize in camelCase, which is
/// also the shape of the `stats` object inside a save record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub hp: f64,
    pub max_hp: f64,
    pub mana: f64,
    pub max_mana: f64,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub level: u32,
    pub gold: u64,
    pub stat_points: u32,
    pub skill_points: u32,
    pub strength: u32,
    pub intelligence: u32,
    pub agility: u32,
    pub vitality: u32,
    pub dexterity: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            hp: PLAYER_BASE_HP,
            max_hp: PLAYER_BASE_HP,
            mana: PLAYER_BASE_MANA,
            max_mana: PLAYER_BASE_MANA,
            xp: 0,
            xp_to_next_level: XP_BASE_THRESHOLD,
            level: 1,
            gold: 0,
            stat_points: 0,
            skill_points: 0,
            strength: PLAYER_BASE_ATTRIBUTE,
            intelligence: PLAYER_BASE_ATTRIBUTE,
            agility: PLAYER_BASE_ATTRIBUTE,
            vitality: PLAYER_BASE_ATTRIBUTE,
            dexterity: PLAYER_BASE_ATTRIBUTE,
        }
    }
}

impl PlayerStats {
    pub fn attribute(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Agility => self.agility,
            Attribute::Vitality => self.vitality,
            Attribute::Dexterity => self.dexterity,
        }
    }

    pub fn attribute_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Agility => &mut self.agility,
            Attribute::Vitality => &mut self.vitality,
            Attribute::Dexterity => &mut self.dexterity,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Restore up to `amount` hp. Returns the hp actually restored.
    pub fn heal(&mut self, amount: f64) -> f64 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0.0)).min(self.max_hp);
        self.hp - before
    }

    /// Remove `amount` hp, flooring at zero.
    pub fn lose_hp(&mut self, amount: f64) {
        self.hp = (self.hp - amount.max(0.0)).clamp(0.0, self.max_hp);
    }
}
