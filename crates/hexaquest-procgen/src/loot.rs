//! Item and loot generation.
//!
//! Items scale with the stage they drop on and the rarity tier rolled for
//! them. Generation is pure apart from the draws taken from the caller's RNG.

use rand::Rng;

use hexaquest_core::enums::{EquipSlot, ItemCategory, Rarity};
use hexaquest_core::items::{Item, ItemStats};

/// One entry of the item catalog.
#[derive(Debug, Clone, Copy)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub sub_type: &'static str,
    /// Damage multiplier for weapons, defense multiplier for armor.
    pub power_mult: f64,
    pub icon: &'static str,
}

pub const WEAPON_TEMPLATES: [ItemTemplate; 4] = [
    ItemTemplate { name: "Longsword", sub_type: "Sword", power_mult: 1.0, icon: "sword" },
    ItemTemplate { name: "Dagger", sub_type: "Dagger", power_mult: 0.7, icon: "dagger" },
    ItemTemplate { name: "Warhammer", sub_type: "Mace", power_mult: 1.4, icon: "hammer" },
    ItemTemplate { name: "Battleaxe", sub_type: "Axe", power_mult: 1.2, icon: "axe" },
];

pub const ARMOR_TEMPLATES: [ItemTemplate; 3] = [
    ItemTemplate { name: "Plate Chest", sub_type: "Plate", power_mult: 1.0, icon: "shield" },
    ItemTemplate { name: "Leather Tunic", sub_type: "Leather", power_mult: 0.6, icon: "tunic" },
    ItemTemplate { name: "Silk Robe", sub_type: "Cloth", power_mult: 0.3, icon: "robe" },
];

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Map a uniform draw in `[0, 1)` to a rarity tier.
pub fn roll_rarity(r: f64) -> Rarity {
    if r >= 0.99 {
        Rarity::Legendary
    } else if r >= 0.98 {
        Rarity::Epic
    } else if r >= 0.90 {
        Rarity::Rare
    } else if r >= 0.75 {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// Power scaling per rarity tier.
pub fn rarity_multiplier(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Common => 1.0,
        Rarity::Uncommon => 1.5,
        Rarity::Rare => 2.2,
        Rarity::Epic => 3.5,
        Rarity::Legendary => 5.5,
    }
}

/// RGB tint for loot beams and item labels.
pub fn rarity_color(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::Common => 0x9ca3af,
        Rarity::Uncommon => 0x22c55e,
        Rarity::Rare => 0x3b82f6,
        Rarity::Epic => 0xa855f7,
        Rarity::Legendary => 0xf97316,
    }
}

/// Minimum character level to equip an item dropped on `stage`.
pub fn min_level_for(stage: u32, rarity: Rarity) -> u32 {
    if rarity == Rarity::Legendary {
        stage.max(1)
    } else {
        stage.saturating_sub(2).max(1)
    }
}

/// Generate an item for `stage`. `forced` skips the rarity roll.
pub fn generate_item<R: Rng + ?Sized>(rng: &mut R, stage: u32, forced: Option<Rarity>) -> Item {
    let rarity = forced.unwrap_or_else(|| roll_rarity(rng.gen::<f64>()));
    let is_weapon = rng.gen_bool(0.5);
    let catalog: &[ItemTemplate] = if is_weapon {
        &WEAPON_TEMPLATES
    } else {
        &ARMOR_TEMPLATES
    };
    let template = catalog[rng.gen_range(0..catalog.len())];

    let power = stage as f64 * 1.5 * rarity_multiplier(rarity);
    let bonus = (power * 0.2).floor() as u32;
    let mut stats = ItemStats::default();

    let (category, slot) = if is_weapon {
        stats.damage = Some((10.0 + power * template.power_mult).floor() as u32);
        if rarity != Rarity::Common {
            stats.strength = Some(bonus);
        }
        if rarity == Rarity::Legendary {
            stats.crit_chance = Some(rng.gen_range(5..15));
        }
        (ItemCategory::Weapon, EquipSlot::MainHand)
    } else {
        stats.defense = Some((5.0 + power * template.power_mult).floor() as u32);
        if rarity != Rarity::Common {
            stats.vitality = Some(bonus);
        }
        (ItemCategory::Armor, EquipSlot::Armor)
    };

    Item {
        id: random_id(rng),
        name: format!("{rarity} {}", template.name),
        category,
        sub_type: Some(template.sub_type.to_string()),
        slot: Some(slot),
        rarity,
        min_level: min_level_for(stage, rarity),
        stats,
        icon: template.icon.to_string(),
        description: None,
    }
}

/// Nine random base-36 characters.
fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
