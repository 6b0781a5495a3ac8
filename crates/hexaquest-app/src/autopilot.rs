//! Scripted player for headless smoke runs.
//!
//! Reads a snapshot and answers with the commands a simple-minded player
//! would send that frame: spend stat points, drink when low, wear better
//! gear, chase the nearest enemy and swing, then walk into the portal.

use glam::DVec2;

use hexaquest_core::commands::PlayerCommand;
use hexaquest_core::constants::ATTACK_RANGE;
use hexaquest_core::enums::{Attribute, EquipSlot, PotionKind};
use hexaquest_core::items::Item;
use hexaquest_core::state::GameStateSnapshot;
use hexaquest_core::types::Position;

/// Drink a potion below this fraction of max hp.
const POTION_THRESHOLD: f64 = 0.4;

/// Stat points go here first.
const PRIORITY: [Attribute; 3] = [Attribute::Strength, Attribute::Vitality, Attribute::Dexterity];

#[derive(Debug, Default)]
pub struct Autopilot {
    upgrades: usize,
    /// Health potions are free; this caps how often one is drunk.
    last_potion: Option<f64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for this frame.
    pub fn decide(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if snap.stage.main_menu {
            return vec![PlayerCommand::StartGame];
        }
        if snap.stage.defeated {
            return vec![PlayerCommand::Restart];
        }
        if snap.stage.paused {
            return vec![PlayerCommand::Resume];
        }

        let mut commands = Vec::new();
        let stats = &snap.player.stats;
        let now = snap.time.elapsed_secs;

        if stats.stat_points > 0 {
            let attribute = PRIORITY[self.upgrades % PRIORITY.len()];
            self.upgrades += 1;
            commands.push(PlayerCommand::UpgradeStat { attribute });
        }

        let potion_ready = self.last_potion.map_or(true, |t| now - t >= 1.0);
        if stats.hp < stats.max_hp * POTION_THRESHOLD && potion_ready {
            self.last_potion = Some(now);
            commands.push(PlayerCommand::UsePotion {
                kind: PotionKind::Health,
            });
        }

        if let Some(item) = best_upgrade(snap) {
            commands.push(PlayerCommand::Equip {
                item_id: item.id.clone(),
            });
        }

        let me = snap.player.position;
        let target = match snap.portal {
            Some(portal) if snap.enemies.is_empty() => Some(portal),
            _ => nearest_enemy(snap, me),
        };
        let direction = match target {
            Some(at) => at.0 - me.0,
            None => DVec2::ZERO,
        };

        let in_reach = nearest_enemy(snap, me).is_some_and(|at| me.range_to(&at) < ATTACK_RANGE);
        if in_reach {
            if snap.player.attack_ready {
                commands.push(PlayerCommand::Attack { aim: direction });
            }
            commands.push(PlayerCommand::Move {
                direction: DVec2::ZERO,
            });
        } else {
            commands.push(PlayerCommand::Move { direction });
        }
        commands
    }
}

fn nearest_enemy(snap: &GameStateSnapshot, me: Position) -> Option<Position> {
    snap.enemies
        .iter()
        .map(|e| e.position)
        .min_by(|a, b| me.range_to(a).total_cmp(&me.range_to(b)))
}

/// An inventory item that beats what is worn in its slot.
fn best_upgrade(snap: &GameStateSnapshot) -> Option<&Item> {
    let level = snap.player.stats.level;
    snap.inventory
        .iter()
        .filter(|item| item.min_level <= level)
        .filter_map(|item| {
            let slot = item.slot?;
            let worn = snap.equipment.get(slot).map_or(0, |w| score(w, slot));
            let gain = score(item, slot).checked_sub(worn)?;
            (gain > 0).then_some((gain, item))
        })
        .max_by_key(|(gain, _)| *gain)
        .map(|(_, item)| item)
}

fn score(item: &Item, slot: EquipSlot) -> u32 {
    match slot {
        EquipSlot::MainHand => item.stats.damage.unwrap_or(0),
        EquipSlot::Armor | EquipSlot::OffHand => item.stats.defense.unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexaquest_sim::engine::{SimConfig, SimulationEngine};

    #[test]
    fn test_starts_from_menu() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        let snap = engine.tick();
        let commands = Autopilot::new().decide(&snap);
        assert!(matches!(commands.as_slice(), [PlayerCommand::StartGame]));
    }

    #[test]
    fn test_plays_through_stages() {
        let mut engine = SimulationEngine::new(SimConfig {
            seed: 3,
            ..Default::default()
        });
        let mut pilot = Autopilot::new();
        let mut snap = engine.tick();
        for _ in 0..60 * 120 {
            engine.queue_commands(pilot.decide(&snap));
            snap = engine.tick();
        }
        assert!(
            snap.stage.stage > 1 || snap.player.stats.level > 1,
            "Autopilot made no progress in two minutes"
        );
    }

    #[test]
    fn test_spends_stat_points() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        let mut snap = engine.tick();
        snap.player.stats.stat_points = 2;
        let commands = Autopilot::new().decide(&snap);
        assert!(commands.iter().any(|c| matches!(
            c,
            PlayerCommand::UpgradeStat {
                attribute: Attribute::Strength
            }
        )));
    }
}
