//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use hexaquest_campaign::{ProgressionLedger, SaveError, SaveRecord};
use hexaquest_core::commands::PlayerCommand;
use hexaquest_core::components::{HitFlash, Lunging};
use hexaquest_core::constants::{DT, MAX_FRAME_DT};
use hexaquest_core::enums::{GamePhase, LogKind};
use hexaquest_core::state::{BossSummary, GameStateSnapshot, StageState};
use hexaquest_core::stats::PlayerStats;
use hexaquest_core::types::{Position, SimTime};

use crate::schedule::TaskAction;
use crate::session::{PlayerBody, Session};
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Longest frame integrated in one step (seconds). Longer frames are clamped.
    pub max_frame_dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all run state.
pub struct SimulationEngine {
    world: World,
    session: Session,
    rng: ChaCha8Rng,
    max_frame_dt: f64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new engine in main-menu mode.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            session: Session::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            max_frame_dt: config.max_frame_dt.max(0.0),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one reference frame.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.advance(DT)
    }

    /// Process queued commands, advance the simulation by `dt` seconds
    /// (clamped) unless paused, and return the resulting snapshot.
    pub fn advance(&mut self, dt: f64) -> GameStateSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        };

        self.process_commands();

        if self.session.is_running() {
            self.run_systems(dt);
            self.session.time.advance(dt);
        }

        let events = std::mem::take(&mut self.session.events);
        systems::snapshot::build_snapshot(&self.world, &self.session, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.session.time
    }

    pub fn stage(&self) -> StageState {
        self.session.stage
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.session.ledger.stats
    }

    pub fn ledger(&self) -> &ProgressionLedger {
        &self.session.ledger
    }

    pub fn active_boss(&self) -> Option<&BossSummary> {
        self.session.active_boss.as_ref()
    }

    pub fn player_position(&self) -> Position {
        self.session.player.position
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The persisted subset of the current run.
    pub fn save_record(&self) -> SaveRecord {
        self.session.ledger.to_record(self.session.stage.stage)
    }

    /// A save record if progression changed since the last call and the
    /// run is in a saveable state.
    pub fn take_autosave(&mut self) -> Option<SaveRecord> {
        self.session
            .take_autosave_due()
            .then(|| self.save_record())
    }

    /// Restore a save blob and resume its stage, unpaused and out of the
    /// menu. A rejected blob leaves the current run untouched.
    pub fn load_save(&mut self, json: &str) -> Result<(), SaveError> {
        let record = SaveRecord::from_json(json).map_err(|err| self.reject_save(err))?;
        self.restore(record);
        Ok(())
    }

    /// Like [`load_save`](Self::load_save) for an already-parsed record.
    pub fn load_record(&mut self, record: SaveRecord) -> Result<(), SaveError> {
        record.validate().map_err(|err| self.reject_save(err))?;
        self.restore(record);
        Ok(())
    }

    fn reject_save(&mut self, err: SaveError) -> SaveError {
        warn!("rejected save data: {err}");
        self.session.log("Failed to load save", LogKind::Info);
        err
    }

    fn restore(&mut self, record: SaveRecord) {
        self.session.ledger = ProgressionLedger::from_record(&record);
        self.session.stage = StageState {
            stage: record.level,
            paused: false,
            boss_stage: false,
            main_menu: false,
            defeated: false,
        };
        self.session.player = PlayerBody::default();
        systems::stage::start_stage(&mut self.world, &mut self.session, &mut self.rng);
        self.session.log("Game loaded", LogKind::Info);
        info!(
            "loaded save: level {} on stage {}",
            record.stats.level, record.level
        );
    }

    /// Spawn an enemy next to the player (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        offset: glam::DVec2,
        hp: f64,
        is_boss: bool,
    ) -> hecs::Entity {
        let id = self.session.allocate_enemy_id();
        let at = self.session.player.position.offset(offset);
        let stage = self.session.stage.stage;
        let entity =
            crate::world_setup::spawn_enemy(&mut self.world, &mut self.rng, id, stage, is_boss, at);
        let health = self
            .world
            .get::<&mut hexaquest_core::components::Health>(entity);
        if let Ok(mut health) = health {
            health.hp = hp;
            health.max_hp = hp;
        }
        entity
    }

    /// Remove every entity from the world (for tests).
    #[cfg(test)]
    pub fn clear_world(&mut self) {
        self.world.clear();
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let session = &mut self.session;
        match command {
            PlayerCommand::StartGame => {
                if session.stage.main_menu {
                    session.stage.main_menu = false;
                    session.stage.paused = false;
                    systems::stage::start_stage(&mut self.world, session, &mut self.rng);
                }
            }
            PlayerCommand::Restart => {
                session.ledger.reset();
                session.stage = StageState {
                    main_menu: false,
                    ..StageState::default()
                };
                session.player = PlayerBody::default();
                session.feed.clear();
                session.active_boss = None;
                systems::stage::start_stage(&mut self.world, session, &mut self.rng);
                info!("run restarted");
            }
            PlayerCommand::TogglePause => {
                if can_pause(&session.stage) {
                    session.stage.paused = !session.stage.paused;
                }
            }
            PlayerCommand::Pause => {
                if can_pause(&session.stage) {
                    session.stage.paused = true;
                }
            }
            PlayerCommand::Resume => {
                if can_pause(&session.stage) {
                    session.stage.paused = false;
                }
            }
            PlayerCommand::UsePotion { kind } => {
                if session.stage.defeated {
                    return;
                }
                if session.ledger.use_potion(kind).is_some() {
                    session.log("Used Potion (30% HP)", LogKind::Heal);
                    session.mark_progress();
                }
            }
            PlayerCommand::UpgradeStat { attribute } => {
                match session.ledger.upgrade_stat(attribute) {
                    Ok(value) => {
                        debug!("{attribute:?} raised to {value}");
                        session.mark_progress();
                    }
                    Err(err) => session.log(err.to_string(), LogKind::Info),
                }
            }
            PlayerCommand::Equip { item_id } => match session.ledger.equip(&item_id) {
                Ok(equipped) => {
                    session.log(format!("Equipped {}", equipped.name), LogKind::Info);
                    session.mark_progress();
                }
                Err(err) => session.log(err.to_string(), LogKind::Info),
            },
            PlayerCommand::Unequip { slot } => match session.ledger.unequip(slot) {
                Ok(name) => {
                    session.log(format!("Unequipped {name}"), LogKind::Info);
                    session.mark_progress();
                }
                Err(err) => session.log(err.to_string(), LogKind::Info),
            },
            PlayerCommand::Discard { item_id } => match session.ledger.discard(&item_id) {
                Ok(item) => {
                    session.log(format!("Discarded {}", item.name), LogKind::Info);
                    session.mark_progress();
                }
                Err(err) => session.log(err.to_string(), LogKind::Info),
            },
            PlayerCommand::Attack { aim } => {
                if session.is_running() && session.player.attack_ready(session.now()) {
                    systems::combat::player_attack(&mut self.world, session, &mut self.rng, aim);
                }
            }
            PlayerCommand::Move { direction } => {
                session.player.move_dir = direction;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let world = &mut self.world;
        let session = &mut self.session;
        let rng = &mut self.rng;

        // 1. Player movement
        systems::movement::run(session, dt);
        // 2. Enemy AI (abilities, chase, melee)
        systems::enemy_ai::run(world, session, rng, dt);
        // 3. Projectile flight and contact
        systems::effects::run_projectiles(world, session, dt, &mut self.despawn_buffer);
        // 4. AoE detonation
        systems::effects::run_aoe(world, session, &mut self.despawn_buffer);
        // 5. Loot pickup
        systems::loot::run(world, session, &mut self.despawn_buffer);
        // 6. Stage director (portal open / enter)
        systems::stage::run(world, session, rng);
        // 7. Scheduled cosmetic tasks
        run_scheduled_tasks(world, session);
        // 8. Compact dead enemies
        systems::cleanup::run(world, &mut self.despawn_buffer);
    }
}

fn can_pause(stage: &StageState) -> bool {
    !stage.main_menu && !stage.defeated
}

/// Execute every task due at the current simulation time.
fn run_scheduled_tasks(world: &mut World, session: &mut Session) {
    let now = session.now();
    for action in session.scheduler.drain_due(now) {
        match action {
            TaskAction::ExpireNotification(id) => {
                session.feed.expire(id);
            }
            TaskAction::ClearHitFlash(entity) => {
                let _ = world.remove_one::<HitFlash>(entity);
            }
            TaskAction::ClearLunge(entity) => {
                let _ = world.remove_one::<Lunging>(entity);
            }
        }
    }
}
