//! Per-run state that lives outside the ECS world.
//!
//! Split from the world and the RNG so systems can borrow all three
//! mutably at once.

use glam::DVec2;

use hexaquest_campaign::ProgressionLedger;
use hexaquest_core::constants::*;
use hexaquest_core::enums::{GamePhase, LogKind, NotificationKind};
use hexaquest_core::events::SimEvent;
use hexaquest_core::state::{BossSummary, StageState};
use hexaquest_core::types::{Facing, Position, SimTime};

use crate::feed::Feed;
use crate::schedule::{Scheduler, TaskAction};

/// The player avatar. Not an ECS entity; there is exactly one.
#[derive(Debug, Clone, Default)]
pub struct PlayerBody {
    pub position: Position,
    pub facing: Facing,
    /// Held movement direction; zero when standing still.
    pub move_dir: DVec2,
    /// Simulation time of the last swing.
    pub last_attack: Option<f64>,
}

impl PlayerBody {
    pub fn attack_ready(&self, now: f64) -> bool {
        match self.last_attack {
            None => true,
            Some(last) => now - last >= ATTACK_COOLDOWN_SECS,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    pub time: SimTime,
    pub stage: StageState,
    pub phase: GamePhase,
    pub ledger: ProgressionLedger,
    pub player: PlayerBody,
    pub feed: Feed,
    pub scheduler: Scheduler,
    /// Events raised since the last snapshot.
    pub events: Vec<SimEvent>,
    pub active_boss: Option<BossSummary>,
    next_enemy_id: u32,
    autosave_due: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.time.elapsed_secs
    }

    /// Whether time advances this frame.
    pub fn is_running(&self) -> bool {
        !self.stage.main_menu && !self.stage.paused && !self.stage.defeated
    }

    pub fn log(&mut self, message: impl Into<String>, kind: LogKind) {
        let now = self.now();
        self.feed.log(message, kind, now);
    }

    /// Show a banner and schedule its removal.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.feed.notify(message, kind);
        let due = self.now() + NOTIFICATION_LIFETIME_SECS;
        self.scheduler
            .schedule(due, TaskAction::ExpireNotification(id));
    }

    pub fn emit(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Mirror a boss hp change into the summary, if one is shown.
    pub fn sync_boss_hp(&mut self, hp: f64) {
        if let Some(boss) = self.active_boss.as_mut() {
            boss.hp = hp;
        }
    }

    pub fn allocate_enemy_id(&mut self) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        id
    }

    /// Progression or stage changed; a save should be written.
    pub fn mark_progress(&mut self) {
        self.autosave_due = true;
    }

    /// Consume the pending-save flag. Saves are only due outside the menu
    /// while the player is alive.
    pub fn take_autosave_due(&mut self) -> bool {
        let due = std::mem::take(&mut self.autosave_due);
        due && !self.stage.main_menu && self.ledger.stats.is_alive()
    }
}
