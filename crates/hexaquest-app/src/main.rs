//! Headless HEXAQUEST runner.
//!
//! Starts the game loop thread and lets the autopilot play for a number of
//! frames. Environment:
//! - `HEXAQUEST_SEED`: RNG seed (default 42)
//! - `HEXAQUEST_SAVE_DIR`: save slot directory; resumes the autosave if present
//! - `HEXAQUEST_FRAMES`: frames to play before exiting (default 3600)

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use hexaquest_app::autopilot::Autopilot;
use hexaquest_app::game_loop::{LoopConfig, TICK_DURATION};
use hexaquest_app::persistence::{self, AUTOSAVE_SLOT};
use hexaquest_app::state::{AppState, GameLoopCommand};
use hexaquest_sim::engine::SimConfig;

const DEFAULT_FRAMES: u64 = 3600;

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn run() -> Result<(), String> {
    let sim = SimConfig {
        seed: env_parse("HEXAQUEST_SEED").unwrap_or(SimConfig::default().seed),
        ..Default::default()
    };
    let frames: u64 = env_parse("HEXAQUEST_FRAMES").unwrap_or(DEFAULT_FRAMES);
    let save_dir = std::env::var_os("HEXAQUEST_SAVE_DIR").map(PathBuf::from);

    let state = AppState::new();
    state.start(LoopConfig {
        sim,
        save_dir: save_dir.clone(),
    })?;

    if let Some(dir) = &save_dir {
        let saves = persistence::list_saves(dir);
        for save in &saves {
            info!(
                "found slot {}: stage {}, level {}, {} gold",
                save.slot_name, save.stage, save.level, save.gold
            );
        }
        if saves.iter().any(|s| s.slot_name == AUTOSAVE_SLOT) {
            state.send(GameLoopCommand::Load(AUTOSAVE_SLOT.into()))?;
        }
    }

    let mut pilot = Autopilot::new();
    let mut last_tick = None;
    let mut played = 0;
    while played < frames {
        std::thread::sleep(TICK_DURATION);
        let Some(snap) = state.snapshot()? else {
            continue;
        };
        if last_tick == Some(snap.time.tick) && !snap.stage.main_menu && !snap.stage.paused {
            continue;
        }
        last_tick = Some(snap.time.tick);
        for command in pilot.decide(&snap) {
            state.send_player_command(command)?;
        }
        played += 1;
    }

    if let Some(snap) = state.snapshot()? {
        let stats = &snap.player.stats;
        info!(
            "finished: stage {}, level {}, {} gold, {} items, hp {:.0}/{:.0}",
            snap.stage.stage,
            stats.level,
            stats.gold,
            snap.inventory.len(),
            stats.hp,
            stats.max_hp
        );
    }
    state.stop()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
