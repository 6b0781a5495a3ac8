//! Game loop thread: runs the simulation engine at 60 Hz and publishes snapshots.
//!
//! The engine is created inside the thread and never shared. Commands arrive
//! via an `mpsc` channel; snapshots are stored in shared state for polling.
//! Each frame advances by the measured wall-clock delta, which the engine
//! clamps.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use hexaquest_core::constants::TICK_RATE;
use hexaquest_core::state::GameStateSnapshot;
use hexaquest_sim::engine::{SimConfig, SimulationEngine};

use crate::persistence::{self, SaveFile, AUTOSAVE_SLOT};
use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Settings for a game loop thread.
#[derive(Debug, Clone, Default)]
pub struct LoopConfig {
    pub sim: SimConfig,
    /// Where save slots live. `None` disables saving and loading.
    pub save_dir: Option<PathBuf>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>, String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("hexaquest-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: LoopConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config.sim.clone());
    let save_dir = config.save_dir.as_deref();
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;
    info!("game loop started (seed {})", config.sim.seed);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Save(slot)) => save_slot(&engine, save_dir, &slot),
                Ok(GameLoopCommand::Load(slot)) => load_slot(&mut engine, save_dir, &slot),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopped at tick {}", engine.time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the real frame delta (engine handles pause and clamping)
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.advance(dt);

        // 3. Persist progress
        if engine.take_autosave().is_some() {
            save_slot(&engine, save_dir, AUTOSAVE_SLOT);
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Write the engine's current run to `slot`.
pub fn save_slot(engine: &SimulationEngine, save_dir: Option<&Path>, slot: &str) {
    let Some(dir) = save_dir else {
        return;
    };
    let data = SaveFile::new(slot, engine.save_record());
    match persistence::save_to_file(dir, &data) {
        Ok(()) => debug!("saved slot {slot}"),
        Err(e) => error!("{e}"),
    }
}

/// Restore `slot` into the engine. Failures leave the run untouched.
pub fn load_slot(engine: &mut SimulationEngine, save_dir: Option<&Path>, slot: &str) {
    let Some(dir) = save_dir else {
        warn!("no save directory configured; cannot load {slot}");
        return;
    };
    match persistence::load_from_file(dir, slot) {
        Ok(data) => {
            if engine.load_record(data.record).is_ok() {
                info!("loaded slot {slot}");
            }
        }
        Err(e) => warn!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexaquest_core::commands::PlayerCommand;
    use hexaquest_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Save("slot".into())).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(&commands[1], GameLoopCommand::Save(slot) if slot == "slot"));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_save_and_load_slot() {
        let dir = std::env::temp_dir().join("hexaquest_test_loop_slots");
        let _ = std::fs::remove_dir_all(&dir);

        let mut source = SimulationEngine::new(SimConfig::default());
        source.queue_command(PlayerCommand::StartGame);
        source.tick();
        save_slot(&source, Some(&dir), "manual");

        let mut engine = SimulationEngine::new(SimConfig::default());
        load_slot(&mut engine, Some(&dir), "manual");
        assert_eq!(engine.phase(), GamePhase::InProgress);
        assert_eq!(engine.save_record(), source.save_record());

        // Missing slot: nothing changes.
        let mut fresh = SimulationEngine::new(SimConfig::default());
        load_slot(&mut fresh, Some(&dir), "missing");
        assert_eq!(fresh.phase(), GamePhase::MainMenu);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(LoopConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        let mut started = false;
        while Instant::now() < deadline {
            let phase = latest.lock().unwrap().as_ref().map(|s| s.phase);
            if phase == Some(GamePhase::InProgress) {
                started = true;
                break;
            }
            std::thread::sleep(TICK_DURATION);
        }
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(started, "Loop never published an in-progress snapshot");
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
