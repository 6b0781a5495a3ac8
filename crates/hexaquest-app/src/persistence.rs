//! JSON file save slots.
//!
//! One file per slot, `<dir>/<slot>.json`, wrapping the engine's save record
//! with slot metadata.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use hexaquest_campaign::SaveRecord;

/// Slot written by the game loop whenever the engine reports progress.
pub const AUTOSAVE_SLOT: &str = "autosave";

/// Full save file written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    pub slot_name: String,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
    pub record: SaveRecord,
}

impl SaveFile {
    pub fn new(slot: &str, record: SaveRecord) -> Self {
        Self {
            slot_name: slot.to_string(),
            timestamp: unix_now(),
            record,
        }
    }
}

/// Lightweight metadata for listing saves without handing out full records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMetadata {
    pub slot_name: String,
    pub stage: u32,
    pub level: u32,
    pub gold: u64,
    pub timestamp: u64,
}

fn save_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{slot}.json"))
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn save_to_file(dir: &Path, data: &SaveFile) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create save directory: {e}"))?;
    let path = save_path(dir, &data.slot_name);
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("Failed to serialize save data: {e}"))?;
    fs::write(&path, json).map_err(|e| format!("Failed to write save file: {e}"))?;
    Ok(())
}

/// Read a slot back. The record is parsed but not validated; the engine
/// validates it on load.
pub fn load_from_file(dir: &Path, slot: &str) -> Result<SaveFile, String> {
    let path = save_path(dir, slot);
    let json = fs::read_to_string(&path).map_err(|e| format!("Failed to read save file: {e}"))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse save data: {e}"))
}

/// Every readable slot in `dir`, newest first.
pub fn list_saves(dir: &Path) -> Vec<SaveMetadata> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut saves: Vec<SaveMetadata> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| fs::read_to_string(path).ok())
        .filter_map(|json| serde_json::from_str::<SaveFile>(&json).ok())
        .map(|data| SaveMetadata {
            slot_name: data.slot_name,
            stage: data.record.level,
            level: data.record.stats.level,
            gold: data.record.stats.gold,
            timestamp: data.timestamp,
        })
        .collect();
    saves.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    saves
}

pub fn delete_save(dir: &Path, slot: &str) -> Result<(), String> {
    let path = save_path(dir, slot);
    if path.exists() {
        fs::remove_file(&path).map_err(|e| format!("Failed to delete save file: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexaquest_campaign::ProgressionLedger;

    fn make_save(slot: &str, stage: u32, gold: u64) -> SaveFile {
        let mut ledger = ProgressionLedger::new();
        ledger.add_gold(gold);
        SaveFile::new(slot, ledger.to_record(stage))
    }

    #[test]
    fn save_file_roundtrip() {
        let data = make_save("test", 5, 12);
        let json = serde_json::to_string(&data).unwrap();
        let restored: SaveFile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.slot_name, "test");
        assert_eq!(restored.record, data.record);
        assert!(restored.timestamp > 0);
    }

    #[test]
    fn save_and_load_file() {
        let dir = std::env::temp_dir().join("hexaquest_test_save_load");
        let _ = fs::remove_dir_all(&dir);

        let data = make_save("slot1", 3, 42);
        save_to_file(&dir, &data).unwrap();
        let loaded = load_from_file(&dir, "slot1").unwrap();
        assert_eq!(loaded.record.level, 3);
        assert_eq!(loaded.record.stats.gold, 42);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_slot_fails() {
        let dir = std::env::temp_dir().join("hexaquest_test_load_missing");
        let _ = fs::remove_dir_all(&dir);
        let err = load_from_file(&dir, "nope").unwrap_err();
        assert!(err.starts_with("Failed to read save file"));
    }

    #[test]
    fn load_garbage_slot_fails() {
        let dir = std::env::temp_dir().join("hexaquest_test_load_garbage");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(save_path(&dir, "bad"), "{ not json").unwrap();

        let err = load_from_file(&dir, "bad").unwrap_err();
        assert!(err.starts_with("Failed to parse save data"));
        assert!(list_saves(&dir).is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn list_saves_empty() {
        let dir = std::env::temp_dir().join("hexaquest_test_list_empty");
        let _ = fs::remove_dir_all(&dir);
        assert!(list_saves(&dir).is_empty());
    }

    #[test]
    fn list_saves_multiple() {
        let dir = std::env::temp_dir().join("hexaquest_test_list_multi");
        let _ = fs::remove_dir_all(&dir);

        let mut early = make_save("early", 2, 5);
        early.timestamp = 1000;
        save_to_file(&dir, &early).unwrap();

        let mut late = make_save("late", 8, 90);
        late.timestamp = 2000;
        save_to_file(&dir, &late).unwrap();

        let saves = list_saves(&dir);
        assert_eq!(saves.len(), 2);
        // Newest first
        assert_eq!(saves[0].slot_name, "late");
        assert_eq!(saves[0].stage, 8);
        assert_eq!(saves[0].gold, 90);
        assert_eq!(saves[1].slot_name, "early");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn delete_save_removes_file() {
        let dir = std::env::temp_dir().join("hexaquest_test_delete");
        let _ = fs::remove_dir_all(&dir);

        save_to_file(&dir, &make_save("todelete", 1, 0)).unwrap();
        assert!(save_path(&dir, "todelete").exists());

        delete_save(&dir, "todelete").unwrap();
        assert!(!save_path(&dir, "todelete").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn delete_nonexistent_save_ok() {
        let dir = std::env::temp_dir().join("hexaquest_test_delete_noop");
        delete_save(&dir, "nope").unwrap();
    }
}
