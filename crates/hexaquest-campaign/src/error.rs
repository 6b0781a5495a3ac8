//! Error types for progression and persistence.

use thiserror::Error;

use hexaquest_core::enums::EquipSlot;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// A rejected progression command. The ledger is unchanged when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("No stat points available")]
    NoStatPoints,

    #[error("Item not found")]
    ItemNotFound(String),

    #[error("Need Level {required} to equip!")]
    LevelTooLow { required: u32 },

    #[error("{0} cannot be equipped")]
    NotEquippable(String),

    #[error("Inventory Full!")]
    InventoryFull,

    #[error("Nothing equipped in {0:?}")]
    SlotEmpty(EquipSlot),
}

/// A save payload that could not be restored.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("malformed save data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid save data: {0}")]
    Invalid(String),
}
