//! Player progression: stats, inventory, equipment and the save record.

pub mod error;
pub mod ledger;
pub mod save;

pub use error::{LedgerError, SaveError};
pub use ledger::ProgressionLedger;
pub use save::SaveRecord;
