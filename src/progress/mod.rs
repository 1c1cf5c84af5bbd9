//! Player progress
//!
//! The persisted record plus the unlock state machine derived from it.
//! Nothing in here touches storage.

pub mod record;
pub mod state;

pub use record::ProgressRecord;
pub use state::{StageState, is_unlocked, master_flag, record_solved, stage_state};
