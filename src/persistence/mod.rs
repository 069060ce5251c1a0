//! Durable storage for the timer state
//!
//! A per-app key-value record with three keys (`seconds`, `running`,
//! `wasRunning`). Absent keys and unreadable records both load as the
//! default state, so "no prior session" and "corrupted record" look the same.

pub mod file_store;
pub mod memory_store;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;

use crate::state::TimerState;

/// Load/save access to the durable timer record
pub trait PreferenceStore {
    /// Load the stored state, substituting defaults for anything missing
    fn load(&self) -> anyhow::Result<TimerState>;

    /// Overwrite the stored state
    fn save(&mut self, state: &TimerState) -> anyhow::Result<()>;
}
