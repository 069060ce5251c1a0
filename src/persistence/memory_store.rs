//! In-memory preference store

use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use super::PreferenceStore;
use crate::state::TimerState;

/// Preference store kept in process memory.
///
/// Clones share the same record, the way every screen instance of an app
/// shares its private preferences.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<TimerState>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record
    pub fn with_state(state: TimerState) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// Raw stored record, `None` if nothing was ever saved
    pub fn stored(&self) -> Option<TimerState> {
        self.record.lock().ok().and_then(|record| *record)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> anyhow::Result<TimerState> {
        let record = self
            .record
            .lock()
            .map_err(|e| anyhow!("Failed to lock preference record: {}", e))?;
        Ok(record.unwrap_or_default())
    }

    fn save(&mut self, state: &TimerState) -> anyhow::Result<()> {
        let mut record = self
            .record
            .lock()
            .map_err(|e| anyhow!("Failed to lock preference record: {}", e))?;
        *record = Some(*state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), TimerState::default());
        assert!(store.stored().is_none());
    }

    #[test]
    fn clones_share_the_record() {
        let mut writer = MemoryStore::new();
        let reader = writer.clone();
        writer.save(&TimerState::with_values(42, true, false)).unwrap();
        assert_eq!(reader.load().unwrap(), TimerState::with_values(42, true, false));
    }
}
