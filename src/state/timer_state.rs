//! Timer state structure and its transient snapshot

use serde::{Deserialize, Serialize};

/// Stopwatch state for the current study session.
///
/// Serialized with the durable storage keys `seconds`, `running` and
/// `wasRunning`; absent keys fall back to zero/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerState {
    /// Seconds accumulated in the current session
    #[serde(rename = "seconds")]
    pub elapsed_seconds: u64,
    /// Whether a tick should increment `elapsed_seconds`
    pub running: bool,
    /// Value of `running` captured when the screen lost focus
    #[serde(rename = "wasRunning")]
    pub was_running_before_suspend: bool,
}

impl TimerState {
    /// Create a new stopped timer state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with explicit values
    pub fn with_values(elapsed_seconds: u64, running: bool, was_running_before_suspend: bool) -> Self {
        Self {
            elapsed_seconds,
            running,
            was_running_before_suspend,
        }
    }

    /// Flip the running flag
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Advance by one tick. Returns true if the elapsed time changed.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
            true
        } else {
            false
        }
    }

    /// Remember whether the timer was running before losing focus
    pub fn suspend(&mut self) {
        self.was_running_before_suspend = self.running;
    }

    /// Resume the timer if it was running before losing focus
    pub fn resume(&mut self) {
        if self.was_running_before_suspend {
            self.running = true;
        }
    }

    /// End the session: both running flags cleared, elapsed time untouched
    pub fn halt(&mut self) {
        self.running = false;
        self.was_running_before_suspend = false;
    }

    /// Reset the visible counter
    pub fn reset_elapsed(&mut self) {
        self.elapsed_seconds = 0;
    }
}

/// Short-lived copy of the timer state that survives a single re-creation
/// of the screen (e.g. rotation) without going through durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransientSnapshot {
    pub seconds: u64,
    pub running: bool,
    pub was_running: bool,
}

impl From<TimerState> for TransientSnapshot {
    fn from(state: TimerState) -> Self {
        Self {
            seconds: state.elapsed_seconds,
            running: state.running,
            was_running: state.was_running_before_suspend,
        }
    }
}

impl From<TransientSnapshot> for TimerState {
    fn from(snapshot: TransientSnapshot) -> Self {
        Self::with_values(snapshot.seconds, snapshot.running, snapshot.was_running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let state = TimerState::new();
        assert_eq!(state.elapsed_seconds, 0);
        assert!(!state.running);
        assert!(!state.was_running_before_suspend);
    }

    #[test]
    fn tick_only_counts_while_running() {
        let mut state = TimerState::new();
        assert!(!state.tick());
        assert_eq!(state.elapsed_seconds, 0);

        state.toggle();
        for _ in 0..5 {
            assert!(state.tick());
        }
        assert_eq!(state.elapsed_seconds, 5);
    }

    #[test]
    fn tick_saturates_at_max() {
        let mut state = TimerState::with_values(u64::MAX, true, false);
        state.tick();
        assert_eq!(state.elapsed_seconds, u64::MAX);
    }

    #[test]
    fn suspend_then_resume_restores_running() {
        let mut state = TimerState::with_values(10, true, false);
        state.suspend();
        state.running = false;
        state.resume();
        assert!(state.running);
    }

    #[test]
    fn resume_without_prior_run_stays_paused() {
        let mut state = TimerState::with_values(10, false, false);
        state.suspend();
        state.resume();
        assert!(!state.running);
    }

    #[test]
    fn uses_storage_keys_and_defaults() {
        let state = TimerState::with_values(42, true, false);
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json, serde_json::json!({"seconds": 42, "running": true, "wasRunning": false}));

        let partial: TimerState = serde_json::from_str(r#"{"seconds": 7}"#).unwrap();
        assert_eq!(partial, TimerState::with_values(7, false, false));
    }

    #[test]
    fn snapshot_carries_all_fields() {
        let state = TimerState::with_values(99, false, true);
        let snapshot = TransientSnapshot::from(state);
        assert_eq!(snapshot.seconds, 99);
        assert!(!snapshot.running);
        assert!(snapshot.was_running);
        assert_eq!(TimerState::from(snapshot), state);
    }
}
