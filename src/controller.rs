//! Lifecycle controller
//!
//! [`TimerController`] owns the one mutable [`TimerState`] and applies
//! lifecycle callbacks and user taps to it. Each callback is only valid from
//! certain [`LifecyclePhase`]s; calling one out of order returns
//! [`LifecycleError`] and leaves the state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    persistence::PreferenceStore,
    state::{ButtonState, TimerState, TransientSnapshot},
    ui::{render_button, render_clock, render_summary, Screen},
};

/// Where the screen is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePhase {
    /// Constructed, `on_create` not yet called
    Initialized,
    Created,
    /// Visible, not focused
    Started,
    /// Visible and focused
    Resumed,
    /// Visible, lost focus
    Paused,
    /// Not visible
    Stopped,
    Destroyed,
}

impl LifecyclePhase {
    /// Whether the screen is visible in this phase
    pub fn is_visible(self) -> bool {
        matches!(self, LifecyclePhase::Started | LifecyclePhase::Resumed | LifecyclePhase::Paused)
    }

    /// Whether callbacks such as ticks may still reach the screen
    pub fn is_live(self) -> bool {
        !matches!(self, LifecyclePhase::Initialized | LifecyclePhase::Destroyed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("{operation} is not allowed while {phase:?}")]
    OutOfOrder {
        operation: &'static str,
        phase: LifecyclePhase,
    },
    #[error("screen has been destroyed")]
    Destroyed,
}

/// Stopwatch screen controller
#[derive(Debug)]
pub struct TimerController<P, S> {
    state: TimerState,
    phase: LifecyclePhase,
    button: ButtonState,
    store: P,
    screen: S,
}

impl<P: PreferenceStore, S: Screen> TimerController<P, S> {
    pub fn new(store: P, screen: S) -> Self {
        Self {
            state: TimerState::default(),
            phase: LifecyclePhase::Initialized,
            button: ButtonState::default(),
            store,
            screen,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub fn button_state(&self) -> ButtonState {
        self.button
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Screen created: load the stored session and render everything
    pub fn on_create(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("on_create", &[LifecyclePhase::Initialized])?;
        self.state = self.load_saved_state();
        self.refresh_button();
        render_clock(&mut self.screen, self.state.elapsed_seconds);
        self.phase = LifecyclePhase::Created;
        info!("Screen created with {:?}", self.state);
        Ok(())
    }

    /// Screen became visible.
    ///
    /// Reloads the stored state; unless that state is running, the live
    /// counter starts again from zero. A session this screen suspended itself
    /// (paused while running, then stopped) is newer than anything stored and
    /// is kept as is.
    pub fn on_start(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("on_start", &[LifecyclePhase::Created, LifecyclePhase::Stopped])?;
        let suspended_session =
            self.phase == LifecyclePhase::Stopped && self.state.was_running_before_suspend;
        let stored = self.load_saved_state();
        if !suspended_session {
            self.state = stored;
            if !self.state.running {
                self.state.reset_elapsed();
            }
        }
        self.refresh_button();
        self.phase = LifecyclePhase::Started;
        info!("Screen started, elapsed={}s running={}", self.state.elapsed_seconds, self.state.running);
        Ok(())
    }

    /// Restore the rotation snapshot, if the platform handed one back
    pub fn on_restore_instance_state(
        &mut self,
        snapshot: Option<TransientSnapshot>,
    ) -> Result<(), LifecycleError> {
        self.expect_phase("on_restore_instance_state", &[LifecyclePhase::Started])?;
        if let Some(snapshot) = snapshot {
            self.state = snapshot.into();
            self.refresh_button();
            info!("Restored transient snapshot {:?}", snapshot);
        }
        Ok(())
    }

    /// Screen regained focus
    pub fn on_resume(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("on_resume", &[LifecyclePhase::Started, LifecyclePhase::Paused])?;
        self.state.resume();
        self.refresh_button();
        self.phase = LifecyclePhase::Resumed;
        info!("Screen resumed, running={}", self.state.running);
        Ok(())
    }

    /// Screen about to lose focus
    pub fn on_pause(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("on_pause", &[LifecyclePhase::Resumed])?;
        self.state.suspend();
        self.phase = LifecyclePhase::Paused;
        info!("Screen paused, was_running={}", self.state.was_running_before_suspend);
        Ok(())
    }

    /// Capture the state for a forced re-creation
    pub fn on_save_instance_state(&self) -> Result<TransientSnapshot, LifecycleError> {
        self.expect_live("on_save_instance_state")?;
        let snapshot = TransientSnapshot::from(self.state);
        debug!("Saved transient snapshot {:?}", snapshot);
        Ok(snapshot)
    }

    /// Screen no longer visible; ticks stop counting
    pub fn on_stop(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("on_stop", &[LifecyclePhase::Paused, LifecyclePhase::Started])?;
        self.state.running = false;
        self.phase = LifecyclePhase::Stopped;
        info!("Screen stopped at {}s", self.state.elapsed_seconds);
        Ok(())
    }

    /// Screen torn down.
    ///
    /// Only a permanent close (`finishing`) writes durable storage; a
    /// re-creation relies on the transient snapshot instead.
    pub fn on_destroy(&mut self, finishing: bool) -> Result<(), LifecycleError> {
        self.expect_phase("on_destroy", &[LifecyclePhase::Created, LifecyclePhase::Stopped])?;
        if finishing {
            self.save_state();
        }
        self.phase = LifecyclePhase::Destroyed;
        info!("Screen destroyed (finishing={})", finishing);
        Ok(())
    }

    /// Start/pause button
    pub fn start_pause_tapped(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("start_pause_tapped", &[LifecyclePhase::Resumed])?;
        self.state.toggle();
        self.refresh_button();
        info!("Timer {}", if self.state.running { "started" } else { "paused" });
        Ok(())
    }

    /// Stop button: show the finished session, save it, then reset the counter
    pub fn stop_tapped(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("stop_tapped", &[LifecyclePhase::Resumed])?;
        render_summary(&mut self.screen, self.state.elapsed_seconds);
        self.state.halt();
        self.save_state();
        info!("Session stopped after {}s", self.state.elapsed_seconds);
        self.state.reset_elapsed();
        self.refresh_button();
        Ok(())
    }

    /// One timer tick: render the clock, then count the second if running
    pub fn tick(&mut self) -> Result<(), LifecycleError> {
        self.expect_live("tick")?;
        render_clock(&mut self.screen, self.state.elapsed_seconds);
        if self.state.tick() {
            debug!("Tick, elapsed={}s", self.state.elapsed_seconds);
        }
        Ok(())
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: &[LifecyclePhase],
    ) -> Result<(), LifecycleError> {
        if self.phase == LifecyclePhase::Destroyed {
            return Err(LifecycleError::Destroyed);
        }
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(LifecycleError::OutOfOrder {
                operation,
                phase: self.phase,
            })
        }
    }

    fn expect_live(&self, operation: &'static str) -> Result<(), LifecycleError> {
        if self.phase == LifecyclePhase::Destroyed {
            Err(LifecycleError::Destroyed)
        } else if self.phase.is_live() {
            Ok(())
        } else {
            Err(LifecycleError::OutOfOrder {
                operation,
                phase: self.phase,
            })
        }
    }

    /// Read the stored session and show it in the summary label.
    /// A failed read keeps the in-memory state and leaves the summary as is.
    fn load_saved_state(&mut self) -> TimerState {
        match self.store.load() {
            Ok(stored) => {
                render_summary(&mut self.screen, stored.elapsed_seconds);
                stored
            }
            Err(e) => {
                error!("Failed to load timer state: {:#}", e);
                self.state
            }
        }
    }

    fn save_state(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            error!("Failed to save timer state: {:#}", e);
        }
    }

    fn refresh_button(&mut self) {
        self.button = render_button(&mut self.screen, self.state.running);
    }
}
