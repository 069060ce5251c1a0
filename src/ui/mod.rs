//! Screen projection
//!
//! The controller renders through [`Screen`]; the host keeps a
//! [`ScreenModel`] so the current labels can be inspected.

use serde::Serialize;

use crate::{
    format::{format_elapsed, summary_message},
    state::{ButtonAppearance, ButtonState},
};

/// Render target for the stopwatch screen
pub trait Screen {
    /// Live clock label
    fn set_clock_text(&mut self, text: &str);
    /// Last-session summary label
    fn set_summary_text(&mut self, text: &str);
    /// Start/pause button face
    fn set_button(&mut self, appearance: ButtonAppearance);
}

/// Screen that remembers the last value rendered into each widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenModel {
    pub clock: String,
    pub summary: String,
    pub button: ButtonAppearance,
    /// Number of clock renders, one per tick
    pub clock_renders: u64,
}

impl ScreenModel {
    pub fn new() -> Self {
        Self {
            clock: format_elapsed(0),
            summary: String::new(),
            button: ButtonState::default().appearance(),
            clock_renders: 0,
        }
    }
}

impl Default for ScreenModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScreenModel {
    fn set_clock_text(&mut self, text: &str) {
        self.clock = text.to_string();
        self.clock_renders += 1;
    }

    fn set_summary_text(&mut self, text: &str) {
        self.summary = text.to_string();
    }

    fn set_button(&mut self, appearance: ButtonAppearance) {
        self.button = appearance;
    }
}

/// Render the live clock for the given elapsed time
pub fn render_clock<S: Screen + ?Sized>(screen: &mut S, elapsed_seconds: u64) {
    screen.set_clock_text(&format_elapsed(elapsed_seconds));
}

/// Render the last-session summary for the given elapsed time
pub fn render_summary<S: Screen + ?Sized>(screen: &mut S, elapsed_seconds: u64) {
    screen.set_summary_text(&summary_message(elapsed_seconds));
}

/// Render the start/pause button for the given running flag
pub fn render_button<S: Screen + ?Sized>(screen: &mut S, running: bool) -> ButtonState {
    let state = ButtonState::from_running(running);
    screen.set_button(state.appearance());
    state
}
