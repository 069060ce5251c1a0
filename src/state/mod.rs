//! State module
//!
//! Timer values, their rotation snapshot and the button appearance they imply.

pub mod button;
pub mod timer_state;

// Re-export main types
pub use button::{ButtonAppearance, ButtonState, Color};
pub use timer_state::{TimerState, TransientSnapshot};
