//! Study Timer - a study-session stopwatch
//!
//! Start, pause and stop a session timer; the last session's duration is kept
//! across restarts in a small preferences file and across screen re-creation
//! in a transient snapshot.

pub mod api;
pub mod config;
pub mod controller;
pub mod format;
pub mod host;
pub mod persistence;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use controller::{LifecycleError, LifecyclePhase, TimerController};
pub use host::{ActivityHost, HostHandle};
pub use state::TimerState;
pub use utils::signals::shutdown_signal;
