//! Platform host
//!
//! Plays the part of the mobile platform: a single queue delivering lifecycle
//! callbacks, user taps and ticks to the screen one at a time.

pub mod activity_host;
pub mod handle;
pub mod messages;

// Re-export main types
pub use activity_host::ActivityHost;
pub use handle::HostHandle;
pub use messages::{HostCommand, HostError, HostMessage, StatusSnapshot};
