//! Background tasks module
//!
//! Tasks that run alongside the screen and feed the host queue.

pub mod ticker;

// Re-export main functions
pub use ticker::{spawn_ticker, TickerHandle};
