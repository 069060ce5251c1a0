//! Messages accepted by the host queue

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;

use crate::{
    controller::{LifecycleError, LifecyclePhase},
    state::{ButtonState, TimerState},
    ui::ScreenModel,
};

/// User input or a platform-ordered lifecycle sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostCommand {
    /// Open a fresh screen: create, start, restore, resume
    Launch,
    StartPause,
    Stop,
    /// Another window takes focus: pause
    Cover,
    /// Focus comes back: resume
    Uncover,
    /// pause, stop
    Background,
    /// start, resume
    Foreground,
    /// Re-create the screen through a transient snapshot
    Rotate,
    /// Close the screen for good
    Finish,
}

impl HostCommand {
    /// Parse a lifecycle event name as used in `/lifecycle/{event}`
    pub fn from_lifecycle_event(event: &str) -> Option<Self> {
        match event {
            "launch" => Some(HostCommand::Launch),
            "cover" => Some(HostCommand::Cover),
            "uncover" => Some(HostCommand::Uncover),
            "background" => Some(HostCommand::Background),
            "foreground" => Some(HostCommand::Foreground),
            "rotate" => Some(HostCommand::Rotate),
            "finish" => Some(HostCommand::Finish),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HostCommand::Launch => "launch",
            HostCommand::StartPause => "start-pause",
            HostCommand::Stop => "stop",
            HostCommand::Cover => "cover",
            HostCommand::Uncover => "uncover",
            HostCommand::Background => "background",
            HostCommand::Foreground => "foreground",
            HostCommand::Rotate => "rotate",
            HostCommand::Finish => "finish",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error("a screen is already open")]
    AlreadyOpen,
    #[error("no screen is open")]
    NoScreen,
    #[error("host is not running")]
    Closed,
}

pub type CommandReply = oneshot::Sender<Result<StatusSnapshot, HostError>>;

#[derive(Debug)]
pub enum HostMessage {
    Command { command: HostCommand, reply: CommandReply },
    Tick { instance: u64 },
    Status { reply: oneshot::Sender<StatusSnapshot> },
    Shutdown { reply: oneshot::Sender<StatusSnapshot> },
}

/// Everything the host knows about the current screen
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub instance: Option<u64>,
    pub phase: Option<LifecyclePhase>,
    pub visible: bool,
    pub timer: Option<TimerState>,
    pub button: ButtonState,
    pub screen: Option<ScreenModel>,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_event_names_parse() {
        for command in [
            HostCommand::Launch,
            HostCommand::Cover,
            HostCommand::Uncover,
            HostCommand::Background,
            HostCommand::Foreground,
            HostCommand::Rotate,
            HostCommand::Finish,
        ] {
            assert_eq!(HostCommand::from_lifecycle_event(command.name()), Some(command));
        }
        assert_eq!(HostCommand::from_lifecycle_event("stop"), None);
        assert_eq!(HostCommand::from_lifecycle_event("explode"), None);
    }
}
