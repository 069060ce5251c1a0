//! Cloneable sender side of the host queue

use tokio::sync::{mpsc, oneshot};

use super::messages::{HostCommand, HostError, HostMessage, StatusSnapshot};

#[derive(Debug, Clone)]
pub struct HostHandle {
    tx: mpsc::Sender<HostMessage>,
}

impl HostHandle {
    pub(crate) fn new(tx: mpsc::Sender<HostMessage>) -> Self {
        Self { tx }
    }

    /// Queue a command and wait for the screen state after it ran
    pub async fn send(&self, command: HostCommand) -> Result<StatusSnapshot, HostError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(HostMessage::Command { command, reply })
            .await
            .map_err(|_| HostError::Closed)?;
        rx.await.map_err(|_| HostError::Closed)?
    }

    pub async fn start_pause(&self) -> Result<StatusSnapshot, HostError> {
        self.send(HostCommand::StartPause).await
    }

    pub async fn stop(&self) -> Result<StatusSnapshot, HostError> {
        self.send(HostCommand::Stop).await
    }

    pub async fn status(&self) -> Result<StatusSnapshot, HostError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(HostMessage::Status { reply })
            .await
            .map_err(|_| HostError::Closed)?;
        rx.await.map_err(|_| HostError::Closed)
    }

    /// Close the screen (saving it) and stop the host loop
    pub async fn shutdown(&self) -> Result<StatusSnapshot, HostError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(HostMessage::Shutdown { reply })
            .await
            .map_err(|_| HostError::Closed)?;
        rx.await.map_err(|_| HostError::Closed)
    }
}
