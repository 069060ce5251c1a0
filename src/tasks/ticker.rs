//! Repeating tick task

use std::time::Duration;

use tokio::{
    sync::mpsc::Sender,
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::host::HostMessage;

/// Handle to a running ticker. Cancelling or dropping it stops the ticks.
#[derive(Debug)]
pub struct TickerHandle {
    instance: u64,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Screen instance the ticks are addressed to
    pub fn instance(&self) -> u64 {
        self.instance
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a ticker that posts a tick for `instance` right away and then once
/// per `period`.
pub fn spawn_ticker(tx: Sender<HostMessage>, instance: u64, period: Duration) -> TickerHandle {
    let task = tokio::spawn(run_ticker(tx, instance, period));
    TickerHandle { instance, task }
}

async fn run_ticker(tx: Sender<HostMessage>, instance: u64, period: Duration) {
    info!("Starting ticker for screen #{} every {:?}", instance, period);

    let mut interval = interval(period);
    // Fixed delay between ticks; a late tick never triggers a burst
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        if tx.send(HostMessage::Tick { instance }).await.is_err() {
            debug!("Ticker for screen #{} stopping (queue closed)", instance);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{sync::mpsc, time::Instant};

    #[tokio::test(start_paused = true)]
    async fn ticks_immediately_then_every_period() {
        let (tx, mut rx) = mpsc::channel(16);
        let start = Instant::now();
        let _handle = spawn_ticker(tx, 7, Duration::from_secs(1));

        for expected in 0..3u64 {
            match rx.recv().await {
                Some(HostMessage::Tick { instance }) => assert_eq!(instance, 7),
                other => panic!("unexpected message: {:?}", other),
            }
            assert_eq!(start.elapsed().as_secs(), expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_ends_the_tick_stream() {
        let (tx, mut rx) = mpsc::channel(16);
        let handle = spawn_ticker(tx, 1, Duration::from_secs(1));

        assert!(rx.recv().await.is_some());
        handle.cancel();

        let mut stray = 0;
        while rx.recv().await.is_some() {
            stray += 1;
        }
        assert!(stray <= 1, "ticker kept running after cancel");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let (tx, mut rx) = mpsc::channel(16);
        let handle = spawn_ticker(tx, 1, Duration::from_secs(1));
        assert!(rx.recv().await.is_some());
        drop(handle);

        let mut stray = 0;
        while rx.recv().await.is_some() {
            stray += 1;
        }
        assert!(stray <= 1);
    }
}
