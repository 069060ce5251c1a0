//! Host event loop

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{
    handle::HostHandle,
    messages::{HostCommand, HostError, HostMessage, StatusSnapshot},
};
use crate::{
    controller::{LifecyclePhase, TimerController},
    format::format_elapsed,
    persistence::PreferenceStore,
    state::TransientSnapshot,
    tasks::{spawn_ticker, TickerHandle},
    ui::ScreenModel,
};

/// One live screen and the ticker feeding it
struct Activity<P> {
    instance: u64,
    controller: TimerController<P, ScreenModel>,
    _ticker: TickerHandle,
}

/// Single consumer of the host queue. Owns the current screen, so every
/// callback runs to completion before the next one starts.
pub struct ActivityHost<P> {
    store: P,
    tick_period: Duration,
    tx: mpsc::Sender<HostMessage>,
    rx: mpsc::Receiver<HostMessage>,
    activity: Option<Activity<P>>,
    next_instance: u64,
    start_time: Instant,
    last_action: Option<String>,
    last_action_time: Option<DateTime<Utc>>,
}

impl<P> ActivityHost<P>
where
    P: PreferenceStore + Clone + Send + 'static,
{
    pub fn new(store: P, tick_period: Duration) -> (Self, HostHandle) {
        let (tx, rx) = mpsc::channel(256);
        let handle = HostHandle::new(tx.clone());
        let host = Self {
            store,
            tick_period,
            tx,
            rx,
            activity: None,
            next_instance: 1,
            start_time: Instant::now(),
            last_action: None,
            last_action_time: None,
        };
        (host, handle)
    }

    /// Process messages until a shutdown request
    pub async fn run(mut self) {
        info!("Host started, tick period {:?}", self.tick_period);

        while let Some(msg) = self.rx.recv().await {
            if !self.handle_message(msg) {
                break;
            }
        }

        info!("Host stopped");
    }

    /// Handle one queued message. Returns false once the host should stop.
    fn handle_message(&mut self, msg: HostMessage) -> bool {
        match msg {
            HostMessage::Command { command, reply } => {
                let result = self.apply(command).map(|_| self.status());
                if let Err(e) = &result {
                    warn!("{} rejected: {}", command.name(), e);
                }
                let _ = reply.send(result);
                true
            }
            HostMessage::Tick { instance } => {
                self.tick(instance);
                true
            }
            HostMessage::Status { reply } => {
                let _ = reply.send(self.status());
                true
            }
            HostMessage::Shutdown { reply } => {
                info!("Shutdown requested");
                if self.activity.is_some() {
                    if let Err(e) = self.apply(HostCommand::Finish) {
                        warn!("Failed to close screen on shutdown: {}", e);
                    }
                }
                let _ = reply.send(self.status());
                false
            }
        }
    }

    fn apply(&mut self, command: HostCommand) -> Result<(), HostError> {
        debug!("Applying {}", command.name());
        match command {
            HostCommand::Launch => {
                if self.activity.is_some() {
                    return Err(HostError::AlreadyOpen);
                }
                self.open_activity(None)?;
            }
            HostCommand::StartPause => self.controller()?.start_pause_tapped()?,
            HostCommand::Stop => self.controller()?.stop_tapped()?,
            HostCommand::Cover => self.controller()?.on_pause()?,
            HostCommand::Uncover => self.controller()?.on_resume()?,
            HostCommand::Background => {
                let controller = self.controller()?;
                if controller.phase() == LifecyclePhase::Resumed {
                    controller.on_pause()?;
                }
                controller.on_stop()?;
            }
            HostCommand::Foreground => {
                let controller = self.controller()?;
                controller.on_start()?;
                controller.on_resume()?;
            }
            HostCommand::Rotate => {
                let controller = self.controller()?;
                if controller.phase() == LifecyclePhase::Resumed {
                    controller.on_pause()?;
                }
                let snapshot = controller.on_save_instance_state()?;
                controller.on_stop()?;
                controller.on_destroy(false)?;
                self.close_activity();
                self.open_activity(Some(snapshot))?;
            }
            HostCommand::Finish => {
                let controller = self.controller()?;
                if controller.phase() == LifecyclePhase::Resumed {
                    controller.on_pause()?;
                }
                if controller.phase().is_visible() {
                    controller.on_stop()?;
                }
                controller.on_destroy(true)?;
                self.close_activity();
            }
        }

        self.last_action = Some(command.name().to_string());
        self.last_action_time = Some(Utc::now());
        Ok(())
    }

    /// Create a screen, start its ticker and bring it to the foreground
    fn open_activity(&mut self, snapshot: Option<TransientSnapshot>) -> Result<(), HostError> {
        let instance = self.next_instance;
        self.next_instance += 1;

        let mut controller = TimerController::new(self.store.clone(), ScreenModel::new());
        controller.on_create()?;
        let ticker = spawn_ticker(self.tx.clone(), instance, self.tick_period);
        controller.on_start()?;
        controller.on_restore_instance_state(snapshot)?;
        controller.on_resume()?;

        info!("Screen #{} open", instance);
        self.activity = Some(Activity {
            instance,
            controller,
            _ticker: ticker,
        });
        Ok(())
    }

    /// Drop the current screen; its ticker is cancelled with it
    fn close_activity(&mut self) {
        if let Some(activity) = self.activity.take() {
            info!("Screen #{} closed", activity.instance);
        }
    }

    fn controller(&mut self) -> Result<&mut TimerController<P, ScreenModel>, HostError> {
        self.activity
            .as_mut()
            .map(|activity| &mut activity.controller)
            .ok_or(HostError::NoScreen)
    }

    fn tick(&mut self, instance: u64) {
        match self.activity.as_mut() {
            Some(activity) if activity.instance == instance => {
                if let Err(e) = activity.controller.tick() {
                    debug!("Tick for screen #{} ignored: {}", instance, e);
                }
            }
            _ => debug!("Dropping tick for closed screen #{}", instance),
        }
    }

    fn status(&self) -> StatusSnapshot {
        let activity = self.activity.as_ref();
        let phase = activity.map(|a| a.controller.phase());
        StatusSnapshot {
            instance: activity.map(|a| a.instance),
            phase,
            visible: phase.is_some_and(LifecyclePhase::is_visible),
            timer: activity.map(|a| a.controller.state()),
            button: activity
                .map(|a| a.controller.button_state())
                .unwrap_or_default(),
            screen: activity.map(|a| a.controller.screen().clone()),
            uptime: self.uptime(),
            last_action: self.last_action.clone(),
            last_action_time: self.last_action_time,
        }
    }

    /// Host uptime as `H:MM:SS`
    fn uptime(&self) -> String {
        format_elapsed(self.start_time.elapsed().as_secs())
    }
}
