//! Background reply scheduler.

use chatbot_core::{PendingReply, ReplyScheduler};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::event::{BackendCommand, UiEvent};

/// Run the reply scheduler loop.
///
/// This function runs in a separate thread with its own tokio runtime. Each
/// `ScheduleReply` gets an independent timer; when it fires the reply is
/// handed back to the UI thread via `ui_tx`. Timers still running when the
/// loop exits are dropped along with the runtime.
pub async fn run_backend(ui_tx: mpsc::Sender<UiEvent>, mut cmd_rx: mpsc::Receiver<BackendCommand>) {
    info!("Reply scheduler started");

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            BackendCommand::ScheduleReply(pending) => {
                debug!(id = %pending.id, delay_ms = pending.delay.as_millis() as u64, "Starting reply timer");
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(pending.delay).await;
                    let id = pending.id.clone();
                    if ui_tx.send(UiEvent::ReplyDue(pending)).await.is_err() {
                        debug!(id = %id, "UI closed, dropping reply");
                    }
                });
            }
            BackendCommand::Quit => {
                info!("Received quit command, shutting down scheduler");
                break;
            }
        }
    }

    info!("Backend shutdown complete");
}

/// [`ReplyScheduler`] that forwards replies to [`run_backend`].
///
/// Must be used from outside the tokio runtime (the UI thread), since it
/// blocks while the command channel is full.
pub struct ChannelScheduler {
    cmd_tx: mpsc::Sender<BackendCommand>,
}

impl ChannelScheduler {
    pub fn new(cmd_tx: mpsc::Sender<BackendCommand>) -> Self {
        Self { cmd_tx }
    }
}

impl ReplyScheduler for ChannelScheduler {
    fn schedule(&self, pending: PendingReply) {
        let id = pending.id.clone();
        if self
            .cmd_tx
            .blocking_send(BackendCommand::ScheduleReply(pending))
            .is_err()
        {
            warn!(id = %id, "Scheduler stopped, reply will not be delivered");
        }
    }
}
