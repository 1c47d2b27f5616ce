use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::panel::Panel;

/// Handle to the background polling task. The task runs until `stop` is
/// called or the runtime shuts down.
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub async fn stop(self) {
        let task = self.task;
        task.abort();
        match task.await {
            Ok(()) => {}
            Err(e) if e.is_cancelled() => debug!("Polling stopped"),
            Err(e) => error!("Polling task failed: {}", e),
        }
    }
}

/// Refresh the panel now, then once per `period`.
///
/// Cycles never overlap: a cycle that outlasts the period delays the next
/// one instead of piling up.
pub fn spawn(panel: Arc<Panel>, period: Duration) -> PollerHandle {
    info!("Polling every {} ms", period.as_millis());

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycle: u64 = 0;

        loop {
            interval.tick().await; // Wait for the next tick
            cycle += 1;
            debug!("Polling cycle #{}", cycle);
            panel.refresh().await;
        }
    });

    PollerHandle { task }
}
