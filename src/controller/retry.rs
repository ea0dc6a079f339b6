use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ui::catalog::CatalogIntent;

/// Handle to the recurring retry timer.
///
/// Sends [`CatalogIntent::RetryTick`] every `period`, first one `period`
/// after start. The task is aborted when the handle is canceled or dropped,
/// so no tick can outlive its owner.
pub struct RetryTimer {
    task: JoinHandle<()>,
}

impl RetryTimer {
    pub fn start(period: Duration, events: UnboundedSender<CatalogIntent>) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if events.send(CatalogIntent::RetryTick).is_err() {
                    break;
                }
            }
        });
        Self { task }
    }

    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for RetryTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
