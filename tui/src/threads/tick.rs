use std::{sync::mpsc::Sender, time::Duration};

use tokio_util::sync::CancellationToken;

use crate::AppEvent;

const TICK: Duration = Duration::from_secs(1);

pub async fn start_ticking(transmitter: Sender<AppEvent>, shutdown_signal: CancellationToken) {
    let mut interval = tokio::time::interval(TICK);
    // The first tick completes immediately.
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if transmitter.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
            _ = shutdown_signal.cancelled() => break
        }
    }
}
