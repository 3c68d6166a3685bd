use std::{sync::mpsc, time::Duration};

use ratatui::crossterm::event::{self, Event};
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::AppEvent;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Forwards key presses until shutdown. Polls with a timeout so the shutdown
/// signal is noticed without waiting for another key.
pub fn watch_input_events(tx: mpsc::Sender<AppEvent>, shutdown_signal: CancellationToken) {
    while !shutdown_signal.is_cancelled() {
        match event::poll(POLL_TIMEOUT) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(e) => {
                error!("polling terminal input failed: {e}");
                break;
            }
        }

        match event::read() {
            Ok(Event::Key(key_event)) => {
                // Main thread may have shut down already, nothing to do then.
                if tx.send(AppEvent::Input(key_event)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                let _ = tx.send(AppEvent::Error(
                    crate::Error::InputReadFailed(e).to_string(),
                ));
                break;
            }
        }
    }
}
