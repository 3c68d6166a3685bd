use std::sync::{mpsc::Sender, Arc};

use folio_utils::{comparison::ComparisonProvider, dashboard::ComparisonEvent};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{error::FmtError, AppEvent};

/// Runs one comparison; `wrap` routes the outcome to the page that asked.
pub async fn run_comparison(
    provider: Arc<dyn ComparisonProvider>,
    wrap: fn(ComparisonEvent) -> AppEvent,
    transmitter: Sender<AppEvent>,
    shutdown_signal: CancellationToken,
) {
    tokio::select! {
        result = provider.run_comparison() => {
            let event = match result {
                Ok(result) => ComparisonEvent::Finished(result),
                Err(error) => ComparisonEvent::Failed(
                    crate::Error::from(error).fmt_err("Comparison"),
                ),
            };
            let _ = transmitter.send(wrap(event));
        }
        _ = shutdown_signal.cancelled() => {
            debug!(strategy = %provider.strategy(), "comparison cancelled");
        }
    }
}
