use std::sync::mpsc::Sender;

use alloy::primitives::Address;
use chrono::Local;
use folio_utils::{
    balances::{BalanceFetcher, FetchMode, FetchOutcome},
    dashboard::DashboardEvent,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{error::FmtError, AppEvent};

/// Runs one balance fetch and reports it tagged with `generation`.
pub async fn fetch_balances(
    fetcher: BalanceFetcher,
    owner: Option<Address>,
    generation: u64,
    mode: FetchMode,
    transmitter: Sender<AppEvent>,
    shutdown_signal: CancellationToken,
) {
    tokio::select! {
        result = fetcher.fetch(owner, mode) => {
            let event = match result {
                Ok(FetchOutcome::Fetched(tokens)) => DashboardEvent::FetchSucceeded {
                    generation,
                    tokens,
                    at: Local::now(),
                },
                Ok(FetchOutcome::Skipped(_)) => DashboardEvent::FetchSkipped { generation },
                Err(error) => DashboardEvent::FetchFailed {
                    generation,
                    error: crate::Error::from(error).fmt_err("BalanceFetch"),
                },
            };
            let _ = transmitter.send(AppEvent::Dashboard(event));
        }
        _ = shutdown_signal.cancelled() => {
            debug!(generation, "balance fetch cancelled");
        }
    }
}
