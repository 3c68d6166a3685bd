//! Dashboard state and its transitions.
//!
//! All mutation goes through [`DashboardState::reduce`]. Work that has to
//! happen off the event loop (fetching balances, running a comparison) is
//! returned as an [`Effect`] for the caller to spawn; its result comes back
//! as another event.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::{
    balances::FetchMode,
    comparison::ComparisonResult,
    metrics::ComparisonHistory,
    scheduler::{RefreshInterval, RefreshSchedule, RefreshTrigger},
    tokens::TokenRecord,
};

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    /// Initial fetch once a wallet is available.
    Load,
    /// One second elapsed.
    Tick,
    ManualRefresh,
    EnableAutoRefresh(RefreshInterval),
    DisableAutoRefresh,
    SetInterval(RefreshInterval),
    ToggleFetchMode,
    FetchSucceeded {
        generation: u64,
        tokens: Vec<TokenRecord>,
        at: DateTime<Local>,
    },
    FetchSkipped {
        generation: u64,
    },
    FetchFailed {
        generation: u64,
        error: String,
    },
    Comparison(ComparisonEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ComparisonEvent {
    Start,
    Finished(ComparisonResult),
    Failed(String),
    ClearHistory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchBalances {
        generation: u64,
        mode: FetchMode,
        trigger: RefreshTrigger,
    },
    RunComparison,
}

/// Latest result, bounded history and a running flag for one comparison panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonSession {
    latest: Option<ComparisonResult>,
    history: ComparisonHistory,
    running: bool,
}

impl ComparisonSession {
    pub fn reduce(&mut self, event: ComparisonEvent) -> Option<Effect> {
        match event {
            ComparisonEvent::Start => {
                if self.running {
                    return None;
                }
                self.running = true;
                Some(Effect::RunComparison)
            }
            ComparisonEvent::Finished(result) => {
                self.running = false;
                self.latest = Some(result);
                self.history.push(result);
                None
            }
            ComparisonEvent::Failed(error) => {
                warn!("performance comparison failed: {error}");
                self.running = false;
                None
            }
            ComparisonEvent::ClearHistory => {
                self.history.clear();
                self.latest = None;
                None
            }
        }
    }

    pub fn latest(&self) -> Option<&ComparisonResult> {
        self.latest.as_ref()
    }

    pub fn history(&self) -> &ComparisonHistory {
        &self.history
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    tokens: Vec<TokenRecord>,
    loading: bool,
    schedule: RefreshSchedule,
    fetch_mode: FetchMode,
    comparison: ComparisonSession,
    generation: u64,
}

impl DashboardState {
    pub fn new(interval: RefreshInterval) -> Self {
        Self {
            schedule: RefreshSchedule::new(interval),
            ..Default::default()
        }
    }

    pub fn reduce(&mut self, event: DashboardEvent) -> Option<Effect> {
        match event {
            DashboardEvent::Load => Some(self.begin_fetch(RefreshTrigger::Manual)),
            DashboardEvent::Tick => self
                .schedule
                .tick()
                .map(|trigger| self.begin_fetch(trigger)),
            DashboardEvent::ManualRefresh => {
                let trigger = self.schedule.trigger_manual_refresh();
                Some(self.begin_fetch(trigger))
            }
            DashboardEvent::EnableAutoRefresh(interval) => {
                self.schedule.enable(interval);
                None
            }
            DashboardEvent::DisableAutoRefresh => {
                self.schedule.disable();
                None
            }
            DashboardEvent::SetInterval(interval) => {
                self.schedule.set_interval(interval);
                None
            }
            DashboardEvent::ToggleFetchMode => {
                self.fetch_mode = self.fetch_mode.toggled();
                None
            }
            DashboardEvent::FetchSucceeded {
                generation,
                tokens,
                at,
            } => {
                if self.is_current(generation) {
                    self.tokens = tokens;
                    self.schedule.mark_refreshed(at);
                    self.loading = false;
                } else {
                    info!(generation, current = self.generation, "dropping stale fetch result");
                }
                None
            }
            DashboardEvent::FetchSkipped { generation } => {
                if self.is_current(generation) {
                    self.loading = false;
                }
                None
            }
            DashboardEvent::FetchFailed { generation, error } => {
                warn!(generation, "error fetching balances: {error}");
                if self.is_current(generation) {
                    self.loading = false;
                }
                None
            }
            DashboardEvent::Comparison(event) => self.comparison.reduce(event),
        }
    }

    fn begin_fetch(&mut self, trigger: RefreshTrigger) -> Effect {
        self.generation += 1;
        self.loading = true;
        Effect::FetchBalances {
            generation: self.generation,
            mode: self.fetch_mode,
            trigger,
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn tokens(&self) -> &[TokenRecord] {
        &self.tokens
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn schedule(&self) -> &RefreshSchedule {
        &self.schedule
    }

    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    pub fn comparison(&self) -> &ComparisonSession {
        &self.comparison
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use crate::tokens::TOKEN_CATALOG;

    use super::*;

    fn tokens(balance: &str) -> Vec<TokenRecord> {
        TOKEN_CATALOG
            .iter()
            .map(|spec| TokenRecord::new(spec, balance.to_string()).unwrap())
            .collect()
    }

    fn fetched(effect: Option<Effect>) -> u64 {
        match effect {
            Some(Effect::FetchBalances { generation, .. }) => generation,
            other => panic!("expected a fetch effect, got {other:?}"),
        }
    }

    #[test]
    fn load_starts_a_fetch() {
        let mut state = DashboardState::default();
        let generation = fetched(state.reduce(DashboardEvent::Load));
        assert_eq!(generation, 1);
        assert!(state.is_loading());
    }

    #[test]
    fn success_replaces_tokens_and_stamps_time() {
        let mut state = DashboardState::default();
        let generation = fetched(state.reduce(DashboardEvent::Load));
        let at = Local::now();

        state.reduce(DashboardEvent::FetchSucceeded {
            generation,
            tokens: tokens("1"),
            at,
        });

        assert_eq!(state.tokens().len(), 4);
        assert!(!state.is_loading());
        assert_eq!(state.schedule().last_refresh(), Some(&at));
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut state = DashboardState::default();
        let first = fetched(state.reduce(DashboardEvent::Load));
        let second = fetched(state.reduce(DashboardEvent::ManualRefresh));
        assert!(second > first);

        state.reduce(DashboardEvent::FetchSucceeded {
            generation: second,
            tokens: tokens("2"),
            at: Local::now(),
        });
        state.reduce(DashboardEvent::FetchSucceeded {
            generation: first,
            tokens: tokens("1"),
            at: Local::now(),
        });

        assert_eq!(state.tokens()[0].balance, "2");
    }

    #[test]
    fn skipped_fetch_leaves_state_untouched() {
        let mut state = DashboardState::default();
        let generation = fetched(state.reduce(DashboardEvent::Load));

        state.reduce(DashboardEvent::FetchSkipped { generation });

        assert!(state.tokens().is_empty());
        assert!(state.schedule().last_refresh().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn failure_keeps_previous_tokens() {
        let mut state = DashboardState::default();
        let generation = fetched(state.reduce(DashboardEvent::Load));
        state.reduce(DashboardEvent::FetchSucceeded {
            generation,
            tokens: tokens("3"),
            at: Local::now(),
        });
        let stamped = state.schedule().last_refresh().cloned();

        let generation = fetched(state.reduce(DashboardEvent::ManualRefresh));
        state.reduce(DashboardEvent::FetchFailed {
            generation,
            error: "rpc down".to_string(),
        });

        assert_eq!(state.tokens()[0].balance, "3");
        assert_eq!(state.schedule().last_refresh().cloned(), stamped);
        assert!(!state.is_loading());
    }

    #[test]
    fn ticks_fetch_only_when_countdown_expires() {
        let mut state = DashboardState::default();
        state.reduce(DashboardEvent::EnableAutoRefresh(RefreshInterval::FiveSeconds));

        for _ in 0..4 {
            assert_eq!(state.reduce(DashboardEvent::Tick), None);
        }
        match state.reduce(DashboardEvent::Tick) {
            Some(Effect::FetchBalances { trigger, .. }) => {
                assert_eq!(trigger, RefreshTrigger::Auto)
            }
            other => panic!("expected auto fetch, got {other:?}"),
        }
    }

    #[test]
    fn ticks_do_nothing_while_disabled() {
        let mut state = DashboardState::default();
        for _ in 0..100 {
            assert_eq!(state.reduce(DashboardEvent::Tick), None);
        }
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn fetch_mode_is_passed_to_effect() {
        let mut state = DashboardState::default();
        state.reduce(DashboardEvent::ToggleFetchMode);
        match state.reduce(DashboardEvent::ManualRefresh) {
            Some(Effect::FetchBalances { mode, .. }) => assert_eq!(mode, FetchMode::Individual),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn comparison_session_flow() {
        let mut session = ComparisonSession::default();
        assert_eq!(session.reduce(ComparisonEvent::Start), Some(Effect::RunComparison));
        assert_eq!(session.reduce(ComparisonEvent::Start), None);
        assert!(session.is_running());

        let result = ComparisonResult::from_timings(100.0, 500.0, 1, 4);
        session.reduce(ComparisonEvent::Finished(result));
        assert!(!session.is_running());
        assert_eq!(session.latest(), Some(&result));
        assert_eq!(session.history().len(), 1);

        session.reduce(ComparisonEvent::Start);
        session.reduce(ComparisonEvent::Failed("boom".to_string()));
        assert!(!session.is_running());
        assert_eq!(session.history().len(), 1);

        session.reduce(ComparisonEvent::ClearHistory);
        assert!(session.history().is_empty());
        assert!(session.latest().is_none());
    }
}
