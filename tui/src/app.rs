use std::{io, str::FromStr, sync::mpsc, sync::Arc};

use alloy::primitives::Address;
use folio_utils::{
    balances::{BalanceFetcher, ConfigContracts, DeployedContract, RpcBalanceOracle},
    config::Config,
    dashboard::{ComparisonEvent, DashboardEvent},
};
use ratatui::crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Widget},
    DefaultTerminal,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    events::{self, AppEvent},
    pages::{
        dashboard::DashboardPage, footer::Footer, performance::PerformancePage, title::Title,
        Page,
    },
    theme::{Theme, ThemeName},
    threads,
    traits::Component,
};

pub struct SharedState {
    pub theme: Theme,
    pub current_account: Option<Address>,
    /// Contract the dashboard waits for before fetching balances.
    pub contract: Option<DeployedContract>,
}

#[cfg(test)]
impl SharedState {
    pub fn for_tests() -> Self {
        Self {
            theme: Theme::new(ThemeName::Monochrome),
            current_account: None,
            contract: None,
        }
    }
}

pub struct App {
    exit: bool,
    pages: Vec<Page>,
    current: usize,
    shared_state: SharedState,
    error: Option<String>,

    shutdown_signal: CancellationToken,
    input_thread: Option<std::thread::JoinHandle<()>>,
    tick_thread: Option<tokio::task::JoinHandle<()>>,
}

impl App {
    pub fn new(config: &Config) -> crate::Result<Self> {
        let theme_name = ThemeName::from_str(config.get_theme_name())?;

        let fetcher = BalanceFetcher::new(
            Arc::new(RpcBalanceOracle::new(config.rpc_url.clone())),
            Arc::new(ConfigContracts::new(config.contracts.clone())),
            config.contract_name.clone(),
        );
        let contract = fetcher.contract();

        Ok(Self {
            exit: false,
            pages: vec![
                Page::Dashboard(DashboardPage::new(
                    fetcher,
                    config.default_refresh_interval,
                )),
                Page::Performance(PerformancePage::default()),
            ],
            current: 0,
            shared_state: SharedState {
                theme: Theme::new(theme_name),
                current_account: config.current_account,
                contract,
            },
            error: None,

            shutdown_signal: CancellationToken::new(),
            input_thread: None,
            tick_thread: None,
        })
    }

    pub async fn run(&mut self) -> crate::Result<()> {
        let (event_tr, event_rc) = mpsc::channel::<AppEvent>();
        let mut terminal = ratatui::init();

        self.init_threads(&event_tr);
        info!(
            account = ?self.shared_state.current_account,
            contract = ?self.shared_state.contract,
            "dashboard started"
        );

        let result = self.event_loop(&mut terminal, &event_tr, &event_rc);

        // signal all the threads to exit
        self.shutdown_signal.cancel();
        self.exit_threads().await;

        ratatui::restore();
        info!("dashboard stopped");

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_tr: &mpsc::Sender<AppEvent>,
        event_rc: &mpsc::Receiver<AppEvent>,
    ) -> crate::Result<()> {
        event_tr.send(AppEvent::Dashboard(DashboardEvent::Load))?;

        while !self.exit {
            self.draw(terminal).map_err(crate::Error::Draw)?;

            let event = event_rc.recv()?;
            self.handle_event(event, event_tr).unwrap_or_else(|e| {
                error!("{e}");
                self.error = Some(e.to_string());
            });
        }

        // final render before exiting
        self.draw(terminal).map_err(crate::Error::Draw)?;

        Ok(())
    }

    fn draw(&self, terminal: &mut DefaultTerminal) -> io::Result<Rect> {
        let completed_frame = terminal.draw(|frame| {
            frame.render_widget(self, frame.area());
        })?;
        Ok(completed_frame.area)
    }

    fn init_threads(&mut self, tr: &mpsc::Sender<AppEvent>) {
        let tr_input = tr.clone();
        let shutdown_signal = self.shutdown_signal.clone();
        self.input_thread = Some(std::thread::spawn(move || {
            events::input::watch_input_events(tr_input, shutdown_signal);
        }));

        let tr_tick = tr.clone();
        let shutdown_signal = self.shutdown_signal.clone();
        self.tick_thread = Some(tokio::spawn(async move {
            threads::tick::start_ticking(tr_tick, shutdown_signal).await
        }));
    }

    async fn exit_threads(&mut self) {
        if let Some(thread) = self.input_thread.take() {
            if thread.join().is_err() {
                error!("input thread panicked");
            }
        }

        if let Some(thread) = self.tick_thread.take() {
            if let Err(e) = thread.await {
                error!("tick thread failed: {e}");
            }
        }
    }

    fn handle_event(&mut self, event: AppEvent, tr: &mpsc::Sender<AppEvent>) -> crate::Result<()> {
        if event.is_input() {
            // any key dismisses the error line
            self.error = None;

            if event.is_quit() {
                self.exit = true;
            } else if event.is_key_pressed(KeyCode::Tab) {
                self.current = (self.current + 1) % self.pages.len();
                debug!(page = self.pages[self.current].name(), "switched tab");
            } else if let Some(page) = self.pages.get_mut(self.current) {
                page.handle_event(&event, tr, &self.shutdown_signal, &self.shared_state)?;
            }
            return Ok(());
        }

        match &event {
            AppEvent::Error(error) => {
                self.error = Some(error.clone());
                return Ok(());
            }
            AppEvent::Dashboard(DashboardEvent::FetchFailed { error, .. })
            | AppEvent::Dashboard(DashboardEvent::Comparison(ComparisonEvent::Failed(error)))
            | AppEvent::Performance(ComparisonEvent::Failed(error)) => {
                self.error = Some(error.clone());
            }
            _ => {}
        }

        // Background results go to every page so the dashboard keeps its
        // countdown and fetches while another tab is shown.
        for page in &mut self.pages {
            page.handle_event(&event, tr, &self.shutdown_signal, &self.shared_state)?;
        }

        Ok(())
    }

    fn get_areas(&self, area: Rect) -> [Rect; 3] {
        let [title_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);
        [title_area, body_area, footer_area]
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [title_area, body_area, footer_area] = self.get_areas(area);

        Title {
            pages: &self.pages,
            current: self.current,
        }
        .render(title_area, buf, &self.shared_state);

        if let Some(page) = self.current_page() {
            page.render_component_with_block(
                body_area,
                buf,
                Block::bordered().border_type(self.shared_state.theme.border_type),
                &self.shared_state,
            );

            Footer {
                hints: page.key_hints(),
                error: self.error.as_deref(),
            }
            .render(footer_area, buf, &self.shared_state);
        }
    }
}
