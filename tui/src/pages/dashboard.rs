use std::sync::{mpsc, Arc};

use folio_ratatui_extra::{
    badge::Badge,
    extensions::{RectExt, ThemedWidget},
    skeleton::Skeleton,
    stacked_bar::StackedBar,
    stat_card::StatCard,
    thematize::{Thematize, Tone},
};
use folio_utils::{
    balances::{BalanceFetcher, FetchMode},
    comparison::{ComparisonProvider, RangeRandom},
    dashboard::{ComparisonEvent, DashboardEvent, DashboardState, Effect},
    format::{
        format_balance_str, format_local_time, format_percent, format_price, format_usd,
        shorten_address,
    },
    scheduler::RefreshInterval,
    tokens::{allocation, concentration, largest_holding, total_value, TokenRecord},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Widget},
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{
    app::SharedState, events, pages::comparison_panel::ComparisonPanel, theme::Theme,
    traits::Component, AppEvent,
};

pub const NO_WALLET_MESSAGE: &str = "Please connect your wallet to view your portfolio";

const CONTROLS_HEIGHT: u16 = 4;
const SUMMARY_HEIGHT: u16 = 8;
const TOKEN_CARD_HEIGHT: u16 = 4;
/// Below this width token cards wrap into two rows.
const WIDE_LAYOUT: u16 = 120;

pub struct DashboardPage {
    state: DashboardState,
    fetcher: BalanceFetcher,
    comparison: Arc<dyn ComparisonProvider>,
}

impl DashboardPage {
    pub fn new(fetcher: BalanceFetcher, default_interval: RefreshInterval) -> Self {
        Self {
            state: DashboardState::new(default_interval),
            fetcher,
            comparison: Arc::new(RangeRandom::new()),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Maps a key press to the event it stands for.
    fn key_to_event(&self, event: &AppEvent) -> Option<DashboardEvent> {
        let schedule = self.state.schedule();

        if event.is_char_pressed(Some('r')) {
            // "Refresh Now" is disabled while a fetch is running.
            (!self.state.is_loading()).then_some(DashboardEvent::ManualRefresh)
        } else if event.is_char_pressed(Some('a')) {
            Some(if schedule.is_enabled() {
                DashboardEvent::DisableAutoRefresh
            } else {
                DashboardEvent::EnableAutoRefresh(schedule.interval())
            })
        } else if event.is_char_pressed(Some('i')) {
            Some(DashboardEvent::SetInterval(schedule.interval().next()))
        } else if event.is_char_pressed(Some('b')) {
            Some(DashboardEvent::ToggleFetchMode)
        } else if event.is_char_pressed(Some('c')) {
            Some(DashboardEvent::Comparison(ComparisonEvent::Start))
        } else if event.is_char_pressed(Some('x')) {
            Some(DashboardEvent::Comparison(ComparisonEvent::ClearHistory))
        } else {
            None
        }
    }

    fn dispatch(
        &mut self,
        event: DashboardEvent,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) {
        if let Some(effect) = self.state.reduce(event) {
            self.perform(effect, transmitter, shutdown_signal, shared_state);
        }
    }

    fn perform(
        &self,
        effect: Effect,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) {
        match effect {
            Effect::FetchBalances {
                generation,
                mode,
                trigger,
            } => {
                debug!(generation, ?trigger, %mode, "starting balance fetch");
                tokio::spawn(events::balances::fetch_balances(
                    self.fetcher.clone(),
                    shared_state.current_account,
                    generation,
                    mode,
                    transmitter.clone(),
                    shutdown_signal.clone(),
                ));
            }
            Effect::RunComparison => {
                tokio::spawn(events::comparison::run_comparison(
                    Arc::clone(&self.comparison),
                    |event| AppEvent::Dashboard(DashboardEvent::Comparison(event)),
                    transmitter.clone(),
                    shutdown_signal.clone(),
                ));
            }
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) {
        let theme = &shared_state.theme;
        Line::from("Portfolio Dashboard")
            .style(theme.style().bold())
            .render(area, buf);

        if shared_state.current_account.is_some() {
            let contract = match &shared_state.contract {
                Some(contract) => shorten_address(&contract.address),
                None => "not deployed".to_string(),
            };
            Line::from(format!("Contract: {contract}"))
                .style(theme.style_dim())
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }

    fn render_controls(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::bordered()
            .border_type(theme.border_type())
            .style(theme.block())
            .title("Refresh Controls");
        let mut inner = block.inner(area).margin_h(1);
        block.render(area, buf);

        let schedule = self.state.schedule();
        let mut spans = vec![if self.state.is_loading() {
            Span::styled("Refreshing...", theme.warning())
        } else {
            Span::styled("[r] Refresh Now", theme.style())
        }];
        if schedule.is_enabled() && schedule.seconds_remaining() > 0 {
            spans.push(Span::styled(
                format!("  Next refresh in {}s", schedule.seconds_remaining()),
                theme.style_dim(),
            ));
        }
        if let Some(at) = schedule.last_refresh() {
            spans.push(Span::styled(
                format!("  Last updated: {}", format_local_time(at)),
                theme.style_dim(),
            ));
        }
        Line::from(spans).render(inner.take_top(1), buf);

        let mut badges = vec![if schedule.is_enabled() {
            Badge::new("Auto-refresh ON", Tone::Success)
        } else {
            Badge::new("Auto-refresh OFF", Tone::Dim)
        }];
        if schedule.is_enabled() {
            badges.push(Badge::new(format!("Every {}", schedule.interval()), Tone::Primary));
        }
        badges.push(match self.state.fetch_mode() {
            FetchMode::Batched => Badge::new("Batched", Tone::Success),
            FetchMode::Individual => Badge::new("Individual", Tone::Warning),
        });
        badges.push(if self.state.is_loading() {
            Badge::new("Loading...", Tone::Warning)
        } else {
            Badge::new("Ready", Tone::Success)
        });

        let mut row = inner.take_top(1);
        for badge in badges {
            badge.render(row, buf, theme);
            row = row.margin_left(badge.width() + 1);
        }
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::bordered()
            .border_type(theme.border_type())
            .style(theme.block())
            .title("Portfolio Overview");
        let mut inner = block.inner(area).margin_h(1);
        block.render(area, buf);

        let tokens = self.state.tokens();
        let total = total_value(tokens);
        let loading = self.state.is_loading();

        let cards_area = inner.take_top(3);
        let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(cards_area);

        let total_card = StatCard::new("Total Portfolio Value", if loading {
            String::new()
        } else {
            format_usd(total)
        })
        .tone(Tone::Primary);
        total_card.render(areas[0], buf, theme);
        if loading {
            Skeleton::new(1).render(areas[0].block_inner().margin_h(1), buf, theme);
        }

        StatCard::new("Assets", tokens.len().to_string()).render(areas[1], buf, theme);

        if loading {
            return;
        }

        if let Some(largest) = largest_holding(tokens) {
            StatCard::new("Largest Holding", largest.symbol.as_str()).render(areas[2], buf, theme);
        }
        if let Some(percent) = concentration(tokens) {
            StatCard::new("Concentration", format_percent(percent, 0)).render(areas[3], buf, theme);
        }

        if tokens.is_empty() {
            return;
        }

        Line::from("Asset Allocation")
            .style(theme.style().bold())
            .render(inner.take_top(1), buf);

        let slices = allocation(tokens);
        StackedBar::new(
            slices
                .iter()
                .map(|slice| (slice.percent, theme.token_color(slice.color)))
                .collect(),
        )
        .render(inner.take_top(1), buf, theme);

        let mut legend = Vec::with_capacity(slices.len() * 3);
        for slice in &slices {
            if !legend.is_empty() {
                legend.push(Span::raw("  "));
            }
            legend.push(Span::styled("● ", theme.style().fg(theme.token_color(slice.color))));
            legend.push(Span::styled(
                format!("{} ({})", slice.symbol, format_percent(slice.percent, 1)),
                theme.style(),
            ));
        }
        Line::from(legend).render(inner.take_top(1), buf);
    }

    fn token_rows(&self, width: u16) -> u16 {
        let count = self.state.tokens().len() as u16;
        if count == 0 {
            1
        } else if width >= WIDE_LAYOUT {
            1
        } else {
            count.div_ceil(2)
        }
    }

    fn render_tokens(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let tokens = self.state.tokens();
        if tokens.is_empty() {
            let text = if self.state.is_loading() {
                "Loading balances..."
            } else {
                "No balances yet. Press r to refresh."
            };
            Line::from(text).style(theme.style_dim()).render(area, buf);
            return;
        }

        let per_row = if area.width >= WIDE_LAYOUT {
            tokens.len()
        } else {
            2
        };
        let mut area = area;
        for chunk in tokens.chunks(per_row) {
            let row = area.take_top(TOKEN_CARD_HEIGHT);
            let areas =
                Layout::horizontal(vec![Constraint::Ratio(1, per_row as u32); per_row]).split(row);
            for (token, card_area) in chunk.iter().zip(areas.iter()) {
                self.render_token(token, *card_area, buf, theme);
            }
        }
    }

    fn render_token(&self, token: &TokenRecord, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = format!("{} {} @ {}", token.symbol, token.name, format_price(token.price));
        if self.state.is_loading() {
            let block = Block::bordered()
                .border_type(theme.border_type())
                .style(theme.block())
                .title(title);
            let inner = block.inner(area).margin_h(1);
            block.render(area, buf);
            Skeleton::new(2).render(inner, buf, theme);
            return;
        }

        StatCard::new(title, format_balance_str(&token.balance, &token.symbol))
            .description(format_usd(token.usd_value))
            .render(area, buf, theme);
    }
}

impl Component for DashboardPage {
    fn handle_event(
        &mut self,
        event: &AppEvent,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<()> {
        let dashboard_event = match event {
            AppEvent::Input(_) => self.key_to_event(event),
            AppEvent::Tick => Some(DashboardEvent::Tick),
            AppEvent::Dashboard(event) => Some(event.clone()),
            _ => None,
        };

        if let Some(dashboard_event) = dashboard_event {
            self.dispatch(dashboard_event, transmitter, shutdown_signal, shared_state);
        }

        Ok(())
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        let theme = &shared_state.theme;
        let mut body = area;

        self.render_header(body.take_top(1), buf, shared_state);
        body.take_top(1);

        if shared_state.current_account.is_none() {
            Line::from(NO_WALLET_MESSAGE)
                .style(theme.style_dim())
                .render(body, buf);
            return area;
        }

        self.render_controls(body.take_top(CONTROLS_HEIGHT), buf, theme);
        self.render_summary(body.take_top(SUMMARY_HEIGHT), buf, theme);

        let panel = ComparisonPanel {
            title: "Performance Comparison",
            subtitle: "Compare batched vs individual RPC calls",
            session: self.state.comparison(),
        };
        let panel_area = body.take_top(panel.height());
        panel.render(panel_area.margin_h(1), buf, theme);
        body.take_top(1);

        let token_height = self.token_rows(body.width) * TOKEN_CARD_HEIGHT;
        self.render_tokens(body.take_top(token_height), buf, theme);

        area
    }
}
