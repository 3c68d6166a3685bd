use folio_ratatui_extra::{
    extensions::{RectExt, ThemedWidget},
    progress_bar::ProgressBar,
    stat_card::StatCard,
    thematize::{Thematize, Tone},
    zebra_table::ZebraTable,
};
use folio_utils::{
    comparison::ComparisonResult,
    dashboard::ComparisonSession,
    format::{format_duration_ms, format_percent},
    metrics::AverageMetrics,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Widget,
};
use tracing::error;

use crate::theme::Theme;

const CARD_HEIGHT: u16 = 4;
const AVERAGE_CARD_HEIGHT: u16 = 3;
const BARS_HEIGHT: u16 = 5;

/// Run/clear actions, latest result, running average and history of one
/// comparison session.
pub struct ComparisonPanel<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub session: &'a ComparisonSession,
}

impl ComparisonPanel<'_> {
    pub fn height(&self) -> u16 {
        let history = self.session.history();
        let mut height = 3;
        if self.session.latest().is_some() {
            height += 1 + CARD_HEIGHT + BARS_HEIGHT;
        }
        if history.len() > 1 {
            height += 1 + AVERAGE_CARD_HEIGHT;
        }
        if !history.is_empty() {
            height += 2 + history.len() as u16;
        }
        height
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut area = area;

        Line::from(self.title)
            .style(theme.style().bold())
            .render(area.take_top(1), buf);
        Line::from(self.subtitle)
            .style(theme.style_dim())
            .render(area.take_top(1), buf);
        self.render_actions(area.take_top(1), buf, theme);

        if let Some(latest) = self.session.latest() {
            section_title("Latest Test Results", area.take_top(1), buf, theme);
            render_latest_cards(latest, area.take_top(CARD_HEIGHT), buf, theme);
            render_bars(latest, area.take_top(BARS_HEIGHT), buf, theme);
        }

        let history = self.session.history();
        if history.len() > 1 {
            if let Some(average) = history.average() {
                section_title(
                    &format!("Average Results ({} tests)", history.len()),
                    area.take_top(1),
                    buf,
                    theme,
                );
                render_average_cards(&average, area.take_top(AVERAGE_CARD_HEIGHT), buf, theme);
            }
        }

        if !history.is_empty() {
            section_title("Test History", area.take_top(1), buf, theme);
            self.render_history(area, buf, theme);
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut spans = vec![if self.session.is_running() {
            Span::styled("Running...", theme.warning())
        } else {
            Span::styled("[c] Run Comparison", theme.style())
        }];
        if !self.session.history().is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("[x] Clear History", theme.style()));
        }
        Line::from(spans).render(area, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut table = ZebraTable::new([
            "Test #",
            "Batched",
            "Individual",
            "Time Saved",
            "Improvement",
        ])
        .align(0, Alignment::Right)
        .align(4, Alignment::Right);

        for (index, result) in self.session.history().iter().enumerate() {
            if let Err(error) = table.push_row([
                (index + 1).to_string(),
                format_duration_ms(result.batched_time),
                format_duration_ms(result.individual_time),
                format_duration_ms(result.time_saved),
                format_percent(result.percent_improvement, 1),
            ]) {
                error!("skipping history row {}: {error}", index + 1);
            }
        }

        table.render(area, buf, theme);
    }
}

fn section_title(title: &str, area: Rect, buf: &mut Buffer, theme: &Theme) {
    Line::from(title)
        .style(theme.style().bold())
        .render(area, buf);
}

fn render_cards(cards: [StatCard<'_>; 4], area: Rect, buf: &mut Buffer, theme: &Theme) {
    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for (card, area) in cards.iter().zip(areas.iter()) {
        card.render(*area, buf, theme);
    }
}

fn render_latest_cards(result: &ComparisonResult, area: Rect, buf: &mut Buffer, theme: &Theme) {
    render_cards(
        [
            StatCard::new("Batched Calls", format_duration_ms(result.batched_time))
                .description(format!("{} calls", result.batched_calls))
                .tone(Tone::Success),
            StatCard::new("Individual Calls", format_duration_ms(result.individual_time))
                .description(format!("{} calls", result.individual_calls))
                .tone(Tone::Warning),
            StatCard::new("Time Saved", format_duration_ms(result.time_saved))
                .description("Absolute difference")
                .tone(Tone::Primary),
            StatCard::new("Improvement", format_percent(result.percent_improvement, 1))
                .description("Performance gain")
                .tone(Tone::Accent),
        ],
        area,
        buf,
        theme,
    );
}

fn render_average_cards(average: &AverageMetrics, area: Rect, buf: &mut Buffer, theme: &Theme) {
    render_cards(
        [
            StatCard::new("Avg Batched", format_duration_ms(average.batched_time))
                .tone(Tone::Success),
            StatCard::new("Avg Individual", format_duration_ms(average.individual_time))
                .tone(Tone::Warning),
            StatCard::new("Avg Time Saved", format_duration_ms(average.time_saved))
                .tone(Tone::Primary),
            StatCard::new("Avg Improvement", format_percent(average.percent_improvement, 1))
                .tone(Tone::Accent),
        ],
        area,
        buf,
        theme,
    );
}

/// Both bars are scaled against the slower of the two timings.
fn render_bars(result: &ComparisonResult, area: Rect, buf: &mut Buffer, theme: &Theme) {
    let mut area = area;
    section_title("Visual Comparison", area.take_top(1), buf, theme);

    let max = result.batched_time.max(result.individual_time);
    let ratio = |time: f64| if max > 0.0 { time / max } else { 0.0 };

    ProgressBar::new(
        "Batched Calls",
        format_duration_ms(result.batched_time),
        ratio(result.batched_time),
        Tone::Success,
    )
    .render(area.take_top(2), buf, theme);
    ProgressBar::new(
        "Individual Calls",
        format_duration_ms(result.individual_time),
        ratio(result.individual_time),
        Tone::Warning,
    )
    .render(area.take_top(2), buf, theme);
}
