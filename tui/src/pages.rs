use std::sync::mpsc;

use dashboard::DashboardPage;
use performance::PerformancePage;
use ratatui::{buffer::Buffer, layout::Rect};
use tokio_util::sync::CancellationToken;

use crate::{app::SharedState, traits::Component, AppEvent};

pub mod comparison_panel;
pub mod dashboard;
pub mod footer;
pub mod performance;
pub mod title;

pub enum Page {
    Dashboard(DashboardPage),
    Performance(PerformancePage),
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard(_) => "Dashboard",
            Page::Performance(_) => "Performance",
        }
    }

    /// Key hints shown in the footer while the page is active.
    pub fn key_hints(&self) -> &'static str {
        match self {
            Page::Dashboard(_) => {
                "[tab] switch  [r] refresh  [a] auto  [i] interval  [b] batching  [c] compare  [x] clear  [q] quit"
            }
            Page::Performance(_) => "[tab] switch  [c] compare  [x] clear  [q] quit",
        }
    }
}

impl Component for Page {
    fn handle_event(
        &mut self,
        event: &AppEvent,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<()> {
        match self {
            Page::Dashboard(page) => {
                page.handle_event(event, transmitter, shutdown_signal, shared_state)
            }
            Page::Performance(page) => {
                page.handle_event(event, transmitter, shutdown_signal, shared_state)
            }
        }
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        match self {
            Page::Dashboard(page) => page.render_component(area, buf, shared_state),
            Page::Performance(page) => page.render_component(area, buf, shared_state),
        }
    }
}
