use std::sync::{mpsc, Arc};

use folio_ratatui_extra::extensions::RectExt;
use folio_utils::{
    comparison::{ComparisonProvider, SimulatedDelay},
    dashboard::{ComparisonEvent, ComparisonSession, Effect},
};
use ratatui::{buffer::Buffer, layout::Rect};
use tokio_util::sync::CancellationToken;

use crate::{
    app::SharedState, events, pages::comparison_panel::ComparisonPanel, traits::Component,
    AppEvent,
};

/// Stand-alone comparison tab, timed with real sleeps.
pub struct PerformancePage {
    session: ComparisonSession,
    provider: Arc<dyn ComparisonProvider>,
}

impl Default for PerformancePage {
    fn default() -> Self {
        Self::new(Arc::new(SimulatedDelay::new()))
    }
}

impl PerformancePage {
    pub fn new(provider: Arc<dyn ComparisonProvider>) -> Self {
        Self {
            session: ComparisonSession::default(),
            provider,
        }
    }

    pub fn session(&self) -> &ComparisonSession {
        &self.session
    }

    fn key_to_event(event: &AppEvent) -> Option<ComparisonEvent> {
        if event.is_char_pressed(Some('c')) {
            Some(ComparisonEvent::Start)
        } else if event.is_char_pressed(Some('x')) {
            Some(ComparisonEvent::ClearHistory)
        } else {
            None
        }
    }
}

impl Component for PerformancePage {
    fn handle_event(
        &mut self,
        event: &AppEvent,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        _shared_state: &SharedState,
    ) -> crate::Result<()> {
        let comparison_event = match event {
            AppEvent::Input(_) => Self::key_to_event(event),
            AppEvent::Performance(event) => Some(event.clone()),
            _ => None,
        };

        if let Some(Effect::RunComparison) =
            comparison_event.and_then(|event| self.session.reduce(event))
        {
            tokio::spawn(events::comparison::run_comparison(
                Arc::clone(&self.provider),
                AppEvent::Performance,
                transmitter.clone(),
                shutdown_signal.clone(),
            ));
        }

        Ok(())
    }

    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized,
    {
        ComparisonPanel {
            title: "Performance Comparison",
            subtitle: "Compare batched vs individual RPC calls with simulated network delay",
            session: &self.session,
        }
        .render(area.margin_h(1), buf, &shared_state.theme);
        area
    }
}
