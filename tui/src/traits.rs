use std::sync::mpsc;

use folio_ratatui_extra::thematize::Thematize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Widget},
};
use tokio_util::sync::CancellationToken;

use crate::{app::SharedState, AppEvent};

pub trait Component {
    /// Handles an event. Work that takes time is spawned with a clone of
    /// `transmitter` and reports back as another event.
    /// This cannot be async to prevent TUI render from blocking.
    fn handle_event(
        &mut self,
        event: &AppEvent,
        transmitter: &mpsc::Sender<AppEvent>,
        shutdown_signal: &CancellationToken,
        shared_state: &SharedState,
    ) -> crate::Result<()>;

    /// Renders the component into the given area and returns the area that was
    /// actually used.
    fn render_component(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) -> Rect
    where
        Self: Sized;

    fn render_component_with_block(
        &self,
        area: Rect,
        buf: &mut Buffer,
        block: Block<'_>,
        shared_state: &SharedState,
    ) -> Rect
    where
        Self: Sized,
    {
        let inner_area = block.inner(area);
        block
            .style(shared_state.theme.style())
            .border_type(shared_state.theme.border_type())
            .render(area, buf);
        self.render_component(inner_area, buf, shared_state);
        area
    }
}
