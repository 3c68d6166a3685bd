use folio_ratatui_extra::{extensions::RectExt, thematize::Thematize};
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::app::SharedState;

/// Key hints, or the last non-fatal error until the next key press.
pub struct Footer<'a> {
    pub hints: &'a str,
    pub error: Option<&'a str>,
}

impl Footer<'_> {
    pub fn render(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) {
        let theme = &shared_state.theme;
        let area = area.margin_h(1);

        match self.error {
            Some(error) => Line::from(error).style(theme.error()).render(area, buf),
            None => Line::from(self.hints)
                .style(theme.style_dim())
                .render(area, buf),
        }
    }
}
