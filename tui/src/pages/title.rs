use folio_ratatui_extra::{extensions::RectExt, thematize::Thematize};
use folio_utils::format::shorten_address;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::{app::SharedState, pages::Page};

/// Top bar: app name, tabs and the connected wallet.
pub struct Title<'a> {
    pub pages: &'a [Page],
    pub current: usize,
}

impl Title<'_> {
    pub fn render(&self, area: Rect, buf: &mut Buffer, shared_state: &SharedState) {
        let theme = &shared_state.theme;
        buf.set_style(area, theme.style_dim());
        let area = area.margin_h(1);

        let mut spans = vec![Span::styled("folio ", theme.style())];
        for (index, page) in self.pages.iter().enumerate() {
            let style = if index == self.current {
                theme.tab_active()
            } else {
                theme.style()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", page.name()), style));
        }
        Line::from(spans).render(area, buf);

        let wallet = shared_state
            .current_account
            .map(|address| shorten_address(&address))
            .unwrap_or_else(|| "no wallet".to_string());
        Line::from(wallet)
            .style(theme.style())
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
