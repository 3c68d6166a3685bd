use std::borrow::Cow;

use ratatui::{buffer::Buffer, layout::Rect, style::Stylize, text::Span};

use crate::{
    extensions::ThemedWidget,
    thematize::{Thematize, Tone},
};

/// Short inline label such as "AUTO ON" or "LOADING", padded with one space
/// on each side.
#[derive(Debug, Clone)]
pub struct Badge<'a> {
    pub label: Cow<'a, str>,
    pub tone: Tone,
}

impl<'a> Badge<'a> {
    pub fn new(label: impl Into<Cow<'a, str>>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }

    pub fn width(&self) -> u16 {
        Span::raw(self.label.as_ref()).width() as u16 + 2
    }
}

impl ThemedWidget for Badge<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if area.is_empty() {
            return;
        }

        let style = theme.tone(self.tone).reversed();
        let text = format!(" {} ", self.label);
        buf.set_stringn(area.x, area.y, text, area.width as usize, style);
    }

    fn height(&self, _: &impl Thematize) -> u16 {
        1
    }
}
