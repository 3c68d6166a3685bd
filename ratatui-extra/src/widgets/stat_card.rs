use std::borrow::Cow;

use ratatui::{buffer::Buffer, layout::Rect, style::Stylize, widgets::Block};

use crate::{
    extensions::{RectExt, ThemedWidget},
    thematize::{Thematize, Tone},
};

/// Titled card with a prominent value and an optional dim description.
#[derive(Debug, Clone)]
pub struct StatCard<'a> {
    pub title: Cow<'a, str>,
    pub value: Cow<'a, str>,
    pub description: Option<Cow<'a, str>>,
    pub tone: Tone,
}

impl<'a> StatCard<'a> {
    pub fn new(title: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: None,
            tone: Tone::Plain,
        }
    }

    pub fn description(mut self, description: impl Into<Cow<'a, str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    fn body_height(&self) -> u16 {
        if self.description.is_some() {
            2
        } else {
            1
        }
    }

    fn render_body(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if area.is_empty() {
            return;
        }

        let width = area.width as usize;
        buf.set_stringn(
            area.x,
            area.y,
            &self.value,
            width,
            theme.tone(self.tone).bold(),
        );
        if let Some(description) = &self.description {
            if area.height > 1 {
                buf.set_stringn(area.x, area.y + 1, description, width, theme.style_dim());
            }
        }
    }
}

impl ThemedWidget for StatCard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        let area = area.change_height(self.height(theme));

        if theme.boxed() {
            let block = Block::bordered()
                .border_type(theme.border_type())
                .style(theme.block())
                .title(self.title.as_ref());
            let inner = block.inner(area).margin_h(1);
            ratatui::widgets::Widget::render(block, area, buf);
            self.render_body(inner, buf, theme);
        } else {
            if area.is_empty() {
                return;
            }
            buf.set_stringn(
                area.x,
                area.y,
                &self.title,
                area.width as usize,
                theme.style_dim(),
            );
            self.render_body(area.margin_top(1), buf, theme);
        }
    }

    fn height(&self, theme: &impl Thematize) -> u16 {
        if theme.boxed() {
            self.body_height() + 2
        } else {
            self.body_height() + 1
        }
    }
}
