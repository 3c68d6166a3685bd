use std::borrow::Cow;

use ratatui::{buffer::Buffer, layout::Rect, text::Span};

use crate::{
    extensions::ThemedWidget,
    thematize::{Thematize, Tone},
};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Two-row bar: a label with its value right-aligned, then a bar filled to
/// `ratio` of the available width.
#[derive(Debug, Clone)]
pub struct ProgressBar<'a> {
    pub label: Cow<'a, str>,
    pub value: Cow<'a, str>,
    pub ratio: f64,
    pub tone: Tone,
}

impl<'a> ProgressBar<'a> {
    pub fn new(
        label: impl Into<Cow<'a, str>>,
        value: impl Into<Cow<'a, str>>,
        ratio: f64,
        tone: Tone,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ratio,
            tone,
        }
    }

    /// Cells filled for a bar of `width` cells. NaN and out of range ratios
    /// are clamped.
    pub fn filled_width(&self, width: u16) -> u16 {
        let ratio = if self.ratio.is_finite() {
            self.ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (ratio * width as f64).round() as u16
    }
}

impl ThemedWidget for ProgressBar<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if area.is_empty() {
            return;
        }

        let width = area.width as usize;
        buf.set_stringn(area.x, area.y, &self.label, width, theme.style());

        let value_width = Span::raw(self.value.as_ref()).width();
        if value_width < width {
            let x = area.x + (width - value_width) as u16;
            buf.set_stringn(x, area.y, &self.value, value_width, theme.tone(self.tone));
        }

        if area.height < 2 {
            return;
        }

        let filled = self.filled_width(area.width);
        let y = area.y + 1;
        buf.set_string(
            area.x,
            y,
            FILLED.repeat(filled as usize),
            theme.tone(self.tone),
        );
        buf.set_string(
            area.x + filled,
            y,
            EMPTY.repeat((area.width - filled) as usize),
            theme.style_dim(),
        );
    }

    fn height(&self, _: &impl Thematize) -> u16 {
        2
    }
}
