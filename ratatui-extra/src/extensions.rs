use ratatui::{buffer::Buffer, layout::Rect};

use crate::thematize::Thematize;

pub trait ThemedWidget {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize);

    /// Rows the widget needs to render fully.
    fn height(&self, theme: &impl Thematize) -> u16;
}

pub trait RectExt {
    fn change_height(self, new_height: u16) -> Rect;

    fn margin_h(self, m: u16) -> Rect;

    fn margin_top(self, m: u16) -> Rect;

    fn margin_left(self, m: u16) -> Rect;

    fn block_inner(self) -> Rect;

    /// Splits off up to `height` rows from the top, leaving the rest in
    /// `self`.
    fn take_top(&mut self, height: u16) -> Rect;
}

impl RectExt for Rect {
    #[track_caller]
    fn change_height(self, new_height: u16) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: new_height.min(self.height),
        }
    }

    #[track_caller]
    fn margin_h(self, x: u16) -> Rect {
        let x = x.min(self.width / 2);
        Rect {
            x: self.x + x,
            y: self.y,
            width: self.width - 2 * x,
            height: self.height,
        }
    }

    #[track_caller]
    fn margin_top(self, m: u16) -> Rect {
        let m = m.min(self.height);
        Rect {
            x: self.x,
            y: self.y + m,
            width: self.width,
            height: self.height - m,
        }
    }

    #[track_caller]
    fn margin_left(self, m: u16) -> Rect {
        let m = m.min(self.width);
        Rect {
            x: self.x + m,
            y: self.y,
            width: self.width - m,
            height: self.height,
        }
    }

    #[track_caller]
    fn block_inner(self) -> Rect {
        Rect {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    fn take_top(&mut self, height: u16) -> Rect {
        let taken = self.change_height(height);
        *self = self.margin_top(taken.height);
        taken
    }
}
