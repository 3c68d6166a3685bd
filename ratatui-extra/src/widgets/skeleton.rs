use ratatui::{buffer::Buffer, layout::Rect};

use crate::{extensions::ThemedWidget, thematize::Thematize};

const BLOCK: &str = "░";

/// Loading placeholder: `lines` rows of shaded cells, every other row cut
/// to two thirds of the width so it reads as text.
#[derive(Debug, Clone, Copy)]
pub struct Skeleton {
    pub lines: u16,
}

impl Skeleton {
    pub fn new(lines: u16) -> Self {
        Self { lines }
    }
}

impl ThemedWidget for Skeleton {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        for i in 0..self.lines.min(area.height) {
            let width = if i % 2 == 0 {
                area.width
            } else {
                (area.width as u32 * 2 / 3) as u16
            };
            buf.set_string(
                area.x,
                area.y + i,
                BLOCK.repeat(width as usize),
                theme.skeleton(),
            );
        }
    }

    fn height(&self, _: &impl Thematize) -> u16 {
        self.lines
    }
}
