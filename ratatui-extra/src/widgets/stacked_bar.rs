use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use crate::{extensions::ThemedWidget, thematize::Thematize};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// One row split into colored segments proportional to their values.
#[derive(Debug, Clone, Default)]
pub struct StackedBar {
    pub segments: Vec<(f64, Color)>,
}

impl StackedBar {
    pub fn new(segments: Vec<(f64, Color)>) -> Self {
        Self { segments }
    }

    /// Splits `width` cells between segments using the largest remainder
    /// method, so widths always add up to `width` when any value is
    /// positive. Ties on the remainder go to the earlier segment.
    pub fn widths(&self, width: u16) -> Vec<u16> {
        let values: Vec<f64> = self
            .segments
            .iter()
            .map(|(v, _)| if v.is_finite() { v.max(0.0) } else { 0.0 })
            .collect();
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return vec![0; values.len()];
        }

        let exact: Vec<f64> = values
            .iter()
            .map(|v| v / total * width as f64)
            .collect();
        let mut widths: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();
        let assigned: u16 = widths.iter().sum();

        let mut order: Vec<usize> = (0..exact.len()).collect();
        order.sort_by(|&a, &b| {
            let ra = exact[a] - exact[a].floor();
            let rb = exact[b] - exact[b].floor();
            rb.total_cmp(&ra).then(a.cmp(&b))
        });
        for &i in order.iter().take(width.saturating_sub(assigned) as usize) {
            widths[i] += 1;
        }

        widths
    }
}

impl ThemedWidget for StackedBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if area.is_empty() {
            return;
        }

        let widths = self.widths(area.width);
        if widths.iter().all(|w| *w == 0) {
            buf.set_string(
                area.x,
                area.y,
                EMPTY.repeat(area.width as usize),
                theme.style_dim(),
            );
            return;
        }

        let mut x = area.x;
        for (width, (_, color)) in widths.iter().zip(&self.segments) {
            buf.set_string(
                x,
                area.y,
                FILLED.repeat(*width as usize),
                theme.style().fg(*color),
            );
            x += width;
        }
    }

    fn height(&self, _: &impl Thematize) -> u16 {
        1
    }
}
