use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Stylize,
    text::Span,
};

use crate::{extensions::ThemedWidget, thematize::Thematize, Error};

const COLUMN_GAP: u16 = 2;

/// Plain text table with a bold header and every other body row shaded.
///
/// Column widths come from the widest cell in each column. Columns that do
/// not fit in the area are cut at the right edge.
#[derive(Debug, Clone)]
pub struct ZebraTable {
    header: Vec<String>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
}

impl ZebraTable {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        let header: Vec<String> = header.into_iter().map(Into::into).collect();
        Self {
            alignments: vec![Alignment::Left; header.len()],
            header,
            rows: Vec::new(),
        }
    }

    /// Aligns column `index` within its width. Out of range indices are
    /// ignored.
    pub fn align(mut self, index: usize, alignment: Alignment) -> Self {
        if let Some(a) = self.alignments.get_mut(index) {
            *a = alignment;
        }
        self
    }

    pub fn push_row<S: Into<String>>(
        &mut self,
        row: impl IntoIterator<Item = S>,
    ) -> crate::Result<()> {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.header.len() {
            return Err(Error::TableRowWidthMismatch {
                row: self.rows.len(),
                expected: self.header.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_widths(&self) -> Vec<u16> {
        let mut widths: Vec<u16> = self.header.iter().map(|h| cell_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell_width(cell));
            }
        }
        widths
    }

    fn render_row(
        &self,
        cells: &[String],
        widths: &[u16],
        area: Rect,
        y: u16,
        buf: &mut Buffer,
        style: ratatui::style::Style,
    ) {
        let right = area.x + area.width;
        let mut x = area.x;
        for ((cell, width), alignment) in cells.iter().zip(widths).zip(&self.alignments) {
            if x >= right {
                break;
            }
            let pad = match alignment {
                Alignment::Left => 0,
                Alignment::Center => (width - cell_width(cell)) / 2,
                Alignment::Right => width - cell_width(cell),
            };
            let start = x + pad;
            if start < right {
                buf.set_stringn(start, y, cell, (right - start) as usize, style);
            }
            x += width + COLUMN_GAP;
        }
    }
}

fn cell_width(cell: &str) -> u16 {
    Span::raw(cell).width() as u16
}

impl ThemedWidget for ZebraTable {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if area.is_empty() {
            return;
        }

        let widths = self.column_widths();
        self.render_row(
            &self.header,
            &widths,
            area,
            area.y,
            buf,
            theme.style().bold(),
        );

        for (i, row) in self.rows.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let style = if i % 2 == 1 {
                buf.set_style(Rect::new(area.x, y, area.width, 1), theme.zebra());
                theme.zebra()
            } else {
                theme.style()
            };
            self.render_row(row, &widths, area, y, buf, style);
        }
    }

    fn height(&self, _: &impl Thematize) -> u16 {
        self.rows.len() as u16 + 1
    }
}
