//! Test utilities for widget testing.
//!
//! Provides a test terminal with fixed dimensions to render widgets
//! and compare the actual rendered text output.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    widgets::BorderType,
};

use crate::thematize::Thematize;

/// A fixed-size test terminal for rendering widgets and comparing output.
pub struct TestTerminal {
    pub buffer: Buffer,
    pub area: Rect,
}

impl TestTerminal {
    /// Create a test terminal with fixed width and height.
    pub fn new(width: u16, height: u16) -> Self {
        let area = Rect::new(0, 0, width, height);
        let buffer = Buffer::empty(area);
        Self { buffer, area }
    }

    /// Get the rendered terminal output as a string.
    /// Returns exactly what would appear on screen - each row is a line.
    pub fn render_to_string(&self) -> String {
        let mut lines = Vec::new();
        for y in 0..self.area.height {
            let mut line = String::new();
            for x in 0..self.area.width {
                let cell = self.buffer.cell(Position::new(x, y)).unwrap();
                let symbol = cell.symbol();
                // Empty cells are represented as space
                if symbol.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(symbol);
                }
            }
            // Trim trailing spaces for cleaner comparison
            lines.push(line.trim_end().to_string());
        }
        // Remove trailing empty lines
        while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        lines.join("\n")
    }

    /// Style of the cell at (x, y).
    pub fn style_at(&self, x: u16, y: u16) -> Style {
        self.buffer
            .cell(Position::new(x, y))
            .map(|cell| cell.style())
            .unwrap_or_default()
    }

    /// Foreground color of the cell at (x, y), if any was set.
    pub fn fg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.style_at(x, y).fg
    }

    /// Background color of the cell at (x, y), if any was set.
    pub fn bg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.style_at(x, y).bg
    }

    pub fn is_bold_at(&self, x: u16, y: u16) -> bool {
        self.style_at(x, y).add_modifier.contains(Modifier::BOLD)
    }
}

/// A simple theme for testing with predictable styling.
#[derive(Default, Clone)]
pub struct TestTheme {
    pub boxed: bool,
}

impl TestTheme {
    pub fn boxed() -> Self {
        Self { boxed: true }
    }

    pub fn unboxed() -> Self {
        Self { boxed: false }
    }
}

impl Thematize for TestTheme {
    fn style(&self) -> Style {
        Style::default()
    }

    fn style_dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    fn border_type(&self) -> BorderType {
        BorderType::Plain
    }

    fn boxed(&self) -> bool {
        self.boxed
    }

    fn success(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    fn warning(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    fn primary(&self) -> Style {
        Style::default().fg(Color::Blue)
    }

    fn accent(&self) -> Style {
        Style::default().fg(Color::Magenta)
    }

    fn zebra(&self) -> Style {
        Style::default().bg(Color::DarkGray)
    }

    fn skeleton(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
