use ratatui::style::Color;

use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::widgets::stacked_bar::StackedBar;

#[test]
fn widths_exact_split() {
    let bar = StackedBar::new(vec![
        (50.0, Color::Blue),
        (30.0, Color::Green),
        (20.0, Color::Red),
    ]);
    assert_eq!(bar.widths(10), vec![5, 3, 2]);
}

#[test]
fn widths_remainder_goes_to_largest_fraction() {
    let bar = StackedBar::new(vec![(2.0, Color::Blue), (1.0, Color::Green)]);
    assert_eq!(bar.widths(10), vec![7, 3]);
}

#[test]
fn widths_tie_goes_to_earlier_segment() {
    let bar = StackedBar::new(vec![
        (1.0, Color::Blue),
        (1.0, Color::Green),
        (1.0, Color::Red),
    ]);
    assert_eq!(bar.widths(10), vec![4, 3, 3]);
}

#[test]
fn widths_zero_total() {
    let bar = StackedBar::new(vec![(0.0, Color::Blue), (0.0, Color::Green)]);
    assert_eq!(bar.widths(10), vec![0, 0]);
}

#[test]
fn render_segments_in_color() {
    let mut term = TestTerminal::new(10, 1);
    StackedBar::new(vec![(50.0, Color::Red), (50.0, Color::Blue)]).render(
        term.area,
        &mut term.buffer,
        &TestTheme::boxed(),
    );

    assert_eq!(term.render_to_string(), "██████████");
    assert_eq!(term.fg_at(0, 0), Some(Color::Red));
    assert_eq!(term.fg_at(4, 0), Some(Color::Red));
    assert_eq!(term.fg_at(5, 0), Some(Color::Blue));
}

#[test]
fn render_empty_bar_dim() {
    let mut term = TestTerminal::new(6, 1);
    StackedBar::default().render(term.area, &mut term.buffer, &TestTheme::boxed());

    assert_eq!(term.render_to_string(), "░░░░░░");
    assert_eq!(term.fg_at(0, 0), Some(Color::DarkGray));
}
