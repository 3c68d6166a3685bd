use ratatui::style::Color;

use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::thematize::Tone;
use crate::widgets::progress_bar::ProgressBar;

#[test]
fn render_half_filled() {
    let mut term = TestTerminal::new(20, 2);
    let bar = ProgressBar::new("Batched", "120ms", 0.5, Tone::Success);

    bar.render(term.area, &mut term.buffer, &TestTheme::boxed());

    let expected = "\
Batched        120ms
██████████░░░░░░░░░░";
    assert_eq!(term.render_to_string(), expected);
    assert_eq!(term.fg_at(0, 1), Some(Color::Green));
    assert_eq!(term.fg_at(10, 1), Some(Color::DarkGray));
}

#[test]
fn ratio_is_clamped() {
    let mut term = TestTerminal::new(8, 2);
    ProgressBar::new("x", "y", 1.5, Tone::Warning).render(
        term.area,
        &mut term.buffer,
        &TestTheme::boxed(),
    );

    let expected = "\
x      y
████████";
    assert_eq!(term.render_to_string(), expected);
}

#[test]
fn filled_width_rounds() {
    let bar = ProgressBar::new("", "", 0.333, Tone::Plain);
    assert_eq!(bar.filled_width(10), 3);

    let bar = ProgressBar::new("", "", 0.25, Tone::Plain);
    assert_eq!(bar.filled_width(10), 3);

    let bar = ProgressBar::new("", "", f64::NAN, Tone::Plain);
    assert_eq!(bar.filled_width(10), 0);
}

#[test]
fn single_row_area_skips_bar() {
    let mut term = TestTerminal::new(20, 1);
    ProgressBar::new("Individual", "800ms", 1.0, Tone::Warning).render(
        term.area,
        &mut term.buffer,
        &TestTheme::boxed(),
    );

    assert_eq!(term.render_to_string(), "Individual     800ms");
}
