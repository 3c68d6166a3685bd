use ratatui::style::Color;

use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::widgets::skeleton::Skeleton;

#[test]
fn render_alternating_rows() {
    let mut term = TestTerminal::new(9, 4);
    Skeleton::new(3).render(term.area, &mut term.buffer, &TestTheme::boxed());

    let expected = "\
░░░░░░░░░
░░░░░░
░░░░░░░░░";
    assert_eq!(term.render_to_string(), expected);
    assert_eq!(term.fg_at(0, 0), Some(Color::DarkGray));
}

#[test]
fn render_clipped_to_area() {
    let mut term = TestTerminal::new(3, 1);
    Skeleton::new(5).render(term.area, &mut term.buffer, &TestTheme::boxed());

    assert_eq!(term.render_to_string(), "░░░");
}
