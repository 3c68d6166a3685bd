use ratatui::style::{Color, Modifier};

use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::thematize::Tone;
use crate::widgets::badge::Badge;

#[test]
fn render_badge_pads_label() {
    let mut term = TestTerminal::new(12, 1);
    let badge = Badge::new("AUTO ON", Tone::Success);

    badge.render(term.area, &mut term.buffer, &TestTheme::boxed());

    assert_eq!(term.render_to_string(), " AUTO ON");
    assert_eq!(term.fg_at(1, 0), Some(Color::Green));
    assert!(term
        .style_at(1, 0)
        .add_modifier
        .contains(Modifier::REVERSED));
}

#[test]
fn badge_width_includes_padding() {
    assert_eq!(Badge::new("LOADING", Tone::Warning).width(), 9);
}

#[test]
fn render_badge_cut_at_area_edge() {
    let mut term = TestTerminal::new(4, 1);
    Badge::new("LOADING", Tone::Warning).render(term.area, &mut term.buffer, &TestTheme::boxed());

    assert_eq!(term.render_to_string(), " LOA");
}
