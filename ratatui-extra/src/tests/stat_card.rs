use ratatui::style::Color;

use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::thematize::Tone;
use crate::widgets::stat_card::StatCard;

fn card() -> StatCard<'static> {
    StatCard::new("Batched", "120.00ms")
        .description("1 call")
        .tone(Tone::Success)
}

#[test]
fn render_boxed() {
    let mut term = TestTerminal::new(20, 5);
    let theme = TestTheme::boxed();

    card().render(term.area, &mut term.buffer, &theme);

    let expected = "\
┌Batched───────────┐
│ 120.00ms         │
│ 1 call           │
└──────────────────┘";
    assert_eq!(term.render_to_string(), expected);
    assert_eq!(card().height(&theme), 4);
    assert_eq!(term.fg_at(2, 1), Some(Color::Green));
    assert!(term.is_bold_at(2, 1));
    assert_eq!(term.fg_at(2, 2), Some(Color::DarkGray));
}

#[test]
fn render_unboxed() {
    let mut term = TestTerminal::new(20, 5);
    let theme = TestTheme::unboxed();

    card().render(term.area, &mut term.buffer, &theme);

    let expected = "\
Batched
120.00ms
1 call";
    assert_eq!(term.render_to_string(), expected);
    assert_eq!(card().height(&theme), 3);
}

#[test]
fn render_without_description() {
    let mut term = TestTerminal::new(12, 5);
    let theme = TestTheme::boxed();
    let card = StatCard::new("Saved", "680ms");

    card.render(term.area, &mut term.buffer, &theme);

    let expected = "\
┌Saved─────┐
│ 680ms    │
└──────────┘";
    assert_eq!(term.render_to_string(), expected);
}
