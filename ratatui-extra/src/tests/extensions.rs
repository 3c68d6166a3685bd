use ratatui::layout::Rect;

use crate::extensions::RectExt;

#[test]
fn take_top_splits_rows() {
    let mut area = Rect::new(2, 3, 10, 5);

    let top = area.take_top(2);

    assert_eq!(top, Rect::new(2, 3, 10, 2));
    assert_eq!(area, Rect::new(2, 5, 10, 3));
}

#[test]
fn take_top_clamps_to_remaining() {
    let mut area = Rect::new(0, 0, 10, 3);

    let top = area.take_top(7);

    assert_eq!(top, Rect::new(0, 0, 10, 3));
    assert_eq!(area.height, 0);
    assert_eq!(area.take_top(1).height, 0);
}

#[test]
fn margins_never_underflow() {
    let area = Rect::new(0, 0, 3, 1);

    assert_eq!(area.margin_h(5).width, 1);
    assert_eq!(area.margin_left(5).width, 0);
    assert_eq!(area.margin_top(5).height, 0);
    assert_eq!(Rect::new(0, 0, 1, 1).block_inner().width, 0);
}
