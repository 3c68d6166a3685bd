use ratatui::{layout::Alignment, style::Color};

use crate::extensions::ThemedWidget;
use crate::testutils::*;
use crate::widgets::zebra_table::ZebraTable;
use crate::Error;

fn history_table() -> ZebraTable {
    let mut table = ZebraTable::new(["#", "Batched", "Individual"]);
    table.push_row(["1", "120ms", "800ms"]).unwrap();
    table.push_row(["2", "95ms", "1.1s"]).unwrap();
    table.push_row(["3", "200ms", "900ms"]).unwrap();
    table
}

#[test]
fn render_with_zebra_rows() {
    let mut term = TestTerminal::new(30, 5);
    history_table().render(term.area, &mut term.buffer, &TestTheme::boxed());

    let expected = "\
#  Batched  Individual
1  120ms    800ms
2  95ms     1.1s
3  200ms    900ms";
    assert_eq!(term.render_to_string(), expected);

    assert!(term.is_bold_at(0, 0));
    assert_eq!(term.bg_at(0, 1), Some(Color::Reset));
    assert_eq!(term.bg_at(0, 2), Some(Color::DarkGray));
    assert_eq!(term.bg_at(29, 2), Some(Color::DarkGray));
    assert_eq!(term.bg_at(0, 3), Some(Color::Reset));
}

#[test]
fn column_widths_from_widest_cell() {
    assert_eq!(history_table().column_widths(), vec![1, 7, 10]);
}

#[test]
fn render_right_aligned_column() {
    let mut term = TestTerminal::new(20, 3);
    let mut table = ZebraTable::new(["Token", "Value"]).align(1, Alignment::Right);
    table.push_row(["ETH", "$3,200.00"]).unwrap();
    table.push_row(["USDC", "$100.00"]).unwrap();

    table.render(term.area, &mut term.buffer, &TestTheme::boxed());

    let expected = "\
Token      Value
ETH    $3,200.00
USDC     $100.00";
    assert_eq!(term.render_to_string(), expected);
}

#[test]
fn render_cut_at_right_edge() {
    let mut term = TestTerminal::new(10, 2);
    history_table().render(term.area, &mut term.buffer, &TestTheme::boxed());

    let expected = "\
#  Batched
1  120ms";
    assert_eq!(term.render_to_string(), expected);
}

#[test]
fn push_row_rejects_wrong_width() {
    let mut table = ZebraTable::new(["#", "Batched", "Individual"]);
    let result = table.push_row(["1"]);

    assert!(matches!(
        result,
        Err(Error::TableRowWidthMismatch {
            row: 0,
            expected: 3,
            got: 1
        })
    ));
    assert!(table.is_empty());
}
