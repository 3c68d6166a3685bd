#[derive(thiserror::Error, Debug)]
pub enum RatatuiExtraError {
    #[error("Table row {row} has {got} cells, the header has {expected}.")]
    TableRowWidthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },
}
