use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is out of range for a {size}x{size} board")]
    CoordinateOutOfRangeError { row: usize, col: usize, size: usize },
}
