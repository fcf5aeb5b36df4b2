use crate::board::Cell;

/// The grid has reached a contradiction, e.g. a cell without candidates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("sudoku has no solution")]
pub struct Unsolvable;

/// Error for [`AlignedExclusionConfig::new`](crate::AlignedExclusionConfig::new)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("aligned set degree must be in 2..=10, found {0}")]
pub struct InvalidDegree(pub u8);

/// Error for [`Grid::from_str_line`](crate::Grid::from_str_line)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Entry that is neither a digit nor a placeholder (`.`, `0`, `_`)
    #[error("cell {cell} contains invalid character {ch:?}")]
    InvalidEntry {
        /// Cell number goes from 0..=80
        cell: u8,
        /// The parsed invalid char
        ch: char,
    },
    /// Input ends before 81 entries. Contains the number of entries found.
    #[error("line contains only {0} entries, 81 are needed")]
    NotEnoughCells(u8),
    /// A character directly follows the 81st entry without a space or tab in between
    #[error("missing comment delimiter after the 81st entry")]
    MissingCommentDelimiter,
    /// Two equal digits are given in cells that see each other
    #[error("given digit in {0} conflicts with another given")]
    Conflict(Cell),
}
