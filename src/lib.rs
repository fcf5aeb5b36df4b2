#![warn(missing_docs)]
//! Aligned Set Exclusion
//!
//! ## Overview
//!
//! Aligned Set Exclusion (A2E up to A10E) is a family of sudoku techniques.
//! A set of 2 to 10 cells is chosen such that all of them see at least one common
//! "excluder" cell. Every combination of the cells' candidates is then checked:
//! a combination is impossible if it puts the same digit into two cells that see
//! each other, or if it uses up every candidate of a common excluder.
//! Any candidate that does not appear in a single possible combination can be removed.
//!
//! The search lives in [`AlignedExclusion`], which can be used on its own with
//! a candidate grid, or through the [`StrategySolver`](strategy::StrategySolver).
//!
//! ## Example
//!
//! ```
//! use aligned_exclusion::{Grid, strategy::{Strategy, StrategySolver}};
//!
//! let line = "9..24.....5.69.231.2..5..9..9.7..32...29356.7.7...29...69.2..7351..79.622.7.86..9";
//! let grid = Grid::from_str_line(line).unwrap();
//!
//! let mut solver = StrategySolver::from_grid(grid);
//! for deduction in solver.find_hints(Strategy::AlignedPair) {
//!     println!("{}", deduction);
//! }
//! ```

pub mod bitset;
pub mod board;
mod errors;
mod helper;
pub mod strategy;

pub use crate::board::{Candidate, Cell, Digit, Grid};
pub use crate::errors::{InvalidDegree, LineParseError, Unsolvable};
pub use crate::helper::CellArray;
pub use crate::strategy::strategies::aligned_exclusion::{
    AlignedExclusion, AlignedExclusionConfig, AlignedExclusionHint, Combo, ExcludedCombos, Mode, SearchStats,
    MAX_DEGREE, MIN_DEGREE,
};

#[cfg(feature = "trace")]
pub use crate::strategy::strategies::aligned_exclusion::trace;
