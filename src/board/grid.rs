use crate::bitset::Set;
use crate::board::{Candidate, Cell, Digit};
use crate::errors::{LineParseError, Unsolvable};
use crate::helper::CellArray;
use crunchy::unroll;
use std::fmt;

/// A sudoku grid of placed digits and the remaining candidates of all unplaced cells.
///
/// This is the only state the strategies read. Placed cells have no candidates left,
/// so for the purposes of the search they are indistinguishable from cells that
/// were solved elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    digits: CellArray<Option<Digit>>,
    cells_poss_digits: CellArray<Set<Digit>>,
}

impl Grid {
    /// Parses a sudoku in line format, 81 entries from left to right, top to bottom.
    /// Digits `1`-`9` are givens, `.`, `0` and `_` are empty cells.
    /// Anything after the 81st entry must be separated by a space or tab and is ignored.
    ///
    /// The candidates of empty cells are all digits not given in any cell they see.
    pub fn from_str_line(s: &str) -> Result<Grid, LineParseError> {
        let mut entries = CellArray::splat(None);
        let mut chars = s.chars();
        for (cell, entry) in (0..).zip(entries.0.iter_mut()) {
            let ch = chars.next().ok_or(LineParseError::NotEnoughCells(cell))?;
            *entry = match (ch, Digit::from_char(ch)) {
                (_, Some(digit)) => Some(digit),
                ('.', _) | ('0', _) | ('_', _) => None,
                _ => return Err(LineParseError::InvalidEntry { cell, ch }),
            };
        }
        match chars.next() {
            None | Some(' ') | Some('\t') | Some('\r') | Some('\n') => (),
            Some(_) => return Err(LineParseError::MissingCommentDelimiter),
        }

        let mut grid = Grid::from_candidates(CellArray::splat(Set::ALL));
        for (cell, entry) in entries.iter_cells() {
            if let Some(digit) = *entry {
                grid.place(Candidate { cell, digit })
                    .map_err(|_| LineParseError::Conflict(cell))?;
            }
        }
        Ok(grid)
    }

    /// Builds a grid from pencilmarks. No digits are placed, cells with
    /// an empty candidate set count as solved.
    pub fn from_candidates(cells_poss_digits: CellArray<Set<Digit>>) -> Grid {
        Grid {
            digits: CellArray::splat(None),
            cells_poss_digits,
        }
    }

    /// The candidates of every cell, empty for solved cells.
    pub fn cells_poss_digits(&self) -> &CellArray<Set<Digit>> {
        &self.cells_poss_digits
    }

    /// The remaining candidates of `cell`
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.cells_poss_digits[cell]
    }

    /// The digit placed in `cell`, if any
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.digits[cell]
    }

    /// Checks whether no cell has any candidates left.
    pub fn is_solved(&self) -> bool {
        self.cells_poss_digits.iter().all(|poss_digits| poss_digits.is_empty())
    }

    /// Places `candidate.digit` in `candidate.cell` and removes it from the candidates of every
    /// cell that sees it.
    ///
    /// Placing a digit twice is a no-op. Placing a digit that is not a candidate or
    /// leaving a neighbor without candidates is an error. In the latter case the
    /// digit stays placed and only some of the neighbors were updated.
    pub fn place(&mut self, candidate: Candidate) -> Result<(), Unsolvable> {
        let Candidate { cell, digit } = candidate;
        match self.digits[cell] {
            Some(placed) if placed == digit => return Ok(()),
            Some(_) => return Err(Unsolvable),
            None if !self.cells_poss_digits[cell].contains(digit) => return Err(Unsolvable),
            None => (),
        }
        self.digits[cell] = Some(digit);
        self.cells_poss_digits[cell] = Set::NONE;

        let digit_set = candidate.digit_set();
        let houses = cell.houses();
        unroll! {
            for i in 0..3 {
                for peer in houses[i].cells().without(cell.as_set()) {
                    let poss_digits = &mut self.cells_poss_digits[peer];
                    if poss_digits.overlaps(digit_set) {
                        poss_digits.remove(digit_set);
                        if poss_digits.is_empty() && self.digits[peer].is_none() {
                            return Err(Unsolvable);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Removes a candidate. Returns whether it was still present.
    /// Removing the last candidate of an unsolved cell is an error.
    pub fn eliminate(&mut self, candidate: Candidate) -> Result<bool, Unsolvable> {
        let poss_digits = &mut self.cells_poss_digits[candidate.cell];
        if !poss_digits.contains(candidate.digit) {
            return Ok(false);
        }
        poss_digits.remove(candidate.digit_set());
        match poss_digits.is_empty() {
            true => Err(Unsolvable),
            false => Ok(true),
        }
    }

    /// Returns the placed digits in line format, `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.digits
            .iter()
            .map(|digit| match digit {
                Some(digit) => digit.to_char(),
                None => '.',
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_str_line())
    }
}
