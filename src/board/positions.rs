//! Cells and the houses (rows, columns, blocks) they belong to.
//!
//! Two cells "see" each other if they share a house. Aligned set exclusion needs this
//! relation in two places: the same digit can't be in two cells that see each other,
//! and an excluder of a cell is always one of the 20 cells it sees.

use crate::bitset::Set;
use std::fmt;

pub(crate) const N_CELLS: usize = 81;
const N_HOUSES: usize = 27;

/// One of the 81 cells, numbered row by row from the top left starting at 0.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Cell(u8);

/// A row, column or block.
///
/// Houses 0 to 8 are the rows, 9 to 17 the columns and 18 to 26 the blocks.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct House(u8);

#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum HouseKind {
    Row,
    Col,
    Block,
}

impl Cell {
    /// Constructs a new cell.
    ///
    /// # Panic
    /// Panics in debug builds, if `cell >= 81`.
    #[inline]
    pub fn new(cell: u8) -> Cell {
        debug_assert!((cell as usize) < N_CELLS);
        Cell(cell)
    }

    /// Constructs a new cell. Returns `None` if `cell >= 81`.
    pub fn new_checked(cell: u8) -> Option<Cell> {
        match (cell as usize) < N_CELLS {
            true => Some(Cell(cell)),
            false => None,
        }
    }

    /// Returns an iterator over all cells in grid order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..N_CELLS as u8).map(Cell)
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Row of the cell, 0 to 8 from the top
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column of the cell, 0 to 8 from the left
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Block of the cell, 0 to 8 row by row
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// The row, column and block of this cell
    pub fn houses(self) -> [House; 3] {
        [House::row(self.row()), House::col(self.col()), House::block(self.block())]
    }

    /// The 20 cells that share a row, column or block with this cell.
    #[inline]
    pub fn neighbors(self) -> Set<Cell> {
        NEIGHBORS[self.as_index()]
    }

    /// Whether both cells share a house. A cell does not see itself.
    #[inline]
    pub fn sees(self, other: Cell) -> bool {
        self.neighbors().contains(other)
    }
}

impl House {
    /// Row `row`, 0 to 8 from the top
    pub fn row(row: u8) -> House {
        debug_assert!(row < 9);
        House(row)
    }

    /// Column `col`, 0 to 8 from the left
    pub fn col(col: u8) -> House {
        debug_assert!(col < 9);
        House(col + 9)
    }

    /// Block `block`, 0 to 8 row by row
    pub fn block(block: u8) -> House {
        debug_assert!(block < 9);
        House(block + 18)
    }

    /// Returns an iterator over all 27 houses.
    pub fn all() -> impl Iterator<Item = House> {
        (0..N_HOUSES as u8).map(House)
    }

    #[allow(missing_docs)]
    pub fn kind(self) -> HouseKind {
        match self.0 / 9 {
            0 => HouseKind::Row,
            1 => HouseKind::Col,
            _ => HouseKind::Block,
        }
    }

    /// The 9 cells of this house
    #[inline]
    pub fn cells(self) -> Set<Cell> {
        Set(house_bits(self.0 as usize))
    }
}

const fn house_bits(house: usize) -> u128 {
    let idx = house % 9;
    match house / 9 {
        0 => 0o777 << (9 * idx),
        1 => 0o001_001_001_001_001_001_001_001_001 << idx,
        _ => 0o007_007_007 << (idx / 3 * 27 + idx % 3 * 3),
    }
}

static NEIGHBORS: [Set<Cell>; N_CELLS] = {
    let mut neighbors = [Set(0); N_CELLS];
    let mut cell = 0;
    while cell < N_CELLS {
        let (row, col) = (cell / 9, cell % 9);
        let block = row / 3 * 3 + col / 3;
        let peers = house_bits(row) | house_bits(9 + col) | house_bits(18 + block);
        neighbors[cell] = Set(peers & !(1 << cell));
        cell += 1;
    }
    neighbors
};

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.col() + 1)
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self.kind() {
            HouseKind::Row => "row",
            HouseKind::Col => "column",
            HouseKind::Block => "block",
        };
        write!(f, "{} {}", name, self.0 % 9 + 1)
    }
}
