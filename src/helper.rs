use crate::board::{Cell, N_CELLS};
use std::ops::{Deref, Index, IndexMut};

/// One value for each cell of the grid, indexable by [`Cell`].
///
/// The pencilmarks of a grid are a `CellArray<Set<Digit>>`, solved cells
/// have an empty set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellArray<T>(pub [T; N_CELLS]);

impl<T: Copy> CellArray<T> {
    /// Every cell holds `value`.
    pub fn splat(value: T) -> Self {
        CellArray([value; N_CELLS])
    }
}

impl<T> CellArray<T> {
    /// Iterates over all cells in grid order together with their values.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        Cell::all().zip(self.0.iter())
    }
}

impl<T> Deref for CellArray<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> Index<Cell> for CellArray<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, cell: Cell) -> &T {
        &self.0[cell.as_index()]
    }
}

impl<T> IndexMut<Cell> for CellArray<T> {
    #[inline(always)]
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        &mut self.0[cell.as_index()]
    }
}
